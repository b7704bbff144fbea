//! The polymorphic activity session: one tagged variant per mini-game with a
//! shared start/submit/advance lifecycle.

use std::fmt;

use serde::{Deserialize, Serialize};

use vocab_core::WordCatalog;
use vocab_core::model::LevelId;

use crate::error::ActivityError;
use crate::rng::Sampler;

use super::context_detective::ContextDetectiveSession;
use super::etymology::EtymologyExplorerSession;
use super::outcome::{Answer, AnswerOutcome};
use super::synonym_showdown::SynonymShowdownSession;
use super::word_builder::WordBuilderSession;

/// The four mini-games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    WordBuilder,
    ContextDetective,
    SynonymShowdown,
    EtymologyExplorer,
}

impl ActivityKind {
    pub const ALL: [Self; 4] = [
        Self::WordBuilder,
        Self::ContextDetective,
        Self::SynonymShowdown,
        Self::EtymologyExplorer,
    ];

    /// Stable string id, matching the intents the presentation layer emits.
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::WordBuilder => "word-builder",
            Self::ContextDetective => "context-detective",
            Self::SynonymShowdown => "synonym-showdown",
            Self::EtymologyExplorer => "etymology-explorer",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The active mini-game session. Constructed fresh on every activity start
/// and on every advance; there is at most one live session.
#[derive(Debug, Clone)]
pub enum ActivitySession {
    WordBuilder(WordBuilderSession),
    ContextDetective(ContextDetectiveSession),
    SynonymShowdown(SynonymShowdownSession),
    EtymologyExplorer(EtymologyExplorerSession),
}

impl ActivitySession {
    /// Builds a fresh session of the given kind from the level's words (the
    /// etymology explorer draws from the catalog's journeys instead).
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::Catalog` for an unknown level and
    /// `ActivityError::EmptyPool` when no challenge material exists.
    pub fn start(
        kind: ActivityKind,
        catalog: &WordCatalog,
        level: LevelId,
        sampler: &mut Sampler,
    ) -> Result<Self, ActivityError> {
        match kind {
            ActivityKind::WordBuilder => {
                let words = catalog.words_for_level(level)?;
                Ok(Self::WordBuilder(WordBuilderSession::start(words, sampler)?))
            }
            ActivityKind::ContextDetective => {
                let words = catalog.words_for_level(level)?;
                Ok(Self::ContextDetective(ContextDetectiveSession::start(
                    words, sampler,
                )?))
            }
            ActivityKind::SynonymShowdown => {
                let words = catalog.words_for_level(level)?;
                Ok(Self::SynonymShowdown(SynonymShowdownSession::start(
                    words,
                    catalog.synonym_battles(),
                    sampler,
                )?))
            }
            ActivityKind::EtymologyExplorer => Ok(Self::EtymologyExplorer(
                EtymologyExplorerSession::start(catalog.etymology_journeys(), sampler)?,
            )),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::WordBuilder(_) => ActivityKind::WordBuilder,
            Self::ContextDetective(_) => ActivityKind::ContextDetective,
            Self::SynonymShowdown(_) => ActivityKind::SynonymShowdown,
            Self::EtymologyExplorer(_) => ActivityKind::EtymologyExplorer,
        }
    }

    /// Routes an answer to the active variant and scores it.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::WrongAnswerKind` when the payload does not
    /// match the active game, otherwise the variant's own error.
    pub fn submit(&mut self, answer: &Answer) -> Result<AnswerOutcome, ActivityError> {
        match (self, answer) {
            (Self::WordBuilder(session), Answer::Spelling(text)) => session.submit(text),
            (Self::ContextDetective(session), Answer::Choice(index)) => session.submit(*index),
            (Self::SynonymShowdown(session), Answer::Selection) => session.submit(),
            (Self::EtymologyExplorer(session), Answer::Discover(word)) => session.discover(word),
            _ => Err(ActivityError::WrongAnswerKind),
        }
    }

    /// Produces the next challenge of the same kind, independent of the
    /// previous outcome.
    ///
    /// # Errors
    ///
    /// Same failure modes as `start`.
    pub fn advance(
        &self,
        catalog: &WordCatalog,
        level: LevelId,
        sampler: &mut Sampler,
    ) -> Result<Self, ActivityError> {
        Self::start(self.kind(), catalog, level, sampler)
    }

    /// Toggles a word in the showdown's selected set.
    ///
    /// # Errors
    ///
    /// Returns `ActivityError::WrongAnswerKind` for other activities.
    pub fn toggle_selection(&mut self, word: &str) -> Result<bool, ActivityError> {
        match self {
            Self::SynonymShowdown(session) => session.toggle(word),
            _ => Err(ActivityError::WrongAnswerKind),
        }
    }

    pub fn toggle_hint(&mut self) {
        match self {
            Self::WordBuilder(session) => session.toggle_hint(),
            Self::ContextDetective(session) => session.toggle_hint(),
            Self::SynonymShowdown(session) => session.toggle_hint(),
            Self::EtymologyExplorer(session) => session.toggle_hint(),
        }
    }

    /// Running score of the active session.
    #[must_use]
    pub fn score(&self) -> u32 {
        match self {
            Self::WordBuilder(session) => session.score(),
            Self::ContextDetective(session) => session.score(),
            Self::SynonymShowdown(session) => session.score(),
            Self::EtymologyExplorer(session) => session.exploration_points(),
        }
    }
}
