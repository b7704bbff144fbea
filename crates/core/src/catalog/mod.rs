mod data;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{LevelDefinition, LevelId, VocabularyWord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("no level with id {0}")]
    UnknownLevel(LevelId),

    #[error("catalog must define at least one level")]
    NoLevels,

    #[error("level ids must be contiguous starting at 1, found {0}")]
    NonContiguousLevels(LevelId),

    #[error("xp requirements must strictly increase, violated at level {0}")]
    XpNotIncreasing(LevelId),

    #[error("etymology journey for {0:?} has an empty word family")]
    EmptyWordFamily(String),

    #[error("synonym battle for {0:?} has no synonyms")]
    EmptySynonymSet(String),
}

//
// ─── FIXTURE RECORDS ───────────────────────────────────────────────────────────
//

/// One root-and-suffix exploration unit with its derived word family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtymologyJourney {
    word: String,
    root: String,
    root_meaning: String,
    suffix: String,
    suffix_meaning: String,
    origin: String,
    word_family: Vec<String>,
    definition: String,
}

impl EtymologyJourney {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        root: impl Into<String>,
        root_meaning: impl Into<String>,
        suffix: impl Into<String>,
        suffix_meaning: impl Into<String>,
        origin: impl Into<String>,
        word_family: Vec<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            root: root.into(),
            root_meaning: root_meaning.into(),
            suffix: suffix.into(),
            suffix_meaning: suffix_meaning.into(),
            origin: origin.into(),
            word_family,
            definition: definition.into(),
        }
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn root_meaning(&self) -> &str {
        &self.root_meaning
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub fn suffix_meaning(&self) -> &str {
        &self.suffix_meaning
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn word_family(&self) -> &[String] {
        &self.word_family
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }
}

/// A curated synonym battle: target word, its synonym set, and hand-picked
/// decoys. Used as the safe fallback when a level cannot supply decoys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymBattle {
    target_word: String,
    definition: String,
    synonyms: Vec<String>,
    decoys: Vec<String>,
}

impl SynonymBattle {
    #[must_use]
    pub fn new(
        target_word: impl Into<String>,
        definition: impl Into<String>,
        synonyms: Vec<String>,
        decoys: Vec<String>,
    ) -> Self {
        Self {
            target_word: target_word.into(),
            definition: definition.into(),
            synonyms,
            decoys,
        }
    }

    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    #[must_use]
    pub fn decoys(&self) -> &[String] {
        &self.decoys
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Static, read-only vocabulary database: leveled words plus the fixture data
/// the etymology and synonym activities draw from. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCatalog {
    levels: Vec<LevelDefinition>,
    journeys: Vec<EtymologyJourney>,
    battles: Vec<SynonymBattle>,
}

impl WordCatalog {
    /// Creates a catalog after validating the cross-level invariants:
    /// contiguous ids starting at 1, strictly increasing XP requirements,
    /// non-empty word families and synonym sets.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` naming the first violated invariant.
    pub fn new(
        levels: Vec<LevelDefinition>,
        journeys: Vec<EtymologyJourney>,
        battles: Vec<SynonymBattle>,
    ) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::NoLevels);
        }

        let mut previous_xp: Option<u32> = None;
        for (offset, level) in levels.iter().enumerate() {
            let expected = u8::try_from(offset + 1).unwrap_or(u8::MAX);
            if level.id().value() != expected {
                return Err(CatalogError::NonContiguousLevels(level.id()));
            }
            if let Some(previous) = previous_xp {
                if level.xp_required() <= previous {
                    return Err(CatalogError::XpNotIncreasing(level.id()));
                }
            }
            previous_xp = Some(level.xp_required());
        }

        for journey in &journeys {
            if journey.word_family().is_empty() {
                return Err(CatalogError::EmptyWordFamily(journey.word().to_string()));
            }
        }
        for battle in &battles {
            if battle.synonyms().is_empty() {
                return Err(CatalogError::EmptySynonymSet(battle.target_word().to_string()));
            }
        }

        Ok(Self {
            levels,
            journeys,
            battles,
        })
    }

    /// The built-in middle-school catalog: five 20-word levels, eight
    /// etymology journeys, eight synonym battles.
    ///
    /// # Panics
    ///
    /// Panics if the embedded fixture data fails validation, which would be a
    /// bug in the data itself.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(data::levels(), data::journeys(), data::battles())
            .expect("built-in catalog data should be valid")
    }

    #[must_use]
    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }

    /// Looks up a level definition by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownLevel` if the id is outside the
    /// configured range.
    pub fn level(&self, id: LevelId) -> Result<&LevelDefinition, CatalogError> {
        self.levels
            .iter()
            .find(|level| level.id() == id)
            .ok_or(CatalogError::UnknownLevel(id))
    }

    /// The word list for a level, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownLevel` if the id is outside the
    /// configured range.
    pub fn words_for_level(&self, id: LevelId) -> Result<&[VocabularyWord], CatalogError> {
        Ok(self.level(id)?.words())
    }

    #[must_use]
    pub fn etymology_journeys(&self) -> &[EtymologyJourney] {
        &self.journeys
    }

    #[must_use]
    pub fn synonym_battles(&self) -> &[SynonymBattle] {
        &self.battles
    }

    /// Highest configured level id.
    #[must_use]
    pub fn max_level(&self) -> LevelId {
        // new() rejects empty level lists, so last() always exists.
        self.levels
            .last()
            .map(LevelDefinition::id)
            .unwrap_or(LevelId::new(1))
    }

    /// True if any level's word list contains the given word.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.levels.iter().any(|level| level.contains_word(word))
    }
}
