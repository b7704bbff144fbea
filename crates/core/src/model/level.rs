use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::word::VocabularyWord;

/// Fraction of a level's words that must be mastered before the next level
/// unlocks, expressed as a ratio (4/5 = 80%).
const MASTERY_NUMERATOR: usize = 4;
const MASTERY_DENOMINATOR: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelError {
    #[error("level name cannot be empty")]
    EmptyName,

    #[error("level {0} has no words")]
    EmptyWordList(LevelId),
}

/// Identifier for a difficulty tier (1..=5 in the built-in catalog).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelId(u8);

impl LevelId {
    /// Creates a new `LevelId`.
    #[must_use]
    pub fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the underlying u8 value.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The id of the tier directly above this one.
    #[must_use]
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Debug for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelId({})", self.0)
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `LevelId` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelIdError;

impl fmt::Display for ParseLevelIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse LevelId from string")
    }
}

impl std::error::Error for ParseLevelIdError {}

impl FromStr for LevelId {
    type Err = ParseLevelIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>().map(LevelId::new).map_err(|_| ParseLevelIdError)
    }
}

//
// ─── LEVEL DEFINITION ──────────────────────────────────────────────────────────
//

/// One difficulty tier: a named bundle of vocabulary words with the XP total
/// a student is expected to have reached by the time they enter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    id: LevelId,
    name: String,
    xp_required: u32,
    words: Vec<VocabularyWord>,
}

impl LevelDefinition {
    /// Creates a validated level definition.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::EmptyName` if the name is blank and
    /// `LevelError::EmptyWordList` if no words are provided.
    pub fn new(
        id: LevelId,
        name: impl Into<String>,
        xp_required: u32,
        words: Vec<VocabularyWord>,
    ) -> Result<Self, LevelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LevelError::EmptyName);
        }
        if words.is_empty() {
            return Err(LevelError::EmptyWordList(id));
        }

        Ok(Self {
            id,
            name,
            xp_required,
            words,
        })
    }

    #[must_use]
    pub fn id(&self) -> LevelId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn xp_required(&self) -> u32 {
        self.xp_required
    }

    #[must_use]
    pub fn words(&self) -> &[VocabularyWord] {
        &self.words
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of mastered words required to unlock the next tier.
    ///
    /// Ceiling of 80% of the word count, so a 20-word level requires 16
    /// mastered words, not 15.
    #[must_use]
    pub fn mastery_threshold(&self) -> usize {
        (self.words.len() * MASTERY_NUMERATOR).div_ceil(MASTERY_DENOMINATOR)
    }

    /// True if this level's word list contains the given word.
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.iter().any(|entry| entry.word() == word)
    }
}
