use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::level::LevelId;

/// Fresh-student defaults.
const STARTING_LEVEL: u8 = 1;
const STARTING_ACCURACY: u8 = 100;
const STARTING_STREAK: u32 = 1;
const DEFAULT_DAILY_GOAL: u32 = 10;

pub(crate) const MAX_ACCURACY: u8 = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("active level {0} is not unlocked")]
    ActiveLevelLocked(LevelId),

    #[error("unlocked levels are not a gap-free prefix starting at level 1")]
    UnlockedLevelsNotPrefix,
}

/// Mutable per-student state for one browser session.
///
/// Mutated exclusively through `ProgressTracker`; everything else reads
/// snapshots via the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProgress {
    level: LevelId,
    experience: u32,
    streak: u32,
    accuracy: u8,
    words_today: u32,
    total_words: u32,
    daily_goal: u32,
    unlocked_levels: BTreeSet<LevelId>,
    mastered_words: BTreeSet<String>,
}

impl StudentProgress {
    /// A brand-new student: level 1 unlocked, perfect accuracy, day-one streak.
    #[must_use]
    pub fn new_student() -> Self {
        Self {
            level: LevelId::new(STARTING_LEVEL),
            experience: 0,
            streak: STARTING_STREAK,
            accuracy: STARTING_ACCURACY,
            words_today: 0,
            total_words: 0,
            daily_goal: DEFAULT_DAILY_GOAL,
            unlocked_levels: BTreeSet::from([LevelId::new(STARTING_LEVEL)]),
            mastered_words: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn level(&self) -> LevelId {
        self.level
    }

    #[must_use]
    pub fn experience(&self) -> u32 {
        self.experience
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Rolling accuracy percentage, always in 0..=100.
    #[must_use]
    pub fn accuracy(&self) -> u8 {
        self.accuracy
    }

    #[must_use]
    pub fn words_today(&self) -> u32 {
        self.words_today
    }

    #[must_use]
    pub fn total_words(&self) -> u32 {
        self.total_words
    }

    #[must_use]
    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    #[must_use]
    pub fn unlocked_levels(&self) -> &BTreeSet<LevelId> {
        &self.unlocked_levels
    }

    #[must_use]
    pub fn mastered_words(&self) -> &BTreeSet<String> {
        &self.mastered_words
    }

    #[must_use]
    pub fn is_unlocked(&self, level: LevelId) -> bool {
        self.unlocked_levels.contains(&level)
    }

    #[must_use]
    pub fn has_mastered(&self, word: &str) -> bool {
        self.mastered_words.contains(word)
    }

    /// Checks the structural invariants: the active level is unlocked and the
    /// unlocked set is a gap-free prefix of `{1, 2, ...}`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` describing the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), ProgressError> {
        if !self.unlocked_levels.contains(&self.level) {
            return Err(ProgressError::ActiveLevelLocked(self.level));
        }
        for (offset, level) in self.unlocked_levels.iter().enumerate() {
            let expected = u8::try_from(offset + 1).unwrap_or(u8::MAX);
            if level.value() != expected {
                return Err(ProgressError::UnlockedLevelsNotPrefix);
            }
        }
        Ok(())
    }

    pub(crate) fn add_experience(&mut self, xp: u32) {
        self.experience = self.experience.saturating_add(xp);
    }

    pub(crate) fn add_words_learned(&mut self, count: u32) {
        self.words_today = self.words_today.saturating_add(count);
        self.total_words = self.total_words.saturating_add(count);
    }

    /// Set-semantics insertion; returns true if the word was newly mastered.
    pub(crate) fn master_word(&mut self, word: &str) -> bool {
        self.mastered_words.insert(word.to_string())
    }

    /// Monotonic nudge toward perfect accuracy, capped at 100.
    pub(crate) fn nudge_accuracy(&mut self) {
        self.accuracy = (self.accuracy + 1).min(MAX_ACCURACY);
    }

    pub(crate) fn keep_streak_alive(&mut self) {
        self.streak = self.streak.max(1);
    }

    pub(crate) fn unlock_level(&mut self, level: LevelId) -> bool {
        self.unlocked_levels.insert(level)
    }

    /// Caller must ensure the level is unlocked.
    pub(crate) fn set_level(&mut self, level: LevelId) {
        self.level = level;
    }
}

impl Default for StudentProgress {
    fn default() -> Self {
        Self::new_student()
    }
}
