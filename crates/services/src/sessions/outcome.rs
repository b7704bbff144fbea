use serde::{Deserialize, Serialize};

/// A user answer routed to the active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Free-text spelling attempt (word builder).
    Spelling(String),
    /// Index of a chosen option (context detective).
    Choice(usize),
    /// Submit the currently selected word set (synonym showdown).
    Selection,
    /// Click-to-reveal a word-family member (etymology explorer).
    Discover(String),
}

/// Result of scoring one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Points added to the session's running score.
    pub points: u32,
    /// Experience forwarded to the progress tracker. Partial showdown credit
    /// stays local to the battle and carries no XP.
    pub xp: u32,
    /// Learned-word credits (0 or 1).
    pub words_learned: u32,
    /// Word to mark mastered, if the answer was fully correct.
    pub mastered_word: Option<String>,
    /// User-facing feedback line.
    pub feedback: String,
    /// True if the coordinator should schedule a deferred advance.
    pub auto_advance: bool,
}

impl AnswerOutcome {
    /// An incorrect attempt that only updates feedback text.
    #[must_use]
    pub(crate) fn try_again(feedback: impl Into<String>) -> Self {
        Self {
            correct: false,
            points: 0,
            xp: 0,
            words_learned: 0,
            mastered_word: None,
            feedback: feedback.into(),
            auto_advance: false,
        }
    }
}
