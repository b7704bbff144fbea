//! Shared error types for the services crate.

use thiserror::Error;

use vocab_core::catalog::CatalogError;

/// Errors emitted by activity sessions.
///
/// The coordinator treats every variant as a silent no-op toward the user;
/// sessions keep their own "try again" feedback text for wrong answers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActivityError {
    #[error("challenge already answered, advance to continue")]
    AlreadyAnswered,

    #[error("word {0:?} was already discovered")]
    AlreadyDiscovered(String),

    #[error("option index {0} is out of range")]
    UnknownOption(usize),

    #[error("word {0:?} is not part of the current challenge")]
    UnknownWord(String),

    #[error("answer type does not match the active activity")]
    WrongAnswerKind,

    #[error("no challenge material available")]
    EmptyPool,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
