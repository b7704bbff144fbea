mod activity;
mod context_detective;
mod etymology;
mod outcome;
mod synonym_showdown;
mod word_builder;

// Public API of the session subsystem.
pub use crate::error::ActivityError;
pub use activity::{ActivityKind, ActivitySession};
pub use context_detective::ContextDetectiveSession;
pub use etymology::EtymologyExplorerSession;
pub use outcome::{Answer, AnswerOutcome};
pub use synonym_showdown::SynonymShowdownSession;
pub use word_builder::{WordBuilderSession, generate_hint};
