#![forbid(unsafe_code)]

pub mod coordinator;
pub mod dashboard;
pub mod error;
pub mod rng;
pub mod sessions;

pub use vocab_core::Clock;

pub use coordinator::{CoordinatorEvent, SessionCoordinator, View};
pub use dashboard::{DashboardView, LevelOverview};
pub use error::ActivityError;
pub use rng::Sampler;
pub use sessions::{ActivityKind, ActivitySession, Answer, AnswerOutcome};
