#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod progression;
pub mod time;

pub use catalog::{CatalogError, EtymologyJourney, SynonymBattle, WordCatalog};
pub use error::Error;
pub use progression::{AnswerRecord, LevelState, ProgressTracker, ProgressUpdate};
pub use time::Clock;
