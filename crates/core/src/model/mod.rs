mod level;
mod progress;
mod word;

pub use level::{LevelDefinition, LevelError, LevelId};
pub use progress::{ProgressError, StudentProgress};
pub use word::{VocabularyWord, WordClass, WordError};
