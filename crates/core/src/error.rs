use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{LevelError, ProgressError, WordError};

/// Top-level error for the core crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
