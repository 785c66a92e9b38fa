//! Shared error types for the services crate.

use std::fmt;

use thiserror::Error;

use quiz_core::catalogue::CatalogueError;
use quiz_core::session::SessionError;
use storage::sqlite::SqliteInitError;

/// What could not be found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    Category(String),
    Level { category: String, level: String },
    Results { category: String, level: String },
    Route(String),
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::Category(id) => write!(f, "category {id}"),
            Missing::Level { category, level } => write!(f, "level {level} in {category}"),
            Missing::Results { category, level } => {
                write!(f, "results for {level} in {category}")
            }
            Missing::Route(path) => write!(f, "route {path}"),
        }
    }
}

/// Errors emitted by quiz services.
///
/// Every variant is recoverable: callers show a fallback view and move on.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("not found: {0}")]
    NotFound(Missing),
    #[error("level {level} in {category} is locked")]
    LevelLocked { category: String, level: String },
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl QuizError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuizError::NotFound(_))
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}
