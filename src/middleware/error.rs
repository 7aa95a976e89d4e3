use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Generic { description: String },
    DuplicateRelation { description: String },
    EntityFailIdNotFound { ident: String },
    Serde { source: String },
    SurrealDb { source: String },
}

/// Coarse classification callers map to response codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateRelation,
    NotFound,
    Infrastructure,
}

/// Any error returned from the data access layer.
pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateRelation { .. } => ErrorKind::DuplicateRelation,
            Self::EntityFailIdNotFound { .. } => ErrorKind::NotFound,
            Self::Generic { .. } | Self::Serde { .. } | Self::SurrealDb { .. } => {
                ErrorKind::Infrastructure
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { description } => write!(f, "{description}"),
            Self::DuplicateRelation { description } => write!(f, "{description}"),
            Self::EntityFailIdNotFound { ident } => write!(f, "Record id= {ident} not found"),
            Self::Serde { source } => write!(f, "Serde error - {source}"),
            Self::SurrealDb { source } => write!(f, "Database error - {source}"),
        }
    }
}

// External Errors
impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde {
            source: value.to_string(),
        }
    }
}

impl From<surrealdb::Error> for AppError {
    fn from(value: surrealdb::Error) -> Self {
        Self::SurrealDb {
            source: value.to_string(),
        }
    }
}
