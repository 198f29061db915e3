use axum::http::StatusCode;

use super::audit::AuditError;
use super::domain::{BloodUnitId, UnitStatus};
use super::repository::RepositoryError;
use crate::session::SessionError;

/// Failures surfaced by the blood-unit workflow. None of them leave a partial
/// mutation behind.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("'{0}' is not a blood unit status")]
    InvalidStatus(String),
    #[error("'{0}' is not a sort mode")]
    InvalidSortMode(String),
    #[error("'{0}' is not a supported locale")]
    InvalidLocale(String),
    #[error("blood unit {0} not found")]
    NotFound(BloodUnitId),
    #[error("cannot move blood unit from {from} to {to}")]
    InvalidTransition { from: UnitStatus, to: UnitStatus },
    #[error("blood unit cannot be marked expired from {from}; expiry is recorded separately")]
    UnsupportedTransition { from: UnitStatus },
    #[error("blood unit changed since it was read (expected version {expected}, found {found})")]
    VersionConflict { expected: u64, found: u64 },
    #[error(transparent)]
    AccessDenied(#[from] SessionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Audit(#[from] AuditError),
}

impl WorkflowError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WorkflowError::InvalidStatus(_)
            | WorkflowError::InvalidSortMode(_)
            | WorkflowError::InvalidLocale(_)
            | WorkflowError::UnsupportedTransition { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            WorkflowError::NotFound(_) | WorkflowError::Repository(RepositoryError::NotFound) => {
                StatusCode::NOT_FOUND
            }
            WorkflowError::InvalidTransition { .. } | WorkflowError::VersionConflict { .. } => {
                StatusCode::CONFLICT
            }
            WorkflowError::AccessDenied(_) => StatusCode::FORBIDDEN,
            WorkflowError::Repository(_) | WorkflowError::Audit(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
