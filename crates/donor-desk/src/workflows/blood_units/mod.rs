//! Blood-unit inventory: the review state machine, the staff listing pipeline and
//! the counters shown above it.
//!
//! Status changes are operator-driven only. A unit whose expiry date has passed
//! keeps its status until something records the expiry explicitly.

pub mod audit;
pub mod domain;
mod error;
pub mod query;
pub mod repository;
pub mod router;
pub mod service;
mod statistics;
mod transitions;

#[cfg(test)]
mod tests;

pub use audit::{AuditError, MemoryTransitionLog, TransitionAuditEntry, TransitionLog};
pub use domain::{
    BloodUnit, BloodUnitId, ExpiryStatus, InvalidUnit, Locale, UnitStatus, UnitView,
    EXPIRING_SOON_DAYS,
};
pub use error::WorkflowError;
pub use query::{SortMode, StatusFilter, UnitQuery};
pub use repository::{BloodUnitRepository, MemoryBloodUnitRepository, RepositoryError};
pub use router::blood_unit_router;
pub use service::{BloodUnitWorkflow, TransitionOutcome};
pub use statistics::UnitStatistics;
