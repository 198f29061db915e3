//! Staff-facing donor directory: filtering, search and recall readiness.

mod directory;
pub mod domain;
pub mod router;

#[cfg(test)]
mod tests;

pub use directory::{BloodTypeFilter, DirectoryError, DonorDirectory, DonorQuery, DonorStatistics};
pub use domain::{Donor, DonorId, DonorView, Readiness, WAITING_AFTER_DAYS};
pub use router::{donor_router, DonorDirectoryState};
