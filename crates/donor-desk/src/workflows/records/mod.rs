//! Donation session records kept for the staff dashboard, with lab results and
//! staff notes that can be amended after the fact.

pub mod domain;
mod registry;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{DonationRecord, DonationRecordId, DonationType, TestResult};
pub use registry::{
    DonationRecordRegistry, RecordError, RecordQuery, RecordStatistics, TestResultFilter,
};
pub use router::donation_record_router;
