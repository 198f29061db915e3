use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::http::StatusCode;
use serde::Serialize;
use tracing::info;

use super::domain::{DonationRecord, DonationRecordId, TestResult};
use crate::session::SessionError;
use crate::workflows::pagination::{matches_search, Page};

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("'{0}' is not a blood test result")]
    InvalidTestResult(String),
    #[error("donation record {0} not found")]
    NotFound(DonationRecordId),
    #[error(transparent)]
    AccessDenied(#[from] SessionError),
    #[error("donation records unavailable: {0}")]
    Unavailable(String),
}

impl RecordError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecordError::InvalidTestResult(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RecordError::NotFound(_) => StatusCode::NOT_FOUND,
            RecordError::AccessDenied(_) => StatusCode::FORBIDDEN,
            RecordError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestResultFilter {
    #[default]
    All,
    Only(TestResult),
}

impl FromStr for TestResultFilter {
    type Err = RecordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(TestResultFilter::All);
        }
        trimmed
            .parse()
            .map(TestResultFilter::Only)
            .map_err(RecordError::InvalidTestResult)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub test_result: TestResultFilter,
    pub search: String,
    pub page: usize,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            test_result: TestResultFilter::All,
            search: String::new(),
            page: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RecordStatistics {
    pub total_records: usize,
    pub good_records: usize,
    pub poor_records: usize,
}

/// Donation records in the order they were registered (newest first for the
/// seeded data). Cloning shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct DonationRecordRegistry {
    records: Arc<Mutex<Vec<DonationRecord>>>,
}

impl DonationRecordRegistry {
    pub fn new(records: Vec<DonationRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<DonationRecord>>, RecordError> {
        self.records
            .lock()
            .map_err(|_| RecordError::Unavailable("record store poisoned".into()))
    }

    pub fn get(&self, id: &DonationRecordId) -> Result<DonationRecord, RecordError> {
        self.lock()?
            .iter()
            .find(|record| &record.id == id)
            .cloned()
            .ok_or_else(|| RecordError::NotFound(id.clone()))
    }

    /// Filter by test result, then search record id, donor id and donor name.
    pub fn query(&self, query: &RecordQuery) -> Result<Page<DonationRecord>, RecordError> {
        let records = self.lock()?;
        let matches: Vec<DonationRecord> = records
            .iter()
            .filter(|record| match query.test_result {
                TestResultFilter::All => true,
                TestResultFilter::Only(result) => record.test_result == result,
            })
            .filter(|record| {
                let donor_id = record.donor_id.to_string();
                matches_search(
                    &query.search,
                    &[record.id.as_str(), donor_id.as_str(), record.donor_name.as_str()],
                )
            })
            .cloned()
            .collect();

        Ok(Page::from_filtered(matches, query.page))
    }

    pub fn statistics(&self) -> Result<RecordStatistics, RecordError> {
        let records = self.lock()?;
        let good_records = records
            .iter()
            .filter(|record| record.test_result == TestResult::Good)
            .count();
        Ok(RecordStatistics {
            total_records: records.len(),
            good_records,
            poor_records: records.len() - good_records,
        })
    }

    pub fn update_test_result(
        &self,
        id: &DonationRecordId,
        result: TestResult,
    ) -> Result<DonationRecord, RecordError> {
        let record = self.amend(id, |record| record.test_result = result)?;
        info!(record_id = %record.id, result = %result, "test result updated");
        Ok(record)
    }

    /// Replace the staff note. Surrounding whitespace is dropped.
    pub fn update_note(
        &self,
        id: &DonationRecordId,
        note: &str,
    ) -> Result<DonationRecord, RecordError> {
        let note = note.trim().to_string();
        let record = self.amend(id, move |record| record.note = note)?;
        info!(record_id = %record.id, "note updated");
        Ok(record)
    }

    fn amend(
        &self,
        id: &DonationRecordId,
        change: impl FnOnce(&mut DonationRecord),
    ) -> Result<DonationRecord, RecordError> {
        let mut records = self.lock()?;
        let record = records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or_else(|| RecordError::NotFound(id.clone()))?;
        change(record);
        Ok(record.clone())
    }
}
