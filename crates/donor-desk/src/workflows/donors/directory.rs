use std::cmp::Ordering;
use std::str::FromStr;

use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::domain::{Donor, DonorId, DonorView, Readiness};
use crate::session::SessionError;
use crate::workflows::blood_type::{BloodType, UnknownBloodType};
use crate::workflows::eligibility::EligibilityConfig;
use crate::workflows::pagination::{matches_search, Page};

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error(transparent)]
    UnknownBloodType(#[from] UnknownBloodType),
    #[error("donor {0} not found")]
    NotFound(DonorId),
    #[error(transparent)]
    AccessDenied(#[from] SessionError),
}

impl DirectoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::UnknownBloodType(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::AccessDenied(_) => StatusCode::FORBIDDEN,
        }
    }
}

/// Blood-type filter for the directory; `all` or a blank value admits everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BloodTypeFilter {
    #[default]
    All,
    Only(BloodType),
}

impl FromStr for BloodTypeFilter {
    type Err = UnknownBloodType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(BloodTypeFilter::All);
        }
        trimmed.parse().map(BloodTypeFilter::Only)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorQuery {
    pub blood_type: BloodTypeFilter,
    pub search: String,
    pub page: usize,
}

impl Default for DonorQuery {
    fn default() -> Self {
        Self {
            blood_type: BloodTypeFilter::All,
            search: String::new(),
            page: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DonorStatistics {
    pub total_donors: usize,
    /// Donors whose last donation is at least one donation interval ago.
    pub eligible_donors: usize,
}

/// Read-only donor listing behind the staff dashboard.
#[derive(Debug, Clone, Default)]
pub struct DonorDirectory {
    donors: Vec<Donor>,
    config: EligibilityConfig,
}

impl DonorDirectory {
    pub fn new(donors: Vec<Donor>) -> Self {
        Self::with_config(donors, EligibilityConfig::default())
    }

    pub fn with_config(donors: Vec<Donor>, config: EligibilityConfig) -> Self {
        Self { donors, config }
    }

    pub fn len(&self) -> usize {
        self.donors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }

    pub fn get(&self, id: DonorId, today: NaiveDate) -> Result<DonorView, DirectoryError> {
        self.donors
            .iter()
            .find(|donor| donor.id == id)
            .map(|donor| DonorView::new(donor.clone(), today, &self.config))
            .ok_or(DirectoryError::NotFound(id))
    }

    /// Filter by blood type, search name and blood type, most recent donors first.
    pub fn query(&self, query: &DonorQuery, today: NaiveDate) -> Page<DonorView> {
        let mut matches: Vec<&Donor> = self
            .donors
            .iter()
            .filter(|donor| match query.blood_type {
                BloodTypeFilter::All => true,
                BloodTypeFilter::Only(blood_type) => donor.blood_type == blood_type,
            })
            .filter(|donor| {
                matches_search(&query.search, &[donor.name.as_str(), donor.blood_type.label()])
            })
            .collect();

        matches.sort_by(|left, right| most_recent_first(left, right));
        debug!(matches = matches.len(), page = query.page, "donor directory queried");

        Page::from_filtered(matches, query.page)
            .map(|donor| DonorView::new(donor.clone(), today, &self.config))
    }

    pub fn statistics(&self, today: NaiveDate) -> DonorStatistics {
        DonorStatistics {
            total_donors: self.donors.len(),
            eligible_donors: self
                .donors
                .iter()
                .filter(|donor| donor.last_donation_date.is_some())
                .filter(|donor| donor.readiness(today, &self.config) == Readiness::Eligible)
                .count(),
        }
    }
}

// Donors who never gave sort after everyone else.
fn most_recent_first(left: &Donor, right: &Donor) -> Ordering {
    match (left.last_donation_date, right.last_donation_date) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
