use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::workflows::blood_type::BloodType;
use crate::workflows::eligibility::{donation_interval_met, EligibilityConfig};

/// Days after a donation from which a donor is shown as coming up for recall.
pub const WAITING_AFTER_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonorId(pub u32);

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered donor as kept by the blood bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    pub id: DonorId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_type: BloodType,
    pub birth_date: NaiveDate,
    /// `None` for donors registered before their first donation.
    pub last_donation_date: Option<NaiveDate>,
    pub total_donations: u32,
}

impl Donor {
    /// Age in whole years, counting a birthday only once it has been reached.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let years = today.year() - self.birth_date.year();
        let before_birthday =
            (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day());
        let years = if before_birthday { years - 1 } else { years };
        u32::try_from(years).unwrap_or(0)
    }

    pub fn days_since_last_donation(&self, today: NaiveDate) -> Option<i64> {
        self.last_donation_date
            .map(|last| today.signed_duration_since(last).num_days())
    }

    pub fn readiness(&self, today: NaiveDate, config: &EligibilityConfig) -> Readiness {
        match self.last_donation_date {
            None => Readiness::Eligible,
            Some(last) if donation_interval_met(last, today, config) => Readiness::Eligible,
            Some(last) if today.signed_duration_since(last).num_days() >= WAITING_AFTER_DAYS => {
                Readiness::Waiting
            }
            Some(_) => Readiness::NotYet,
        }
    }
}

/// Recall band derived from the time since the last donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Readiness {
    Eligible,
    Waiting,
    NotYet,
}

impl Readiness {
    pub const fn label(self) -> &'static str {
        match self {
            Readiness::Eligible => "eligible",
            Readiness::Waiting => "waiting",
            Readiness::NotYet => "not-yet",
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Directory row: the donor plus figures computed for a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonorView {
    #[serde(flatten)]
    pub donor: Donor,
    pub age: u32,
    pub days_since_last_donation: Option<i64>,
    pub readiness: Readiness,
}

impl DonorView {
    pub fn new(donor: Donor, today: NaiveDate, config: &EligibilityConfig) -> Self {
        Self {
            age: donor.age_on(today),
            days_since_last_donation: donor.days_since_last_donation(today),
            readiness: donor.readiness(today, config),
            donor,
        }
    }
}
