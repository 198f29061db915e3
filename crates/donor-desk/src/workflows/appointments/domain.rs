use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::blood_type::BloodType;

/// Furthest a booking may be placed ahead of today.
pub const BOOKING_WINDOW_DAYS: i64 = 60;

/// A site where donors can book a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationLocation {
    pub id: u32,
    pub name: String,
    pub address: String,
}

impl DonationLocation {
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.address)
    }
}

/// Half-hour booking slots offered every day, skipping the lunch hour.
pub const TIME_SLOTS: [(u32, u32); 19] = [
    (8, 0),
    (8, 30),
    (9, 0),
    (9, 30),
    (10, 0),
    (10, 30),
    (11, 0),
    (11, 30),
    (13, 0),
    (13, 30),
    (14, 0),
    (14, 30),
    (15, 0),
    (15, 30),
    (16, 0),
    (16, 30),
    (17, 0),
    (17, 30),
    (18, 0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(pub NaiveTime);

impl TimeSlot {
    pub fn all() -> Vec<TimeSlot> {
        TIME_SLOTS
            .into_iter()
            .filter_map(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
            .map(TimeSlot)
            .collect()
    }

    /// Match a submitted time against the offered slots. Accepts `14:30` and
    /// `2:30 PM`.
    pub fn parse_offered(raw: &str) -> Option<TimeSlot> {
        let trimmed = raw.trim();
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&trimmed.to_ascii_uppercase(), "%I:%M %p"))
            .ok()?;
        TimeSlot::all().into_iter().find(|slot| slot.0 == time)
    }

    pub fn label(self) -> String {
        self.0.format("%-I:%M %p").to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Booking form as submitted by a donor. Every field is optional on the wire so
/// the validator can name the first one missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppointmentRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location_id: Option<u32>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub first_time: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(pub u64);

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: DonationLocation,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub blood_type: Option<BloodType>,
    pub first_time: bool,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn reminder(&self) -> String {
        format!(
            "You have an upcoming blood donation appointment on {} at {}.",
            self.date.format("%A, %B %-d, %Y"),
            self.time
        )
    }
}

/// A public blood drive listed by the finder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BloodDrive {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub date: NaiveDate,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub distance_miles: f64,
}
