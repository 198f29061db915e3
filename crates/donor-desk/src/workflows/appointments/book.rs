use std::sync::{Arc, Mutex, MutexGuard};

use axum::http::StatusCode;
use chrono::{Duration, NaiveDate, Utc};
use tracing::info;

use super::domain::{
    Appointment, AppointmentId, AppointmentRequest, DonationLocation, TimeSlot,
    BOOKING_WINDOW_DAYS,
};
use crate::workflows::blood_type::{BloodType, UnknownBloodType};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("location {0} does not take appointments")]
    UnknownLocation(u32),
    #[error("'{0}' is not an offered time slot")]
    UnavailableSlot(String),
    #[error("appointment date {date} is before {today}")]
    DateInPast { date: NaiveDate, today: NaiveDate },
    #[error("appointment date {date} is after the last bookable day {last}")]
    BeyondBookingWindow { date: NaiveDate, last: NaiveDate },
    #[error(transparent)]
    UnknownBloodType(#[from] UnknownBloodType),
    #[error("appointment book unavailable: {0}")]
    Unavailable(String),
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Form field the error points at, when there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BookingError::MissingField(field) => Some(field),
            BookingError::UnknownLocation(_) => Some("location_id"),
            BookingError::UnavailableSlot(_) => Some("time"),
            BookingError::DateInPast { .. } | BookingError::BeyondBookingWindow { .. } => {
                Some("date")
            }
            BookingError::UnknownBloodType(_) => Some("blood_type"),
            BookingError::Unavailable(_) => None,
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<String, BookingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookingError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Donor appointments for the configured locations. Cloning shares the book.
#[derive(Debug, Clone)]
pub struct AppointmentBook {
    locations: Arc<Vec<DonationLocation>>,
    appointments: Arc<Mutex<Vec<Appointment>>>,
}

impl AppointmentBook {
    pub fn new(locations: Vec<DonationLocation>) -> Self {
        Self {
            locations: Arc::new(locations),
            appointments: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn locations(&self) -> &[DonationLocation] {
        &self.locations
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Appointment>>, BookingError> {
        self.appointments
            .lock()
            .map_err(|_| BookingError::Unavailable("appointment mutex poisoned".to_string()))
    }

    /// Validate and store a booking. Required fields are checked in form order
    /// before the location, date and slot.
    pub fn book(
        &self,
        request: AppointmentRequest,
        today: NaiveDate,
    ) -> Result<Appointment, BookingError> {
        let first_name = required(&request.first_name, "first_name")?;
        let last_name = required(&request.last_name, "last_name")?;
        let email = required(&request.email, "email")?;
        let phone = required(&request.phone, "phone")?;
        let location_id = request
            .location_id
            .ok_or(BookingError::MissingField("location_id"))?;
        let date = request.date.ok_or(BookingError::MissingField("date"))?;
        let raw_time = required(&request.time, "time")?;

        let location = self
            .locations
            .iter()
            .find(|location| location.id == location_id)
            .cloned()
            .ok_or(BookingError::UnknownLocation(location_id))?;

        if date < today {
            return Err(BookingError::DateInPast { date, today });
        }
        let last = today + Duration::days(BOOKING_WINDOW_DAYS);
        if date > last {
            return Err(BookingError::BeyondBookingWindow { date, last });
        }

        let time =
            TimeSlot::parse_offered(&raw_time).ok_or(BookingError::UnavailableSlot(raw_time))?;

        let blood_type = match request.blood_type.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(raw.parse::<BloodType>()?),
            _ => None,
        };

        let mut guard = self.lock()?;
        let id = AppointmentId(guard.len() as u64 + 1);
        let appointment = Appointment {
            id,
            first_name,
            last_name,
            email,
            phone,
            location,
            date,
            time,
            blood_type,
            first_time: request.first_time,
            created_at: Utc::now(),
        };
        guard.push(appointment.clone());
        info!(appointment = %id, location = location_id, %date, %time, "appointment booked");

        Ok(appointment)
    }

    /// Earliest appointment on or after `today`, optionally for one email address.
    pub fn next_upcoming(
        &self,
        email: Option<&str>,
        today: NaiveDate,
    ) -> Result<Option<Appointment>, BookingError> {
        let guard = self.lock()?;
        let email = email.map(str::trim).filter(|email| !email.is_empty());
        Ok(guard
            .iter()
            .filter(|appointment| appointment.date >= today)
            .filter(|appointment| {
                email.map_or(true, |email| appointment.email.eq_ignore_ascii_case(email))
            })
            .min_by_key(|appointment| (appointment.date, appointment.time, appointment.id))
            .cloned())
    }

    pub fn len(&self) -> Result<usize, BookingError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, BookingError> {
        Ok(self.lock()?.is_empty())
    }
}
