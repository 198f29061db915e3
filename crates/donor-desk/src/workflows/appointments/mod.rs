//! Donor self-service: booking a donation appointment at one of the centres and
//! finding public blood drives nearby.

mod book;
pub mod domain;
mod drives;
pub mod router;

#[cfg(test)]
mod tests;

pub use book::{AppointmentBook, BookingError};
pub use domain::{
    Appointment, AppointmentId, AppointmentRequest, BloodDrive, DonationLocation, TimeSlot,
    BOOKING_WINDOW_DAYS,
};
pub use drives::{BloodDriveCatalog, InvalidZipCode};
pub use router::{appointment_router, AppointmentState};
