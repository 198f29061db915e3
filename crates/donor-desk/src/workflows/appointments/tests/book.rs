use super::common::*;
use crate::workflows::appointments::{
    AppointmentRequest, BookingError, TimeSlot, BOOKING_WINDOW_DAYS,
};
use crate::workflows::blood_type::BloodType;

#[test]
fn complete_booking_is_stored() {
    let book = book();

    let appointment = book
        .book(request("lan@example.com", date(2024, 6, 3), "9:30 AM"), today())
        .expect("booking accepted");

    assert_eq!(appointment.location.name, "Main City Blood Center");
    assert_eq!(appointment.time.label(), "9:30 AM");
    assert_eq!(appointment.blood_type, Some(BloodType::OPositive));
    assert_eq!(book.len().expect("len"), 1);
}

#[test]
fn missing_fields_are_reported_in_form_order() {
    let book = book();
    let mut incomplete = request("lan@example.com", date(2024, 6, 3), "9:30 AM");
    incomplete.first_name = "  ".to_string();
    incomplete.phone = String::new();

    match book.book(incomplete, today()) {
        Err(error @ BookingError::MissingField(_)) => {
            assert_eq!(error.field(), Some("first_name"))
        }
        other => panic!("expected missing field, got {other:?}"),
    }

    let no_date = AppointmentRequest {
        date: None,
        ..request("lan@example.com", date(2024, 6, 3), "9:30 AM")
    };
    assert!(matches!(
        book.book(no_date, today()),
        Err(BookingError::MissingField("date"))
    ));
    assert!(book.is_empty().expect("empty"));
}

#[test]
fn dates_must_fall_inside_the_booking_window() {
    let book = book();

    assert!(matches!(
        book.book(request("a@example.com", date(2024, 5, 31), "8:00 AM"), today()),
        Err(BookingError::DateInPast { .. })
    ));
    assert!(book
        .book(request("a@example.com", today(), "8:00 AM"), today())
        .is_ok());

    let last = today() + chrono::Duration::days(BOOKING_WINDOW_DAYS);
    assert!(book
        .book(request("a@example.com", last, "8:00 AM"), today())
        .is_ok());
    assert!(matches!(
        book.book(
            request("a@example.com", last + chrono::Duration::days(1), "8:00 AM"),
            today()
        ),
        Err(BookingError::BeyondBookingWindow { .. })
    ));
}

#[test]
fn only_offered_slots_and_locations_are_bookable() {
    let book = book();

    assert!(matches!(
        book.book(request("a@example.com", today(), "12:00"), today()),
        Err(BookingError::UnavailableSlot(raw)) if raw == "12:00"
    ));
    assert!(book
        .book(request("a@example.com", today(), "14:30"), today())
        .is_ok());

    let elsewhere = AppointmentRequest {
        location_id: Some(9),
        ..request("a@example.com", today(), "8:00 AM")
    };
    assert!(matches!(
        book.book(elsewhere, today()),
        Err(BookingError::UnknownLocation(9))
    ));
}

#[test]
fn slot_table_skips_the_lunch_hour() {
    let labels: Vec<String> = TimeSlot::all().into_iter().map(TimeSlot::label).collect();

    assert_eq!(labels.len(), 19);
    assert_eq!(labels.first().map(String::as_str), Some("8:00 AM"));
    assert_eq!(labels.last().map(String::as_str), Some("6:00 PM"));
    assert!(!labels.iter().any(|label| label.starts_with("12:")));
}

#[test]
fn next_upcoming_ignores_past_and_other_donors() {
    let book = book();
    let booking_day = date(2024, 5, 20);
    book.book(request("lan@example.com", date(2024, 5, 25), "8:00 AM"), booking_day)
        .expect("booked");
    book.book(request("lan@example.com", date(2024, 6, 12), "10:00 AM"), booking_day)
        .expect("booked");
    book.book(request("lan@example.com", date(2024, 6, 5), "4:30 PM"), booking_day)
        .expect("booked");
    book.book(request("binh@example.com", date(2024, 6, 2), "8:00 AM"), booking_day)
        .expect("booked");

    let next = book
        .next_upcoming(Some("LAN@example.com"), today())
        .expect("lookup")
        .expect("an upcoming appointment");
    assert_eq!(next.date, date(2024, 6, 5));
    assert_eq!(
        next.reminder(),
        "You have an upcoming blood donation appointment on Wednesday, June 5, 2024 at 4:30 PM."
    );

    let anyone = book.next_upcoming(None, today()).expect("lookup");
    assert_eq!(anyone.map(|appointment| appointment.email), Some("binh@example.com".to_string()));

    assert!(book
        .next_upcoming(Some("lan@example.com"), date(2024, 6, 13))
        .expect("lookup")
        .is_none());
}
