use super::common::*;
use crate::workflows::blood_type::BloodType;
use crate::workflows::donors::{
    BloodTypeFilter, DirectoryError, DonorId, DonorQuery, DonorView, Readiness,
};
use crate::workflows::eligibility::EligibilityConfig;
use chrono::NaiveDate;

fn ids(views: &[DonorView]) -> Vec<u32> {
    views.iter().map(|view| view.donor.id.0).collect()
}

#[test]
fn readiness_bands_follow_days_since_last_donation() {
    let config = EligibilityConfig::default();
    let bands: Vec<Readiness> = roster()
        .iter()
        .map(|donor| donor.readiness(today(), &config))
        .collect();

    assert_eq!(
        bands,
        vec![
            Readiness::Eligible,
            Readiness::Eligible,
            Readiness::Waiting,
            Readiness::Waiting,
            Readiness::NotYet,
            Readiness::Eligible,
        ]
    );
}

#[test]
fn age_counts_a_birthday_only_once_reached() {
    let donor = donor(1, "Nguyen Van An", BloodType::OPositive, Some(90));

    assert_eq!(donor.age_on(today()), 33);
    assert_eq!(
        donor.age_on(NaiveDate::from_ymd_opt(2024, 6, 2).expect("valid date")),
        34
    );
}

#[test]
fn listing_puts_most_recent_donors_first() {
    let page = directory().query(&DonorQuery::default(), today());

    assert_eq!(ids(&page.items), vec![5, 4, 3, 2, 1, 6]);
    assert_eq!(page.items[0].days_since_last_donation, Some(29));
    assert_eq!(page.items[5].days_since_last_donation, None);
}

#[test]
fn blood_type_filter_and_search_combine() {
    let by_type = directory().query(
        &DonorQuery {
            blood_type: BloodTypeFilter::Only(BloodType::APositive),
            ..DonorQuery::default()
        },
        today(),
    );
    assert_eq!(ids(&by_type.items), vec![4, 2]);

    let by_name = directory().query(
        &DonorQuery {
            blood_type: BloodTypeFilter::Only(BloodType::APositive),
            search: "BINH".to_string(),
            ..DonorQuery::default()
        },
        today(),
    );
    assert_eq!(ids(&by_name.items), vec![2]);

    let by_label = directory().query(
        &DonorQuery {
            search: "o-".to_string(),
            ..DonorQuery::default()
        },
        today(),
    );
    assert_eq!(ids(&by_label.items), vec![6]);
}

#[test]
fn statistics_count_donors_past_the_interval() {
    let stats = directory().statistics(today());

    assert_eq!(stats.total_donors, 6);
    assert_eq!(stats.eligible_donors, 2);
}

#[test]
fn unknown_donor_is_not_found() {
    assert!(matches!(
        directory().get(DonorId(42), today()),
        Err(DirectoryError::NotFound(DonorId(42)))
    ));
    assert_eq!(
        directory().get(DonorId(3), today()).map(|view| view.readiness).ok(),
        Some(Readiness::Waiting)
    );
}

#[test]
fn blood_type_filter_parses_all_and_labels() {
    assert_eq!("all".parse::<BloodTypeFilter>().ok(), Some(BloodTypeFilter::All));
    assert_eq!("".parse::<BloodTypeFilter>().ok(), Some(BloodTypeFilter::All));
    assert_eq!(
        "ab-".parse::<BloodTypeFilter>().ok(),
        Some(BloodTypeFilter::Only(BloodType::AbNegative))
    );
    assert!("Z+".parse::<BloodTypeFilter>().is_err());
}
