use super::common::*;
use crate::workflows::blood_units::Locale;
use crate::workflows::records::{
    DonationRecordId, DonationType, RecordError, RecordQuery, TestResult, TestResultFilter,
};

#[test]
fn listing_keeps_stored_order() {
    let page = registry().query(&RecordQuery::default()).expect("query");

    assert_eq!(
        ids(&page.items),
        vec![
            "DR20240115001",
            "DR20240114001",
            "DR20240113001",
            "DR20240112001",
            "DR20240111001",
        ]
    );
    assert_eq!(page.total_pages, 1);
}

#[test]
fn test_result_filter_keeps_only_matching_records() {
    let page = registry()
        .query(&RecordQuery {
            test_result: TestResultFilter::Only(TestResult::Poor),
            ..RecordQuery::default()
        })
        .expect("query");

    assert_eq!(ids(&page.items), vec!["DR20240114001", "DR20240112001"]);
}

#[test]
fn search_covers_record_id_donor_id_and_name() {
    let registry = registry();
    let search = |needle: &str| {
        registry
            .query(&RecordQuery {
                search: needle.to_string(),
                ..RecordQuery::default()
            })
            .expect("query")
    };

    assert_eq!(ids(&search("dr20240113").items), vec!["DR20240113001"]);
    assert_eq!(
        ids(&search("2").items),
        vec![
            "DR20240115001",
            "DR20240114001",
            "DR20240113001",
            "DR20240112001",
            "DR20240111001",
        ]
    );
    assert_eq!(ids(&search("binh").items), vec!["DR20240114001"]);
    assert!(search("nobody").items.is_empty());
}

#[test]
fn statistics_split_good_and_poor() {
    let stats = registry().statistics().expect("stats");

    assert_eq!(stats.total_records, 5);
    assert_eq!(stats.good_records, 3);
    assert_eq!(stats.poor_records, 2);
}

#[test]
fn amending_a_record_is_visible_to_later_reads() {
    let registry = registry();
    let id = DonationRecordId::from("DR20240114001");

    let updated = registry
        .update_test_result(&id, TestResult::Good)
        .expect("record exists");
    assert_eq!(updated.test_result, TestResult::Good);

    registry
        .update_note(&id, "  retested, hemoglobin normal  ")
        .expect("record exists");

    let stored = registry.get(&id).expect("record exists");
    assert_eq!(stored.test_result, TestResult::Good);
    assert_eq!(stored.note, "retested, hemoglobin normal");
    assert_eq!(registry.statistics().expect("stats").good_records, 4);
}

#[test]
fn unknown_record_is_not_found() {
    let registry = registry();
    let id = DonationRecordId::from("DR19990101001");

    assert!(matches!(registry.get(&id), Err(RecordError::NotFound(_))));
    assert!(matches!(
        registry.update_note(&id, "note"),
        Err(RecordError::NotFound(_))
    ));
}

#[test]
fn filters_and_labels_parse() {
    assert_eq!(
        "all".parse::<TestResultFilter>().ok(),
        Some(TestResultFilter::All)
    );
    assert!(matches!(
        "bad".parse::<TestResultFilter>(),
        Err(RecordError::InvalidTestResult(_))
    ));
    assert_eq!(TestResult::Poor.display_label(Locale::Vi), "Máu chưa đạt");
    assert_eq!(DonationType::Plasma.display_label(Locale::Vi), "Huyết tương");
}
