use super::common::*;
use crate::workflows::blood_type::BloodType;
use crate::workflows::blood_units::{Locale, SortMode, StatusFilter, UnitQuery, UnitStatus};

#[test]
fn default_query_lists_newest_donations_first() {
    let (workflow, _, _) = build_workflow(inventory());

    let page = workflow.query(&UnitQuery::default()).expect("query");

    assert_eq!(ids(&page.items), vec!["BU001", "BU002", "BU003", "BU004", "BU005"]);
    assert_eq!(page.total_count, 5);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn twenty_five_matches_paginate_ten_ten_five_then_empty() {
    let (workflow, _, _) = build_workflow(bulk_inventory());
    let mut query = UnitQuery {
        status: StatusFilter::Only(UnitStatus::Pending),
        ..UnitQuery::default()
    };

    let mut sizes = Vec::new();
    for page in 1..=4 {
        query.page = page;
        let result = workflow.query(&query).expect("query");
        assert_eq!(result.total_count, 25);
        assert_eq!(result.total_pages, 3);
        sizes.push(result.items.len());
    }

    assert_eq!(sizes, vec![10, 10, 5, 0]);
}

#[test]
fn pending_first_breaks_ties_by_newest_donation() {
    let (workflow, _, _) = build_workflow(vec![
        unit("A", BloodType::APositive, date(2024, 1, 1), UnitStatus::Approved),
        unit("B", BloodType::APositive, date(2023, 1, 1), UnitStatus::Pending),
        unit("C", BloodType::APositive, date(2024, 6, 1), UnitStatus::Approved),
    ]);

    let page = workflow
        .query(&UnitQuery {
            sort: SortMode::PendingFirst,
            ..UnitQuery::default()
        })
        .expect("query");

    assert_eq!(ids(&page.items), vec!["B", "C", "A"]);
}

#[test]
fn search_matches_blood_type_case_insensitively() {
    let (workflow, _, _) = build_workflow(inventory());

    let page = workflow
        .query(&UnitQuery {
            search: "a+".to_string(),
            ..UnitQuery::default()
        })
        .expect("query");

    assert_eq!(ids(&page.items), vec!["BU001", "BU005"]);
}

#[test]
fn search_matches_unit_ids() {
    let (workflow, _, _) = build_workflow(inventory());

    let page = workflow
        .query(&UnitQuery {
            search: " bu003 ".to_string(),
            ..UnitQuery::default()
        })
        .expect("query");

    assert_eq!(ids(&page.items), vec!["BU003"]);
}

#[test]
fn status_filter_runs_before_search() {
    let (workflow, _, _) = build_workflow(inventory());

    let page = workflow
        .query(&UnitQuery {
            status: StatusFilter::Only(UnitStatus::Pending),
            search: "A+".to_string(),
            ..UnitQuery::default()
        })
        .expect("query");

    assert_eq!(ids(&page.items), vec!["BU005"]);
    assert_eq!(page.total_count, 1);
}

#[test]
fn status_sort_uses_the_requested_label_table() {
    let (workflow, _, _) = build_workflow(inventory());

    let english = workflow
        .query(&UnitQuery {
            sort: SortMode::StatusAsc,
            ..UnitQuery::default()
        })
        .expect("query");
    // Approved, Denied, Expired, Pending
    assert_eq!(
        ids(&english.items),
        vec!["BU003", "BU001", "BU004", "BU002", "BU005"]
    );

    let vietnamese = workflow
        .query(&UnitQuery {
            sort: SortMode::StatusDesc,
            locale: Locale::Vi,
            ..UnitQuery::default()
        })
        .expect("query");
    // Từ chối, Hết hạn, Đã duyệt, Chờ duyệt in Vietnamese alphabetical order, descending
    assert_eq!(
        ids(&vietnamese.items),
        vec!["BU001", "BU004", "BU003", "BU002", "BU005"]
    );
}

#[test]
fn filters_and_sort_modes_parse_from_query_strings() {
    assert_eq!("all".parse::<StatusFilter>().ok(), Some(StatusFilter::All));
    assert_eq!(
        "Denied".parse::<StatusFilter>().ok(),
        Some(StatusFilter::Only(UnitStatus::Denied))
    );
    assert!("recalled".parse::<StatusFilter>().is_err());
    assert_eq!(
        "pending-first".parse::<SortMode>().ok(),
        Some(SortMode::PendingFirst)
    );
    assert!("oldest".parse::<SortMode>().is_err());
}
