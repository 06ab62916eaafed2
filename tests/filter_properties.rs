//! Property tests for the filter engine and store id assignment.

use proptest::prelude::*;
use roster::employee::{Employee, EmployeeDraft};
use roster::query::{filter_rows, RowFilter, StatusFilter};
use roster::store::{CollectionStorage, EmployeeStore, MemoryCollectionStorage};
use std::collections::HashSet;
use std::sync::Arc;

fn employee_strategy() -> impl Strategy<Value = Employee> {
    let department = prop_oneof![
        Just("HR".to_string()),
        Just("Engineering".to_string()),
        Just("Marketing".to_string()),
        Just("Ops".to_string()),
    ];
    (
        "[A-Za-z]{0,12}",
        department,
        "[A-Za-z ]{0,10}",
        0.0f64..200_000.0,
        any::<bool>(),
    )
        .prop_map(|(name, department, role, salary, status)| Employee {
            id: 0,
            name,
            department,
            role,
            salary,
            status,
        })
}

/// Rows with ids assigned by position, so an id identifies a row uniquely.
fn rows_strategy(max: usize) -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(employee_strategy(), 0..max).prop_map(|mut rows| {
        for (index, row) in rows.iter_mut().enumerate() {
            row.id = index as u64 + 1;
        }
        rows
    })
}

fn filter_strategy() -> impl Strategy<Value = RowFilter> {
    let status = prop_oneof![
        Just(StatusFilter::Any),
        Just(StatusFilter::Active),
        Just(StatusFilter::Inactive),
    ];
    (
        prop::option::of("[A-Za-z]{0,3}"),
        prop::option::of(prop_oneof![
            Just("HR".to_string()),
            Just("Engineering".to_string()),
            Just("Ops".to_string()),
        ]),
        status,
    )
        .prop_map(|(name_text, department, status)| RowFilter {
            name_text,
            department,
            status,
        })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn filtered_rows_all_match_and_preserve_order(
        rows in rows_strategy(24),
        filter in filter_strategy(),
    ) {
        let hits = filter_rows(&rows, &filter);

        for hit in &hits {
            prop_assert!(filter.matches(hit));
        }

        // Hit ids must be a subsequence of the input ids.
        let ids: Vec<u64> = hits.iter().map(|row| row.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&ids, &sorted);

        // Nothing that matches is dropped.
        let matching = rows.iter().filter(|row| filter.matches(row)).count();
        prop_assert_eq!(hits.len(), matching);
    }

    #[test]
    fn default_filter_returns_every_row(rows in rows_strategy(24)) {
        let filter = RowFilter::default();
        prop_assert!(filter.is_unfiltered());
        let hits = filter_rows(&rows, &filter);
        prop_assert_eq!(hits.len(), rows.len());
    }

    #[test]
    fn filtering_is_deterministic(
        rows in rows_strategy(24),
        filter in filter_strategy(),
    ) {
        let first: Vec<u64> = filter_rows(&rows, &filter).iter().map(|row| row.id).collect();
        let second: Vec<u64> = filter_rows(&rows, &filter).iter().map(|row| row.id).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn name_filter_is_case_insensitive(
        rows in rows_strategy(24),
        needle in "[A-Za-z]{1,3}",
    ) {
        let lower = RowFilter {
            name_text: Some(needle.to_lowercase()),
            ..RowFilter::default()
        };
        let upper = RowFilter {
            name_text: Some(needle.to_uppercase()),
            ..RowFilter::default()
        };
        let a: Vec<u64> = filter_rows(&rows, &lower).iter().map(|row| row.id).collect();
        let b: Vec<u64> = filter_rows(&rows, &upper).iter().map(|row| row.id).collect();
        prop_assert_eq!(a, b);
    }
}

#[derive(Debug, Clone)]
enum StoreOp {
    Add(String),
    RemoveNth(usize),
}

fn op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        "[A-Za-z]{1,8}".prop_map(StoreOp::Add),
        (0usize..16).prop_map(StoreOp::RemoveNth),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn store_ids_stay_unique_through_edits(
        ops in prop::collection::vec(op_strategy(), 0..32),
    ) {
        let storage: Arc<dyn CollectionStorage> = Arc::new(MemoryCollectionStorage::new());
        let mut store = EmployeeStore::open(storage);

        for op in ops {
            match op {
                StoreOp::Add(name) => {
                    let before_max = store.rows().iter().map(|row| row.id).max().unwrap_or(0);
                    let added = store.add(EmployeeDraft {
                        name,
                        department: "Engineering".to_string(),
                        role: "Developer".to_string(),
                        salary: 50_000.0,
                        status: true,
                    });
                    prop_assert!(added.id > before_max);
                }
                StoreOp::RemoveNth(n) => {
                    if !store.is_empty() {
                        let id = store.rows()[n % store.len()].id;
                        prop_assert!(store.remove(id).is_some());
                    }
                }
            }

            let mut seen = HashSet::new();
            for row in store.rows() {
                prop_assert!(seen.insert(row.id), "duplicate id {}", row.id);
            }
        }
    }
}
