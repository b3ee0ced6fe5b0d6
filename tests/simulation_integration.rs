//! Integration tests for the simulation pipeline.
//!
//! These exercise the public API end to end — trace in, comparison out —
//! including the cross-policy guarantees the unit tests don't cover.

use pagesim::{
    compare_all, compare_policies, run_policy, Error, PageId, PolicyKind, Trace,
};

fn page(token: &str) -> PageId {
    PageId::new(token)
}

/// The pinned regression scenario: capacity 3, Belady takes exactly 5 faults
/// (A, B, C compulsory; D evicts C at position 5; C reloads at position 8),
/// second-chance takes 8, and the load-count invariant holds for both.
#[test]
fn test_reference_scenario_end_to_end() {
    let trace = Trace::from_tokens(["A", "B", "C", "A", "B", "D", "A", "B", "C", "D"]);
    let comparison = compare_all(&trace, 3).unwrap();

    let optimal = comparison.get(PolicyKind::Optimal).unwrap();
    assert_eq!(optimal.faults, 5);
    assert_eq!(optimal.loads_for(&page("C")), 2);

    let clock = comparison.get(PolicyKind::SecondChance).unwrap();
    assert_eq!(clock.faults, 8);

    for report in comparison.iter() {
        assert_eq!(report.total_loads(), report.faults, "{}", report.policy);
    }
    assert!(optimal.faults <= clock.faults);
}

#[test]
fn test_single_page_trace() {
    let trace = Trace::from_tokens(["A", "A", "A"]);
    let comparison = compare_all(&trace, 1).unwrap();

    for report in comparison.iter() {
        assert_eq!(report.faults, 1, "{}", report.policy);
        assert_eq!(report.loads_for(&page("A")), 1);
        assert_eq!(report.loads.len(), 1);
    }
}

#[test]
fn test_empty_trace_is_not_an_error() {
    let trace = Trace::from_tokens(std::iter::empty::<&str>());
    let comparison = compare_all(&trace, 8).unwrap();

    for report in comparison.iter() {
        assert_eq!(report.faults, 0);
        assert!(report.loads.is_empty());
    }
}

#[test]
fn test_zero_capacity_rejected_everywhere() {
    let trace = Trace::from_tokens(["A", "B"]);

    assert_eq!(compare_all(&trace, 0), Err(Error::InvalidCapacity(0)));
    assert_eq!(
        compare_policies(&trace, 0, &[PolicyKind::Optimal]),
        Err(Error::InvalidCapacity(0))
    );
    for kind in PolicyKind::ALL {
        assert_eq!(
            run_policy(&trace, 0, kind),
            Err(Error::InvalidCapacity(0))
        );
    }
}

/// With capacity at least the number of distinct pages, nothing is ever
/// evicted: both policies fault exactly once per distinct page.
#[test]
fn test_no_eviction_when_everything_fits() {
    let trace = Trace::from_tokens(["A", "B", "C", "D", "A", "B", "C", "D", "A", "D"]);
    let distinct = trace.distinct_pages() as u64;

    for capacity in [4, 5, 100] {
        let comparison = compare_all(&trace, capacity).unwrap();
        for report in comparison.iter() {
            assert_eq!(report.faults, distinct, "{} @ {capacity}", report.policy);
            assert!(report.loads.values().all(|&n| n == 1));
        }
    }
}

/// Capacity 1 degenerates both policies to "fault unless the same page
/// repeats back to back".
#[test]
fn test_capacity_one() {
    let trace = Trace::from_tokens(["A", "B", "B", "A", "A", "A", "C"]);
    let comparison = compare_all(&trace, 1).unwrap();

    for report in comparison.iter() {
        assert_eq!(report.faults, 4, "{}", report.policy);
        assert_eq!(report.loads_for(&page("A")), 2);
        assert_eq!(report.loads_for(&page("B")), 1);
        assert_eq!(report.loads_for(&page("C")), 1);
    }
}

/// Concurrent comparison returns exactly what sequential runs return, and
/// repeating the whole comparison is bit-identical.
#[test]
fn test_concurrent_matches_sequential_and_is_deterministic() {
    let trace = Trace::from_tokens([
        "I0", "D1", "I2", "I0", "D3", "D1", "I4", "I2", "D1", "I0", "D3", "I4",
    ]);

    let first = compare_all(&trace, 3).unwrap();
    let second = compare_all(&trace, 3).unwrap();
    assert_eq!(first, second);

    for kind in PolicyKind::ALL {
        let solo = run_policy(&trace, 3, kind).unwrap();
        assert_eq!(first.get(kind), Some(&solo));
    }
}

/// Belady stays the lower bound across a sweep of capacities on a trace with
/// some locality structure.
#[test]
fn test_optimal_lower_bound_capacity_sweep() {
    let tokens: Vec<String> = (0..120)
        .map(|i| format!("P{}", (i * 7 + i / 5) % 13))
        .collect();
    let trace = Trace::from_tokens(tokens);

    for capacity in 1..=13 {
        let comparison = compare_all(&trace, capacity).unwrap();
        let optimal = comparison.get(PolicyKind::Optimal).unwrap().faults;
        let clock = comparison.get(PolicyKind::SecondChance).unwrap().faults;
        assert!(
            optimal <= clock,
            "capacity {capacity}: optimal {optimal} > second-chance {clock}"
        );
    }
}
