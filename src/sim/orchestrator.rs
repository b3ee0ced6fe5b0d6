//! The run orchestrator — concurrent policy comparison.
//!
//! Each policy gets its own thread and its own run state; the only shared
//! input is the trace, which both runs borrow read-only. No locks are needed
//! because nothing mutable is shared, and results come back keyed by policy,
//! so callers never observe which run finished first.

use std::thread;

use crate::common::{Error, Result, Trace};
use crate::replacer::PolicyKind;
use crate::sim::{run_policy, Comparison};

/// Run the given policies concurrently over the same trace and capacity.
///
/// Capacity is validated once, before any thread is spawned, so a
/// configuration error never produces a partial result. A panic inside a
/// simulation thread is propagated to the caller, not swallowed.
///
/// # Errors
/// [`Error::InvalidCapacity`] if `capacity` is 0.
///
/// # Example
/// ```
/// use pagesim::{compare_all, PolicyKind, Trace};
///
/// let trace = Trace::from_tokens(["A", "B", "C", "A", "B", "D", "A", "B", "C", "D"]);
/// let comparison = compare_all(&trace, 3).unwrap();
///
/// let optimal = comparison.get(PolicyKind::Optimal).unwrap();
/// let clock = comparison.get(PolicyKind::SecondChance).unwrap();
/// assert!(optimal.faults <= clock.faults);
/// ```
pub fn compare_policies(
    trace: &Trace,
    capacity: usize,
    policies: &[PolicyKind],
) -> Result<Comparison> {
    if capacity == 0 {
        return Err(Error::InvalidCapacity(capacity));
    }

    thread::scope(|scope| {
        let handles: Vec<_> = policies
            .iter()
            .map(|&kind| scope.spawn(move || run_policy(trace, capacity, kind)))
            .collect();

        let mut reports = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.join() {
                Ok(report) => reports.push(report?),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }

        Ok(Comparison::from_reports(reports))
    })
}

/// Compare every policy the simulator knows ([`PolicyKind::ALL`]).
///
/// # Errors
/// [`Error::InvalidCapacity`] if `capacity` is 0.
pub fn compare_all(trace: &Trace, capacity: usize) -> Result<Comparison> {
    compare_policies(trace, capacity, &PolicyKind::ALL)
}
