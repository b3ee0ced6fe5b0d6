//! The simulation coordinator — drives one policy over one trace.

use std::collections::HashMap;

use crate::common::{Error, PageId, Result, Trace};
use crate::replacer::{OptimalPolicy, PolicyKind, ReplacementPolicy, SecondChancePolicy};
use crate::sim::{PolicyReport, ResidentSet};

/// Run one policy to completion over a trace, counting faults and loads.
///
/// The coordinator owns all run state — the resident set, the fault count,
/// the per-page load counts — and discards everything except the returned
/// [`PolicyReport`]. It is stateless across calls and shares nothing with
/// other runs, which is what makes concurrent comparison safe without locks.
///
/// # Errors
/// [`Error::InvalidCapacity`] if `capacity` is 0, before any simulation work.
/// An empty trace is not an error: it yields 0 faults and empty loads.
///
/// # Example
/// ```
/// use pagesim::{simulate, SecondChancePolicy, Trace};
///
/// let trace = Trace::from_tokens(["A", "B", "A"]);
/// let report = simulate(&trace, 2, SecondChancePolicy::new(2)).unwrap();
/// assert_eq!(report.faults, 2);
/// ```
pub fn simulate<P: ReplacementPolicy>(
    trace: &Trace,
    capacity: usize,
    mut policy: P,
) -> Result<PolicyReport> {
    if capacity == 0 {
        return Err(Error::InvalidCapacity(capacity));
    }

    let mut resident = ResidentSet::new(capacity);
    let mut faults: u64 = 0;
    let mut loads: HashMap<PageId, u64> = HashMap::new();

    for (position, page) in trace.iter().enumerate() {
        policy.note_access(position, page);

        if let Some(slot) = resident.slot_of(page) {
            policy.note_hit(slot);
            continue;
        }

        // Page fault: load the page, evicting if the set is full.
        faults += 1;
        *loads.entry(page.clone()).or_insert(0) += 1;

        if resident.is_full() {
            let victim = policy.victim(&resident);
            resident.replace(victim, page.clone());
            policy.note_replace(victim, page);
        } else {
            let slot = resident.insert(page.clone());
            policy.note_insert(slot, page);
        }
    }

    Ok(PolicyReport::new(policy.kind(), faults, loads))
}

/// Construct the engine for `kind` and run it over the trace.
///
/// This is the per-policy entry point the orchestrator fans out over; it is
/// equally usable on its own when only one policy is of interest.
///
/// # Errors
/// [`Error::InvalidCapacity`] if `capacity` is 0.
pub fn run_policy(trace: &Trace, capacity: usize, kind: PolicyKind) -> Result<PolicyReport> {
    match kind {
        PolicyKind::Optimal => simulate(trace, capacity, OptimalPolicy::new(trace)),
        PolicyKind::SecondChance => simulate(trace, capacity, SecondChancePolicy::new(capacity)),
    }
}
