//! Simulation result types.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::common::PageId;
use crate::replacer::PolicyKind;

/// The outcome of one policy's run over a trace.
///
/// Invariant: the load counts sum to the fault count — every fault loads
/// exactly one page. `PolicyReport::new` checks this in debug builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyReport {
    /// The policy that produced this result.
    pub policy: PolicyKind,

    /// Total page faults over the trace.
    pub faults: u64,

    /// How many times each page was loaded (faulted in).
    pub loads: HashMap<PageId, u64>,
}

impl PolicyReport {
    /// Assemble a report from a finished run.
    pub fn new(policy: PolicyKind, faults: u64, loads: HashMap<PageId, u64>) -> Self {
        debug_assert_eq!(loads.values().sum::<u64>(), faults);
        Self {
            policy,
            faults,
            loads,
        }
    }

    /// Load count for one page; 0 if the page never faulted.
    pub fn loads_for(&self, page: &PageId) -> u64 {
        self.loads.get(page).copied().unwrap_or(0)
    }

    /// Sum of all load counts. Always equals [`faults`](Self::faults).
    pub fn total_loads(&self) -> u64 {
        self.loads.values().sum()
    }
}

impl fmt::Display for PolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} faults across {} pages",
            self.policy,
            self.faults,
            self.loads.len()
        )
    }
}

/// The paired results of comparing several policies on one (trace, capacity).
///
/// Keyed by [`PolicyKind`], so the contents never depend on which concurrent
/// run finished first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    reports: BTreeMap<PolicyKind, PolicyReport>,
}

impl Comparison {
    pub(crate) fn from_reports(reports: impl IntoIterator<Item = PolicyReport>) -> Self {
        Self {
            reports: reports.into_iter().map(|r| (r.policy, r)).collect(),
        }
    }

    /// The report for one policy, if it was part of the comparison.
    pub fn get(&self, policy: PolicyKind) -> Option<&PolicyReport> {
        self.reports.get(&policy)
    }

    /// Iterate over reports in [`PolicyKind`] order.
    pub fn iter(&self) -> impl Iterator<Item = &PolicyReport> {
        self.reports.values()
    }

    /// Number of policies compared.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the comparison holds no reports.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for report in self.reports.values() {
            if !first {
                write!(f, " | ")?;
            }
            write!(f, "{}: {} faults", report.policy, report.faults)?;
            first = false;
        }
        Ok(())
    }
}
