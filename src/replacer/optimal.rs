//! Belady's optimal replacement policy.
//!
//! The optimal policy has perfect knowledge of the future: on every eviction
//! it removes the resident page whose next access is farthest away (or that
//! is never accessed again). Its fault count is the provable minimum for the
//! trace and capacity, which makes it the baseline every online policy is
//! measured against.

use std::collections::{HashMap, VecDeque};

use crate::common::{PageId, SlotId, Trace};
use crate::replacer::{PolicyKind, ReplacementPolicy};
use crate::sim::ResidentSet;

/// Precomputed lookahead: for each page, the ascending trace positions at
/// which it will be accessed.
///
/// Built in one linear pass before the simulation starts. The simulation
/// consumes one entry per access (the entry for the position being
/// processed), so at any point the index holds exactly the *future* accesses.
/// A resident page with an exhausted list will never be used again and is
/// always the preferred eviction candidate.
#[derive(Debug, Clone)]
pub struct FutureUseIndex {
    positions: HashMap<PageId, VecDeque<usize>>,
}

impl FutureUseIndex {
    /// Build the index from a trace.
    pub fn build(trace: &Trace) -> Self {
        let mut positions: HashMap<PageId, VecDeque<usize>> = HashMap::new();
        for (i, page) in trace.iter().enumerate() {
            positions.entry(page.clone()).or_default().push_back(i);
        }
        Self { positions }
    }

    /// Consume the entry for the access currently being processed.
    ///
    /// Must be called once per access, in trace order, before any residency
    /// check for that access.
    pub fn consume(&mut self, page: &PageId, position: usize) {
        let front = self
            .positions
            .get_mut(page)
            .and_then(VecDeque::pop_front);
        debug_assert_eq!(front, Some(position), "index consumed out of order");
    }

    /// The next future access of `page`, or `None` if it never recurs.
    pub fn next_use(&self, page: &PageId) -> Option<usize> {
        self.positions.get(page).and_then(|p| p.front().copied())
    }
}

/// Belady's algorithm as a [`ReplacementPolicy`].
pub struct OptimalPolicy {
    future: FutureUseIndex,
}

impl OptimalPolicy {
    /// Create the policy for a trace, precomputing its future-use index.
    pub fn new(trace: &Trace) -> Self {
        Self {
            future: FutureUseIndex::build(trace),
        }
    }
}

impl ReplacementPolicy for OptimalPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn note_access(&mut self, position: usize, page: &PageId) {
        // The current access is no longer "future". A page loaded by its own
        // last access therefore sits with an empty list, eligible for
        // eviction-by-emptiness on any *later* fault.
        self.future.consume(page, position);
    }

    fn victim(&mut self, resident: &ResidentSet) -> SlotId {
        // First resident page that never recurs wins outright; otherwise the
        // strictly largest next-use position wins, first-encountered on ties.
        // Slot order makes both tie-breaks deterministic.
        let mut farthest: Option<(SlotId, usize)> = None;

        for (slot, page) in resident.iter() {
            match self.future.next_use(page) {
                None => return slot,
                Some(next) => match farthest {
                    Some((_, best)) if next <= best => {}
                    _ => farthest = Some((slot, next)),
                },
            }
        }

        let (slot, _) = farthest.expect("victim requested for an empty resident set");
        slot
    }
}
