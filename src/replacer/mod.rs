//! Replacement policy implementations (replacers).
//!
//! Currently implements:
//! - [`OptimalPolicy`] - Belady's offline optimal algorithm (lower bound)
//! - [`SecondChancePolicy`] - the clock algorithm (online approximation)
//!
//! Both plug into the same simulation loop through [`ReplacementPolicy`],
//! so further policies (LRU, FIFO, multi-bit clock) can be added without
//! touching the coordinator or the orchestrator.

mod optimal;
mod second_chance;

use std::fmt;
use std::str::FromStr;

pub use optimal::{FutureUseIndex, OptimalPolicy};
pub use second_chance::SecondChancePolicy;

use crate::common::{Error, PageId, SlotId};
use crate::sim::ResidentSet;

/// A page replacement policy, driven by the simulation loop.
///
/// The loop owns the [`ResidentSet`] and the fault/load accounting; the
/// policy only keeps whatever metadata its eviction decisions need (reference
/// bits, future-use cursors) and answers [`victim`](Self::victim) when the
/// set is full. Hooks a policy does not care about default to no-ops.
///
/// Call order per access:
/// 1. [`note_access`](Self::note_access) — always, before the residency check
/// 2. on a hit: [`note_hit`](Self::note_hit)
/// 3. on a fault with a free slot: [`note_insert`](Self::note_insert)
/// 4. on a fault with a full set: [`victim`](Self::victim), then
///    [`note_replace`](Self::note_replace) for the page placed in the
///    victim's slot
pub trait ReplacementPolicy {
    /// Which policy this is, for keying results.
    fn kind(&self) -> PolicyKind;

    /// An access is about to be processed at `position` in the trace.
    fn note_access(&mut self, position: usize, page: &PageId) {
        let _ = (position, page);
    }

    /// The accessed page was resident in `slot`.
    fn note_hit(&mut self, slot: SlotId) {
        let _ = slot;
    }

    /// A faulted page was placed in the free slot `slot`.
    fn note_insert(&mut self, slot: SlotId, page: &PageId) {
        let _ = (slot, page);
    }

    /// A faulted page was placed in `slot` after an eviction.
    fn note_replace(&mut self, slot: SlotId, page: &PageId) {
        let _ = (slot, page);
    }

    /// Choose the slot to evict. Called only when `resident` is full,
    /// so there is always at least one candidate.
    fn victim(&mut self, resident: &ResidentSet) -> SlotId;
}

/// The replacement policies the simulator knows how to run.
///
/// Ordered so that result collections keyed by `PolicyKind` (see
/// [`crate::sim::Comparison`]) list the optimal baseline first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolicyKind {
    /// Belady's algorithm: evict the page whose next use is farthest away.
    Optimal,
    /// Clock algorithm: one reference bit per slot, circular scan.
    SecondChance,
}

impl PolicyKind {
    /// Every policy, in comparison order.
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Optimal, PolicyKind::SecondChance];

    /// Stable name used in reports and accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Optimal => "optimal",
            PolicyKind::SecondChance => "second-chance",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "optimal" => Ok(PolicyKind::Optimal),
            "second-chance" | "second_chance" | "clock" => Ok(PolicyKind::SecondChance),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}
