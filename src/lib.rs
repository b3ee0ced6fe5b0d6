//! pagesim - A page replacement simulator comparing Belady's optimal policy
//! with second-chance.
//!
//! Given a fixed trace of page accesses and a frame capacity, pagesim
//! replays the trace under each replacement policy and reports how many
//! accesses missed the resident set, plus how often each page was loaded.
//! Belady's algorithm gives the offline lower bound; second-chance (clock)
//! is the online approximation measured against it.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          pagesim                              │
//! ├───────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐  │
//! │  │            Orchestrator (sim/orchestrator)              │  │
//! │  │   one thread per policy over the same borrowed trace,   │  │
//! │  │        results keyed by policy, never by finish order   │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! │                              ↓                                │
//! │  ┌─────────────────────────────────────────────────────────┐  │
//! │  │             Coordinator (sim/coordinator)               │  │
//! │  │   drives one policy over the trace: hit/fault check,    │  │
//! │  │        fault + load accounting, fill or evict           │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! │                              ↓                                │
//! │  ┌─────────────────────────────────────────────────────────┐  │
//! │  │     Replacement policies (replacer/)  [Pluggable]       │  │
//! │  │        Optimal (Belady)  |  Second-Chance (clock)       │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! │                              ↓                                │
//! │  ┌─────────────────────────────────────────────────────────┐  │
//! │  │   Shared state (sim/resident_set, common/)              │  │
//! │  │        ResidentSet + PageId + SlotId + Trace             │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reading trace files, choosing capacities, and printing tables are the
//! caller's job: the crate takes an already-parsed [`Trace`] and a frame
//! capacity, and returns fault and load counts. It performs no I/O.
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, SlotId, Trace, Error)
//! - [`replacer`] - The replacement policy trait and both engines
//! - [`sim`] - Resident set, coordinator, orchestrator, result types
//!
//! # Quick Start
//! ```
//! use pagesim::{compare_all, PolicyKind, Trace};
//!
//! let trace = Trace::from_tokens(["A", "B", "C", "A", "B", "D", "A", "B", "C", "D"]);
//! let comparison = compare_all(&trace, 3).unwrap();
//!
//! // Belady's bound for this trace and capacity.
//! assert_eq!(comparison.get(PolicyKind::Optimal).unwrap().faults, 5);
//! ```

pub mod common;
pub mod replacer;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result, SlotId, Trace};
pub use replacer::{
    FutureUseIndex, OptimalPolicy, PolicyKind, ReplacementPolicy, SecondChancePolicy,
};
pub use sim::{compare_all, compare_policies, run_policy, simulate, Comparison, PolicyReport, ResidentSet};
