//! The simulation layer.
//!
//! # Components
//! - [`ResidentSet`] - the bounded in-memory page set, shared by all policies
//! - [`simulate`] / [`run_policy`] - the coordinator: one policy, one run
//! - [`compare_policies`] / [`compare_all`] - the orchestrator: concurrent
//!   runs over one trace
//! - [`PolicyReport`] / [`Comparison`] - result types

mod coordinator;
mod orchestrator;
mod report;
mod resident_set;

pub use coordinator::{run_policy, simulate};
pub use orchestrator::{compare_all, compare_policies};
pub use report::{Comparison, PolicyReport};
pub use resident_set::ResidentSet;
