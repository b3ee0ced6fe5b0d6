//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Error types
//! - Identifiers (PageId, SlotId)
//! - The access trace

pub mod error;
mod page_id;
mod slot_id;
mod trace;

pub use error::{Error, Result};
pub use page_id::PageId;
pub use slot_id::SlotId;
pub use trace::Trace;
