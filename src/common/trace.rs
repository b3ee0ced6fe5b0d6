//! Access trace type.

use std::collections::HashSet;
use std::sync::Arc;

use crate::common::PageId;

/// An ordered, immutable sequence of page accesses.
///
/// The trace is the read-only input to every simulation run. Internally an
/// `Arc<[PageId]>`, so cloning a `Trace` (or handing it to several concurrent
/// runs) shares the same backing storage — no policy ever mutates it.
///
/// Construction is the trace loader's job; the simulator accepts whatever
/// tokens the loader extracted.
///
/// # Example
/// ```
/// use pagesim::Trace;
///
/// let trace = Trace::from_tokens(["A", "B", "A"]);
/// assert_eq!(trace.len(), 3);
/// assert_eq!(trace.distinct_pages(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace(Arc<[PageId]>);

impl Trace {
    /// Build a trace from an iterator of page tokens.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PageId>,
    {
        tokens.into_iter().map(Into::into).collect()
    }

    /// Number of accesses in the trace.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the trace contains no accesses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The access at the given position, if in bounds.
    #[inline]
    pub fn get(&self, position: usize) -> Option<&PageId> {
        self.0.get(position)
    }

    /// Iterate over the accesses in trace order.
    pub fn iter(&self) -> std::slice::Iter<'_, PageId> {
        self.0.iter()
    }

    /// Number of distinct pages referenced by the trace.
    ///
    /// Useful as a bound: with capacity >= this, every page faults exactly
    /// once under any replacement policy.
    pub fn distinct_pages(&self) -> usize {
        self.0.iter().collect::<HashSet<_>>().len()
    }

    /// The accesses as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.0
    }
}

impl FromIterator<PageId> for Trace {
    fn from_iter<I: IntoIterator<Item = PageId>>(iter: I) -> Self {
        Trace(iter.into_iter().collect())
    }
}

impl From<Vec<PageId>> for Trace {
    fn from(accesses: Vec<PageId>) -> Self {
        Trace(accesses.into())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
