//! Page identifier type.

use std::fmt;
use std::sync::Arc;

/// Identifies a page in an access trace.
///
/// Pages are opaque tokens: the trace loader may produce them in any format
/// (the reference traces use a letter plus digits, e.g. `"I0"`, `"D12"`),
/// and the simulator assumes nothing beyond equality, hashing, and ordering.
///
/// Internally an `Arc<str>`, so cloning a `PageId` into a resident set or a
/// load-count map shares one allocation per distinct token — two concurrent
/// simulations over the same trace never copy page text.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page = PageId::new("I0");
/// assert_eq!(page.as_str(), "I0");
/// assert_eq!(page, PageId::new("I0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(Arc<str>);

impl PageId {
    /// Create a new PageId from a token.
    #[inline]
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        PageId(token.into())
    }

    /// The underlying token text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(token: &str) -> Self {
        PageId::new(token)
    }
}

impl From<String> for PageId {
    fn from(token: String) -> Self {
        PageId::new(token)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
