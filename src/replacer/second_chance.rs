//! Second-chance (clock) replacement policy.
//!
//! An online approximation of LRU using a single reference bit per slot and
//! a circular scan cursor. On eviction the cursor sweeps the slots: a set bit
//! is cleared (the page gets its second chance), a clear bit marks the
//! victim. No lookahead.
//!
//! Fill-phase behavior is a known point of divergence between clock
//! implementations: some advance the cursor while filling, some fill in slot
//! order and only start the cursor once the set is full. This implementation
//! uses the latter — free slots are occupied directly with the reference bit
//! set, and the cursor neither moves nor is consulted until the first
//! eviction.

use crate::common::{PageId, SlotId};
use crate::replacer::{PolicyKind, ReplacementPolicy};
use crate::sim::ResidentSet;

/// The clock algorithm as a [`ReplacementPolicy`].
pub struct SecondChancePolicy {
    /// One reference bit per slot; index matches the resident set's slots.
    referenced: Vec<bool>,

    /// Circular scan cursor, always a valid slot index in `[0, capacity)`.
    cursor: usize,
}

impl SecondChancePolicy {
    /// Create the policy for a resident set of `capacity` slots.
    ///
    /// A capacity of 0 is rejected by the simulation before the policy is
    /// ever driven; constructing with 0 is harmless but unusable.
    pub fn new(capacity: usize) -> Self {
        Self {
            referenced: vec![false; capacity],
            cursor: 0,
        }
    }
}

impl ReplacementPolicy for SecondChancePolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::SecondChance
    }

    fn note_hit(&mut self, slot: SlotId) {
        self.referenced[slot.0] = true;
    }

    fn note_insert(&mut self, slot: SlotId, _page: &PageId) {
        // Fill phase: the bit is set as if the page had just been referenced;
        // the cursor stays put until the set is full.
        self.referenced[slot.0] = true;
    }

    fn note_replace(&mut self, slot: SlotId, _page: &PageId) {
        self.referenced[slot.0] = false;
    }

    fn victim(&mut self, resident: &ResidentSet) -> SlotId {
        debug_assert!(resident.is_full());
        debug_assert_eq!(self.referenced.len(), resident.capacity());

        // Terminates within 2F inspections: every inspected slot either
        // becomes the victim or has its bit cleared, and a cleared bit is
        // only re-set by a later access.
        loop {
            let slot = self.cursor;
            if self.referenced[slot] {
                self.referenced[slot] = false;
                self.cursor = (self.cursor + 1) % self.referenced.len();
            } else {
                self.cursor = (slot + 1) % self.referenced.len();
                return SlotId::new(slot);
            }
        }
    }
}
