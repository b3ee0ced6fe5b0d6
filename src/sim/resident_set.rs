//! The resident set — the bounded collection of pages held "in memory".

use std::collections::HashMap;

use crate::common::{PageId, SlotId};

/// The pages currently resident, in a fixed number of slots.
///
/// One canonical type serves every policy; policy-specific metadata (the
/// second-chance reference bits, the optimal future-use cursors) lives in the
/// policy itself, keyed by [`SlotId`] or [`PageId`]. Each simulation run owns
/// its resident set outright — nothing is shared across runs.
///
/// Slots fill in slot order and are never vacated afterwards, only replaced,
/// so iterating resident pages in slot order is deterministic and doubles as
/// insertion order until the first eviction.
pub struct ResidentSet {
    /// One entry per slot; `None` means the slot has not been filled yet.
    slots: Vec<Option<PageId>>,

    /// Maps resident pages to their slot for O(1) membership checks.
    index: HashMap<PageId, SlotId>,
}

impl ResidentSet {
    /// Create an empty resident set with the given number of slots.
    ///
    /// # Panics
    /// Panics if `capacity` is 0. Callers validate capacity before any
    /// simulation work begins (see [`crate::sim::simulate`]).
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "resident set capacity must be > 0");
        Self {
            slots: vec![None; capacity],
            index: HashMap::new(),
        }
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// The slot holding the given page, if it is resident.
    #[inline]
    pub fn slot_of(&self, page: &PageId) -> Option<SlotId> {
        self.index.get(page).copied()
    }

    /// The page held by the given slot, if the slot is filled.
    #[inline]
    pub fn page_at(&self, slot: SlotId) -> Option<&PageId> {
        self.slots.get(slot.0).and_then(Option::as_ref)
    }

    /// Place a page in the first free slot and return that slot.
    ///
    /// # Panics
    /// Panics if the set is full or the page is already resident; the
    /// simulation loop only inserts on a fault with a free slot available.
    pub fn insert(&mut self, page: PageId) -> SlotId {
        assert!(!self.is_full(), "insert into a full resident set");
        assert!(
            !self.index.contains_key(&page),
            "page {page} is already resident"
        );

        // Slots fill in order, so the first None is at index len().
        let slot = SlotId::new(self.len());
        debug_assert!(self.slots[slot.0].is_none());

        self.index.insert(page.clone(), slot);
        self.slots[slot.0] = Some(page);
        slot
    }

    /// Replace the page in `slot` with `page`, returning the evicted page.
    ///
    /// # Panics
    /// Panics if the slot is empty or the new page is already resident.
    pub fn replace(&mut self, slot: SlotId, page: PageId) -> PageId {
        assert!(
            !self.index.contains_key(&page),
            "page {page} is already resident"
        );

        let evicted = self.slots[slot.0]
            .replace(page.clone())
            .unwrap_or_else(|| panic!("eviction from empty slot {slot}"));

        self.index.remove(&evicted);
        self.index.insert(page, slot);
        evicted
    }

    /// Iterate over occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &PageId)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|page| (SlotId::new(i), page)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(token: &str) -> PageId {
        PageId::new(token)
    }

    #[test]
    fn test_new_resident_set_is_empty() {
        let set = ResidentSet::new(3);
        assert_eq!(set.capacity(), 3);
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert!(!set.is_full());
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn test_zero_capacity_panics() {
        ResidentSet::new(0);
    }

    #[test]
    fn test_insert_fills_slots_in_order() {
        let mut set = ResidentSet::new(3);
        assert_eq!(set.insert(page("A")), SlotId::new(0));
        assert_eq!(set.insert(page("B")), SlotId::new(1));
        assert_eq!(set.insert(page("C")), SlotId::new(2));
        assert!(set.is_full());

        assert_eq!(set.slot_of(&page("B")), Some(SlotId::new(1)));
        assert_eq!(set.page_at(SlotId::new(2)), Some(&page("C")));
    }

    #[test]
    fn test_replace_swaps_membership() {
        let mut set = ResidentSet::new(2);
        set.insert(page("A"));
        set.insert(page("B"));

        let evicted = set.replace(SlotId::new(0), page("C"));
        assert_eq!(evicted, page("A"));
        assert_eq!(set.slot_of(&page("A")), None);
        assert_eq!(set.slot_of(&page("C")), Some(SlotId::new(0)));
        assert!(set.is_full());
    }

    #[test]
    fn test_iter_slot_order() {
        let mut set = ResidentSet::new(4);
        set.insert(page("B"));
        set.insert(page("A"));
        set.insert(page("C"));

        let resident: Vec<(usize, &str)> =
            set.iter().map(|(s, p)| (s.0, p.as_str())).collect();
        assert_eq!(resident, [(0, "B"), (1, "A"), (2, "C")]);
    }

    #[test]
    #[should_panic(expected = "insert into a full resident set")]
    fn test_insert_full_panics() {
        let mut set = ResidentSet::new(1);
        set.insert(page("A"));
        set.insert(page("B"));
    }

    #[test]
    #[should_panic(expected = "already resident")]
    fn test_double_insert_panics() {
        let mut set = ResidentSet::new(2);
        set.insert(page("A"));
        set.insert(page("A"));
    }
}
