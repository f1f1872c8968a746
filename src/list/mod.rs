//! Reactive List - An ordered sequence of identity-keyed items.
//!
//! `List<T>` owns its items outright - no shared or global state. Every
//! item is wrapped into a [`Keyed`] at insertion time, and every successful
//! mutation bumps a revision signal. Renderers compare revisions to decide
//! whether anything needs reconciling, and reactive hooks can subscribe to
//! the revision through a spark-signals effect.
//!
//! # Mutation semantics
//!
//! All mutations are synchronous and atomic with respect to a single
//! caller: a failed call (empty pop, out-of-range index) leaves the
//! sequence and the revision exactly as they were. There is no internal
//! locking - callers in multi-threaded hosts must serialize access
//! externally.
//!
//! # Example
//!
//! ```
//! use spark_list::List;
//!
//! let mut fruits = List::new();
//! fruits.push("apple");
//! fruits.push("banana");
//! fruits.unshift("cherry");
//!
//! assert_eq!(fruits.len(), 3);
//! assert_eq!(fruits.get(0), Some(&"cherry"));
//! assert_eq!(fruits.pop(), Ok("banana"));
//! ```

use spark_signals::{Signal, signal};

use crate::engine::Keyed;
use crate::types::{ItemId, ListError};

/// An ordered, mutable sequence of identity-keyed items.
pub struct List<T> {
    items: Vec<Keyed<T>>,
    /// Bumped on every successful mutation. Reading it inside an effect
    /// establishes a reactive dependency.
    revision: Signal<u64>,
}

impl<T> List<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: signal(0u64),
        }
    }

    /// Create an empty list with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            revision: signal(0u64),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Wrap `item` and append it to the end. Returns the new length.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(Keyed::new(item));
        self.mark_dirty();
        self.items.len()
    }

    /// Remove and return the last item.
    ///
    /// Fails with [`ListError::EmptyCollection`] on an empty list.
    pub fn pop(&mut self) -> Result<T, ListError> {
        let keyed = self.items.pop().ok_or(ListError::EmptyCollection)?;
        self.mark_dirty();
        Ok(keyed.into_value())
    }

    /// Wrap `item` and insert it at the beginning. Returns the new length.
    pub fn unshift(&mut self, item: T) -> usize {
        self.items.insert(0, Keyed::new(item));
        self.mark_dirty();
        self.items.len()
    }

    /// Remove and return the first item.
    ///
    /// Fails with [`ListError::EmptyCollection`] on an empty list.
    pub fn shift(&mut self) -> Result<T, ListError> {
        if self.items.is_empty() {
            return Err(ListError::EmptyCollection);
        }
        let keyed = self.items.remove(0);
        self.mark_dirty();
        Ok(keyed.into_value())
    }

    /// Remove `delete_count` items starting at `start` and insert `items`
    /// in their place. Returns the removed values in order.
    ///
    /// Follows array-splice conventions:
    /// - Negative `start` counts from the end; if it stays negative after
    ///   adding the length, the call fails with
    ///   [`ListError::IndexOutOfRange`].
    /// - `start` past the end clamps to the end.
    /// - `delete_count` clamps to the remaining tail; `None` deletes
    ///   through the end.
    ///
    /// Untouched items keep their relative order and their identities.
    /// Inserted items are wrapped fresh.
    pub fn splice(
        &mut self,
        start: isize,
        delete_count: Option<usize>,
        items: Vec<T>,
    ) -> Result<Vec<T>, ListError> {
        let len = self.items.len();

        // Normalize negative start against the current length.
        let start = if start < 0 {
            let normalized = start + len as isize;
            if normalized < 0 {
                return Err(ListError::IndexOutOfRange { index: start, len });
            }
            normalized as usize
        } else {
            (start as usize).min(len)
        };

        let delete_count = delete_count.unwrap_or(len - start).min(len - start);

        let removed: Vec<T> = self
            .items
            .splice(
                start..start + delete_count,
                items.into_iter().map(Keyed::new),
            )
            .map(Keyed::into_value)
            .collect();

        self.mark_dirty();
        Ok(removed)
    }

    /// Remove exactly one item at `index`.
    ///
    /// Strict bounds: fails with [`ListError::IndexOutOfRange`] unless
    /// `index < len`. No clamping.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.items.len() {
            return Err(ListError::IndexOutOfRange {
                index: index as isize,
                len: self.items.len(),
            });
        }
        let keyed = self.items.remove(index);
        self.mark_dirty();
        Ok(keyed.into_value())
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.mark_dirty();
    }

    /// Mutably borrow the value at `index`, marking the list dirty.
    ///
    /// The item keeps its identity, so the next render reuses its target
    /// child instead of recreating it.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.items.len() {
            return None;
        }
        self.mark_dirty();
        Some(self.items[index].value_mut())
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the value at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index).map(Keyed::value)
    }

    /// Borrow the keyed entry at `index`.
    pub fn keyed(&self, index: usize) -> Option<&Keyed<T>> {
        self.items.get(index)
    }

    /// Iterate over keyed entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &Keyed<T>> {
        self.items.iter()
    }

    /// Iterate over raw values in order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(Keyed::value)
    }

    /// Identity sequence in current order. This is what renders key on.
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(Keyed::id).collect()
    }

    /// Current revision. Bumped on every successful mutation.
    ///
    /// Note: reading this from inside a spark-signals effect or derived
    /// creates a reactive dependency on the list.
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Clone of the revision signal, for custom reactive integrations.
    ///
    /// Lets an effect depend on the list without borrowing it at read
    /// time - this is what [`crate::app::auto_render`] subscribes to.
    pub fn revision_signal(&self) -> Signal<u64> {
        self.revision.clone()
    }

    fn mark_dirty(&mut self) {
        self.revision.set(self.revision.get() + 1);
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_round_trip() {
        let mut list = List::new();
        list.push("a");
        let len = list.len();

        list.push("x");
        assert_eq!(list.pop(), Ok("x"));
        assert_eq!(list.len(), len, "push then pop should restore length");
    }

    #[test]
    fn test_length_accounting() {
        let mut list = List::new();
        list.push(1);
        list.push(2);
        list.unshift(0);
        list.unshift(-1);
        assert_eq!(list.len(), 4);

        list.pop().unwrap();
        list.shift().unwrap();
        assert_eq!(list.len(), 2);

        // Failed pops must not change the accounting.
        list.pop().unwrap();
        list.pop().unwrap();
        assert_eq!(list.pop(), Err(ListError::EmptyCollection));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_empty_failures() {
        let mut list: List<i32> = List::new();
        assert_eq!(list.pop(), Err(ListError::EmptyCollection));
        assert_eq!(list.shift(), Err(ListError::EmptyCollection));
    }

    #[test]
    fn test_remove_at_preserves_order() {
        let mut list = List::new();
        for value in ["a", "b", "c", "d"] {
            list.push(value);
        }

        assert_eq!(list.remove_at(1), Ok("b"));
        assert_eq!(list.len(), 3);
        let remaining: Vec<&str> = list.values().copied().collect();
        assert_eq!(remaining, ["a", "c", "d"]);
    }

    #[test]
    fn test_remove_at_strict_bounds() {
        let mut list = List::new();
        list.push("only");

        assert_eq!(
            list.remove_at(1),
            Err(ListError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(list.len(), 1, "failed remove must leave the list intact");
    }

    #[test]
    fn test_splice_pure_insertion_keeps_identities() {
        let mut list = List::new();
        list.push("a");
        list.push("b");
        let ids_before = list.ids();

        let removed = list.splice(1, Some(0), vec!["x", "y"]).unwrap();
        assert!(removed.is_empty());
        assert_eq!(list.len(), 4);

        let values: Vec<&str> = list.values().copied().collect();
        assert_eq!(values, ["a", "x", "y", "b"]);

        // Existing items must keep their identities.
        let ids_after = list.ids();
        assert_eq!(ids_after[0], ids_before[0]);
        assert_eq!(ids_after[3], ids_before[1]);
    }

    #[test]
    fn test_splice_removes_and_inserts() {
        let mut list = List::new();
        for value in ["a", "b", "c", "d"] {
            list.push(value);
        }

        let removed = list.splice(1, Some(2), vec!["x"]).unwrap();
        assert_eq!(removed, ["b", "c"]);

        let values: Vec<&str> = list.values().copied().collect();
        assert_eq!(values, ["a", "x", "d"]);
    }

    #[test]
    fn test_splice_negative_start() {
        let mut list = List::new();
        for value in ["a", "b", "c"] {
            list.push(value);
        }

        // -1 addresses the last element.
        let removed = list.splice(-1, None, vec![]).unwrap();
        assert_eq!(removed, ["c"]);

        // Beyond the front after normalization: error, list untouched.
        assert_eq!(
            list.splice(-10, None, vec![]),
            Err(ListError::IndexOutOfRange { index: -10, len: 2 })
        );
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_splice_clamps_lenient() {
        let mut list = List::new();
        list.push("a");

        // Start past the end clamps to the end: pure append.
        let removed = list.splice(99, Some(5), vec!["b"]).unwrap();
        assert!(removed.is_empty());
        let values: Vec<&str> = list.values().copied().collect();
        assert_eq!(values, ["a", "b"]);

        // Oversized delete_count clamps to the tail.
        let removed = list.splice(0, Some(100), vec![]).unwrap();
        assert_eq!(removed, ["a", "b"]);
        assert!(list.is_empty());
    }

    #[test]
    fn test_splice_none_deletes_through_end() {
        let mut list = List::new();
        for value in ["a", "b", "c"] {
            list.push(value);
        }

        let removed = list.splice(1, None, vec![]).unwrap();
        assert_eq!(removed, ["b", "c"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_scenario_mutation_sequence() {
        let mut list = List::new();
        list.push("a");
        list.push("b");
        list.unshift("c");

        let values: Vec<&str> = list.values().copied().collect();
        assert_eq!(values, ["c", "a", "b"]);
        assert_eq!(list.len(), 3);

        list.remove_at(1).unwrap();
        let values: Vec<&str> = list.values().copied().collect();
        assert_eq!(values, ["c", "b"]);
        assert_eq!(list.len(), 2);

        assert_eq!(list.pop(), Ok("b"));
        let values: Vec<&str> = list.values().copied().collect();
        assert_eq!(values, ["c"]);

        assert_eq!(list.shift(), Ok("c"));
        assert!(list.is_empty());

        assert_eq!(list.pop(), Err(ListError::EmptyCollection));
    }

    #[test]
    fn test_revision_bumps_on_success_only() {
        let mut list = List::new();
        let initial = list.revision();

        list.push("a");
        assert!(list.revision() > initial);

        let after_push = list.revision();
        assert_eq!(
            list.remove_at(5),
            Err(ListError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(
            list.revision(),
            after_push,
            "failed mutation must not mark the list dirty"
        );
    }

    #[test]
    fn test_get_mut_marks_dirty_keeps_identity() {
        let mut list = List::new();
        list.push(String::from("old"));
        let id = list.keyed(0).unwrap().id();
        let before = list.revision();

        *list.get_mut(0).unwrap() = String::from("new");

        assert!(list.revision() > before);
        assert_eq!(list.keyed(0).unwrap().id(), id);
        assert_eq!(list.get(0).map(String::as_str), Some("new"));

        assert!(list.get_mut(3).is_none());
    }

    #[test]
    fn test_identities_unique_across_list() {
        let mut list = List::new();
        for i in 0..10 {
            list.push(i);
        }
        let mut ids = list.ids();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10, "no two live items may share an identity");
    }

    #[test]
    fn test_clear() {
        let mut list = List::new();
        list.push("a");
        let before = list.revision();
        list.clear();
        assert!(list.is_empty());
        assert!(list.revision() > before);

        // Clearing an empty list is a no-op.
        let rev = list.revision();
        list.clear();
        assert_eq!(list.revision(), rev);
    }
}
