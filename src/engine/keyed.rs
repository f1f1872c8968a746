//! Keyed - A raw value paired with a stable identity.
//!
//! Wrapping is pure apart from the identity allocation: the value itself is
//! stored untouched. Wrapping the same value twice yields two distinct
//! identities - the wrapper never deduplicates.

use crate::types::ItemId;

use super::registry::next_item_id;

/// A list item together with its identity token.
///
/// The identity is assigned once, at wrap time, and follows the item
/// through every reorder. Value edits via [`Keyed::value_mut`] leave the
/// identity untouched, which is what lets the reconciler reuse an existing
/// target child instead of recreating it.
#[derive(Debug)]
pub struct Keyed<T> {
    id: ItemId,
    value: T,
}

impl<T> Keyed<T> {
    /// Wrap a raw value with a fresh, process-unique identity.
    pub fn new(value: T) -> Self {
        Self {
            id: next_item_id(),
            value,
        }
    }

    /// The identity token.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Borrow the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutably borrow the wrapped value. Identity is unaffected.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Unwrap, discarding the identity.
    pub fn into_value(self) -> T {
        self.value
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_assigns_identity() {
        let keyed = Keyed::new("apple");
        assert_eq!(*keyed.value(), "apple");
        assert_eq!(keyed.into_value(), "apple");
    }

    #[test]
    fn test_rewrap_gets_fresh_identity() {
        // Same raw value, two wraps, two identities.
        let a = Keyed::new(42);
        let b = Keyed::new(42);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn test_value_mut_keeps_identity() {
        let mut keyed = Keyed::new(String::from("old"));
        let id = keyed.id();
        keyed.value_mut().push_str("er");
        assert_eq!(keyed.id(), id);
        assert_eq!(keyed.value(), "older");
    }
}
