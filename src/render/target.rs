//! Render Targets - The opaque external surface a list renders into.
//!
//! The renderer owns a target for the lifetime of a mount and speaks to it
//! only through child operations: insert, remove, move, clear. Buffered
//! backends flush in `commit()`. The target never sees identities - keying
//! is entirely the renderer's business.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// An external surface that holds an ordered sequence of rendered children.
///
/// Implementations must apply each operation exactly as given; the
/// reconciler's scripts assume index positions are valid at the moment an
/// operation is applied.
pub trait RenderTarget {
    /// Create a child with `content` at `index`, shifting later children.
    fn insert(&mut self, index: usize, content: &str);

    /// Detach the child at `index`.
    fn remove(&mut self, index: usize);

    /// Move the child at `from` to position `to`, preserving its content.
    fn move_child(&mut self, from: usize, to: usize);

    /// Detach every child.
    fn clear(&mut self);

    /// Number of children currently attached.
    fn child_count(&self) -> usize;

    /// Flush buffered output, if the backend buffers. Default: no-op.
    fn commit(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// MemoryTarget
// =============================================================================

/// In-memory render target.
///
/// Holds children as plain strings and counts every mutating operation,
/// which is how tests assert that a clean render touches nothing.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    children: Vec<String>,
    mutations: usize,
}

impl MemoryTarget {
    /// Create an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current children, in order.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Total mutating operations applied since creation.
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }
}

impl RenderTarget for MemoryTarget {
    fn insert(&mut self, index: usize, content: &str) {
        self.children.insert(index, content.to_string());
        self.mutations += 1;
    }

    fn remove(&mut self, index: usize) {
        self.children.remove(index);
        self.mutations += 1;
    }

    fn move_child(&mut self, from: usize, to: usize) {
        let child = self.children.remove(from);
        self.children.insert(to, child);
        self.mutations += 1;
    }

    fn clear(&mut self) {
        if !self.children.is_empty() {
            self.children.clear();
            self.mutations += 1;
        }
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }
}

// =============================================================================
// SharedTarget
// =============================================================================

/// Shared handle to a [`MemoryTarget`].
///
/// A document hands one of these to a binding while keeping its own clone,
/// so the host can inspect the surface after renders. Rc<RefCell> because
/// the whole mount layer is single-threaded by design.
#[derive(Clone, Default)]
pub struct SharedTarget(Rc<RefCell<MemoryTarget>>);

impl SharedTarget {
    /// Create a shared handle to a fresh empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current children.
    pub fn children(&self) -> Vec<String> {
        self.0.borrow().children().to_vec()
    }

    /// Total mutating operations applied so far.
    pub fn mutation_count(&self) -> usize {
        self.0.borrow().mutation_count()
    }
}

impl RenderTarget for SharedTarget {
    fn insert(&mut self, index: usize, content: &str) {
        self.0.borrow_mut().insert(index, content);
    }

    fn remove(&mut self, index: usize) {
        self.0.borrow_mut().remove(index);
    }

    fn move_child(&mut self, from: usize, to: usize) {
        self.0.borrow_mut().move_child(from, to);
    }

    fn clear(&mut self) {
        self.0.borrow_mut().clear();
    }

    fn child_count(&self) -> usize {
        self.0.borrow().child_count()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_target_ops() {
        let mut target = MemoryTarget::new();
        target.insert(0, "b");
        target.insert(0, "a");
        target.insert(2, "c");
        assert_eq!(target.children(), ["a", "b", "c"]);
        assert_eq!(target.child_count(), 3);

        target.move_child(2, 0);
        assert_eq!(target.children(), ["c", "a", "b"]);

        target.remove(1);
        assert_eq!(target.children(), ["c", "b"]);
        assert_eq!(target.mutation_count(), 5);
    }

    #[test]
    fn test_memory_target_clear() {
        let mut target = MemoryTarget::new();
        target.insert(0, "a");
        target.clear();
        assert_eq!(target.child_count(), 0);

        // Clearing an empty target is not a mutation.
        let count = target.mutation_count();
        target.clear();
        assert_eq!(target.mutation_count(), count);
    }

    #[test]
    fn test_shared_target_observes_mutations() {
        let observer = SharedTarget::new();
        let mut handle = observer.clone();

        handle.insert(0, "hello");
        assert_eq!(observer.children(), ["hello"]);
        assert_eq!(observer.mutation_count(), 1);
    }
}
