//! Reconciliation - Pure identity diff between two id sequences.
//!
//! Compares the previously rendered id sequence to the current one and
//! produces the script of child operations that transforms the former into
//! the latter:
//!
//! 1. Identities missing from the current sequence are removed (back to
//!    front, so earlier indices stay valid).
//! 2. Walking the current sequence left to right, an identity already in
//!    place is reused as-is, an identity present elsewhere is moved, and an
//!    unknown identity is inserted.
//!
//! Equal sequences produce an empty script, which is what makes a clean
//! render a strict no-op on the target.

use std::collections::HashSet;

use crate::types::ItemId;

/// One child operation against a render target.
///
/// Indices are positions in the target's child sequence *at the moment the
/// operation is applied*, so a script must be applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOp {
    /// Create a child for `id` at `index`.
    Insert { index: usize, id: ItemId },
    /// Detach the child at `index`.
    Remove { index: usize },
    /// Reuse the child at `from` by moving it to `to`.
    Move { from: usize, to: usize },
}

/// Diff `previous` against `current`, returning the operation script.
pub fn reconcile(previous: &[ItemId], current: &[ItemId]) -> Vec<TargetOp> {
    let mut ops = Vec::new();
    let mut working: Vec<ItemId> = previous.to_vec();

    let live: HashSet<ItemId> = current.iter().copied().collect();

    // Phase 1: detach children whose identity is gone. Back to front so
    // remove indices stay valid as we go.
    for index in (0..working.len()).rev() {
        if !live.contains(&working[index]) {
            ops.push(TargetOp::Remove { index });
            working.remove(index);
        }
    }

    // Phase 2: put every surviving child in place, inserting new ones.
    for (index, id) in current.iter().enumerate() {
        if working.get(index) == Some(id) {
            continue; // Already in place - reuse without touching it.
        }

        // Everything before `index` is already settled, so a surviving
        // child can only be found further right.
        match working[index..].iter().position(|w| w == id) {
            Some(offset) => {
                let from = index + offset;
                ops.push(TargetOp::Move { from, to: index });
                let moved = working.remove(from);
                working.insert(index, moved);
            }
            None => {
                ops.push(TargetOp::Insert { index, id: *id });
                working.insert(index, *id);
            }
        }
    }

    debug_assert_eq!(working, current);
    ops
}

// =============================================================================
// Tests
// =============================================================================
