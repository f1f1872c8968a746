//! List Renderer - Applies reconciliation scripts to a render target.
//!
//! The renderer remembers the id sequence it last painted (like a diff
//! renderer keeps its previous frame) and asks the reconciler for the
//! script that turns it into the list's current sequence. Content is
//! produced by the host-supplied item render function, and only for
//! freshly inserted identities - surviving children are reused in place
//! or moved, never re-rendered.

use std::io;

use crate::list::List;
use crate::types::{Changes, ItemId};

use super::reconcile::{TargetOp, reconcile};
use super::target::RenderTarget;

/// Renders a [`List`] into a [`RenderTarget`] by identity-keyed diffing.
pub struct ListRenderer<T> {
    render_item: Box<dyn Fn(&T) -> String>,
    /// Id sequence as of the last render. Empty means full rebuild next.
    previous: Vec<ItemId>,
}

impl<T> ListRenderer<T> {
    /// Create a renderer with the given item render function.
    pub fn new(render_item: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            render_item: Box::new(render_item),
            previous: Vec::new(),
        }
    }

    /// Reconcile `target` against `list` and flush.
    ///
    /// Returns a [`Changes`] summary; empty means the target was not
    /// touched. Rendering twice without an intervening mutation yields an
    /// empty script, so the second call changes nothing.
    pub fn render(
        &mut self,
        list: &List<T>,
        target: &mut dyn RenderTarget,
    ) -> io::Result<Changes> {
        let current = list.ids();
        let ops = reconcile(&self.previous, &current);

        let mut changes = Changes::empty();
        for op in &ops {
            match *op {
                TargetOp::Insert { index, id } => {
                    let content = self.content_for(list, &current, id, index);
                    target.insert(index, &content);
                    changes |= Changes::INSERTED;
                }
                TargetOp::Remove { index } => {
                    target.remove(index);
                    changes |= Changes::REMOVED;
                }
                TargetOp::Move { from, to } => {
                    target.move_child(from, to);
                    changes |= Changes::MOVED;
                }
            }
        }

        if !ops.is_empty() {
            target.commit()?;
        }

        self.previous = current;
        Ok(changes)
    }

    /// Forget the previous frame so the next render rebuilds everything.
    ///
    /// Called on unmount; a re-mounted binding starts against a fresh
    /// target and must not assume any children exist.
    pub fn invalidate(&mut self) {
        self.previous.clear();
    }

    /// True if a previous frame exists to diff against.
    pub fn has_previous(&self) -> bool {
        !self.previous.is_empty()
    }

    /// Render content for the identity being inserted at `index`.
    ///
    /// Insert ops land at the item's final position, so the value is
    /// normally found right there; the scan is a fallback for hosts that
    /// hand-build scripts.
    fn content_for(&self, list: &List<T>, current: &[ItemId], id: ItemId, index: usize) -> String {
        if current.get(index) == Some(&id) {
            if let Some(keyed) = list.keyed(index) {
                return (self.render_item)(keyed.value());
            }
        }
        list.iter()
            .find(|keyed| keyed.id() == id)
            .map(|keyed| (self.render_item)(keyed.value()))
            .unwrap_or_default()
    }
}

// =============================================================================
// Tests
// =============================================================================
