//! Binding - One list, one renderer, one (optional) target.
//!
//! A binding walks the lifecycle
//!
//! ```text
//! Unmounted → Mounted(clean) → Mounted(dirty) → Mounted(clean) → ...
//! ```
//!
//! `mount()` performs the initial full render and lands clean. Any
//! successful list mutation makes a mounted binding dirty. `render()`
//! reconciles a dirty binding back to clean and is a strict no-op while
//! clean or unmounted. `unmount()` releases the target; mutations stay
//! legal while unmounted and affect nothing until a re-mount, which does a
//! full render of whatever the list holds by then.
//!
//! The target is only ever mutated from inside `render()` - `mount()`
//! itself goes through the same render path.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use spark_signals::effect;

use crate::list::List;
use crate::render::{ListRenderer, RenderTarget};
use crate::types::{Changes, Cleanup};

/// Lifecycle state of a [`Binding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// No target attached. Mutations are legal but affect nothing.
    Unmounted,
    /// Target attached and in sync with the list.
    Clean,
    /// Target attached, list has mutated since the last render.
    Dirty,
}

/// A [`List`] bound to a render target through a [`ListRenderer`].
pub struct Binding<T> {
    list: List<T>,
    renderer: ListRenderer<T>,
    target: Option<Box<dyn RenderTarget>>,
    /// List revision as of the last render. `None` until the first render
    /// after a mount.
    rendered_revision: Option<u64>,
}

impl<T> Binding<T> {
    /// Create an unmounted binding over an empty list.
    pub fn new(render_item: impl Fn(&T) -> String + 'static) -> Self {
        Self::with_list(List::new(), render_item)
    }

    /// Create an unmounted binding over an existing list.
    pub fn with_list(list: List<T>, render_item: impl Fn(&T) -> String + 'static) -> Self {
        Self {
            list,
            renderer: ListRenderer::new(render_item),
            target: None,
            rendered_revision: None,
        }
    }

    /// Borrow the list.
    pub fn list(&self) -> &List<T> {
        &self.list
    }

    /// Mutably borrow the list. Successful mutations make a mounted
    /// binding dirty.
    pub fn list_mut(&mut self) -> &mut List<T> {
        &mut self.list
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BindingState {
        if self.target.is_none() {
            BindingState::Unmounted
        } else if self.rendered_revision == Some(self.list.revision()) {
            BindingState::Clean
        } else {
            BindingState::Dirty
        }
    }

    /// True if a target is attached.
    pub fn is_mounted(&self) -> bool {
        self.target.is_some()
    }

    /// True if mounted and out of sync with the list.
    pub fn is_dirty(&self) -> bool {
        self.state() == BindingState::Dirty
    }

    /// Attach `target` and perform the initial full render.
    ///
    /// Mounting an already-mounted binding releases the old target first.
    pub fn mount(&mut self, target: Box<dyn RenderTarget>) -> io::Result<Changes> {
        if self.target.is_some() {
            self.unmount();
        }
        self.renderer.invalidate();
        self.rendered_revision = None;
        self.target = Some(target);
        self.render()
    }

    /// Reconcile the target against the list.
    ///
    /// No-op (empty [`Changes`]) while clean or unmounted.
    pub fn render(&mut self) -> io::Result<Changes> {
        let Some(target) = self.target.as_mut() else {
            return Ok(Changes::empty());
        };
        let revision = self.list.revision();
        if self.rendered_revision == Some(revision) {
            return Ok(Changes::empty());
        }

        let changes = self.renderer.render(&self.list, target.as_mut())?;
        self.rendered_revision = Some(revision);
        Ok(changes)
    }

    /// Release the target binding.
    ///
    /// The target box is dropped here - the renderer never retains a
    /// target across an unmount. Last-rendered content stays on the
    /// surface; releasing is not wiping.
    pub fn unmount(&mut self) {
        if self.target.take().is_some() {
            self.renderer.invalidate();
            self.rendered_revision = None;
        }
    }
}

// =============================================================================
// Auto-render hook
// =============================================================================

/// Re-render a shared binding whenever its list's revision changes.
///
/// Opt-in: the base contract is manual `render()` after a batch of
/// mutations. This hook is for hosts that drive mutations from signals
/// and want the surface to follow along. The effect runs once immediately
/// (rendering current state) and then on every revision change.
///
/// Effects flush synchronously, so wrap mutations made through the shared
/// handle in [`spark_signals::batch`] - that releases the `RefCell` borrow
/// before the effect re-renders:
///
/// ```ignore
/// let stop = auto_render(binding.clone());
/// batch(|| { binding.borrow_mut().list_mut().push("item"); });
/// ```
///
/// A mutation fired while the binding is still borrowed skips the render
/// (with a warning); the binding stays dirty and catches up on the next
/// flush or manual render.
///
/// Returns a [`Cleanup`] that stops the effect.
pub fn auto_render<T: 'static>(binding: Rc<RefCell<Binding<T>>>) -> Cleanup {
    // Cloned out once so the dependency read never needs the RefCell.
    let revision = binding.borrow().list().revision_signal();
    let stop = effect(move || {
        // Tracked read: the effect re-runs when the revision signal moves.
        let _revision = revision.get();
        match binding.try_borrow_mut() {
            Ok(mut binding) => {
                let _ = binding.render();
            }
            Err(_) => {
                eprintln!(
                    "[spark-list auto_render] binding busy during flush; \
                    wrap mutations in spark_signals::batch"
                );
            }
        }
    });
    Box::new(stop)
}

// =============================================================================
// Tests
// =============================================================================
