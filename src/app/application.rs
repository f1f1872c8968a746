//! Application - Named list bindings rendered as a batch.
//!
//! An application owns a host document and zero or more named bindings,
//! each pairing one list with one render target. The application is the
//! party responsible for calling `render()` after a batch of mutations -
//! there is no implicit auto-render at this level.
//!
//! Bindings are stored type-erased so lists of different item types can
//! live side by side; typed access goes through `Any` downcasting.

use std::any::Any;
use std::collections::HashMap;
use std::io;

use crate::render::RenderTarget;
use crate::types::{Changes, MountError};

use super::binding::{Binding, BindingState};
use super::document::{Document, TargetSpec};

/// Object-safe view of a [`Binding`] with the item type erased.
trait AnyBinding {
    fn mount_target(&mut self, target: Box<dyn RenderTarget>) -> io::Result<Changes>;
    fn unmount(&mut self);
    fn render(&mut self) -> io::Result<Changes>;
    fn state(&self) -> BindingState;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static> AnyBinding for Binding<T> {
    fn mount_target(&mut self, target: Box<dyn RenderTarget>) -> io::Result<Changes> {
        self.mount(target)
    }

    fn unmount(&mut self) {
        Binding::unmount(self);
    }

    fn render(&mut self) -> io::Result<Changes> {
        Binding::render(self)
    }

    fn state(&self) -> BindingState {
        Binding::state(self)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A set of named list bindings plus the document they mount into.
pub struct Application {
    document: Box<dyn Document>,
    bindings: HashMap<String, Box<dyn AnyBinding>>,
}

impl Application {
    /// Create an application over the given host document.
    pub fn new(document: impl Document + 'static) -> Self {
        Self {
            document: Box::new(document),
            bindings: HashMap::new(),
        }
    }

    /// Register a binding under `name`, replacing (and unmounting) any
    /// previous binding with that name.
    pub fn insert<T: 'static>(&mut self, name: impl Into<String>, binding: Binding<T>) {
        if let Some(mut previous) = self
            .bindings
            .insert(name.into(), Box::new(binding) as Box<dyn AnyBinding>)
        {
            previous.unmount();
        }
    }

    /// Remove the binding under `name`, unmounting it first.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.bindings.remove(name) {
            Some(mut binding) => {
                binding.unmount();
                true
            }
            None => false,
        }
    }

    /// Mount the named binding.
    ///
    /// Selector specs are resolved against the host document; failure to
    /// resolve is [`MountError::TargetNotFound`] and leaves the binding
    /// unmounted. A successful mount performs the initial full render.
    pub fn mount(&mut self, name: &str, spec: TargetSpec) -> Result<(), MountError> {
        let binding = self
            .bindings
            .get_mut(name)
            .ok_or_else(|| MountError::UnknownList(name.to_string()))?;

        let target = match spec {
            TargetSpec::Selector(selector) => self
                .document
                .resolve(&selector)
                .ok_or(MountError::TargetNotFound(selector))?,
            TargetSpec::Handle(target) => target,
        };

        binding.mount_target(target)?;
        Ok(())
    }

    /// Unmount the named binding. Unknown names are ignored.
    pub fn unmount(&mut self, name: &str) {
        if let Some(binding) = self.bindings.get_mut(name) {
            binding.unmount();
        }
    }

    /// Unmount every binding. Application teardown.
    pub fn unmount_all(&mut self) {
        for binding in self.bindings.values_mut() {
            binding.unmount();
        }
    }

    /// Render every mounted binding.
    ///
    /// The batch-render half of the contract: mutate freely, then call
    /// this once. Returns the union of all change summaries.
    pub fn render(&mut self) -> io::Result<Changes> {
        let mut changes = Changes::empty();
        for binding in self.bindings.values_mut() {
            changes |= binding.render()?;
        }
        Ok(changes)
    }

    /// Lifecycle state of the named binding.
    pub fn state(&self, name: &str) -> Option<BindingState> {
        self.bindings.get(name).map(|binding| binding.state())
    }

    /// Typed mutable access to the named binding.
    ///
    /// Returns `None` for unknown names or a mismatched item type.
    pub fn binding_mut<T: 'static>(&mut self, name: &str) -> Option<&mut Binding<T>> {
        self.bindings
            .get_mut(name)?
            .as_any_mut()
            .downcast_mut::<Binding<T>>()
    }

    /// Typed mutable access to the named binding's list.
    pub fn list_mut<T: 'static>(&mut self, name: &str) -> Option<&mut crate::list::List<T>> {
        self.binding_mut::<T>(name).map(Binding::list_mut)
    }

    /// Registered binding names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        self.unmount_all();
    }
}

// =============================================================================
// Tests
// =============================================================================
