//! Documents - Resolving mount targets.
//!
//! A mount call names its target either directly (an owned render target
//! handle) or by selector, resolved against whatever document the
//! application was built with. Selector syntax is entirely the document's
//! business - this crate only defines the lookup contract.

use std::collections::HashMap;

use crate::render::{RenderTarget, SharedTarget};

/// Where a list should be mounted.
///
/// The selector-or-element duck typing of DOM-style mounting, made
/// explicit as a sum type.
pub enum TargetSpec {
    /// Look the target up in the host document at mount time.
    Selector(String),
    /// Use this target directly.
    Handle(Box<dyn RenderTarget>),
}

impl TargetSpec {
    /// Convenience constructor for selector specs.
    pub fn selector(selector: impl Into<String>) -> Self {
        TargetSpec::Selector(selector.into())
    }

    /// Convenience constructor for direct handles.
    pub fn handle(target: impl RenderTarget + 'static) -> Self {
        TargetSpec::Handle(Box::new(target))
    }
}

/// A host surface that can resolve selectors to render targets.
pub trait Document {
    /// Resolve `selector` to a target, or `None` if nothing matches.
    fn resolve(&mut self, selector: &str) -> Option<Box<dyn RenderTarget>>;
}

/// In-memory document: a registry of named [`SharedTarget`]s.
///
/// The host keeps its own handle to each target it registers, so it can
/// inspect rendered content after the fact. Useful both for embedding and
/// for tests.
#[derive(Default)]
pub struct MemoryDocument {
    targets: HashMap<String, SharedTarget>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh target under `selector` and return a handle to it.
    pub fn insert(&mut self, selector: impl Into<String>) -> SharedTarget {
        let target = SharedTarget::new();
        self.targets.insert(selector.into(), target.clone());
        target
    }

    /// Look up a registered target without transferring it to a binding.
    pub fn get(&self, selector: &str) -> Option<SharedTarget> {
        self.targets.get(selector).cloned()
    }
}

impl Document for MemoryDocument {
    fn resolve(&mut self, selector: &str) -> Option<Box<dyn RenderTarget>> {
        self.targets
            .get(selector)
            .cloned()
            .map(|target| Box::new(target) as Box<dyn RenderTarget>)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_document_resolves_registered() {
        let mut document = MemoryDocument::new();
        let observer = document.insert("#todos");

        let mut resolved = document.resolve("#todos").expect("should resolve");
        resolved.insert(0, "hello");

        // The resolved target and the registered handle share a surface.
        assert_eq!(observer.children(), ["hello"]);
    }

    #[test]
    fn test_memory_document_misses_unknown() {
        let mut document = MemoryDocument::new();
        assert!(document.resolve("#nothing").is_none());
        assert!(document.get("#nothing").is_none());
    }
}
