//! Application Layer - Mount lifecycle and named list composition.
//!
//! This module wires lists and renderers to external render targets:
//!
//! - [`document`] - Selector-or-handle target resolution against a host
//!   document
//! - [`binding`] - One list bound to one target, with the
//!   unmounted/clean/dirty lifecycle
//! - [`application`] - Named bindings rendered as a batch
//!
//! ## Render Contract
//!
//! Rendering is manual: the application (or host) calls `render()` after a
//! batch of mutations. The opt-in [`binding::auto_render`] hook re-renders
//! from a spark-signals effect for hosts that want reactive updates.

pub mod application;
pub mod binding;
pub mod document;

// Re-exports
pub use application::Application;
pub use binding::{Binding, BindingState, auto_render};
pub use document::{Document, MemoryDocument, TargetSpec};
