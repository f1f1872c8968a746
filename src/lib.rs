//! # spark-list
//!
//! Reactive keyed lists with identity-based view reconciliation.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Every item pushed into a [`List`] is wrapped with a stable, process-unique
//! identity. A renderer keeps an external surface (terminal rows, an
//! in-memory buffer, anything implementing [`RenderTarget`]) synchronized
//! with the list by diffing identity sequences:
//!
//! ```text
//! List mutations → revision signal → render() → reconcile → RenderTarget
//! ```
//!
//! Surviving identities reuse their target children (moved if reordered),
//! removed identities detach them, and new identities insert freshly
//! rendered children at the right position. Rendering twice without a
//! mutation touches nothing.
//!
//! ## Quick Start
//!
//! ```
//! use spark_list::{Application, Binding, BindingState, MemoryDocument, TargetSpec};
//!
//! let mut document = MemoryDocument::new();
//! let surface = document.insert("#fruits");
//!
//! let mut app = Application::new(document);
//! app.insert("fruits", Binding::new(|value: &String| value.clone()));
//!
//! app.list_mut::<String>("fruits").unwrap().push("apple".to_string());
//! app.mount("fruits", TargetSpec::selector("#fruits")).unwrap();
//! assert_eq!(surface.children(), ["apple"]);
//!
//! // Mutate in a batch, render once.
//! app.list_mut::<String>("fruits").unwrap().push("banana".to_string());
//! assert_eq!(app.state("fruits"), Some(BindingState::Dirty));
//! app.render().unwrap();
//! assert_eq!(surface.children(), ["apple", "banana"]);
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (ItemId, errors, Changes, Cleanup)
//! - [`engine`] - Identity allocation and the Keyed wrapper
//! - [`list`] - The reactive list and its mutation operations
//! - [`render`] - Reconciliation, render targets, terminal backend
//! - [`app`] - Mount lifecycle, documents, named-list applications

pub mod app;
pub mod engine;
pub mod list;
pub mod render;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{Keyed, next_item_id};

pub use list::List;

pub use render::{
    ListRenderer, MemoryTarget, RenderTarget, SharedTarget, TargetOp, TerminalTarget, reconcile,
};

pub use app::{
    Application, Binding, BindingState, Document, MemoryDocument, TargetSpec, auto_render,
};
