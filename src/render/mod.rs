//! Render Layer - Identity-keyed reconciliation against a render target.
//!
//! # Pipeline
//!
//! ```text
//! List<T> ids  →  reconcile (pure diff)  →  TargetOps  →  RenderTarget
//! ```
//!
//! ## Data Flow
//!
//! 1. **reconcile** - Pure comparison of the previously rendered id
//!    sequence against the list's current ids. Produces the minimal
//!    insert/remove/move script.
//! 2. **ListRenderer** - Applies the script to a [`RenderTarget`], renders
//!    content for newly inserted identities, and remembers the id sequence
//!    for the next pass.
//! 3. **RenderTarget** - The opaque external surface. In-memory for tests
//!    and embedding hosts, terminal-backed for interactive use.
//!
//! ## Key Design Principles
//!
//! - **Pure diff**: reconcile never touches the target
//! - **Side effects in the renderer**: only `ListRenderer::render` mutates
//!   the target
//! - **Identity keying**: reuse is decided by [`crate::ItemId`] alone,
//!   never by value equality

pub mod reconcile;
pub mod renderer;
pub mod target;
pub mod terminal;

// Re-exports
pub use reconcile::{TargetOp, reconcile};
pub use renderer::ListRenderer;
pub use target::{MemoryTarget, RenderTarget, SharedTarget};
pub use terminal::TerminalTarget;
