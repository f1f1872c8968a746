//! List Engine - Item identity and wrapping.
//!
//! The engine manages the core data model:
//! - Registry: process-unique identity allocation
//! - Keyed: a raw value paired with a stable identity token
//!
//! Items are matched across renders by identity, never by value. The
//! registry hands out monotonically increasing ids from a single atomic
//! counter, so an id can never be reclaimed by a different item while any
//! reference to the original is still alive.

mod keyed;
mod registry;

pub use keyed::*;
pub use registry::*;
