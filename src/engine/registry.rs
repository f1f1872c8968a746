//! Identity Registry - Allocation of process-unique item ids.
//!
//! A single atomic counter backs all lists in the process. Ids are never
//! returned to a pool: monotonic allocation is what guarantees that a
//! render target child keyed by an old id can never be confused with a
//! newly wrapped item.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::ItemId;

/// Next id to hand out. Starts at 1 so 0 stays free as a sentinel
/// in host-side data structures that want one.
static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a fresh item id.
///
/// Unique for the lifetime of the process, across all lists and threads.
pub fn next_item_id() -> ItemId {
    ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
}

// =============================================================================
// Tests
// =============================================================================
