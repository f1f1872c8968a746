//! Core types for spark-list.
//!
//! These types define the foundation that everything builds on.
//! They flow through the list, the reconciler, and the mount layer.

use std::fmt;
use std::io;

// =============================================================================
// Item Identity
// =============================================================================

/// Opaque identity token for a wrapped item.
///
/// Assigned once at wrap time from a process-wide counter and never reused.
/// The reconciler matches render target children against list contents by
/// this token alone, never by value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) u64);

impl ItemId {
    /// Raw counter value, mainly useful for diagnostics.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Error returned by list mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// `pop` or `shift` called on an empty list.
    EmptyCollection,
    /// Index outside the valid range for the operation.
    ///
    /// `index` is the caller-supplied position (possibly negative for
    /// splice-style addressing), `len` the list length at call time.
    IndexOutOfRange { index: isize, len: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::EmptyCollection => write!(f, "operation on empty collection"),
            ListError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
        }
    }
}

impl std::error::Error for ListError {}

/// Error returned by the mount layer.
#[derive(Debug)]
pub enum MountError {
    /// A selector resolved to nothing in the host document.
    TargetNotFound(String),
    /// No binding registered under the given name.
    UnknownList(String),
    /// The initial render failed while flushing to the target.
    Io(io::Error),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::TargetNotFound(selector) => {
                write!(f, "no render target matches selector {:?}", selector)
            }
            MountError::UnknownList(name) => write!(f, "no list named {:?}", name),
            MountError::Io(err) => write!(f, "render target i/o error: {}", err),
        }
    }
}

impl std::error::Error for MountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MountError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MountError {
    fn from(err: io::Error) -> Self {
        MountError::Io(err)
    }
}

// =============================================================================
// Render Change Summary (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Summary of what a render pass did to the target.
    ///
    /// Combine with bitwise OR: `Changes::INSERTED | Changes::MOVED`.
    /// An empty set means the target was not touched at all.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Changes: u8 {
        const NONE = 0;
        const INSERTED = 1 << 0;
        const REMOVED = 1 << 1;
        const MOVED = 1 << 2;
    }
}

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by reactive hooks.
///
/// Call this to stop the hook and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId(7).to_string(), "#7");
        assert_eq!(ItemId(7).raw(), 7);
    }

    #[test]
    fn test_list_error_display() {
        assert_eq!(
            ListError::EmptyCollection.to_string(),
            "operation on empty collection"
        );
        assert_eq!(
            ListError::IndexOutOfRange { index: -4, len: 2 }.to_string(),
            "index -4 out of range for length 2"
        );
    }

    #[test]
    fn test_mount_error_display() {
        let err = MountError::TargetNotFound("#sidebar".to_string());
        assert_eq!(
            err.to_string(),
            "no render target matches selector \"#sidebar\""
        );
    }

    #[test]
    fn test_changes_flags() {
        let changes = Changes::INSERTED | Changes::REMOVED;
        assert!(changes.contains(Changes::INSERTED));
        assert!(!changes.contains(Changes::MOVED));
        assert!(Changes::empty().is_empty());
    }
}
