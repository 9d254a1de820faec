//! # Menu Error Types
//!
//! Capacity and range violations are explicit, typed errors; nothing in
//! the menu is allowed to index out of bounds silently.

use thiserror::Error;

/// Errors that can occur in menu operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// Requested more active items than widgets were allocated.
    #[error("active item count {requested} exceeds allocated capacity {capacity}")]
    CapacityExceeded {
        /// Number of widgets allocated at construction.
        capacity: usize,
        /// Active count that was requested.
        requested: usize,
    },

    /// An item index outside the active range.
    #[error("item index {index} out of range: {active} active items")]
    ItemOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of currently active items.
        active: usize,
    },

    /// Configuration file could not be parsed.
    #[error("invalid menu configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for menu operations.
pub type MenuResult<T> = Result<T, MenuError>;
