//! Error types for store and configuration operations.
//!
//! The interaction engine itself never fails on pointer input; these errors
//! surface only from the item store's CRUD helpers and config loading.

use crate::types::GroupKey;
use thiserror::Error;

/// Errors that can occur outside the gesture handlers
#[derive(Error, Debug)]
pub enum TimelineError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration values that cannot be used together
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// View dimensions that cannot map pixels to grid positions
    #[error("Invalid view: {0}")]
    InvalidView(String),

    /// Item index does not exist in the store
    #[error("Item index {index} out of range (len {len})")]
    ItemOutOfRange { index: usize, len: usize },

    /// No item belongs to the group
    #[error("Unknown group: {0}")]
    UnknownGroup(GroupKey),
}

/// Result type alias for store and config operations
pub type TimelineResult<T> = Result<T, TimelineError>;

impl From<String> for TimelineError {
    fn from(s: String) -> Self {
        TimelineError::InvalidConfig(s)
    }
}
