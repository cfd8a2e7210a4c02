//! Error types for the state registry.
//!
//! Reading, writing and observing a cell never fail. Only the snapshot JSON
//! helpers can, and they report through [`StateError`].

use thiserror::Error;

/// Snapshot encoding and decoding errors.
#[derive(Debug, Error)]
pub enum StateError {
    /// Snapshot JSON could not be parsed.
    #[error("failed to decode state snapshot: {0}")]
    Decode(#[source] serde_json::Error),
    /// Snapshot could not be encoded as JSON.
    #[error("failed to encode state snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}
