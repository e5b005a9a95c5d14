//! Media domain errors.

use thiserror::Error;

/// Domain-level failures for the Media resource.
///
/// Closed set; the boundary layer matches on it exhaustively. Both variants
/// carry diagnostic context and are never serialized to a client directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// Processing the media content failed.
    #[error("failed to parse media from {input}: {cause}")]
    Parsing { input: String, cause: String },

    /// The request carried nothing to parse.
    #[error("media payload is empty: {reason}")]
    Empty { reason: String },
}
