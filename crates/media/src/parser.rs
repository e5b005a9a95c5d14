//! Access-layer contract for media parsing.

use async_trait::async_trait;

use crate::error::MediaError;
use crate::request::ParseRequest;
use crate::segment::SubtitleSegment;

/// Turns a parse request into subtitle segments.
///
/// Implementations surface every backend failure as a [`MediaError`]; no
/// engine-specific error type crosses this boundary, and no retries happen
/// here.
#[async_trait]
pub trait MediaParser: Send + Sync {
    /// Parse the requested media into segments ordered by ascending start
    /// offset. The sequence may be empty.
    async fn parse(&self, request: ParseRequest) -> Result<Vec<SubtitleSegment>, MediaError>;
}
