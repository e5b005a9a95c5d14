use serde::{Deserialize, Serialize};

/// One subtitle cue: a time window and its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleSegment {
    /// Offset from the start of the media, in seconds. Non-negative.
    pub start: f64,
    /// End offset in seconds. Always greater than `start`.
    pub end: f64,
    pub text: String,
}

impl SubtitleSegment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        debug_assert!(start >= 0.0, "segment start must be non-negative");
        debug_assert!(end > start, "segment end must exceed start");
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Whether a parse result honors the ordering contract: segments sorted by
/// ascending start offset.
pub fn ordered_by_start(segments: &[SubtitleSegment]) -> bool {
    segments.windows(2).all(|pair| pair[0].start <= pair[1].start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_check_accepts_empty_and_sorted() {
        assert!(ordered_by_start(&[]));
        assert!(ordered_by_start(&[
            SubtitleSegment::new(0.0, 1.0, "a"),
            SubtitleSegment::new(1.0, 2.0, "b"),
        ]));
    }

    #[test]
    fn ordering_check_rejects_regressions() {
        assert!(!ordered_by_start(&[
            SubtitleSegment::new(5.0, 6.0, "late"),
            SubtitleSegment::new(0.0, 1.0, "early"),
        ]));
    }
}
