use async_trait::async_trait;

use captiond_media::{MediaError, MediaParser, ParseRequest, SubtitleSegment};

/// Fixed-output parser standing in for the real transcription engine.
///
/// Reference-based requests must at least look resolvable (`scheme://...`);
/// content-based requests are accepted as-is. The output is a canned
/// transcript tagged with the requested language so callers can watch the
/// request flow through the pipeline.
#[derive(Debug, Default, Clone)]
pub struct StubMediaParser;

impl StubMediaParser {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MediaParser for StubMediaParser {
    async fn parse(&self, request: ParseRequest) -> Result<Vec<SubtitleSegment>, MediaError> {
        if let ParseRequest::Url { url, .. } = &request {
            if !url.contains("://") {
                return Err(MediaError::Parsing {
                    input: url.clone(),
                    cause: "unresolvable media reference".to_string(),
                });
            }
        }

        let language = request.language().to_string();
        Ok(vec![
            SubtitleSegment::new(0.0, 1.8, format!("[{language}] hello and welcome")),
            SubtitleSegment::new(1.8, 4.2, format!("[{language}] this transcript is fixture data")),
            SubtitleSegment::new(4.2, 6.5, format!("[{language}] see you next time")),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use captiond_media::ordered_by_start;

    #[tokio::test]
    async fn url_requests_produce_an_ordered_transcript() {
        let parser = StubMediaParser::new();
        let segments = parser
            .parse(ParseRequest::Url {
                url: "https://x/video.mp4".to_string(),
                language: "en".to_string(),
            })
            .await
            .unwrap();

        assert!(!segments.is_empty());
        assert!(ordered_by_start(&segments));
        assert!(segments[0].text.contains("[en]"));
    }

    #[tokio::test]
    async fn unresolvable_references_fail_as_parsing_errors() {
        let parser = StubMediaParser::new();
        let err = parser
            .parse(ParseRequest::Url {
                url: "not-a-reference".to_string(),
                language: "en".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MediaError::Parsing { .. }));
    }

    #[tokio::test]
    async fn content_requests_are_accepted_as_is() {
        let parser = StubMediaParser::new();
        let segments = parser
            .parse(ParseRequest::Content {
                content: vec![0u8; 64],
                language: "de".to_string(),
            })
            .await
            .unwrap();

        assert!(ordered_by_start(&segments));
        assert!(segments.iter().all(|s| s.text.contains("[de]")));
    }
}
