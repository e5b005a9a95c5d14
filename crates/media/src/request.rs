/// A media parse request.
///
/// Exactly one source shape is active per request; the language tag is
/// mandatory in both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRequest {
    /// Reference-based: a resolvable location.
    Url { url: String, language: String },
    /// Content-based: embedded binary payload.
    Content { content: Vec<u8>, language: String },
}

impl ParseRequest {
    pub fn language(&self) -> &str {
        match self {
            ParseRequest::Url { language, .. } | ParseRequest::Content { language, .. } => language,
        }
    }

    /// Short description of the source, for spans and error context.
    /// Never includes payload bytes.
    pub fn source_label(&self) -> String {
        match self {
            ParseRequest::Url { url, .. } => url.clone(),
            ParseRequest::Content { content, .. } => format!("<{} bytes>", content.len()),
        }
    }

    /// True when the request carries nothing to parse.
    pub fn is_empty(&self) -> bool {
        match self {
            ParseRequest::Url { url, .. } => url.trim().is_empty(),
            ParseRequest::Content { content, .. } => content.is_empty(),
        }
    }
}
