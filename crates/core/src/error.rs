//! Fatal failure model.

use std::fmt;

/// Result type for operations whose only failure mode is a defect.
pub type DefectResult<T> = Result<T, Defect>;

/// An unrecoverable failure.
///
/// A `Defect` signals a programming or infrastructure fault, never invalid
/// client input. It is never translated to a wire error: the request
/// terminates with an unclassified failure and the diagnostic chain stays
/// inside the process.
#[derive(Debug)]
pub struct Defect(anyhow::Error);

impl Defect {
    pub fn msg(msg: impl Into<String>) -> Self {
        Self(anyhow::anyhow!(msg.into()))
    }

    /// Escalate a recoverable error that reached a fatal-policy operation.
    pub fn escalate(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "defect: {}", self.0)
    }
}

impl From<anyhow::Error> for Defect {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}
