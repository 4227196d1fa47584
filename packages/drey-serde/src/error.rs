//! Errors for JSON conversions.

/// Errors building a subject from JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The top level of a subject document must be an object.
    #[error("expected an object for subject, found {found}")]
    NotAnObject { found: &'static str },
}
