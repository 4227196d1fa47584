//! Error types for the path engine.

/// Errors raised when a subject does not have the shape an operation expects.
///
/// Paths that fail to normalize are not reported here; operations treat them
/// as paths that do not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `invoke_in` resolved to something that is not a function.
    #[error("Could not find fn to invoke in object path: {}", .keys.join(","))]
    InvocationTarget { keys: Vec<String> },

    /// `update_in` was given a path that does not already exist.
    #[error("Could not find path in object to update: {}", .keys.join(","))]
    UpdatePath { keys: Vec<String> },
}

impl Error {
    /// The keys of the path that failed.
    pub fn keys(&self) -> &[String] {
        match self {
            Error::InvocationTarget { keys } | Error::UpdatePath { keys } => keys,
        }
    }
}
