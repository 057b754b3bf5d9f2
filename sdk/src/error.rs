use thiserror::Error;

/// Errors surfaced by read accessors whose value the host never exposes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// Permanent capability gap: the host has no getter for this value,
    /// so retrying can never succeed.
    #[error("the host does not expose read-back of {what}")]
    Unsupported { what: &'static str },
}
