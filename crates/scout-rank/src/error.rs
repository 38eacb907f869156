//! Error types for the scout-rank crate.

use thiserror::Error;

/// Errors raised while building filters or the default policy from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The name does not match any filter dimension.
    #[error("unknown filter dimension '{0}'")]
    UnknownDimension(String),

    /// The name does not match any candidate field.
    #[error("unknown candidate field '{0}'")]
    UnknownField(String),

    /// A filter spec is not of the form `dimension=value`.
    #[error("malformed filter '{0}', expected dimension=value")]
    MalformedSpec(String),
}

/// Validation failures when submitting candidates to a job.
///
/// These are expected outcomes reported back to the caller, not faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// No destination job was chosen.
    #[error("no destination selected")]
    NoDestination,

    /// Bulk submission was attempted with nothing selected.
    #[error("empty selection")]
    EmptySelection,

    /// The receiving side turned the submission down.
    #[error("submission rejected: {0}")]
    Rejected(String),
}
