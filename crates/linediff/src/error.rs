use thiserror::Error;

use crate::model::LineKind;

/// Errors from the configuration and serialization surface. Diffing itself
/// never fails.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("invalid diff options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// A decoded record carries line numbers its kind does not allow.
    #[error(
        "{kind:?} record has original line {original:?} and modified line {modified:?}"
    )]
    LineNumberMismatch {
        kind: LineKind,
        original: Option<usize>,
        modified: Option<usize>,
    },
}

pub type Result<T, E = DiffError> = std::result::Result<T, E>;
