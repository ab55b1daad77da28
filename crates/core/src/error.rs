use thiserror::Error;

use crate::ValueKind;

/// Errors raised when a callable is invoked with an untyped argument list.
///
/// These are detected before the callable runs, so a failed invocation never
/// calls the callable and leaves the forwarder usable.
/// Failures produced by the callable itself are not represented here; they
/// are part of the callable's output and pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvokeError {
    #[error("expected {expected} arguments, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("argument {index} has the wrong type: expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        expected: ValueKind,
        found: ValueKind,
    },
}
