//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::CoreError;

/// Errors emitted by the session engine.
///
/// All of them are recovered inside the state machine; they exist so the
/// recovery paths are explicit and can be logged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("bar width {0} is outside 10..=200")]
    InvalidBarWidth(usize),
    #[error("running round has no current question")]
    MissingQuestion,
    #[error("no item is selected")]
    NothingSelected,
    #[error(transparent)]
    Label(#[from] CoreError),
}
