use thiserror::Error;

/// Errors raised while interpreting menu labels.
///
/// The session engine never surfaces these to the player; callers log them and
/// fall back to a safe default.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    #[error("unknown difficulty label: {0:?}")]
    UnknownDifficulty(String),
    #[error("unknown quiz length label: {0:?}")]
    UnknownQuizLength(String),
}
