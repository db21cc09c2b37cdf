//! Session and pool error types.
//!
//! Every engine operation either applies all of its effects or returns one of
//! these errors before touching session state, so the presentation layer can
//! match on the kind and recover (re-prompt, ignore, or abort).

use thiserror::Error;

/// Why a question-set document was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The document was not a JSON array of question records.
    #[error("malformed question data: {0}")]
    Malformed(String),

    /// The document was a valid array with nothing in it.
    #[error("no questions available")]
    Empty,
}

/// Errors raised by the question pool and the session engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The loaded question set failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `start` was called with a pool that has no questions.
    #[error("cannot start a session from an empty question pool")]
    EmptyPool,

    /// The requested question count is outside `1..=available`.
    #[error("question count must be between 1 and {available}, got {requested}")]
    InvalidCount { requested: usize, available: usize },

    /// The session has no question at the current position.
    #[error("no question at position {index} (queue holds {len})")]
    OutOfRange { index: usize, len: usize },

    /// `advance` was called before the current question was answered.
    #[error("the current question has not been answered yet")]
    NotAnswered,

    /// An answer of the wrong shape was submitted for the current question.
    #[error("expected a {expected} answer for this question")]
    WrongQuestionKind { expected: &'static str },

    /// `summary` was requested while the session is still running.
    #[error("the session has not finished yet")]
    SessionNotFinished,
}

impl QuizError {
    /// Returns `true` if the caller can fix the input and retry in place.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, QuizError::InvalidCount { .. })
    }
}
