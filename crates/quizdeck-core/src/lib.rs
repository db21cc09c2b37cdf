//! quizdeck-core — Quiz session engine, answer checking, and question pools.
//!
//! This crate defines the question model, the session state machine, and
//! the answer-matching rules that the rest of quizdeck builds on. It performs
//! no I/O of its own; question documents arrive through [`traits::QuestionSource`].

pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod pool;
pub mod shuffle;
pub mod summary;
pub mod traits;

pub use engine::{Feedback, OptionMark, OptionState, Phase, Progress, SessionEngine, SessionState};
pub use error::{QuizError, ValidationError};
pub use model::{Question, QuestionKind, QuestionRecord, WrongAnswer};
pub use pool::{validate_pool, QuestionPool, ValidationWarning};
pub use summary::SessionSummary;
