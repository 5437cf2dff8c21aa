//! Error types.
//!
//! Only [`GenerateError`] aborts a generation run. [`SinkError`] is reported
//! by persistence sinks and swallowed by the generator; [`RecordError`] comes
//! from parsing wire records.

use thiserror::Error;

/// Errors that abort a generation run before any placement is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The subject list was empty.
    #[error("no subjects provided")]
    EmptyInput,

    /// A subject entry had neither a `subjectName` nor a `name`.
    #[error("subject at index {index} has no resolvable name")]
    InvalidSubject {
        /// Position of the offending entry in the input list.
        index: usize,
    },
}

/// A persistence failure for a single placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sink error: {0}")]
pub struct SinkError(pub String);

impl SinkError {
    /// Creates a sink error from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors converting a wire record into a placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// `date` is not one of Monday..Saturday.
    #[error("unknown day: {0}")]
    UnknownDay(String),

    /// `startTime` / `endTime` is not of the form `H:MM`.
    #[error("invalid time: {0}")]
    InvalidTime(String),
}
