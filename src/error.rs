//! Error types shared across the quiz flow.

use thiserror::Error;

/// Errors raised while talking to the remote question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("question bank request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("question bank rejected the request (response code {code}: {reason})")]
    ResponseCode { code: u8, reason: &'static str },
    #[error("question bank returned no questions")]
    Empty,
    #[error("fetch worker stopped before delivering questions")]
    WorkerGone,
    #[error("could not start fetch worker: {0}")]
    Worker(#[from] std::io::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors raised while building a session.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    NoQuestions,
}

/// A transition that is not legal from the current phase.
///
/// The session is left untouched whenever one of these is returned.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum TransitionError {
    #[error("question {0} has already been answered")]
    AlreadyAnswered(usize),
    #[error("question {0} has not been answered yet")]
    NotAnswered(usize),
    #[error("session already concluded")]
    Concluded,
}

/// Errors raised between quiz entry and the first question.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EntryError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
