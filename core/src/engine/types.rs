//! engine/types.rs
//! Session lifecycle states, step outcomes and the session error taxonomy.
use std::fmt;
use thiserror::Error;

use crate::compression::{CodecError, Mode};

/// Lifecycle of one session.
///
/// `Closed` is only ever observed through the handle registry; a typed
/// `Session` is consumed by `close`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Completed,
    Failed,
    Closed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Active    => "active",
            SessionState::Completed => "completed",
            SessionState::Failed    => "failed",
            SessionState::Closed    => "closed",
        };
        f.write_str(name)
    }
}

/// Result of one successful step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Bytes written into the output region.
    pub produced: usize,
    /// Bytes taken from the input region.
    pub consumed: usize,
    /// The codec reached the natural end of the stream.
    pub completed: bool,
}

/// Opaque caller-facing session handle. Never zero, never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionHandle(pub(crate) u64);

impl SessionHandle {
    pub fn as_raw(self) -> u64 {
        self.0
    }

    pub fn from_raw(raw: u64) -> Self {
        SessionHandle(raw)
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Coarse classification of a `SessionError`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The codec context could not be constructed.
    Initialization,
    /// The codec rejected input or could not progress.
    Processing,
    /// The finalizer reported a non-clean shutdown.
    Finalization,
    /// The caller broke the session contract.
    Contract,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{mode} session could not be initialized: {source}")]
    Initialization { mode: Mode, source: CodecError },

    #[error("{mode} step failed: {source}")]
    Processing { mode: Mode, source: CodecError },

    #[error("{mode} session did not shut down cleanly: {source}")]
    Finalization { mode: Mode, source: CodecError },

    #[error("input ended before the compressed stream was complete ({consumed} bytes consumed)")]
    Truncated { consumed: usize },

    #[error("{mode} session already reached end of stream")]
    AlreadyCompleted { mode: Mode },

    #[error("{mode} session is in the middle of a stream; reset it first")]
    StreamInProgress { mode: Mode },

    #[error("{mode} session failed earlier and must be abandoned")]
    Failed { mode: Mode },

    #[error("output region has zero capacity")]
    EmptyOutput,

    #[error("no input provided")]
    NoInput,

    #[error("invalid engine configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("unknown session mode: {raw}")]
    UnknownMode { raw: String },

    #[error("invalid or closed session handle {handle}")]
    InvalidHandle { handle: SessionHandle },
}

impl SessionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Initialization { .. }
            | SessionError::UnknownMode { .. }
            | SessionError::InvalidConfig { .. } => ErrorKind::Initialization,
            SessionError::Processing { .. } | SessionError::Truncated { .. } => ErrorKind::Processing,
            SessionError::Finalization { .. } => ErrorKind::Finalization,
            SessionError::AlreadyCompleted { .. }
            | SessionError::StreamInProgress { .. }
            | SessionError::Failed { .. }
            | SessionError::EmptyOutput
            | SessionError::NoInput
            | SessionError::InvalidHandle { .. } => ErrorKind::Contract,
        }
    }
}
