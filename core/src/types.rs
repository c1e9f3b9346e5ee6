use std::io;
use crate::{
    compression::CodecError,
    engine::SessionError,
};


/// Unified stream error covering I/O, codec, session and generic validation.
/// - Ergonomic `From<T>` impls enable `?` across the drivers.
/// - Messages aim to be stable and contextual for logs.
#[derive(Debug)]
pub enum StreamError {
    /// I/O error from a reader or writer driving the engine.
    Io(io::Error),

    /// Codec-level error raised outside of a session.
    Codec(CodecError),

    /// Session lifecycle or processing error.
    Session(SessionError),

    /// Generic high-level validation with a descriptive message.
    Validation(String),
}

impl std::fmt::Display for StreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamError::Io(e) => write!(f, "I/O error: {}", e),
            StreamError::Codec(e) => write!(f, "codec error: {}", e),
            StreamError::Session(e) => write!(f, "session error: {}", e),
            StreamError::Validation(msg) => write!(f, "validation error: {}", msg),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Io(e) => Some(e),
            StreamError::Codec(e) => Some(e),
            StreamError::Session(e) => Some(e),
            StreamError::Validation(_) => None,
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(e: io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl From<CodecError> for StreamError {
    fn from(e: CodecError) -> Self {
        StreamError::Codec(e)
    }
}

impl From<SessionError> for StreamError {
    fn from(e: SessionError) -> Self {
        StreamError::Session(e)
    }
}
