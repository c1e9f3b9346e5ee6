//! compression/types.rs
//! Codec-facing types: mode, flush policy, levels, status codes and the `Codec` seam.
use std::fmt;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::constants::{levels, mode_ids, strategies, DEFAULT_LEVEL_DEFLATE};

/// Direction of a stream.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum Mode {
    Compress   = mode_ids::COMPRESS,
    Decompress = mode_ids::DECOMPRESS,
}

impl Mode {
    /// Flush policy for every step in this mode.
    ///
    /// Compression always finishes: each call asks the codec to emit final
    /// output, so a compress session is single-shot (or final-chunk) only.
    /// Decompression always partially flushes so a not-yet-complete stream
    /// can be fed in chunks.
    pub fn flush_mode(self) -> FlushMode {
        match self {
            Mode::Compress   => FlushMode::Finish,
            Mode::Decompress => FlushMode::Partial,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Compress   => f.write_str("compress"),
            Mode::Decompress => f.write_str("decompress"),
        }
    }
}

/// How eagerly the codec emits output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlushMode {
    /// Emit whatever is available without finalizing the stream.
    Partial,
    /// Force end-of-stream finalization.
    Finish,
}

/// Compression level: a 0..=9 scale or the codec default.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionLevel {
    Default,
    Level(u32),
}

impl CompressionLevel {
    pub const NONE: CompressionLevel = CompressionLevel::Level(levels::NO_COMPRESSION as u32);
    pub const FASTEST: CompressionLevel = CompressionLevel::Level(levels::BEST_SPEED as u32);
    pub const BEST: CompressionLevel = CompressionLevel::Level(levels::BEST_COMPRESSION as u32);

    /// Parse a raw zlib level. `-1` selects the default; anything outside
    /// `-1..=9` is rejected.
    pub fn from_raw(raw: i32) -> Result<Self, CodecError> {
        match raw {
            levels::DEFAULT_COMPRESSION => Ok(CompressionLevel::Default),
            levels::NO_COMPRESSION..=levels::BEST_COMPRESSION => Ok(CompressionLevel::Level(raw as u32)),
            _ => Err(CodecError::InvalidLevel { raw: raw as i64 }),
        }
    }

    /// Check an already-typed level (a `Level(n)` may still be out of range).
    pub fn validate(self) -> Result<Self, CodecError> {
        match self {
            CompressionLevel::Level(n) if n > levels::BEST_COMPRESSION as u32 => {
                Err(CodecError::InvalidLevel { raw: n as i64 })
            }
            other => Ok(other),
        }
    }

    /// Effective numeric level handed to the codec.
    pub fn effective(self) -> u32 {
        match self {
            CompressionLevel::Default  => DEFAULT_LEVEL_DEFLATE,
            CompressionLevel::Level(n) => n,
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Default
    }
}

/// Deflate match-finding strategy. Only consulted for compression.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum CompressionStrategy {
    Default     = strategies::DEFAULT,
    Filtered    = strategies::FILTERED,
    HuffmanOnly = strategies::HUFFMAN_ONLY,
    Rle         = strategies::RLE,
    Fixed       = strategies::FIXED,
}

impl CompressionStrategy {
    pub const ALL: [CompressionStrategy; 5] = [
        CompressionStrategy::Default,
        CompressionStrategy::Filtered,
        CompressionStrategy::HuffmanOnly,
        CompressionStrategy::Rle,
        CompressionStrategy::Fixed,
    ];

    /// Parse a raw zlib strategy (`0..=4`).
    pub fn from_raw(raw: i32) -> Result<Self, CodecError> {
        Self::try_from(raw).map_err(|_| CodecError::InvalidStrategy { raw: raw as i64 })
    }
}

impl Default for CompressionStrategy {
    fn default() -> Self {
        CompressionStrategy::Default
    }
}

/// Non-error outcomes of one codec step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CodecStatus {
    /// Progress was made; more calls are needed.
    Ok,
    /// The codec reached the natural end of the stream.
    StreamEnd,
}

/// What one codec step did to the supplied buffers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodecReport {
    pub status: CodecStatus,
    pub consumed: usize,
    pub produced: usize,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid compression level: {raw} (expected -1 or 0..=9)")]
    InvalidLevel { raw: i64 },

    #[error("invalid compression strategy: {raw} (expected 0..=4)")]
    InvalidStrategy { raw: i64 },

    #[error("codec {codec} init failed: {msg}")]
    InitFailed { codec: &'static str, msg: String },

    #[error("codec {codec} process failed: {msg}")]
    ProcessFailed { codec: &'static str, msg: String },

    #[error("codec {codec} could make no progress (input exhausted or output full)")]
    NoProgress { codec: &'static str },

    #[error("codec {codec} finalize failed: {msg}")]
    FinalizeFailed { codec: &'static str, msg: String },
}

/// External codec collaborator.
///
/// One value owns one codec context. `step` binds the caller's buffers for
/// the duration of the call only; `finalize` is called exactly once before
/// the context is released.
pub trait Codec: Send {
    /// Short codec name for logs and errors.
    fn name(&self) -> &'static str;

    /// Run the codec's processing primitive once over `input` into `output`.
    fn step(&mut self, input: &[u8], output: &mut [u8], flush: FlushMode) -> Result<CodecReport, CodecError>;

    /// Report whether the context shut down cleanly.
    fn finalize(&mut self) -> Result<(), CodecError>;

    /// Return the context to its freshly initialized state.
    fn reset(&mut self);
}
