//! compression/registry.rs
//! Codec factory: resolves a mode (and compression parameters) to an
//! initialized codec context.

use crate::compression::codecs::deflate::{DeflateCodec, InflateCodec};
use crate::compression::types::{Codec, CodecError, CompressionLevel, CompressionStrategy, Mode};

/// Initialize a codec context for `mode`.
///
/// `level` and `strategy` are only consulted for compression; the level must
/// be `Default` or `Level(0..=9)`. Decompression ignores both.
pub fn create_codec(
    mode: Mode,
    level: CompressionLevel,
    strategy: CompressionStrategy,
) -> Result<Box<dyn Codec>, CodecError> {
    match mode {
        Mode::Compress   => Ok(Box::new(DeflateCodec::new(level, strategy)?)),
        Mode::Decompress => Ok(Box::new(InflateCodec::new()?)),
    }
}
