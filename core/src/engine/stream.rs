//! engine/stream.rs
//! `std::io` drivers that keep memory bounded by the configured chunk size.
use std::io::{Read, Write};

use bytes::Bytes;
use tracing::debug;

use crate::compression::{CodecError, CompressionLevel};
use crate::config::EngineConfig;
use crate::engine::compressor::Compressor;
use crate::engine::decompressor::Decompressor;
use crate::engine::region::{InputRegion, OutputRegion};
use crate::engine::types::SessionError;
use crate::types::StreamError;

#[inline]
/// Summary: Decompress data read from R in chunk_size blocks, yielding decompressed chunks.
/// - Input the codec did not consume is re-submitted before reading more.
/// - Each yielded chunk is at most chunk_size bytes.
/// - Yields an error (then stops) if R ends before the compressed stream does,
///   or if `decompressor` is not fresh.
pub fn decompress_stream<R: Read>(
    mut r: R,
    chunk_size: usize,
    mut decompressor: Decompressor,
) -> impl Iterator<Item = Result<Bytes, StreamError>> {
    let chunk_size = chunk_size.max(1);
    let mut read_buf = vec![0u8; chunk_size];
    let mut pending: Vec<u8> = Vec::with_capacity(chunk_size);
    let mut consumed_total = 0usize;
    let mut eof = false;
    let mut done = false;
    let mut rejected = decompressor.ensure_fresh().err();

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        if let Some(e) = rejected.take() {
            done = true;
            return Some(Err(e.into()));
        }
        loop {
            if decompressor.is_complete() {
                done = true;
                return None;
            }

            if pending.is_empty() && !eof {
                match r.read(&mut read_buf) {
                    Ok(0) => eof = true,
                    Ok(n) => pending.extend_from_slice(&read_buf[..n]),
                    Err(e) => {
                        done = true;
                        return Some(Err(StreamError::Io(e)));
                    }
                }
            }

            let mut out = vec![0u8; chunk_size];
            let step = OutputRegion::new(&mut out)
                .and_then(|output| decompressor.decompress(InputRegion::new(&pending), output));
            match step {
                Ok(outcome) => {
                    pending.drain(..outcome.consumed);
                    consumed_total += outcome.consumed;
                    if outcome.produced > 0 {
                        out.truncate(outcome.produced);
                        return Some(Ok(Bytes::from(out)));
                    }
                }
                // Reader exhausted and nothing pending in the codec.
                Err(SessionError::Processing { source: CodecError::NoProgress { .. }, .. })
                    if eof && pending.is_empty() =>
                {
                    done = true;
                    return Some(Err(SessionError::Truncated { consumed: consumed_total }.into()));
                }
                Err(e) => {
                    done = true;
                    return Some(Err(e.into()));
                }
            }
        }
    })
}

/// Decompress everything `reader` yields into `writer`. Returns bytes written.
pub fn copy_decompressed<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    config: &EngineConfig,
) -> Result<u64, StreamError> {
    config.validate()?;
    let decompressor = Decompressor::with_config(config.clone())?;

    let mut written = 0u64;
    for chunk in decompress_stream(reader, config.chunk_size(), decompressor) {
        let chunk = chunk?;
        writer.write_all(&chunk)?;
        written += chunk.len() as u64;
    }
    writer.flush()?;
    debug!(written, "decompressed stream copied");
    Ok(written)
}

/// Compress `input` as one zlib stream, writing each produced block to
/// `writer` as soon as it is available. Output memory stays at one chunk.
///
/// Compression always finishes, so the whole payload has to be supplied
/// here; there is no incremental compress-from-reader driver.
pub fn compress_to_writer<W: Write>(
    input: &[u8],
    mut writer: W,
    level: CompressionLevel,
    config: &EngineConfig,
) -> Result<u64, StreamError> {
    config.validate()?;
    let mut compressor = Compressor::with_config(level, config.clone())?;
    let mut out = vec![0u8; config.chunk_size()];

    let mut consumed = 0usize;
    let mut written = 0u64;
    while !compressor.is_complete() {
        let outcome = compressor.compress(
            InputRegion::new(&input[consumed..]),
            OutputRegion::new(&mut out)?,
        )?;
        consumed += outcome.consumed;
        writer.write_all(&out[..outcome.produced])?;
        written += outcome.produced as u64;
    }
    compressor.close()?;
    writer.flush()?;
    debug!(consumed, written, "compressed stream written");
    Ok(written)
}
