//! Deflate (zlib wrapper) codec contexts.
//!
//! `DeflateCodec` drives miniz_oxide's compressor directly so the strategy
//! can be applied; `InflateCodec` uses flate2's low-level `Decompress`. Both
//! map their status codes onto `CodecReport` / `CodecError` and never buffer
//! caller data.

use flate2::{Decompress, FlushDecompress, Status};
use miniz_oxide::deflate::core::{create_comp_flags_from_zip_params, CompressorOxide};
use miniz_oxide::{MZError, MZFlush, MZStatus, MZ_DEFAULT_WINDOW_BITS};

use crate::compression::types::{
    Codec, CodecError, CodecReport, CodecStatus, CompressionLevel, CompressionStrategy, FlushMode,
};

const DEFLATE: &str = "deflate";
const INFLATE: &str = "inflate";

pub struct DeflateCodec {
    inner: Box<CompressorOxide>,
    started: bool,
    finished: bool,
}

impl DeflateCodec {
    pub fn new(level: CompressionLevel, strategy: CompressionStrategy) -> Result<Self, CodecError> {
        let level = level.validate()?;
        // Positive window bits select the zlib header and adler32 trailer.
        let flags = create_comp_flags_from_zip_params(
            level.effective() as i32,
            MZ_DEFAULT_WINDOW_BITS,
            strategy as i32,
        );
        Ok(Self {
            inner: Box::new(CompressorOxide::new(flags)),
            started: false,
            finished: false,
        })
    }
}

impl Codec for DeflateCodec {
    fn name(&self) -> &'static str {
        DEFLATE
    }

    fn step(&mut self, input: &[u8], output: &mut [u8], flush: FlushMode) -> Result<CodecReport, CodecError> {
        let flush = match flush {
            FlushMode::Partial => MZFlush::Partial,
            FlushMode::Finish  => MZFlush::Finish,
        };
        let result = miniz_oxide::deflate::stream::deflate(&mut self.inner, input, output, flush);
        self.started = true;

        let status = match result.status {
            Ok(MZStatus::StreamEnd) => CodecStatus::StreamEnd,
            Ok(_)                   => CodecStatus::Ok,
            Err(MZError::Buf)       => return Err(CodecError::NoProgress { codec: DEFLATE }),
            Err(e) => {
                return Err(CodecError::ProcessFailed { codec: DEFLATE, msg: format!("{:?}", e) });
            }
        };
        if status == CodecStatus::StreamEnd {
            self.finished = true;
        }
        Ok(CodecReport {
            status,
            consumed: result.bytes_consumed,
            produced: result.bytes_written,
        })
    }

    fn finalize(&mut self) -> Result<(), CodecError> {
        // Mirrors deflateEnd: a stream that was started but never finished
        // discarded pending input or output.
        if self.started && !self.finished {
            return Err(CodecError::FinalizeFailed {
                codec: DEFLATE,
                msg: "stream released before it finished".into(),
            });
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.started = false;
        self.finished = false;
    }
}

pub struct InflateCodec {
    inner: Decompress,
}

impl InflateCodec {
    pub fn new() -> Result<Self, CodecError> {
        Ok(Self { inner: Decompress::new(true) })
    }
}

impl Codec for InflateCodec {
    fn name(&self) -> &'static str {
        INFLATE
    }

    fn step(&mut self, input: &[u8], output: &mut [u8], flush: FlushMode) -> Result<CodecReport, CodecError> {
        let flush = match flush {
            FlushMode::Partial => FlushDecompress::Sync,
            FlushMode::Finish  => FlushDecompress::Finish,
        };
        let (in_before, out_before) = (self.inner.total_in(), self.inner.total_out());

        let status = self.inner
            .decompress(input, output, flush)
            .map_err(|e| CodecError::ProcessFailed { codec: INFLATE, msg: e.to_string() })?;

        let status = match status {
            Status::Ok        => CodecStatus::Ok,
            Status::StreamEnd => CodecStatus::StreamEnd,
            Status::BufError  => return Err(CodecError::NoProgress { codec: INFLATE }),
        };
        Ok(CodecReport {
            status,
            consumed: (self.inner.total_in() - in_before) as usize,
            produced: (self.inner.total_out() - out_before) as usize,
        })
    }

    fn finalize(&mut self) -> Result<(), CodecError> {
        Ok(())
    }

    fn reset(&mut self) {
        self.inner.reset(true);
    }
}
