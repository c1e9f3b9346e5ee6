//! engine/decompressor.rs
//! Decompression façade over `Session`.

use crate::compression::{CodecError, CompressionLevel, Mode};
use crate::config::EngineConfig;
use crate::engine::region::{InputRegion, OutputRegion};
use crate::engine::session::Session;
use crate::engine::status::StatusRegister;
use crate::engine::types::{SessionError, StepOutcome};
use crate::telemetry::TelemetrySnapshot;
use crate::utils::grow;

/// A decompress-mode session. Input may arrive in arbitrary chunks.
#[derive(Debug)]
pub struct Decompressor {
    session: Session,
    config: EngineConfig,
}

impl Decompressor {
    pub fn new() -> Result<Self, SessionError> {
        Self::with_config(EngineConfig::default())
    }

    /// # Errors
    /// - `InvalidConfig` if `config` does not validate
    pub fn with_config(config: EngineConfig) -> Result<Self, SessionError> {
        config
            .validate()
            .map_err(|e| SessionError::InvalidConfig { reason: e.to_string() })?;
        let session = Session::with_config(Mode::Decompress, CompressionLevel::Default, &config)?;
        Ok(Self { session, config })
    }

    pub fn decompress(&mut self, input: InputRegion<'_>, output: OutputRegion<'_>) -> Result<StepOutcome, SessionError> {
        self.session.step(input, output)
    }

    /// Decompress one complete zlib stream from the front of `compressed`.
    ///
    /// Returns how many bytes of `compressed` belonged to the stream together
    /// with the decompressed bytes; anything after the end of the stream is
    /// left unconsumed. The session is reset afterwards.
    ///
    /// # Errors
    /// - `StreamInProgress` / `AlreadyCompleted` / `Failed` unless the
    ///   decompressor is fresh
    /// - `NoInput` for an empty slice
    /// - `Truncated` if `compressed` ends before the stream does
    /// - `Processing` for corrupt data
    pub fn decompress_all(&mut self, compressed: &[u8]) -> Result<(usize, Vec<u8>), SessionError> {
        self.session.ensure_fresh()?;
        if compressed.is_empty() {
            return Err(SessionError::NoInput);
        }

        let writable = self.config.min_writable;
        let mut out = Vec::with_capacity(compressed.len().saturating_mul(self.config.assumed_ratio));
        let mut consumed = 0;

        while !self.session.is_complete() {
            grow(&mut out, writable);
            let start = out.len();
            out.resize(out.capacity(), 0);

            let step = self.session.step(
                InputRegion::new(&compressed[consumed..]),
                OutputRegion::new(&mut out[start..])?,
            );
            let outcome = match step {
                Ok(outcome) => outcome,
                // Nothing left to feed and nothing pending in the codec.
                Err(SessionError::Processing { source: CodecError::NoProgress { .. }, .. })
                    if consumed == compressed.len() =>
                {
                    return Err(SessionError::Truncated { consumed });
                }
                Err(e) => return Err(e),
            };
            consumed += outcome.consumed;
            out.truncate(start + outcome.produced);
        }

        self.session.reset();
        Ok((consumed, out))
    }

    pub(crate) fn ensure_fresh(&mut self) -> Result<(), SessionError> {
        self.session.ensure_fresh()
    }

    pub fn reset(&mut self) {
        self.session.reset()
    }

    pub fn close(self) -> Result<(), SessionError> {
        self.session.close()
    }

    pub fn status(&self) -> &StatusRegister {
        self.session.status()
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn telemetry(&self) -> TelemetrySnapshot {
        self.session.telemetry()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
