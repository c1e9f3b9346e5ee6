//! engine/compressor.rs
//! Compression façade over `Session`.

use crate::compression::{CompressionLevel, CompressionStrategy, Mode};
use crate::config::EngineConfig;
use crate::engine::region::{InputRegion, OutputRegion};
use crate::engine::session::Session;
use crate::engine::status::StatusRegister;
use crate::engine::types::{SessionError, StepOutcome};
use crate::telemetry::TelemetrySnapshot;
use crate::utils::grow;

/// A compress-mode session.
///
/// Every call finishes the stream: compression is single-shot or
/// final-chunk only. Feed the whole payload (re-submitting whatever was not
/// consumed) until `completed` is reported.
#[derive(Debug)]
pub struct Compressor {
    session: Session,
    config: EngineConfig,
}

impl Compressor {
    pub fn new(level: CompressionLevel) -> Result<Self, SessionError> {
        Self::with_config(level, EngineConfig::default())
    }

    /// Parse a raw zlib level (`-1` for default, `0..=9`) and create a compressor.
    pub fn from_raw_level(level: i32) -> Result<Self, SessionError> {
        let level = CompressionLevel::from_raw(level)
            .map_err(|source| SessionError::Initialization { mode: Mode::Compress, source })?;
        Self::new(level)
    }

    /// Parse a raw zlib level and strategy (`0..=4`) and create a compressor.
    pub fn from_raw_strategy(level: i32, strategy: i32) -> Result<Self, SessionError> {
        let init = |source| SessionError::Initialization { mode: Mode::Compress, source };
        let level = CompressionLevel::from_raw(level).map_err(init)?;
        let strategy = CompressionStrategy::from_raw(strategy).map_err(init)?;
        Self::with_strategy(level, strategy)
    }

    pub fn with_strategy(level: CompressionLevel, strategy: CompressionStrategy) -> Result<Self, SessionError> {
        Self::with_options(level, strategy, EngineConfig::default())
    }

    pub fn with_config(level: CompressionLevel, config: EngineConfig) -> Result<Self, SessionError> {
        Self::with_options(level, CompressionStrategy::Default, config)
    }

    /// # Errors
    /// - `InvalidConfig` if `config` does not validate
    /// - `Initialization` if the codec could not be set up
    pub fn with_options(
        level: CompressionLevel,
        strategy: CompressionStrategy,
        config: EngineConfig,
    ) -> Result<Self, SessionError> {
        config
            .validate()
            .map_err(|e| SessionError::InvalidConfig { reason: e.to_string() })?;
        let session = Session::with_strategy(Mode::Compress, level, strategy, &config)?;
        Ok(Self { session, config })
    }

    pub fn compress(&mut self, input: InputRegion<'_>, output: OutputRegion<'_>) -> Result<StepOutcome, SessionError> {
        self.session.step(input, output)
    }

    /// Compress all of `input` into a new zlib stream, then reset so the
    /// compressor can be reused for the next payload.
    ///
    /// The compressor must be fresh: a stream already started through
    /// `compress` is rejected rather than extended or skipped. On error the
    /// session is left failed; call `reset` to reuse it.
    pub fn compress_all(&mut self, input: &[u8]) -> Result<Vec<u8>, SessionError> {
        self.session.ensure_fresh()?;
        let writable = self.config.min_writable;
        let mut out = Vec::with_capacity(input.len() / self.config.assumed_ratio + writable);
        let mut consumed = 0;

        while !self.session.is_complete() {
            grow(&mut out, writable);
            let start = out.len();
            out.resize(out.capacity(), 0);

            let outcome = self.session.step(
                InputRegion::new(&input[consumed..]),
                OutputRegion::new(&mut out[start..])?,
            )?;
            consumed += outcome.consumed;
            out.truncate(start + outcome.produced);
        }

        self.session.reset();
        Ok(out)
    }

    pub fn reset(&mut self) {
        self.session.reset()
    }

    pub fn close(self) -> Result<(), SessionError> {
        self.session.close()
    }

    pub fn level(&self) -> CompressionLevel {
        self.session.level()
    }

    pub fn strategy(&self) -> CompressionStrategy {
        self.session.strategy()
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
