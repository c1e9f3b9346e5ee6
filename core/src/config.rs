//! config.rs
//! Knobs for the whole-buffer and `std::io` drivers.
//!
//! The engine itself has no configuration: flush policy is fixed by mode and
//! buffer sizes come from the caller's regions. These settings only shape how
//! the convenience drivers size the regions they hand to the engine.

use crate::constants::{ASSUMED_COMPRESSION_FACTOR, MAX_CHUNK_SIZE, MIN_WRITABLE};
use crate::types::StreamError;
use crate::utils::resolve_chunk_size;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Read / write block size for the stream drivers.
    /// - `None` → `DEFAULT_CHUNK_SIZE`.
    pub chunk_size: Option<usize>,

    /// Minimum spare output bytes per step in the whole-buffer drivers.
    pub min_writable: usize,

    /// Expected ratio between plain and compressed sizes, used to pre-size
    /// driver output buffers.
    pub assumed_ratio: usize,

    /// Whether sessions record stage timings. Counters are always kept.
    pub collect_metrics: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            chunk_size: None,
            min_writable: MIN_WRITABLE,
            assumed_ratio: ASSUMED_COMPRESSION_FACTOR,
            collect_metrics: false,
        }
    }
}

impl EngineConfig {
    pub fn new(chunk_size: Option<usize>, collect_metrics: Option<bool>) -> Self {
        Self {
            chunk_size,
            collect_metrics: collect_metrics.unwrap_or(false),
            ..Self::default()
        }
    }

    pub fn with_metrics_enabled() -> Self {
        Self { collect_metrics: true, ..Self::default() }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Effective chunk size after defaults and clamping.
    pub fn chunk_size(&self) -> usize {
        resolve_chunk_size(self.chunk_size)
    }

    pub fn validate(&self) -> Result<(), StreamError> {
        if let Some(size) = self.chunk_size {
            if size > MAX_CHUNK_SIZE {
                return Err(StreamError::Validation(format!(
                    "chunk size too large: {} > {}", size, MAX_CHUNK_SIZE
                )));
            }
        }
        if self.min_writable == 0 {
            return Err(StreamError::Validation("min_writable must be non-zero".into()));
        }
        if self.assumed_ratio == 0 {
            return Err(StreamError::Validation("assumed_ratio must be non-zero".into()));
        }
        Ok(())
    }
}
