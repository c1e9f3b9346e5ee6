//! chunkz-core
//!
//! Bounded, restartable zlib streaming.
//! The caller owns every buffer; the engine only borrows them for one step.
//!
//! ```rust,no_run
//! use chunkz_core::prelude::*;
//!
//! let mut compressor = Compressor::new(CompressionLevel::Default).unwrap();
//! let packed = compressor.compress_all(b"hello, world").unwrap();
//!
//! let mut decompressor = Decompressor::new().unwrap();
//! let (_, plain) = decompressor.decompress_all(&packed).unwrap();
//! assert_eq!(plain, b"hello, world");
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

// External codec seam
pub mod compression;
pub mod telemetry;

// Stream engine
pub mod engine;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{CompressionLevel, CompressionStrategy, FlushMode, Mode};
    pub use crate::config::EngineConfig;
    pub use crate::engine::{
        Compressor, Decompressor, ErrorKind, InputRegion, OutputRegion, Session, SessionError,
        SessionHandle, SessionRegistry, SessionState, StatusRegister, StepOutcome,
    };
    pub use crate::telemetry::TelemetrySnapshot;
    pub use crate::types::StreamError;
}
