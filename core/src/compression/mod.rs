//! compression/mod.rs
//! External codec seam.
//!
//! The engine never compresses anything itself. It drives a `Codec` through
//! init, repeated steps and finalize; this module defines that contract and
//! provides the zlib implementation on top of flate2.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use registry::*;
