//! compression/codecs/mod.rs
//! Concrete codec contexts behind the `Codec` seam.

pub mod deflate;

pub use deflate::*;
