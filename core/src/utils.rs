use std::fmt;
use num_enum::TryFromPrimitive;

use crate::constants::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Make sure `buf` has at least `n` bytes of spare capacity.
pub fn grow(buf: &mut Vec<u8>, n: usize) {
    let spare = buf.capacity() - buf.len();
    if spare < n {
        buf.reserve(n);
    }
}

/// Resolve an optional chunk size: `None` and `0` fall back to the default,
/// anything above `MAX_CHUNK_SIZE` is clamped.
pub fn resolve_chunk_size(requested: Option<usize>) -> usize {
    match requested {
        None | Some(0) => DEFAULT_CHUNK_SIZE,
        Some(size) => size.min(MAX_CHUNK_SIZE),
    }
}
