//! Integer conversion utilities
//!
//! Explicit conversions between `UInt<N>` and the native unsigned integer
//! types, split into one submodule per native width.
//!
//! Each submodule follows the same rules:
//! - explicit little-endian placement, byte 0 least significant
//! - `From<native>` never fails: a source wider than `N` bytes is
//!   truncated, matching the resize semantics used everywhere else
//! - `TryFrom<UInt<N>>` fails when high-order bytes beyond the native
//!   width are set
//!
//! Cross-width conversion between `UInt` values goes through
//! [`UInt::resize`](crate::uint::UInt::resize), not through these impls.

mod u8;
mod u16;
mod u32;
mod u64;
mod u128;

use crate::uint::UInt;

/// Wraps raw little-endian bytes without copying.
impl<const N: usize> From<[u8; N]> for UInt<N> {
    fn from(bs: [u8; N]) -> Self {
        UInt(bs)
    }
}

/// Unwraps the raw little-endian bytes.
impl<const N: usize> From<UInt<N>> for [u8; N] {
    fn from(value: UInt<N>) -> Self {
        value.0
    }
}
