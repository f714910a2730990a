//! Byte-buffer arithmetic engine
//!
//! This module implements multi-precision unsigned arithmetic directly on
//! little-endian byte buffers (`byte 0` = least significant). It is the
//! single implementation shared by every fixed-width wrapper type; the
//! wrappers contribute buffer sizing and nothing else.
//!
//! The engine is stateless and purely synchronous. Functions either mutate
//! a buffer explicitly passed by the caller (shifts, bitwise logic,
//! add/sub/multiply) or allocate fresh output (division, resize, string
//! conversion). Nothing here retains state across calls, so concurrent use
//! on disjoint buffers needs no synchronization.
//!
//! Operand lengths are checked defensively: binary operations on buffers of
//! unequal length return [`NumericError::LengthMismatch`] rather than
//! combining bytes at arbitrary offsets. Arithmetic overflow is never an
//! error — add, subtract, and multiply wrap modulo 2^(8N) by contract.

mod arith;
mod bitwise;
mod bytes;
mod divide;
mod error;
mod radix;

pub use arith::{add, multiply, sub};
pub use bitwise::{and, left_shift, not, or, right_shift, xor};
pub use bytes::{compare, copy_into, is_zero, resize};
pub use divide::div_rem;
pub use error::NumericError;
pub use radix::{
    binary_string_to_bytes, decimal_string_to_bytes, format, hex_string_to_bytes, parse,
    to_binary_string, to_decimal_string, to_hex_string,
};

pub(crate) use arith::{add_unchecked, multiply_unchecked, sub_unchecked};
pub(crate) use bitwise::{and_unchecked, or_unchecked, xor_unchecked};
pub(crate) use bytes::compare_unchecked;
pub(crate) use divide::div_rem_unchecked;
