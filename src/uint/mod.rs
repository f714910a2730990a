//! Fixed-width unsigned integer wrappers
//!
//! This module defines `UInt<const N: usize>`, a value-semantics wrapper
//! over a little-endian `[u8; N]` buffer, together with the width aliases
//! used by the document format:
//!
//! - [`UInt128`] — 16 bytes
//! - [`UInt256`] — 32 bytes
//! - [`UInt512`] — 64 bytes
//!
//! Every width is the same thin facade over the byte-buffer engine; the
//! wrapper contributes buffer sizing and operator sugar, nothing more.
//! Arithmetic never mutates an operand: each operation works on an owned
//! scratch copy and returns a fresh value of the same width.

mod conv;
mod core;
mod ops;

pub use core::{UInt, UInt128, UInt256, UInt512};
