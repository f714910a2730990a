//! Fixed-width unsigned integer primitives for binary document formats
//!
//! This crate provides exact, overflow-defined unsigned integers wider than
//! native machine words, stored as little-endian byte buffers of a fixed
//! length. It exists to back a binary document/serialization format whose
//! field values need 128-, 256-, and 512-bit (and caller-sized) integers
//! with precisely specified wraparound semantics.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on big-integer performance. All arithmetic is modular: results that
//! do not fit the fixed width are truncated, never signalled. Widths are
//! fixed at construction and never grow.
//!
//! # Module overview
//!
//! - `engine`
//!   The byte-level arithmetic engine: resize/compare/zero-test primitives,
//!   shifts crossing byte boundaries, bitwise logic, carry/borrow add and
//!   subtract, schoolbook multiplication, bit-by-bit long division, and
//!   base-2/10/16 string conversion. Every width-specific type is a thin
//!   facade over this one engine.
//!
//! - `uint`
//!   `UInt<const N: usize>`, the fixed-width wrapper over `[u8; N]`, with
//!   the aliases `UInt128`, `UInt256`, and `UInt512`. Value semantics:
//!   every arithmetic operation returns a new value and leaves its
//!   operands untouched.
//!
//! - `uintvar`
//!   `UIntVar`, the heap-backed variant whose byte length is chosen by the
//!   caller at construction and fixed thereafter.
//!
//! # Design goals
//!
//! - No dependencies in the core types
//! - Minimal and explicit APIs
//! - Stable, well-defined modular semantics
//! - Errors for malformed input and zero divisors, silence for wraparound
//!
//! This crate is not a general-purpose bignum library: values never resize
//! during arithmetic, there are no signed representations, and no attempt
//! is made to compete with tuned multi-precision implementations.

pub mod engine;
pub mod uint;
pub mod uintvar;

pub use engine::NumericError;
pub use uint::{UInt, UInt128, UInt256, UInt512};
pub use uintvar::UIntVar;
