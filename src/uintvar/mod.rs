//! Variable-length unsigned integer wrapper
//!
//! `UIntVar` is the heap-backed sibling of `UInt<N>`: the byte length is
//! chosen by the caller at construction instead of by the type, and stays
//! fixed for the lifetime of the value. It serves document fields whose
//! width is only known at run time.
//!
//! Because two `UIntVar`s may disagree in length, every binary operation
//! is fallible and reports `LengthMismatch` defensively instead of
//! combining bytes at arbitrary offsets.

mod core;

pub use core::UIntVar;
