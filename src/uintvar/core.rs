//! Core definition of the variable-length integer type

use crate::engine::{self, NumericError};
use crate::uint::UInt;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Not, Shl, Shr};

/// Unsigned integer over a caller-chosen number of little-endian bytes.
///
/// The length is fixed at construction and never changes as a side effect
/// of any operation; arithmetic wraps modulo 2^(8·len) exactly like the
/// fixed-width widths. Operations between values of different lengths
/// fail with [`NumericError::LengthMismatch`] — use [`UIntVar::resize`]
/// to reconcile widths explicitly first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UIntVar(pub(crate) Vec<u8>);

impl UIntVar {
    /// The zero value of the given byte length.
    pub fn new(len: usize) -> Self {
        UIntVar(vec![0u8; len])
    }

    /// The maximum value of the given byte length (all bytes `0xFF`).
    pub fn max(len: usize) -> Self {
        UIntVar(vec![0xFFu8; len])
    }

    /// Parses a string of digits in the given base (2, 10, or 16) into a
    /// value of `len` bytes.
    ///
    /// Values wider than `len` bytes are silently truncated. Fails with
    /// [`NumericError::InvalidFormat`] on characters outside the base's
    /// digit alphabet and [`NumericError::UnsupportedBase`] for any other
    /// base.
    pub fn from_str_radix(s: &str, base: u32, len: usize) -> Result<Self, NumericError> {
        Ok(UIntVar(engine::parse(s, base, len)?))
    }

    /// Wraps raw little-endian bytes; the vector's length becomes the
    /// value's width.
    pub fn from_le_bytes(bs: Vec<u8>) -> Self {
        UIntVar(bs)
    }

    /// Borrows the raw little-endian bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns a copy of the raw little-endian bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }

    /// The fixed byte length of this value.
    pub fn byte_len(&self) -> usize {
        self.0.len()
    }

    /// Converts to another width: zero-extends when widening, truncates
    /// high-order bytes when narrowing.
    pub fn resize(&self, len: usize) -> Self {
        UIntVar(engine::resize(&self.0, len))
    }

    /// Overwrites the value in place with raw little-endian bytes.
    ///
    /// Fails with [`NumericError::LengthMismatch`] when `bs` does not
    /// match this value's length.
    pub fn set(&mut self, bs: &[u8]) -> Result<(), NumericError> {
        engine::copy_into(&mut self.0, bs)
    }

    /// Reports whether the value is zero.
    pub fn is_zero(&self) -> bool {
        engine::is_zero(&self.0)
    }

    /// Always `false`: the type has no signed interpretation.
    pub const fn is_signed(&self) -> bool {
        false
    }

    /// Counts the number of leading zero bits, scanning from the most
    /// significant byte.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter().rev() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Unsigned magnitude comparison.
    ///
    /// Fails with [`NumericError::LengthMismatch`] when the operands
    /// differ in length.
    pub fn compare(&self, other: &Self) -> Result<Ordering, NumericError> {
        engine::compare(&self.0, &other.0)
    }

    /// Sum modulo 2^(8·len), as a new value.
    pub fn add(&self, rhs: &Self) -> Result<Self, NumericError> {
        let mut out = self.0.clone();
        engine::add(&mut out, &rhs.0)?;
        Ok(UIntVar(out))
    }

    /// Difference modulo 2^(8·len), as a new value; `self < rhs` wraps
    /// two's-complement style.
    pub fn sub(&self, rhs: &Self) -> Result<Self, NumericError> {
        let mut out = self.0.clone();
        engine::sub(&mut out, &rhs.0)?;
        Ok(UIntVar(out))
    }

    /// Product modulo 2^(8·len), as a new value; the high half is
    /// discarded.
    pub fn multiply(&self, rhs: &Self) -> Result<Self, NumericError> {
        let mut out = self.0.clone();
        engine::multiply(&mut out, &rhs.0)?;
        Ok(UIntVar(out))
    }

    /// Quotient of unsigned long division, as a new value.
    ///
    /// Fails with [`NumericError::DivisionByZero`] when `rhs` is zero.
    pub fn divide(&self, rhs: &Self) -> Result<Self, NumericError> {
        let (quotient, _) = engine::div_rem(&self.0, &rhs.0)?;
        Ok(UIntVar(quotient))
    }

    /// Remainder of unsigned long division, as a new value.
    ///
    /// Fails with [`NumericError::DivisionByZero`] when `rhs` is zero.
    pub fn modulo(&self, rhs: &Self) -> Result<Self, NumericError> {
        let (_, remainder) = engine::div_rem(&self.0, &rhs.0)?;
        Ok(UIntVar(remainder))
    }

    /// Byte-wise OR, as a new value.
    pub fn bitor(&self, rhs: &Self) -> Result<Self, NumericError> {
        let mut out = self.0.clone();
        engine::or(&mut out, &rhs.0)?;
        Ok(UIntVar(out))
    }

    /// Byte-wise AND, as a new value.
    pub fn bitand(&self, rhs: &Self) -> Result<Self, NumericError> {
        let mut out = self.0.clone();
        engine::and(&mut out, &rhs.0)?;
        Ok(UIntVar(out))
    }

    /// Byte-wise XOR, as a new value.
    pub fn bitxor(&self, rhs: &Self) -> Result<Self, NumericError> {
        let mut out = self.0.clone();
        engine::xor(&mut out, &rhs.0)?;
        Ok(UIntVar(out))
    }

    /// Left shift with a caller-specified fill bit, as a new value.
    pub fn shl_fill(&self, bits: usize, fill: bool) -> Self {
        let mut out = self.0.clone();
        engine::left_shift(&mut out, bits, fill);
        UIntVar(out)
    }

    /// Right shift with a caller-specified fill bit, as a new value.
    pub fn shr_fill(&self, bits: usize, fill: bool) -> Self {
        let mut out = self.0.clone();
        engine::right_shift(&mut out, bits, fill);
        UIntVar(out)
    }

    /// Renders the value in the given base (2, 10, or 16).
    ///
    /// Fails with [`NumericError::UnsupportedBase`] for any other base.
    pub fn to_string_radix(&self, base: u32) -> Result<String, NumericError> {
        engine::format(&self.0, base)
    }
}

/// Bitwise complement of every byte.
impl Not for &UIntVar {
    type Output = UIntVar;

    fn not(self) -> Self::Output {
        let mut out = self.0.clone();
        engine::not(&mut out);
        UIntVar(out)
    }
}

/// Logical left shift with zero fill.
impl Shl<usize> for &UIntVar {
    type Output = UIntVar;

    fn shl(self, bits: usize) -> Self::Output {
        self.shl_fill(bits, false)
    }
}

/// Logical right shift with zero fill.
impl Shr<usize> for &UIntVar {
    type Output = UIntVar;

    fn shr(self, bits: usize) -> Self::Output {
        self.shr_fill(bits, false)
    }
}

impl Display for UIntVar {
    /// Formats the value as its decimal string.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&engine::to_decimal_string(&self.0))
    }
}

/// Captures a fixed-width value into a variable-length one of the same
/// width.
impl<const N: usize> From<&UInt<N>> for UIntVar {
    fn from(value: &UInt<N>) -> Self {
        UIntVar(value.0.to_vec())
    }
}

impl<const N: usize> UInt<N> {
    /// Converts a variable-length value into this width, zero-extending
    /// or truncating as needed.
    pub fn from_var(value: &UIntVar) -> Self {
        let bs = engine::resize(&value.0, N);

        let mut out = [0u8; N];
        out.copy_from_slice(&bs);

        UInt(out)
    }
}
