//! Core definition of the fixed-width integer type
//!
//! `UInt<N>` wraps a little-endian `[u8; N]` and forwards all arithmetic
//! to the byte-buffer engine. It is a **simple, explicit value type**, not
//! a growable big integer: the width is part of the type, results that
//! exceed it wrap modulo 2^(8N), and no operation ever resizes a value.
//!
//! The per-width construction dispatch of earlier designs is replaced by
//! one const-generic type plus [`UInt::resize`], which zero-extends or
//! truncates between widths explicitly.

use crate::engine::{self, NumericError};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Fixed-width unsigned integer over `N` little-endian bytes.
///
/// Byte 0 is the least significant. The representable range is
/// `0..2^(8N)`; all arithmetic wraps modulo 2^(8N).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UInt<const N: usize>(pub(crate) [u8; N]);

/// 128-bit unsigned integer.
pub type UInt128 = UInt<16>;

/// 256-bit unsigned integer.
pub type UInt256 = UInt<32>;

/// 512-bit unsigned integer.
pub type UInt512 = UInt<64>;

impl<const N: usize> UInt<N> {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; N]);

    /// The value one.
    pub const ONE: Self = Self::one_le();

    /// The maximum representable value (2^(8N) − 1).
    pub const MAX: Self = Self([255u8; N]);

    /// Returns the value one encoded in little-endian form.
    ///
    /// This is a `const` constructor suitable for use in constant contexts.
    pub const fn one_le() -> Self {
        let mut out = [0u8; N];
        out[0] = 1;
        UInt(out)
    }

    /// Parses a string of digits in the given base (2, 10, or 16).
    ///
    /// Values wider than `N` bytes are silently truncated to the low-order
    /// bits. Fails with [`NumericError::InvalidFormat`] on characters
    /// outside the base's digit alphabet and
    /// [`NumericError::UnsupportedBase`] for any other base.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, NumericError> {
        let bs = engine::parse(s, base, N)?;

        let mut out = [0u8; N];
        out.copy_from_slice(&bs);

        Ok(UInt(out))
    }

    /// Constructs a value from its raw little-endian bytes.
    pub const fn from_le_bytes(bs: [u8; N]) -> Self {
        UInt(bs)
    }

    /// Returns the raw little-endian bytes, exactly `N` of them.
    pub const fn to_le_bytes(self) -> [u8; N] {
        self.0
    }

    /// Borrows the raw little-endian bytes.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Overwrites the value in place with raw little-endian bytes.
    ///
    /// This is the one escape hatch from value semantics; the fixed-size
    /// argument makes a length mismatch unrepresentable.
    pub fn set(&mut self, bs: &[u8; N]) {
        self.0.copy_from_slice(bs);
    }

    /// Converts to another width: zero-extends when widening, truncates
    /// high-order bytes when narrowing.
    pub fn resize<const M: usize>(&self) -> UInt<M> {
        let bs = engine::resize(&self.0, M);

        let mut out = [0u8; M];
        out.copy_from_slice(&bs);

        UInt(out)
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
    pub fn compare(&self, other: &Self) -> Ordering {
        engine::compare_unchecked(&self.0, &other.0)
    }

    /// Divides by `rhs`, returning the quotient.
    ///
    /// Fails with [`NumericError::DivisionByZero`] when `rhs` is zero.
    pub fn divide(&self, rhs: &Self) -> Result<Self, NumericError> {
        let (quotient, _) = self.div_rem(rhs)?;
        Ok(quotient)
    }

    /// Divides by `rhs`, returning the remainder.
    ///
    /// Fails with [`NumericError::DivisionByZero`] when `rhs` is zero.
    pub fn modulo(&self, rhs: &Self) -> Result<Self, NumericError> {
        let (_, remainder) = self.div_rem(rhs)?;
        Ok(remainder)
    }

    /// Divides by `rhs`, returning `(quotient, remainder)` from a single
    /// long-division pass.
    ///
    /// Fails with [`NumericError::DivisionByZero`] when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), NumericError> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let (q, r) = engine::div_rem_unchecked(&self.0, &rhs.0);

        let mut quotient = [0u8; N];
        quotient.copy_from_slice(&q);
        let mut remainder = [0u8; N];
        remainder.copy_from_slice(&r);

        Ok((UInt(quotient), UInt(remainder)))
    }

    /// Left shift with a caller-specified fill bit streaming into the low
    /// end.
    pub fn shl_fill(&self, bits: usize, fill: bool) -> Self {
        let mut out = self.0;
        engine::left_shift(&mut out, bits, fill);
        UInt(out)
    }

    /// Right shift with a caller-specified fill bit streaming into the
    /// high end.
    pub fn shr_fill(&self, bits: usize, fill: bool) -> Self {
        let mut out = self.0;
        engine::right_shift(&mut out, bits, fill);
        UInt(out)
    }

    /// Renders the value in the given base (2, 10, or 16).
    ///
    /// Binary and hexadecimal output is fixed-width and zero-padded;
    /// decimal output strips leading zeros. Fails with
    /// [`NumericError::UnsupportedBase`] for any other base.
    pub fn to_string_radix(&self, base: u32) -> Result<String, NumericError> {
        engine::format(&self.0, base)
    }
}

/// Ordering consistent with unsigned magnitude.
///
/// Implemented by hand because deriving on the little-endian array would
/// compare the least significant byte first.
impl<const N: usize> Ord for UInt<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        engine::compare_unchecked(&self.0, &other.0)
    }
}

impl<const N: usize> PartialOrd for UInt<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Display for UInt<N> {
    /// Formats the value as its decimal string.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&engine::to_decimal_string(&self.0))
    }
}

/// The default value is zero, consistent with [`UInt::ZERO`].
///
/// Implemented manually because `#[derive(Default)]` is unavailable for
/// arbitrary `[u8; N]`.
impl<const N: usize> Default for UInt<N> {
    fn default() -> Self {
        UInt([0u8; N])
    }
}
