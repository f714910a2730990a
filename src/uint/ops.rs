//! Operator traits for `UInt<N>`
//!
//! Each operator copies the receiver into an owned scratch buffer, runs
//! the corresponding engine routine in place on the copy, and wraps the
//! result. Operands are never aliased or mutated.
//!
//! Addition, subtraction, and multiplication wrap modulo 2^(8N). Shifts
//! fill with zero bits; use [`UInt::shl_fill`] / [`UInt::shr_fill`] for a
//! caller-specified fill. Division is deliberately *not* an operator —
//! a zero divisor must surface as an error, so it lives on the fallible
//! [`UInt::divide`] and [`UInt::modulo`] methods instead.

use crate::engine;
use crate::uint::UInt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Shl, Shr, Sub};

/// Addition modulo 2^(8N).
impl<const N: usize> Add for UInt<N> {
    type Output = UInt<N>;

    fn add(self, rhs: UInt<N>) -> Self::Output {
        let mut out = self.0;
        engine::add_unchecked(&mut out, &rhs.0);
        UInt(out)
    }
}

/// Subtraction modulo 2^(8N); `a < b` wraps two's-complement style.
impl<const N: usize> Sub for UInt<N> {
    type Output = UInt<N>;

    fn sub(self, rhs: UInt<N>) -> Self::Output {
        let mut out = self.0;
        engine::sub_unchecked(&mut out, &rhs.0);
        UInt(out)
    }
}

/// Multiplication modulo 2^(8N); the high half of the product is
/// discarded.
impl<const N: usize> Mul for UInt<N> {
    type Output = UInt<N>;

    fn mul(self, rhs: UInt<N>) -> Self::Output {
        let mut out = self.0;
        engine::multiply_unchecked(&mut out, &rhs.0);
        UInt(out)
    }
}

/// Bitwise OR between two values of the same width.
impl<const N: usize> BitOr for UInt<N> {
    type Output = UInt<N>;

    fn bitor(self, rhs: UInt<N>) -> Self::Output {
        let mut out = self.0;
        engine::or_unchecked(&mut out, &rhs.0);
        UInt(out)
    }
}

/// Bitwise AND between two values of the same width.
impl<const N: usize> BitAnd for UInt<N> {
    type Output = UInt<N>;

    fn bitand(self, rhs: UInt<N>) -> Self::Output {
        let mut out = self.0;
        engine::and_unchecked(&mut out, &rhs.0);
        UInt(out)
    }
}

/// Bitwise XOR between two values of the same width.
impl<const N: usize> BitXor for UInt<N> {
    type Output = UInt<N>;

    fn bitxor(self, rhs: UInt<N>) -> Self::Output {
        let mut out = self.0;
        engine::xor_unchecked(&mut out, &rhs.0);
        UInt(out)
    }
}

/// Bitwise complement of every byte.
impl<const N: usize> Not for UInt<N> {
    type Output = UInt<N>;

    fn not(self) -> Self::Output {
        let mut out = self.0;
        engine::not(&mut out);
        UInt(out)
    }
}

/// Logical left shift; zero bits fill the low end, bits shifted past the
/// width are discarded. Shifts of `8N` or more yield zero.
impl<const N: usize> Shl<usize> for UInt<N> {
    type Output = UInt<N>;

    fn shl(self, bits: usize) -> Self::Output {
        self.shl_fill(bits, false)
    }
}

/// Logical right shift; zero bits fill the high end, bits shifted past
/// the width are discarded. Shifts of `8N` or more yield zero.
impl<const N: usize> Shr<usize> for UInt<N> {
    type Output = UInt<N>;

    fn shr(self, bits: usize) -> Self::Output {
        self.shr_fill(bits, false)
    }
}
