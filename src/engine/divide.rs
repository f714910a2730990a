//! Long division
//!
//! Bit-by-bit shift-and-subtract division producing both the quotient and
//! the remainder in one pass. Iterates from the most significant bit of the
//! dividend, shifting successive bits into a running remainder and
//! subtracting the divisor whenever it fits, setting the corresponding
//! quotient bit.
//!
//! A zero divisor is a hard failure. The loop below would spin uselessly
//! on one, so it is rejected up front with
//! [`NumericError::DivisionByZero`].

use super::bitwise::left_shift;
use super::bytes::{compare_unchecked, is_zero};
use super::error::{NumericError, check_len};
use super::sub_unchecked;
use std::cmp::Ordering;

/// Divides `a` by `b`, returning `(quotient, remainder)`.
///
/// Both outputs have the dividend's length, and satisfy
/// `a == b·quotient + remainder` with `0 <= remainder < b`.
///
/// Fails with [`NumericError::DivisionByZero`] when `b` is the zero value
/// and with [`NumericError::LengthMismatch`] when the operands differ in
/// length.
pub fn div_rem(a: &[u8], b: &[u8]) -> Result<(Vec<u8>, Vec<u8>), NumericError> {
    check_len(a, b)?;

    if is_zero(b) {
        return Err(NumericError::DivisionByZero);
    }

    Ok(div_rem_unchecked(a, b))
}

pub(crate) fn div_rem_unchecked(a: &[u8], b: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let n = a.len();
    let mut quotient = vec![0u8; n];
    let mut remainder = vec![0u8; n];

    if compare_unchecked(a, b) == Ordering::Less {
        remainder.copy_from_slice(a);
        return (quotient, remainder);
    }

    for bit in (0..n * 8).rev() {
        let byte = bit / 8;
        let mask = 1u8 << (bit % 8);

        left_shift(&mut remainder, 1, false);
        if a[byte] & mask != 0 {
            remainder[0] |= 1;
        }

        if compare_unchecked(&remainder, b) != Ordering::Less {
            sub_unchecked(&mut remainder, b);
            quotient[byte] |= mask;
        }
    }

    (quotient, remainder)
}
