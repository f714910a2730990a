//! Addition, subtraction, and multiplication
//!
//! Carry/borrow propagation runs from the least significant byte upward.
//! All three operations wrap modulo 2^(8N): a carry out of the final byte
//! and the high half of a product are discarded, never reported. This is a
//! ring, not an overflow-checked integer.

use super::error::{NumericError, check_len};

/// Adds `b` into `a`, in place, modulo 2^(8N).
///
/// Fails with [`NumericError::LengthMismatch`] when the operands differ in
/// length.
pub fn add(a: &mut [u8], b: &[u8]) -> Result<(), NumericError> {
    check_len(a, b)?;
    add_unchecked(a, b);

    Ok(())
}

pub(crate) fn add_unchecked(a: &mut [u8], b: &[u8]) {
    let mut carry = 0u16;

    for (x, &y) in a.iter_mut().zip(b.iter()) {
        let sum = *x as u16 + y as u16 + carry;
        *x = (sum & 0xFF) as u8;
        carry = sum >> 8;
    }
}

/// Subtracts `b` from `a`, in place, modulo 2^(8N).
///
/// When `a < b` the result is the two's-complement wraparound value, the
/// same answer unsigned modular arithmetic gives. Fails with
/// [`NumericError::LengthMismatch`] when the operands differ in length.
pub fn sub(a: &mut [u8], b: &[u8]) -> Result<(), NumericError> {
    check_len(a, b)?;
    sub_unchecked(a, b);

    Ok(())
}

pub(crate) fn sub_unchecked(a: &mut [u8], b: &[u8]) {
    let mut borrow = 0i16;

    for (x, &y) in a.iter_mut().zip(b.iter()) {
        let lhs = *x as i16;
        let rhs = y as i16 + borrow;

        if lhs >= rhs {
            *x = (lhs - rhs) as u8;
            borrow = 0;
        } else {
            *x = (lhs + 256 - rhs) as u8;
            borrow = 1;
        }
    }
}

/// Multiplies `a` by `b`, in place, keeping the low half of the product.
///
/// Classic schoolbook byte×byte multiply-accumulate into a double-length
/// scratch buffer; only the low N bytes are copied back, so high-order
/// overflow is silently discarded. Fails with
/// [`NumericError::LengthMismatch`] when the operands differ in length.
pub fn multiply(a: &mut [u8], b: &[u8]) -> Result<(), NumericError> {
    check_len(a, b)?;
    multiply_unchecked(a, b);

    Ok(())
}

pub(crate) fn multiply_unchecked(a: &mut [u8], b: &[u8]) {
    let n = a.len();
    let mut scratch = vec![0u8; n * 2];

    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u16;

        for (j, &y) in b.iter().enumerate() {
            let acc = scratch[i + j] as u16 + x as u16 * y as u16 + carry;
            scratch[i + j] = (acc & 0xFF) as u8;
            carry = acc >> 8;
        }

        // The partial product is 2 bytes wide at most, so the carry fits
        // in the next unwritten column.
        scratch[i + n] = (carry & 0xFF) as u8;
    }

    a.copy_from_slice(&scratch[..n]);
}
