//! Shift and bitwise operations
//!
//! In-place shifts with a caller-specified fill bit, complement, and
//! byte-wise logic over equal-length buffers.
//!
//! Shifting combines two phases: a whole-byte move, then a sub-byte shift
//! that carries bits between adjacent bytes. Bits shifted past the buffer
//! boundary are discarded; the fill bit streams into the vacated end. A
//! shift by zero is a no-op, and a shift of at least the total bit width
//! leaves the buffer holding the replicated fill bit.

use super::error::{NumericError, check_len};

/// Shifts the buffer left (towards the most significant byte) by `bits`
/// positions, in place, shifting `fill` bits into the low end.
pub fn left_shift(bs: &mut [u8], bits: usize, fill: bool) {
    let fill_byte = if fill { 0xFF } else { 0x00 };

    if bits == 0 {
        return;
    }
    if bits >= bs.len() * 8 {
        bs.fill(fill_byte);
        return;
    }

    let byte_shift = bits / 8;
    let bit_shift = (bits % 8) as u32;

    if byte_shift > 0 {
        bs.copy_within(..bs.len() - byte_shift, byte_shift);
        bs[..byte_shift].fill(fill_byte);
    }

    if bit_shift == 0 {
        return;
    }

    let mut carry = fill_byte >> (8 - bit_shift);
    for b in bs.iter_mut() {
        let val = *b;
        *b = (val << bit_shift) | carry;
        carry = val >> (8 - bit_shift);
    }
}

/// Shifts the buffer right (towards the least significant byte) by `bits`
/// positions, in place, shifting `fill` bits into the high end.
pub fn right_shift(bs: &mut [u8], bits: usize, fill: bool) {
    let fill_byte = if fill { 0xFF } else { 0x00 };

    if bits == 0 {
        return;
    }
    if bits >= bs.len() * 8 {
        bs.fill(fill_byte);
        return;
    }

    let byte_shift = bits / 8;
    let bit_shift = (bits % 8) as u32;

    if byte_shift > 0 {
        bs.copy_within(byte_shift.., 0);
        let len = bs.len();
        bs[len - byte_shift..].fill(fill_byte);
    }

    if bit_shift == 0 {
        return;
    }

    let mut carry = fill_byte << (8 - bit_shift);
    for b in bs.iter_mut().rev() {
        let val = *b;
        *b = (val >> bit_shift) | carry;
        carry = val << (8 - bit_shift);
    }
}

/// Complements every byte of the buffer in place.
pub fn not(bs: &mut [u8]) {
    for b in bs.iter_mut() {
        *b = !*b;
    }
}

/// Byte-wise OR of `b` into `a`, in place.
///
/// Fails with [`NumericError::LengthMismatch`] when the operands differ in
/// length.
pub fn or(a: &mut [u8], b: &[u8]) -> Result<(), NumericError> {
    check_len(a, b)?;
    or_unchecked(a, b);

    Ok(())
}

pub(crate) fn or_unchecked(a: &mut [u8], b: &[u8]) {
    a.iter_mut().zip(b.iter()).for_each(|(x, y)| *x |= y);
}

/// Byte-wise AND of `b` into `a`, in place.
///
/// Fails with [`NumericError::LengthMismatch`] when the operands differ in
/// length.
pub fn and(a: &mut [u8], b: &[u8]) -> Result<(), NumericError> {
    check_len(a, b)?;
    and_unchecked(a, b);

    Ok(())
}

pub(crate) fn and_unchecked(a: &mut [u8], b: &[u8]) {
    a.iter_mut().zip(b.iter()).for_each(|(x, y)| *x &= y);
}

/// Byte-wise XOR of `b` into `a`, in place.
///
/// Fails with [`NumericError::LengthMismatch`] when the operands differ in
/// length.
pub fn xor(a: &mut [u8], b: &[u8]) -> Result<(), NumericError> {
    check_len(a, b)?;
    xor_unchecked(a, b);

    Ok(())
}

pub(crate) fn xor_unchecked(a: &mut [u8], b: &[u8]) {
    a.iter_mut().zip(b.iter()).for_each(|(x, y)| *x ^= y);
}
