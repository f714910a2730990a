//! Byte-buffer primitives
//!
//! Resize, compare, zero-test, and raw copy over little-endian buffers.
//! These are the foundation everything else in the engine builds on.

use super::error::{NumericError, check_len};
use std::cmp::Ordering;

/// Returns a copy of `bs` resized to `len` bytes.
///
/// The buffer is little-endian, so growing appends high-order zero bytes
/// and shrinking drops high-order bytes. Values that do not fit the new
/// width are truncated modulo 2^(8·len); truncation is silent by contract.
pub fn resize(bs: &[u8], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    let keep = bs.len().min(len);
    out[..keep].copy_from_slice(&bs[..keep]);

    out
}

/// Unsigned magnitude comparison of two equal-length buffers.
///
/// Scans from the most significant byte down; the first unequal byte
/// decides. Fails with [`NumericError::LengthMismatch`] when the operands
/// differ in length.
pub fn compare(a: &[u8], b: &[u8]) -> Result<Ordering, NumericError> {
    check_len(a, b)?;

    Ok(compare_unchecked(a, b))
}

pub(crate) fn compare_unchecked(a: &[u8], b: &[u8]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()).rev() {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }

    Ordering::Equal
}

/// Reports whether every byte of the buffer is zero.
pub fn is_zero(bs: &[u8]) -> bool {
    bs.iter().all(|&b| b == 0)
}

/// Overwrites `dst` with the raw content of `src`.
///
/// This is the explicit in-place byte copy; it bypasses value semantics on
/// purpose. Fails with [`NumericError::LengthMismatch`] when the buffers
/// differ in length.
pub fn copy_into(dst: &mut [u8], src: &[u8]) -> Result<(), NumericError> {
    check_len(dst, src)?;
    dst.copy_from_slice(src);

    Ok(())
}
