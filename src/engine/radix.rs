//! Base conversion
//!
//! String rendering and parsing in bases 2, 10, and 16.
//!
//! Binary and hexadecimal are positional re-encodings of the buffer and
//! are emitted fixed-width: every byte contributes exactly eight bits or
//! two lowercase nibbles, most significant first, with no leading-zero
//! stripping. Decimal has no per-byte alignment, so rendering runs
//! repeated short division by 10 collecting remainder digits, and parsing
//! runs multiply-by-10-and-add; decimal output strips leading zeros and
//! renders the zero value as `"0"`.
//!
//! Parsing fills the target width from the least significant end. Digits
//! beyond the width are validated but their value is silently discarded,
//! matching the truncation rule everywhere else in the engine.

use super::bytes::is_zero;
use super::error::NumericError;

/// Renders the buffer as a fixed-width binary string, most significant bit
/// first.
pub fn to_binary_string(bs: &[u8]) -> String {
    let mut out = String::with_capacity(bs.len() * 8);

    for b in bs.iter().rev() {
        out.push_str(&format!("{:08b}", b));
    }

    out
}

/// Renders the buffer as a fixed-width lowercase hexadecimal string, most
/// significant nibble first.
pub fn to_hex_string(bs: &[u8]) -> String {
    let mut out = String::with_capacity(bs.len() * 2);

    for b in bs.iter().rev() {
        out.push_str(&format!("{:02x}", b));
    }

    out
}

/// Renders the buffer as a decimal string with leading zeros stripped.
///
/// The buffer has no native base-10 digits, so this repeatedly divides a
/// scratch copy by 10, collecting remainders as digits from least to most
/// significant.
pub fn to_decimal_string(bs: &[u8]) -> String {
    if is_zero(bs) {
        return String::from("0");
    }

    let mut scratch = bs.to_vec();
    let mut digits: Vec<u8> = Vec::new();

    while !is_zero(&scratch) {
        let mut rem = 0u16;

        // Short division by 10, most significant byte first.
        for b in scratch.iter_mut().rev() {
            let cur = (rem << 8) | *b as u16;
            *b = (cur / 10) as u8;
            rem = cur % 10;
        }

        digits.push(b'0' + rem as u8);
    }

    digits.iter().rev().map(|&d| d as char).collect()
}

/// Parses a binary digit string into a buffer of `len` bytes.
///
/// Fails with [`NumericError::InvalidFormat`] on any character other than
/// `0` or `1`, or on an empty string. Digits beyond the target width are
/// validated and discarded.
pub fn binary_string_to_bytes(s: &str, len: usize) -> Result<Vec<u8>, NumericError> {
    if s.is_empty() {
        return Err(NumericError::InvalidFormat('\0'));
    }

    let mut out = vec![0u8; len];

    for (i, c) in s.chars().rev().enumerate() {
        let bit = match c {
            '0' => 0u8,
            '1' => 1u8,
            _ => return Err(NumericError::InvalidFormat(c)),
        };

        if i < len * 8 && bit != 0 {
            out[i / 8] |= 1 << (i % 8);
        }
    }

    Ok(out)
}

/// Parses a hexadecimal digit string (either case, no prefix) into a
/// buffer of `len` bytes.
///
/// Fails with [`NumericError::InvalidFormat`] on non-hex characters or an
/// empty string. Digits beyond the target width are validated and
/// discarded.
pub fn hex_string_to_bytes(s: &str, len: usize) -> Result<Vec<u8>, NumericError> {
    if s.is_empty() {
        return Err(NumericError::InvalidFormat('\0'));
    }

    let mut out = vec![0u8; len];

    for (i, c) in s.chars().rev().enumerate() {
        let nibble = c.to_digit(16).ok_or(NumericError::InvalidFormat(c))? as u8;

        if i < len * 2 {
            out[i / 2] |= nibble << (4 * (i % 2));
        }
    }

    Ok(out)
}

/// Parses a decimal digit string into a buffer of `len` bytes.
///
/// Accumulates digit by digit as `value = value * 10 + digit` with carry
/// propagation through the whole buffer. A carry out of the top byte is
/// discarded, so values exceeding the width wrap modulo 2^(8·len). Fails
/// with [`NumericError::InvalidFormat`] on non-decimal characters or an
/// empty string.
pub fn decimal_string_to_bytes(s: &str, len: usize) -> Result<Vec<u8>, NumericError> {
    if s.is_empty() {
        return Err(NumericError::InvalidFormat('\0'));
    }

    let mut out = vec![0u8; len];

    for c in s.chars() {
        let digit = c.to_digit(10).ok_or(NumericError::InvalidFormat(c))? as u16;

        let mut carry = digit;
        for b in out.iter_mut() {
            let acc = *b as u16 * 10 + carry;
            *b = (acc & 0xFF) as u8;
            carry = acc >> 8;
        }
    }

    Ok(out)
}

/// Parses `s` in the given base into a buffer of `len` bytes.
///
/// Fails with [`NumericError::UnsupportedBase`] for any base outside
/// {2, 10, 16}.
pub fn parse(s: &str, base: u32, len: usize) -> Result<Vec<u8>, NumericError> {
    match base {
        2 => binary_string_to_bytes(s, len),
        10 => decimal_string_to_bytes(s, len),
        16 => hex_string_to_bytes(s, len),
        other => Err(NumericError::UnsupportedBase(other)),
    }
}

/// Renders the buffer as a string in the given base.
///
/// Fails with [`NumericError::UnsupportedBase`] for any base outside
/// {2, 10, 16}.
pub fn format(bs: &[u8], base: u32) -> Result<String, NumericError> {
    match base {
        2 => Ok(to_binary_string(bs)),
        10 => Ok(to_decimal_string(bs)),
        16 => Ok(to_hex_string(bs)),
        other => Err(NumericError::UnsupportedBase(other)),
    }
}
