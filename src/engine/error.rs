//! Error definitions for the arithmetic engine.

/// Errors reported by the arithmetic engine and the wrapper types.
///
/// Every variant is a caller-facing failure: malformed text, an unsupported
/// radix, a zero divisor, or operands of unequal width. Wraparound on
/// add/sub/multiply and truncation on resize/parse are defined modular
/// behavior, not errors, and are never reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// The input string contains a character outside the digit alphabet of
    /// the declared base. Carries the offending character.
    InvalidFormat(char),
    /// A base other than 2, 10, or 16 was requested. Carries the base.
    UnsupportedBase(u32),
    /// The divisor is the zero value.
    DivisionByZero,
    /// Two operands of a binary operation have different byte lengths.
    /// Callers normally guarantee equal widths by construction; this is the
    /// defensive check for the `UIntVar` surface, where lengths are chosen
    /// at run time.
    LengthMismatch {
        /// Byte length of the left operand.
        left: usize,
        /// Byte length of the right operand.
        right: usize,
    },
}

pub(crate) fn check_len(a: &[u8], b: &[u8]) -> Result<(), NumericError> {
    if a.len() != b.len() {
        return Err(NumericError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(())
}
