//! Conversions between `UInt<N>` and `u128`.

use crate::uint::UInt;

/// Places the value in the sixteen least significant bytes,
/// little-endian; truncates if `N < 16`. For `UInt128` this is exact.
impl<const N: usize> From<u128> for UInt<N> {
    fn from(value: u128) -> Self {
        let src = value.to_le_bytes();

        let mut out = [0u8; N];
        let keep = N.min(src.len());
        out[..keep].copy_from_slice(&src[..keep]);

        UInt(out)
    }
}

/// Attempts to downcast a `UInt<N>` into `u128` (fails if any
/// higher-order byte is non-zero).
impl<const N: usize> TryFrom<UInt<N>> for u128 {
    type Error = ();

    fn try_from(value: UInt<N>) -> Result<Self, Self::Error> {
        let mut buf = [0u8; 16];
        let keep = N.min(16);
        buf[..keep].copy_from_slice(&value.0[..keep]);

        if value.0[keep..].iter().any(|&b| b != 0) {
            return Err(());
        }

        Ok(u128::from_le_bytes(buf))
    }
}
