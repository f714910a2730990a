//! Conversions between `UInt<N>` and `u8`.

use crate::uint::UInt;

/// Places the byte at the least significant position; higher bytes are
/// zero.
impl<const N: usize> From<u8> for UInt<N> {
    fn from(value: u8) -> Self {
        let src = value.to_le_bytes();

        let mut out = [0u8; N];
        let keep = N.min(src.len());
        out[..keep].copy_from_slice(&src[..keep]);

        UInt(out)
    }
}

/// Attempts to downcast a `UInt<N>` into `u8` (fails if any higher-order
/// byte is non-zero).
impl<const N: usize> TryFrom<UInt<N>> for u8 {
    type Error = ();

    fn try_from(value: UInt<N>) -> Result<Self, Self::Error> {
        let mut buf = [0u8; 1];
        let keep = N.min(1);
        buf[..keep].copy_from_slice(&value.0[..keep]);

        if value.0[keep..].iter().any(|&b| b != 0) {
            return Err(());
        }

        Ok(u8::from_le_bytes(buf))
    }
}
