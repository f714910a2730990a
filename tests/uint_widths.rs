use widenum::{UInt, UInt128, UInt256, UInt512};

use core::convert::TryFrom;

#[test]
fn alias_widths() {
    assert_eq!(UInt128::ZERO.to_le_bytes().len(), 16);
    assert_eq!(UInt256::ZERO.to_le_bytes().len(), 32);
    assert_eq!(UInt512::ZERO.to_le_bytes().len(), 64);
}

#[test]
fn try_from_small_ints_and_back() {
    let a = UInt256::from(0x12u8);
    assert_eq!(u8::try_from(a).unwrap(), 0x12u8);

    let bad = UInt256::from([1u8; 32]);
    assert!(u8::try_from(bad).is_err());

    let a = UInt256::from(0x1234u16);
    assert_eq!(u16::try_from(a).unwrap(), 0x1234u16);

    let mut bad = [0u8; 32];
    bad[2] = 1;
    assert!(u16::try_from(UInt256::from(bad)).is_err());

    let a = UInt256::from(0xDEADBEEFu32);
    assert_eq!(u32::try_from(a).unwrap(), 0xDEADBEEFu32);

    let a = UInt256::from(0x0123_4567_89AB_CDEFu64);
    assert_eq!(u64::try_from(a).unwrap(), 0x0123_4567_89AB_CDEFu64);

    let a = UInt256::from(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128);
    assert_eq!(
        u128::try_from(a).unwrap(),
        0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128
    );

    let mut bad = [0u8; 32];
    bad[16] = 1;
    assert!(u128::try_from(UInt256::from(bad)).is_err());
}

#[test]
fn native_ints_place_little_endian() {
    let v = UInt128::from(0x0102u16);
    let bytes = v.to_le_bytes();
    assert_eq!(bytes[0], 0x02);
    assert_eq!(bytes[1], 0x01);
    assert!(bytes[2..].iter().all(|&b| b == 0));
}

#[test]
fn widening_preserves_the_value() {
    let a = UInt256::from(0xDEADBEEFu32);
    let wide: UInt512 = a.resize();

    assert_eq!(u32::try_from(wide).unwrap(), 0xDEADBEEFu32);
    assert_eq!(wide.to_string_radix(10).unwrap(), a.to_string_radix(10).unwrap());

    // Upper half is zero.
    assert_eq!(wide.leading_zeros(), a.leading_zeros() + 256);
}

#[test]
fn narrowing_truncates_high_bytes() {
    let wide = UInt512::MAX;
    let narrow: UInt256 = wide.resize();
    assert_eq!(narrow, UInt256::MAX);

    // A value living only in the high half narrows to zero.
    let mut bs = [0u8; 64];
    bs[32] = 1;
    let high = UInt512::from(bs);
    let narrow: UInt256 = high.resize();
    assert!(narrow.is_zero());
}

#[test]
fn widen_then_narrow_round_trips() {
    let a = UInt128::from(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128);

    let wide: UInt512 = a.resize();
    let back: UInt128 = wide.resize();
    assert_eq!(back, a);
}

#[test]
fn resize_works_for_custom_widths() {
    // A 3-byte width is as valid as the named ones.
    let v: UInt<3> = UInt::from(0x012345u32);
    assert_eq!(v.to_string_radix(16).unwrap(), "012345");

    // Truncating from u32 keeps the low three bytes.
    let v: UInt<3> = UInt::from(0xAA012345u32);
    assert_eq!(v.to_string_radix(16).unwrap(), "012345");

    let wide: UInt<8> = v.resize();
    assert_eq!(u64::try_from(wide).unwrap(), 0x012345u64);
}

#[test]
fn arithmetic_wraps_at_each_width() {
    assert_eq!(UInt128::MAX + UInt128::ONE, UInt128::ZERO);
    assert_eq!(UInt512::MAX + UInt512::ONE, UInt512::ZERO);
    assert_eq!(UInt128::ZERO - UInt128::ONE, UInt128::MAX);
}
