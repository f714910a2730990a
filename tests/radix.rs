use widenum::NumericError;
use widenum::engine;
use widenum::{UInt256, UIntVar};

#[test]
fn decimal_to_bytes_little_endian() {
    assert_eq!(engine::decimal_string_to_bytes("0", 2).unwrap(), vec![0, 0]);
    assert_eq!(engine::decimal_string_to_bytes("255", 2).unwrap(), vec![255, 0]);
    assert_eq!(engine::decimal_string_to_bytes("256", 2).unwrap(), vec![0, 1]);
    assert_eq!(
        engine::decimal_string_to_bytes("65535", 2).unwrap(),
        vec![255, 255]
    );
}

#[test]
fn decimal_parse_wraps_past_width() {
    // 65536 mod 2^16 == 0
    assert_eq!(engine::decimal_string_to_bytes("65536", 2).unwrap(), vec![0, 0]);
    // 65537 mod 2^16 == 1
    assert_eq!(engine::decimal_string_to_bytes("65537", 2).unwrap(), vec![1, 0]);
}

#[test]
fn hex_to_bytes_and_back() {
    assert_eq!(
        engine::hex_string_to_bytes("1234", 2).unwrap(),
        vec![0x34, 0x12]
    );
    // Odd digit counts get an implicit leading zero nibble.
    assert_eq!(
        engine::hex_string_to_bytes("abc", 2).unwrap(),
        vec![0xBC, 0x0A]
    );
    // Uppercase accepted, output lowercase.
    assert_eq!(
        engine::to_hex_string(&engine::hex_string_to_bytes("BEEF", 2).unwrap()),
        "beef"
    );
    // Excess high-order digits are validated and discarded.
    assert_eq!(
        engine::hex_string_to_bytes("123456", 2).unwrap(),
        vec![0x56, 0x34]
    );
}

#[test]
fn binary_to_bytes_and_back() {
    assert_eq!(engine::binary_string_to_bytes("101", 1).unwrap(), vec![5]);
    assert_eq!(
        engine::binary_string_to_bytes("100000001", 2).unwrap(),
        vec![1, 1]
    );
    assert_eq!(engine::to_binary_string(&[5]), "00000101");
    assert_eq!(engine::to_binary_string(&[1, 1]), "0000000100000001");
    // Truncation past the width.
    assert_eq!(engine::binary_string_to_bytes("100000001", 1).unwrap(), vec![1]);
}

#[test]
fn hex_and_binary_output_is_fixed_width() {
    let v = UInt256::from_str_radix("ff", 16).unwrap();
    let hex = v.to_string_radix(16).unwrap();
    assert_eq!(hex.len(), 64);
    assert_eq!(hex, format!("{}ff", "0".repeat(62)));

    let bin = v.to_string_radix(2).unwrap();
    assert_eq!(bin.len(), 256);
    assert!(bin.ends_with("11111111"));
    assert!(bin.starts_with("0"));
}

#[test]
fn decimal_output_strips_leading_zeros() {
    assert_eq!(engine::to_decimal_string(&[0, 0, 0, 0]), "0");
    assert_eq!(engine::to_decimal_string(&[7, 0, 0, 0]), "7");

    let v = UInt256::from_str_radix("0000123", 10).unwrap();
    assert_eq!(v.to_string_radix(10).unwrap(), "123");
}

#[test]
fn decimal_round_trip_at_full_width() {
    let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
    let v = UInt256::from_str_radix(max, 10).unwrap();
    assert_eq!(v, UInt256::MAX);
    assert_eq!(v.to_string_radix(10).unwrap(), max);

    let s = "340282366920938463463374607431768211456"; // 2^128
    let v = UInt256::from_str_radix(s, 10).unwrap();
    assert_eq!(v.to_string_radix(10).unwrap(), s);
}

#[test]
fn decimal_parse_wraps_at_full_width() {
    // 2^256 wraps to zero in a 32-byte buffer.
    let overflow =
        "115792089237316195423570985008687907853269984665640564039457584007913129639936";
    let v = UInt256::from_str_radix(overflow, 10).unwrap();
    assert!(v.is_zero());
}

#[test]
fn hex_round_trip_through_uintvar() {
    let v = UIntVar::from_str_radix("deadbeef", 16, 6).unwrap();
    assert_eq!(v.to_string_radix(16).unwrap(), "0000deadbeef");
    assert_eq!(v.to_string_radix(10).unwrap(), "3735928559");
}

#[test]
fn malformed_digits_are_rejected_with_the_character() {
    assert_eq!(
        UInt256::from_str_radix("12a4", 10).unwrap_err(),
        NumericError::InvalidFormat('a')
    );
    assert_eq!(
        UInt256::from_str_radix("0x12", 16).unwrap_err(),
        NumericError::InvalidFormat('x')
    );
    assert_eq!(
        UInt256::from_str_radix("10201", 2).unwrap_err(),
        NumericError::InvalidFormat('2')
    );
    assert!(matches!(
        UInt256::from_str_radix("", 10),
        Err(NumericError::InvalidFormat(_))
    ));
}

#[test]
fn bases_outside_the_supported_set_are_rejected() {
    assert_eq!(
        UInt256::from_str_radix("777", 8).unwrap_err(),
        NumericError::UnsupportedBase(8)
    );
    assert_eq!(
        UInt256::ONE.to_string_radix(3).unwrap_err(),
        NumericError::UnsupportedBase(3)
    );
    assert_eq!(
        UIntVar::from_str_radix("1", 64, 4).unwrap_err(),
        NumericError::UnsupportedBase(64)
    );
}
