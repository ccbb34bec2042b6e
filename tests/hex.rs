use evmsift::util::{BitStringError, FromBitString, FromHexString, ToHexString};

// ============================================================================
// Hex strings
// ============================================================================

#[test]
fn test_from_hex_01() {
    assert_eq!("".from_hex_string().unwrap(), Vec::<u8>::new());
}

#[test]
fn test_from_hex_02() {
    assert_eq!("5b00".from_hex_string().unwrap(), vec![0x5b, 0x00]);
}

#[test]
fn test_from_hex_03() {
    // A "0x" prefix is tolerated.
    assert_eq!("0x5b00".from_hex_string().unwrap(), vec![0x5b, 0x00]);
}

#[test]
fn test_from_hex_04() {
    // An odd number of digits implies a zero leading digit.
    assert_eq!("fff".from_hex_string().unwrap(), vec![0x0f, 0xff]);
}

#[test]
fn test_from_hex_05() {
    assert_eq!("DeadBeef".from_hex_string().unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn test_from_hex_06() {
    assert!("5g".from_hex_string().is_err());
}

#[test]
fn test_to_hex_01() {
    let bytes: &[u8] = &[0x5b, 0x00, 0xff];
    assert_eq!(bytes.to_hex_string(), "0x5b00ff");
}

#[test]
fn test_hex_roundtrip_01() {
    let bytes: &[u8] = &[0x00, 0x01, 0x5b, 0x60, 0xfe, 0xff];
    assert_eq!(bytes.to_hex_string().from_hex_string().unwrap(), bytes);
}

// ============================================================================
// Bit strings
// ============================================================================

#[test]
fn test_from_bits_01() {
    assert_eq!("".from_bit_string().unwrap(), Vec::<u8>::new());
}

#[test]
fn test_from_bits_02() {
    assert_eq!("01011011".from_bit_string().unwrap(), vec![0x5b]);
}

#[test]
fn test_from_bits_03() {
    assert_eq!("0101101100000000".from_bit_string().unwrap(), vec![0x5b, 0x00]);
}

#[test]
fn test_from_bits_04() {
    // Length must describe a whole number of bytes.
    match "0101".from_bit_string() {
        Err(BitStringError::InvalidLength(4)) => {}
        _ => panic!("expected an invalid length error"),
    }
}

#[test]
fn test_from_bits_05() {
    match "01011021".from_bit_string() {
        Err(BitStringError::InvalidDigit(_)) => {}
        _ => panic!("expected an invalid digit error"),
    }
}
