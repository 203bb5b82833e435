//! # Access Type and Width Tests

use pretty_assertions::assert_eq;
use rstest::rstest;
use rv32sim_core::common::{AccessType, AccessWidth};

#[rstest]
#[case(0b00, Some(AccessWidth::Byte))]
#[case(0b01, Some(AccessWidth::Half))]
#[case(0b10, Some(AccessWidth::Word))]
#[case(0b11, None)]
#[case(0b110, Some(AccessWidth::Word))]
fn test_width_from_size_bits(#[case] bits: u32, #[case] expected: Option<AccessWidth>) {
    assert_eq!(AccessWidth::from_size_bits(bits), expected);
}

#[test]
fn test_width_bytes_and_bits() {
    assert_eq!(AccessWidth::Byte.bytes(), 1);
    assert_eq!(AccessWidth::Half.bytes(), 2);
    assert_eq!(AccessWidth::Word.bytes(), 4);
    assert_eq!(AccessWidth::Half.bits(), 16);
}

#[test]
fn test_access_type_display() {
    assert_eq!(AccessType::Fetch.to_string(), "fetch");
    assert_eq!(AccessType::Read.to_string(), "read");
    assert_eq!(AccessType::Write.to_string(), "write");
}
