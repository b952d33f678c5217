//! Bit Value Tests.
//!
//! Integers enter the simulator only through `Bit::try_from`; these tests pin
//! the accepted domain and the JSON representation.

use gatesim_core::common::bit::{bits_from_u8s, format_bits};
use gatesim_core::common::{Bit, SimError};
use rstest::rstest;

#[rstest]
#[case(0, Bit::Zero)]
#[case(1, Bit::One)]
fn accepts_zero_and_one(#[case] raw: u8, #[case] expected: Bit) {
    assert_eq!(Bit::try_from(raw), Ok(expected));
    assert_eq!(u8::from(expected), raw);
}

#[rstest]
#[case(2)]
#[case(7)]
#[case(255)]
fn rejects_other_integers(#[case] raw: u8) {
    assert_eq!(Bit::try_from(raw), Err(SimError::InvalidBit(raw)));
}

#[test]
fn bit_sequences_reject_the_first_bad_value() {
    assert_eq!(bits_from_u8s(&[1, 0, 1]).map(|b| format_bits(&b)), Ok("101".to_string()));
    assert_eq!(bits_from_u8s(&[1, 3, 4]), Err(SimError::InvalidBit(3)));
}

#[test]
fn serializes_as_integer() {
    let json = serde_json::to_string(&[Bit::One, Bit::Zero]).unwrap();
    assert_eq!(json, "[1,0]");

    let parsed: Vec<Bit> = serde_json::from_str("[0,1,1]").unwrap();
    assert_eq!(parsed, vec![Bit::Zero, Bit::One, Bit::One]);

    assert!(serde_json::from_str::<Bit>("2").is_err());
}
