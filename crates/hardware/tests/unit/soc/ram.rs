//! RAM Tests.

use gatesim_core::common::{Bit, SimError};
use gatesim_core::soc::Ram4;
use rstest::rstest;

use crate::common::harness::{bits, word4};

#[test]
fn write_is_isolated_to_one_address() {
    let mut ram = Ram4::new();
    ram.write(2, &bits(&[1, 1, 0, 0]), Bit::One).unwrap();

    assert_eq!(ram.read(2).unwrap(), word4([1, 1, 0, 0]));
    for addr in [0, 1, 3] {
        assert_eq!(ram.read(addr).unwrap(), word4([0, 0, 0, 0]));
    }
}

#[test]
fn write_with_clock_low_is_ignored() {
    let mut ram = Ram4::new();
    ram.write(0, &bits(&[1, 0, 0, 0]), Bit::Zero).unwrap();
    assert_eq!(ram.read(0).unwrap(), word4([0, 0, 0, 0]));
}

#[rstest]
#[case(4)]
#[case(5)]
#[case(usize::MAX)]
fn out_of_range_address_is_rejected(#[case] addr: usize) {
    let mut ram = Ram4::new();
    let expected = SimError::AddressOutOfRange {
        component: "ram",
        addr,
        size: 4,
    };
    assert_eq!(ram.read(addr), Err(expected.clone()));
    assert_eq!(ram.write(addr, &bits(&[1, 1, 1, 1]), Bit::One), Err(expected));
    assert_eq!(ram.words(), [word4([0, 0, 0, 0]); 4]);
}

#[test]
fn wrong_width_word_is_rejected() {
    let mut ram = Ram4::new();
    let err = ram.write(1, &bits(&[1, 1]), Bit::One).unwrap_err();
    assert!(matches!(err, SimError::WordWidth { expected: 4, actual: 2, .. }));
    assert_eq!(ram.read(1).unwrap(), word4([0, 0, 0, 0]));
}
