//! ROM Tests.

use gatesim_core::common::{Bit, SimError};
use gatesim_core::config::Config;
use gatesim_core::isa::program::DEMO_PROGRAM;
use gatesim_core::soc::Rom8;

use crate::common::harness::{bits, word8};

#[test]
fn default_rom_holds_demo_program() {
    let rom = Rom8::default();
    assert_eq!(rom.words(), &DEMO_PROGRAM);
    assert_eq!(rom.read(2).unwrap(), word8([0, 1, 0, 1, 0, 0, 0, 0]));
}

#[test]
fn short_program_is_padded_with_zero_words() {
    let rom = Rom8::from_program(&[word8([1, 1, 0, 0, 0, 0, 0, 0])]).unwrap();
    assert_eq!(rom.read(0).unwrap(), word8([1, 1, 0, 0, 0, 0, 0, 0]));
    for addr in 1..8 {
        assert_eq!(rom.read(addr).unwrap(), [Bit::Zero; 8]);
    }
}

#[test]
fn program_contract_violations() {
    let nine = vec![bits(&[0; 8]); 9];
    assert_eq!(
        Rom8::from_program(&nine),
        Err(SimError::ProgramTooLarge {
            capacity: 8,
            actual: 9,
        })
    );

    let short_word = vec![bits(&[0; 8]), bits(&[1, 0, 1])];
    assert_eq!(
        Rom8::from_program(&short_word),
        Err(SimError::WordWidth {
            component: "rom",
            expected: 8,
            actual: 3,
        })
    );
}

#[test]
fn out_of_range_read_is_rejected() {
    let rom = Rom8::new();
    assert_eq!(
        rom.read(8),
        Err(SimError::AddressOutOfRange {
            component: "rom",
            addr: 8,
            size: 8,
        })
    );
}

#[test]
fn from_config_uses_program_or_demo() {
    assert_eq!(Rom8::from_config(&Config::default()).unwrap(), Rom8::new());

    let config = Config {
        program: Some(vec![bits(&[0, 1, 0, 1, 0, 0, 0, 0])]),
        ..Config::default()
    };
    let rom = Rom8::from_config(&config).unwrap();
    assert_eq!(rom.read(0).unwrap(), word8([0, 1, 0, 1, 0, 0, 0, 0]));
    assert_eq!(rom.read(1).unwrap(), [Bit::Zero; 8]);
}
