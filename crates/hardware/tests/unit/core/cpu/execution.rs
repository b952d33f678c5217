//! CPU Execution Tests.
//!
//! Drives the demo program and hand-built programs through `Cpu::step` and
//! checks the observable state `(A, B, PC, RAM0, RAM1)`.

use gatesim_core::common::Bit;
use gatesim_core::common::constants::{REACHABLE_ROM_WORDS, ROM_WORDS};
use gatesim_core::config::{Config, RamInit};
use pretty_assertions::assert_eq;

use crate::common::harness::{TestContext, bits, word4, word8};

// ─── Demo Program ────────────────────────────────────────────────────────────

#[test]
fn demo_initial_state() {
    let ctx = TestContext::new();
    assert_eq!(ctx.state(), (0, 0, 0, 1, 0));
}

#[test]
fn demo_trace_alternates_load_and_add() {
    let mut ctx = TestContext::new();
    let mut observed = vec![ctx.state()];
    for _ in 0..4 {
        ctx.run(1);
        observed.push(ctx.state());
    }
    assert_eq!(
        observed,
        vec![
            (0, 0, 0, 1, 0),
            (1, 0, 1, 1, 0),
            (1, 0, 0, 1, 0),
            (1, 0, 1, 1, 0),
            (1, 0, 0, 1, 0),
        ]
    );
}

#[test]
fn only_addresses_zero_and_one_are_ever_fetched() {
    let mut ctx = TestContext::new();
    ctx.run(64);

    let stats = &ctx.cpu().stats;
    assert_eq!(stats.fetches[0], 32);
    assert_eq!(stats.fetches[1], 32);
    assert_eq!(stats.unvisited(), (REACHABLE_ROM_WORDS..ROM_WORDS).collect::<Vec<_>>());
    assert_eq!(stats.unvisited(), vec![2, 3, 4, 5, 6, 7]);
    // STORE (address 2) and XOR (address 3) never execute.
    assert_eq!(stats.inst_store, 0);
    assert_eq!(stats.inst_xor, 0);
    assert_eq!(ctx.cpu().ram.read(1).unwrap(), word4([0, 0, 0, 0]));
}

#[test]
fn b_register_is_never_written() {
    let mut ctx = TestContext::new();
    ctx.run(10);
    assert_eq!(ctx.cpu().b.read(), Bit::Zero);
}

// ─── Individual Instructions ─────────────────────────────────────────────────

#[test]
fn store_writes_a_into_effective_address() {
    // addr field [0,1]: address = or(1, and(0, 1)) = 1
    let mut ctx = TestContext::with_program(&[
        word8([0, 0, 0, 0, 0, 0, 0, 0]), // LOAD RAM[0]
        word8([0, 1, 0, 1, 0, 0, 0, 0]), // STORE RAM[1]
    ]);
    ctx.run(2);
    assert_eq!(ctx.cpu().ram.read(1).unwrap(), word4([1, 0, 0, 0]));
    assert_eq!(ctx.state(), (1, 0, 0, 1, 1));
}

#[test]
fn xor_with_b_zero_keeps_a() {
    let mut ctx = TestContext::with_program(&[
        word8([0, 0, 0, 0, 0, 0, 0, 0]),
        word8([1, 1, 0, 0, 0, 0, 0, 0]),
    ]);
    ctx.run(2);
    assert_eq!(ctx.cpu().a.read(), Bit::One);
}

#[test]
fn load_reads_bit_zero_of_ram() {
    let config = Config {
        memory: gatesim_core::config::MemoryConfig {
            initial_ram: vec![RamInit {
                addr: 1,
                data: bits(&[1, 1, 1, 1]),
            }],
        },
        program: Some(vec![
            word8([0, 0, 1, 0, 0, 0, 0, 0]).to_vec(), // addr field [1,0] -> address 1
        ]),
        ..Config::default()
    };
    let mut ctx = TestContext::with_config(&config);
    ctx.run(1);
    assert_eq!(ctx.cpu().a.read(), Bit::One);
    assert_eq!(ctx.cpu().pc.read(), Bit::One);
}
