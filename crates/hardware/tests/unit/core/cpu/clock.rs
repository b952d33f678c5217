//! Clock-Low Tests.
//!
//! With the clock low every stage still runs, but no flip-flop may change.

use gatesim_core::common::Bit;
use gatesim_core::config::Config;
use proptest::prelude::*;

use crate::common::harness::TestContext;

#[test]
fn clock_low_freezes_the_demo() {
    let mut config = Config::default();
    config.general.clock = Bit::Zero;
    let mut ctx = TestContext::with_config(&config);

    let before = ctx.cpu().ram.words();
    ctx.run(8);

    assert_eq!(ctx.state(), (0, 0, 0, 1, 0));
    assert_eq!(ctx.cpu().ram.words(), before);
    assert_eq!(ctx.cpu().stats.idle_steps, 8);
}

#[test]
fn raising_the_clock_resumes_execution() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().set_clock(Bit::Zero);
    ctx.run(3);
    assert_eq!(ctx.state(), (0, 0, 0, 1, 0));

    ctx.cpu_mut().set_clock(Bit::One);
    ctx.run(1);
    assert_eq!(ctx.state(), (1, 0, 1, 1, 0));
}

proptest! {
    #[test]
    fn clock_low_is_invariant_for_any_program(
        program in prop::collection::vec(prop::array::uniform8(any::<bool>()), 0..=8),
        steps in 0usize..20,
    ) {
        let mut config = Config::default();
        config.general.clock = Bit::Zero;
        config.program = Some(
            program
                .iter()
                .map(|w| w.iter().map(|&b| Bit::from(b)).collect())
                .collect(),
        );
        let mut ctx = TestContext::with_config(&config);
        let before = (ctx.state(), ctx.cpu().ram.words());

        ctx.run(steps);

        prop_assert_eq!((ctx.state(), ctx.cpu().ram.words()), before);
    }
}
