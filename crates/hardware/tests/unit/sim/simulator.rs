//! Simulator Driver Tests.

use gatesim_core::Simulator;
use gatesim_core::common::constants::MAX_RUN_STEPS;
use gatesim_core::common::{Bit, SimError};
use gatesim_core::config::Config;
use pretty_assertions::assert_eq;

#[test]
fn run_records_initial_plus_one_per_step() {
    let mut sim = Simulator::new(&Config::default()).unwrap();
    let trace = sim.run(4).unwrap();

    assert_eq!(trace.snapshots.len(), 5);
    assert_eq!(
        trace.tuples(),
        vec![
            (0, 0, 0, 1, 0),
            (1, 0, 1, 1, 0),
            (1, 0, 0, 1, 0),
            (1, 0, 1, 1, 0),
            (1, 0, 0, 1, 0),
        ]
    );
    assert_eq!(sim.cpu.stats.steps, 4);
}

#[test]
fn run_zero_steps_only_observes() {
    let mut sim = Simulator::new(&Config::default()).unwrap();
    let trace = sim.run(0).unwrap();
    assert_eq!(trace.tuples(), vec![(0, 0, 0, 1, 0)]);
}

#[test]
fn tick_returns_post_step_snapshot() {
    let mut sim = Simulator::new(&Config::default()).unwrap();
    let snap = sim.tick().unwrap();
    assert_eq!(snap, sim.snapshot());
    assert_eq!(snap.to_string(), "A=1 B=0 PC=1 RAM0=1 RAM1=0");
}

#[test]
fn independent_simulators_do_not_interact() {
    let mut first = Simulator::new(&Config::default()).unwrap();
    let second = Simulator::new(&Config::default()).unwrap();
    first.run(3).unwrap();
    assert_eq!(first.snapshot().a, Bit::One);
    assert_eq!(second.snapshot().as_tuple(), (0, 0, 0, 1, 0));
}

#[test]
fn trace_serializes_with_uppercase_fields() {
    let mut sim = Simulator::new(&Config::default()).unwrap();
    let trace = sim.run(1).unwrap();
    let json = serde_json::to_value(&trace).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "snapshots": [
                { "A": 0, "B": 0, "PC": 0, "RAM0": 1, "RAM1": 0 },
                { "A": 1, "B": 0, "PC": 1, "RAM0": 1, "RAM1": 0 },
            ]
        })
    );
}

#[test]
fn run_rejects_counts_above_limit_without_stepping() {
    let mut sim = Simulator::new(&Config::default()).unwrap();
    for steps in [MAX_RUN_STEPS + 1, usize::MAX] {
        assert_eq!(
            sim.run(steps),
            Err(SimError::StepLimit {
                requested: steps,
                limit: MAX_RUN_STEPS,
            })
        );
    }
    assert_eq!(sim.cpu.stats.steps, 0);
    assert_eq!(sim.snapshot().as_tuple(), (0, 0, 0, 1, 0));
}
