//! Simulator: owns the CPU and records what it observes.
//!
//! The driver surface is deliberately small:
//! 1. **Construction:** Build a CPU from a [`Config`].
//! 2. **Stepping:** `tick` executes one instruction and returns the new snapshot.
//! 3. **Tracing:** `run` records the initial snapshot plus one per step.

use serde::Serialize;
use tracing::debug;

use crate::common::constants::MAX_RUN_STEPS;
use crate::common::{SimError, SimResult};
use crate::config::Config;
use crate::core::{Cpu, CpuSnapshot};

/// Ordered snapshots: one before the first step and one after every step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Trace {
    /// Snapshots in observation order.
    pub snapshots: Vec<CpuSnapshot>,
}

impl Trace {
    /// Returns every snapshot as an `(A, B, PC, RAM0, RAM1)` tuple.
    pub fn tuples(&self) -> Vec<(u8, u8, u8, u8, u8)> {
        self.snapshots.iter().map(CpuSnapshot::as_tuple).collect()
    }
}

/// Top-level simulator.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU state (flip-flops, memories, stats).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator with a freshly built CPU.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Cpu::new`].
    pub fn new(config: &Config) -> SimResult<Self> {
        Ok(Self {
            cpu: Cpu::new(config)?,
        })
    }

    /// Returns the current observable state.
    pub fn snapshot(&self) -> CpuSnapshot {
        self.cpu.snapshot()
    }

    /// Executes one instruction and returns the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Cpu::step`].
    pub fn tick(&mut self) -> SimResult<CpuSnapshot> {
        self.cpu.step()?;
        Ok(self.cpu.snapshot())
    }

    /// Executes `steps` instructions and records the trace.
    ///
    /// The returned trace holds `steps + 1` snapshots. Use [`Simulator::tick`]
    /// directly for runs longer than [`MAX_RUN_STEPS`].
    ///
    /// # Errors
    ///
    /// [`SimError::StepLimit`] if `steps` exceeds [`MAX_RUN_STEPS`]; nothing is
    /// executed in that case. Otherwise stops at the first failing step and
    /// returns its error.
    pub fn run(&mut self, steps: usize) -> SimResult<Trace> {
        if steps > MAX_RUN_STEPS {
            return Err(SimError::StepLimit {
                requested: steps,
                limit: MAX_RUN_STEPS,
            });
        }
        let mut snapshots = Vec::with_capacity(steps + 1);
        snapshots.push(self.snapshot());
        for _ in 0..steps {
            snapshots.push(self.tick()?);
        }
        debug!(steps, "run complete");
        Ok(Trace { snapshots })
    }
}
