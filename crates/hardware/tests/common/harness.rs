use gatesim_core::Simulator;
use gatesim_core::common::{Bit, Word4, Word8};
use gatesim_core::config::Config;
use gatesim_core::core::Cpu;

/// Shorthand for building bit vectors from integer literals.
///
/// Panics on values outside {0,1}; test inputs are always literals.
pub fn bits(values: &[u8]) -> Vec<Bit> {
    values
        .iter()
        .map(|&v| Bit::try_from(v).expect("test bit literal must be 0 or 1"))
        .collect()
}

/// Builds a 4-bit word from integer literals.
pub fn word4(values: [u8; 4]) -> Word4 {
    values.map(|v| Bit::try_from(v).expect("test bit literal must be 0 or 1"))
}

/// Builds an 8-bit instruction word from integer literals.
pub fn word8(values: [u8; 8]) -> Word8 {
    values.map(|v| Bit::try_from(v).expect("test bit literal must be 0 or 1"))
}

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Demo configuration: RAM\[0\] = 1, RAM\[1\] = 0, clock high.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        let sim = Simulator::new(config).expect("test config must build a CPU");
        Self { sim }
    }

    /// Replaces the ROM program; the CPU is rebuilt from scratch.
    pub fn with_program(program: &[Word8]) -> Self {
        let config = Config {
            program: Some(program.iter().map(|w| w.to_vec()).collect()),
            ..Config::default()
        };
        Self::with_config(&config)
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Current `(A, B, PC, RAM0, RAM1)`.
    pub fn state(&self) -> (u8, u8, u8, u8, u8) {
        self.sim.snapshot().as_tuple()
    }

    /// Execute `n` steps, panicking on any error.
    pub fn run(&mut self, n: usize) {
        for _ in 0..n {
            self.sim.cpu.step().expect("step must succeed");
        }
    }
}
