//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to set up a CPU.
//! It provides:
//! 1. **Defaults:** The demo setup (RAM\[0\] = 1, RAM\[1\] = 0, clock high, four steps).
//! 2. **Structures:** `general`, `memory` and `program` sections.
//! 3. **Loading:** JSON from a string or a file, validated against the RAM and ROM.
//!
//! Every field has a default, so `{}` is a complete configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::{Bit, SimError};
use crate::soc::{Ram4, Rom8};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::Bit;

    /// Number of steps the driver runs.
    pub const STEPS: usize = 4;

    /// Clock level applied during steps.
    pub const CLOCK: Bit = Bit::One;
}

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`Config`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration describes a machine that violates a component
    /// contract (RAM address or word width, program size or word width).
    #[error(transparent)]
    Sim(#[from] SimError),
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Run length, clock level and tracing.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Initial RAM contents.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// ROM program, one 8-bit word per entry. `None` selects the demo program.
    #[serde(default)]
    pub program: Option<Vec<Vec<Bit>>>,
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Number of steps the driver runs.
    #[serde(default = "GeneralConfig::default_steps")]
    pub steps: usize,

    /// Clock level applied to every write during a step.
    #[serde(default = "GeneralConfig::default_clock")]
    pub clock: Bit,

    /// Emit an `info` event with the disassembly of every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

impl GeneralConfig {
    const fn default_steps() -> usize {
        defaults::STEPS
    }

    const fn default_clock() -> Bit {
        defaults::CLOCK
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            steps: defaults::STEPS,
            clock: defaults::CLOCK,
            trace_instructions: false,
        }
    }
}

/// One RAM word written during CPU construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamInit {
    /// RAM address (0-3).
    pub addr: usize,
    /// Word contents, bit 0 first. Must be 4 bits long.
    pub data: Vec<Bit>,
}

/// RAM configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Words written, in order, when the CPU is built.
    #[serde(default = "MemoryConfig::default_initial_ram")]
    pub initial_ram: Vec<RamInit>,
}

impl MemoryConfig {
    /// RAM\[0\] = \[1,0,0,0\], RAM\[1\] = \[0,0,0,0\].
    fn default_initial_ram() -> Vec<RamInit> {
        vec![
            RamInit {
                addr: 0,
                data: vec![Bit::One, Bit::Zero, Bit::Zero, Bit::Zero],
            },
            RamInit {
                addr: 1,
                data: vec![Bit::Zero; 4],
            },
        ]
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            initial_ram: Self::default_initial_ram(),
        }
    }
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed JSON, unknown shapes, or bit values
    /// outside {0,1}; [`ConfigError::Sim`] if [`Config::validate`] rejects it.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the program and initial RAM against the ROM and RAM contracts.
    ///
    /// Runs the same checks `Cpu::new` would, against scratch memories.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Sim`] carrying the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let _ = Rom8::from_config(self)?;
        let mut ram = Ram4::new();
        for init in &self.memory.initial_ram {
            ram.write(init.addr, &init.data, Bit::One)?;
        }
        Ok(())
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
