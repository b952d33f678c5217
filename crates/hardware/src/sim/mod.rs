//! Simulation driver and program loading.
//!
//! Provides the [`Simulator`], which owns a CPU and records traces, and a
//! loader for plain-text program listings.

/// Plain-text program listing parser.
pub mod loader;

/// CPU driver producing snapshot traces.
pub mod simulator;

pub use self::simulator::{Simulator, Trace};
