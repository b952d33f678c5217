/// Simulator traces.
pub mod simulator;
