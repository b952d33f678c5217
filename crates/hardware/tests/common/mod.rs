/// CPU test harness and bit helpers.
pub mod harness;
