//! Command implementation modules

pub mod coverage;
pub mod set_output;

pub use coverage::run_coverage_command;
pub use set_output::run_set_output_command;
