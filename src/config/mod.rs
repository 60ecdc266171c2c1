//! Configuration model
//!
//! Groups, workflows and the validation that keeps them consistent. The
//! [`Configuration`] is built once, fully validated, before any path is
//! classified against it.

pub mod classifier;
pub mod error;
pub mod group;
pub mod loader;
pub mod model;
pub mod names;
pub mod usage;
pub mod validator;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use group::PatternGroup;
pub use loader::{load_from_path, load_from_str, load_from_table};
pub use model::{Configuration, UnusedPattern, Workflow};
pub use names::{GroupName, WorkflowName};
pub use usage::PatternUsage;
pub use validator::ConfigValidator;
