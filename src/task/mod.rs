//! The revision-info task: validate configuration, extract, write artifacts

pub mod config;
pub mod error;
mod execute;

pub use config::TaskConfig;
pub use execute::{execute, TaskOutcome};
