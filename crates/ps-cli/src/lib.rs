//! ps-cli library
//!
//! Command parsing and execution for the `progress-sync` binary.

pub(crate) mod cli;
pub(crate) mod commands;
pub mod error;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use runner::run;
