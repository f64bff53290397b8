//! CLI surface for the job client.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
