//! Command-line interface module.

mod args;
pub mod bust;
pub mod init;
pub mod show;

pub use args::{Cli, Commands};
