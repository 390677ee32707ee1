//! Shelf CLI library: command implementations for the `shelf` binary.

pub mod cli;
pub mod list;
pub mod new;
pub mod publish;
pub mod results;
pub mod search;
pub mod show;
pub mod table;

pub use cli::{Cli, Commands};
