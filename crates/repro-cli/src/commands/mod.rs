//! CLI subcommand implementations.

pub mod evaluate;
pub mod schedule;
pub mod session;
pub mod util;
