//! Subcommand implementations, each taking its parsed arguments and the resolver to act on.

pub mod limit;
pub mod round;
