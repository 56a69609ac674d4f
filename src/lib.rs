//! Rodada: planned pizza counts per round and the global round limit, resolved from a SQLite config store.

pub mod cli;
pub mod command;
pub mod internal;
pub mod utils;
