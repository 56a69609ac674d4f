//! Exposes SeaORM entity modules for the config, rounds and round unit tables.

pub mod config;
pub mod round;
pub mod round_unit;
