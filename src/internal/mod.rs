//! Internal layer exports for the config resolver, database, entities, settings and the store seam.

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod settings;
pub mod store;
