//! Shared test utilities and re-exports for the resolver integration test suite.

use std::sync::Arc;

use rodada::{
    internal::{
        config::{ConfigResolver, PlannedUnitsSource, RoundConfig, RoundLimitStatus},
        db,
        model::round::RoundStatus,
        store::{ConfigStore, SeaOrmStore},
    },
    utils::test::TestDb,
};

mod round_config_test;
mod round_limit_test;
