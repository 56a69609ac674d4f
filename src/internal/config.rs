//! Round configuration resolution: planned pizza count per round and the global round limit.
//!
//! Reads never fail: absence or a storage error moves on to the next source and
//! ends at a hardcoded default. Writes log and return storage errors.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::internal::error::Result;
use crate::internal::store::ConfigStore;

/// Planned units when no source has a value
pub const DEFAULT_PLANNED_UNITS: u32 = 5;
/// Round limit when none is stored
pub const DEFAULT_ROUND_LIMIT: u32 = 5;

pub const UNITS_PLANNED_DEFAULT_KEY: &str = "units_planned_default";
pub const TOTAL_ROUND_LIMIT_KEY: &str = "total_round_limit";

/// Key of the per-round override, e.g. `round_42_units_planned`
pub fn round_units_planned_key(round_id: &str) -> String {
    format!("round_{round_id}_units_planned")
}

/// Effective configuration of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundConfig {
    pub planned_unit_count: u32,
    /// Always 0 here, the time limit is computed by the game
    pub per_unit_time_limit: u32,
}

/// Result of [`ConfigResolver::check_round_limit_exceeded`].
///
/// Only finalized rounds are counted. The serialized name of `finalized_count`
/// is `totalRodadas`, which is what existing consumers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundLimitStatus {
    pub exceeded: bool,
    #[serde(rename = "totalRodadas")]
    pub finalized_count: u32,
    pub limit: u32,
}

impl Default for RoundLimitStatus {
    fn default() -> Self {
        RoundLimitStatus {
            exceeded: false,
            finalized_count: 0,
            limit: DEFAULT_ROUND_LIMIT,
        }
    }
}

/// Where a planned unit count came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedUnitsSource {
    /// `round_{id}_units_planned`
    RoundOverride,
    /// `units_planned_default`
    GlobalDefault,
    /// highest `ordem` recorded for the round
    History,
    /// [`DEFAULT_PLANNED_UNITS`]
    Default,
}

/// One step of the fallback chain. [`PlannedUnitsSource::Default`] is not a step,
/// it is what resolution ends at when every step misses.
#[derive(Debug, Clone, Copy)]
enum ChainStep {
    RoundOverride,
    GlobalDefault,
    History,
}

/// Steps tried in order
const FALLBACK_CHAIN: [ChainStep; 3] = [
    ChainStep::RoundOverride,
    ChainStep::GlobalDefault,
    ChainStep::History,
];

impl ChainStep {
    fn source(self) -> PlannedUnitsSource {
        match self {
            ChainStep::RoundOverride => PlannedUnitsSource::RoundOverride,
            ChainStep::GlobalDefault => PlannedUnitsSource::GlobalDefault,
            ChainStep::History => PlannedUnitsSource::History,
        }
    }

    async fn lookup(self, store: &dyn ConfigStore, round_id: &str) -> Result<Option<u32>> {
        match self {
            ChainStep::RoundOverride => {
                stored_count(store, &round_units_planned_key(round_id)).await
            }
            ChainStep::GlobalDefault => stored_count(store, UNITS_PLANNED_DEFAULT_KEY).await,
            ChainStep::History => Ok(store
                .latest_unit_ordem(round_id)
                .await?
                .and_then(|ordem| u32::try_from(ordem).ok())
                .filter(|count| *count > 0)),
        }
    }
}

impl PlannedUnitsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlannedUnitsSource::RoundOverride => "round override",
            PlannedUnitsSource::GlobalDefault => "global default",
            PlannedUnitsSource::History => "round history",
            PlannedUnitsSource::Default => "built-in default",
        }
    }
}

impl fmt::Display for PlannedUnitsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored counts must be positive decimal integers, anything else reads as absent.
fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|count| *count > 0)
}

async fn stored_count(store: &dyn ConfigStore, key: &str) -> Result<Option<u32>> {
    let Some(entry) = store.find_config(key).await? else {
        return Ok(None);
    };
    let count = parse_count(&entry.value);
    if count.is_none() {
        tracing::warn!(
            "ignoring config '{}': '{}' is not a positive integer",
            key,
            entry.value
        );
    }
    Ok(count)
}

/// Resolves and persists round configuration against an injected [`ConfigStore`].
#[derive(Clone)]
pub struct ConfigResolver {
    store: Arc<dyn ConfigStore>,
}

impl ConfigResolver {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Planned unit count of a round and the source that produced it.
    /// A failing source is logged and skipped.
    pub async fn resolve_planned_units(&self, round_id: &str) -> (u32, PlannedUnitsSource) {
        for step in FALLBACK_CHAIN {
            let source = step.source();
            match step.lookup(self.store.as_ref(), round_id).await {
                Ok(Some(count)) => {
                    tracing::debug!(
                        "round {}: {} planned units from {}",
                        round_id,
                        count,
                        source
                    );
                    return (count, source);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!("round {}: failed to read {}: {}", round_id, source, e);
                }
            }
        }
        tracing::debug!(
            "round {}: no planned units configured, using {}",
            round_id,
            DEFAULT_PLANNED_UNITS
        );
        (DEFAULT_PLANNED_UNITS, PlannedUnitsSource::Default)
    }

    /// Effective configuration of a round, never fails
    pub async fn get_round_config(&self, round_id: &str) -> RoundConfig {
        let (planned_unit_count, _) = self.resolve_planned_units(round_id).await;
        RoundConfig {
            planned_unit_count,
            per_unit_time_limit: 0,
        }
    }

    /// Store the planned unit count of a round, overwriting any previous value
    pub async fn save_round_config(&self, round_id: &str, planned_unit_count: u32) -> Result<()> {
        let key = round_units_planned_key(round_id);
        let description = format!("Planned pizzas for round {round_id}");
        self.store
            .upsert_config(&key, &planned_unit_count.to_string(), &description)
            .await
            .inspect_err(|e| {
                tracing::error!("failed to save planned units of round {}: {}", round_id, e)
            })?;
        tracing::info!(
            "round {}: planned units set to {}",
            round_id,
            planned_unit_count
        );
        Ok(())
    }

    /// Store the maximum number of finalized rounds
    pub async fn save_round_limit(&self, max_rounds: u32) -> Result<()> {
        self.store
            .upsert_config(
                TOTAL_ROUND_LIMIT_KEY,
                &max_rounds.to_string(),
                "Maximum number of finalized rounds in a game",
            )
            .await
            .inspect_err(|e| tracing::error!("failed to save round limit: {}", e))?;
        tracing::info!("round limit set to {}", max_rounds);
        Ok(())
    }

    /// Stored round limit, or [`DEFAULT_ROUND_LIMIT`] if absent, invalid or unreadable
    pub async fn get_round_limit(&self) -> u32 {
        match self.store.find_config(TOTAL_ROUND_LIMIT_KEY).await {
            Ok(Some(entry)) => parse_count(&entry.value).unwrap_or_else(|| {
                tracing::warn!(
                    "ignoring config '{}': '{}' is not a positive integer",
                    TOTAL_ROUND_LIMIT_KEY,
                    entry.value
                );
                DEFAULT_ROUND_LIMIT
            }),
            Ok(None) => DEFAULT_ROUND_LIMIT,
            Err(e) => {
                tracing::error!("failed to read round limit: {}", e);
                DEFAULT_ROUND_LIMIT
            }
        }
    }

    /// Whether the finalized rounds have reached the round limit.
    /// A failure listing rounds gives `{exceeded: false, finalized_count: 0, limit: 5}`.
    pub async fn check_round_limit_exceeded(&self) -> RoundLimitStatus {
        let limit = self.get_round_limit().await;
        let rounds = match self.store.rounds_by_number_desc().await {
            Ok(rounds) => rounds,
            Err(e) => {
                tracing::error!("failed to list rounds: {}", e);
                return RoundLimitStatus::default();
            }
        };

        let finalized = rounds.iter().filter(|r| r.is_finalized()).count();
        tracing::debug!(
            "{} rounds created, {} finalized, limit {}",
            rounds.len(),
            finalized,
            limit
        );
        let finalized_count = u32::try_from(finalized).unwrap_or(u32::MAX);
        RoundLimitStatus {
            exceeded: finalized_count >= limit,
            finalized_count,
            limit,
        }
    }
}
