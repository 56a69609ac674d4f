//! Reads and writes the planned pizza count of a round.

use clap::Subcommand;
use serde::Serialize;

use crate::internal::config::{ConfigResolver, PlannedUnitsSource, RoundConfig};

#[derive(Subcommand, Debug)]
pub enum RoundCmds {
    /// Show the effective planned pizza count of a round and where it comes from
    Get {
        /// The round id
        round_id: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Set the planned pizza count of a round
    Set {
        /// The round id
        round_id: String,
        /// Number of pizzas planned for the round
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
    },
}

#[derive(Serialize)]
struct ResolvedRound<'a> {
    #[serde(flatten)]
    config: RoundConfig,
    source: PlannedUnitsSource,
    #[serde(rename = "roundId")]
    round_id: &'a str,
}

pub async fn execute(cmd: RoundCmds, resolver: &ConfigResolver) -> anyhow::Result<()> {
    match cmd {
        RoundCmds::Get { round_id, json } => {
            let (planned_unit_count, source) = resolver.resolve_planned_units(&round_id).await;
            let config = RoundConfig {
                planned_unit_count,
                per_unit_time_limit: 0,
            };
            if json {
                let resolved = ResolvedRound {
                    config,
                    source,
                    round_id: &round_id,
                };
                println!("{}", serde_json::to_string(&resolved)?);
            } else {
                println!(
                    "round {}: {} planned pizzas ({})",
                    round_id, config.planned_unit_count, source
                );
            }
        }
        RoundCmds::Set { round_id, count } => {
            resolver.save_round_config(&round_id, count).await?;
            println!("round {round_id}: planned pizzas set to {count}");
        }
    }
    Ok(())
}
