//! Reads, writes and checks the total round limit.

use clap::Subcommand;

use crate::internal::config::ConfigResolver;

#[derive(Subcommand, Debug)]
pub enum LimitCmds {
    /// Show the maximum number of finalized rounds
    Get,
    /// Set the maximum number of finalized rounds
    Set {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        max_rounds: u32,
    },
    /// Check whether the finalized rounds have reached the limit
    Check {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub async fn execute(cmd: LimitCmds, resolver: &ConfigResolver) -> anyhow::Result<()> {
    match cmd {
        LimitCmds::Get => println!("{}", resolver.get_round_limit().await),
        LimitCmds::Set { max_rounds } => {
            resolver.save_round_limit(max_rounds).await?;
            println!("round limit set to {max_rounds}");
        }
        LimitCmds::Check { json } => {
            let status = resolver.check_round_limit_exceeded().await;
            if json {
                println!("{}", serde_json::to_string(&status)?);
            } else if status.exceeded {
                println!(
                    "{} of {} rounds finalized: limit reached",
                    status.finalized_count, status.limit
                );
            } else {
                println!(
                    "{} of {} rounds finalized",
                    status.finalized_count, status.limit
                );
            }
        }
    }
    Ok(())
}
