//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use cfbd_collect::{
    cfbd::CfbdClient,
    cli::{Cfbd, Commands, DEFAULT_YEAR_DELAY_MS},
    collect::CollectSettings,
    commands::{
        betting_lines::{self, handle_betting_lines},
        collect_all::{self, handle_collect_all, CollectAllParams},
        elo_ratings::{self, handle_elo_ratings},
        records::{self, handle_records},
        significant_games::{self, handle_significant_games},
        DatasetParams,
    },
    core::Config,
};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = Cfbd::parse();

    let config = Config::from_env().context("Failed to load CFBD configuration")?;
    let client = CfbdClient::new(&config).context("Failed to build CFBD client")?;
    let year_delay = Duration::from_millis(DEFAULT_YEAR_DELAY_MS);

    match app.command {
        Commands::Records {
            run,
            output,
            classification,
            dedupe_teams,
        } => {
            let options = run.options(records::DEFAULT_START_YEAR, records::DEFAULT_END_YEAR)?;
            let settings = CollectSettings {
                classification,
                dedupe_teams,
                pacing: run.pacing(year_delay),
                ..CollectSettings::default()
            };
            handle_records(
                &client,
                DatasetParams {
                    options,
                    settings,
                    output,
                },
            )
            .await?;
        }

        Commands::BettingLines {
            run,
            output,
            with_media,
        } => {
            let options = run.options(
                betting_lines::DEFAULT_START_YEAR,
                betting_lines::DEFAULT_END_YEAR,
            )?;
            let settings = CollectSettings {
                with_media,
                pacing: run.pacing(betting_lines::DEFAULT_YEAR_DELAY),
                ..CollectSettings::default()
            };
            handle_betting_lines(
                &client,
                DatasetParams {
                    options,
                    settings,
                    output,
                },
            )
            .await?;
        }

        Commands::Elo { run, output } => {
            let options = run.options(
                elo_ratings::DEFAULT_START_YEAR,
                elo_ratings::DEFAULT_END_YEAR,
            )?;
            let settings = CollectSettings {
                pacing: run.pacing(year_delay),
                ..CollectSettings::default()
            };
            handle_elo_ratings(
                &client,
                DatasetParams {
                    options,
                    settings,
                    output,
                },
            )
            .await?;
        }

        Commands::SignificantGames { run, output, poll } => {
            let options = run.options(
                significant_games::DEFAULT_START_YEAR,
                significant_games::DEFAULT_END_YEAR,
            )?;
            let settings = CollectSettings {
                poll,
                pacing: run.pacing(year_delay),
                ..CollectSettings::default()
            };
            handle_significant_games(
                &client,
                DatasetParams {
                    options,
                    settings,
                    output,
                },
            )
            .await?;
        }

        Commands::All {
            run,
            out_dir,
            classification,
            poll,
        } => {
            let options = run.options(
                collect_all::DEFAULT_START_YEAR,
                collect_all::DEFAULT_END_YEAR,
            )?;
            let settings = CollectSettings {
                classification,
                poll,
                pacing: run.pacing(year_delay),
                ..CollectSettings::default()
            };
            handle_collect_all(
                &client,
                CollectAllParams {
                    options,
                    settings,
                    betting_pacing: run.pacing(betting_lines::DEFAULT_YEAR_DELAY),
                    out_dir,
                },
            )
            .await?;
        }
    }

    Ok(())
}
