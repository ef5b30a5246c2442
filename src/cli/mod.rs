//! CLI argument definitions and parsing.

pub mod types;

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use types::{Season, SeasonRange};

use crate::{
    collect::{Pacing, DEFAULT_CLASSIFICATION, DEFAULT_POLL},
    commands::common::RunOptions,
    Result,
};

/// Default sleep between weekly requests, in milliseconds.
pub const DEFAULT_WEEK_DELAY_MS: u64 = 500;

/// Default sleep between years for every dataset except betting lines.
pub const DEFAULT_YEAR_DELAY_MS: u64 = 500;

/// Year range, pacing and failure policy shared by every command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// First season to collect (defaults per command).
    #[clap(long)]
    pub start_year: Option<Season>,

    /// Last season to collect, inclusive (defaults per command).
    #[clap(long)]
    pub end_year: Option<Season>,

    /// Sleep between weekly requests.
    #[clap(long, default_value_t = DEFAULT_WEEK_DELAY_MS)]
    pub week_delay_ms: u64,

    /// Sleep between years (defaults per command).
    #[clap(long)]
    pub year_delay_ms: Option<u64>,

    /// Stop at the first failed fetch instead of logging it and moving on.
    #[clap(long)]
    pub strict: bool,
}

impl RunArgs {
    /// Seasons to walk, falling back to the command's defaults.
    pub fn range(&self, default_start: u16, default_end: u16) -> Result<SeasonRange> {
        SeasonRange::new(
            self.start_year.unwrap_or(Season::new(default_start)),
            self.end_year.unwrap_or(Season::new(default_end)),
        )
    }

    /// Week and year sleeps; `default_year_delay` applies unless `--year-delay-ms` is set.
    pub fn pacing(&self, default_year_delay: Duration) -> Pacing {
        Pacing::new(
            Duration::from_millis(self.week_delay_ms),
            self.year_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(default_year_delay),
        )
    }

    pub fn options(&self, default_start: u16, default_end: u16) -> Result<RunOptions> {
        Ok(RunOptions {
            range: self.range(default_start, default_end)?,
            strict: self.strict,
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Team season records (total, conference, home and away splits).
    Records {
        #[clap(flatten)]
        run: RunArgs,

        /// Output CSV file.
        #[clap(long, short, default_value = crate::commands::records::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Keep only teams of this classification.
        #[clap(long, default_value = DEFAULT_CLASSIFICATION)]
        classification: String,

        /// Keep only the first record per team within a season.
        #[clap(long)]
        dedupe_teams: bool,
    },

    /// Betting lines, one row per game and provider.
    ///
    /// Walks weeks 1 through the season's last week from `/games`.
    BettingLines {
        #[clap(flatten)]
        run: RunArgs,

        /// Output CSV file.
        #[clap(long, short, default_value = crate::commands::betting_lines::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Attach the broadcast outlet of each game (extra `/games/media` calls).
        #[clap(long)]
        with_media: bool,
    },

    /// Weekly Elo ratings per team.
    Elo {
        #[clap(flatten)]
        run: RunArgs,

        /// Output CSV file.
        #[clap(long, short, default_value = crate::commands::elo_ratings::DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Bowl games, ranked matchups and upsets with ranks and outlet.
    SignificantGames {
        #[clap(flatten)]
        run: RunArgs,

        /// Output CSV file.
        #[clap(long, short, default_value = crate::commands::significant_games::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Poll used for team ranks.
        #[clap(long, default_value = DEFAULT_POLL)]
        poll: String,
    },

    /// Records, betting lines (with outlets) and significant games in one run.
    All {
        #[clap(flatten)]
        run: RunArgs,

        /// Directory the CSV files are written to.
        #[clap(long, default_value = ".")]
        out_dir: PathBuf,

        /// Keep only teams of this classification.
        #[clap(long, default_value = DEFAULT_CLASSIFICATION)]
        classification: String,

        /// Poll used for team ranks.
        #[clap(long, default_value = DEFAULT_POLL)]
        poll: String,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "cfbd-collect",
    about = "Collect CollegeFootballData statistics into CSV files"
)]
pub struct Cfbd {
    #[clap(subcommand)]
    pub command: Commands,
}
