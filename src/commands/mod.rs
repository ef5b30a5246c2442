//! Command implementations: one handler per dataset plus `all`.
//!
//! Handlers own the output file. They build a [`Collector`](crate::collect::Collector)
//! for the run and drive it year by year through [`common::collect_seasons`].

pub mod betting_lines;
pub mod collect_all;
pub mod common;
pub mod elo_ratings;
pub mod records;
pub mod significant_games;

use std::path::PathBuf;

use crate::collect::CollectSettings;
use common::RunOptions;

pub use common::RunSummary;

/// Everything a single-dataset handler needs besides the client.
#[derive(Debug, Clone)]
pub struct DatasetParams {
    pub options: RunOptions,
    pub settings: CollectSettings,
    pub output: PathBuf,
}
