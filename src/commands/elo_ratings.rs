//! `elo`: weekly Elo ratings per team.

use crate::{cfbd::CfbdClient, collect::Collector, core::CsvSink, models::EloRating, Result};

use super::{
    common::{collect_seasons, report},
    DatasetParams, RunSummary,
};

pub const DEFAULT_START_YEAR: u16 = 2000;
pub const DEFAULT_END_YEAR: u16 = 2023;
pub const DEFAULT_OUTPUT: &str = "team_elo_ratings.csv";

pub const DATASET: &str = "elo ratings";

pub async fn handle_elo_ratings(client: &CfbdClient, params: DatasetParams) -> Result<RunSummary> {
    let mut sink = CsvSink::<EloRating, _>::create(&params.output)?;
    let pacing = params.settings.pacing;
    let collector = Collector::new(client, params.settings);
    let collector = &collector;

    let summary = collect_seasons(DATASET, &mut sink, &params.options, pacing, move |season| {
        collector.fetch_elo_ratings(season)
    })
    .await?;

    report(DATASET, &params.output, &summary);
    Ok(summary)
}
