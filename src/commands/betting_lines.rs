//! `betting-lines`: one row per game and provider.

use std::time::Duration;

use crate::{cfbd::CfbdClient, collect::Collector, core::CsvSink, models::BettingLine, Result};

use super::{
    common::{collect_seasons, report},
    DatasetParams, RunSummary,
};

pub const DEFAULT_START_YEAR: u16 = 2000;
pub const DEFAULT_END_YEAR: u16 = 2023;
pub const DEFAULT_OUTPUT: &str = "betting_lines.csv";

/// Betting lines sleep longer between years than the other datasets.
pub const DEFAULT_YEAR_DELAY: Duration = Duration::from_secs(1);

pub const DATASET: &str = "betting lines";

pub async fn handle_betting_lines(
    client: &CfbdClient,
    params: DatasetParams,
) -> Result<RunSummary> {
    let mut sink = CsvSink::<BettingLine, _>::create(&params.output)?;
    let pacing = params.settings.pacing;
    let collector = Collector::new(client, params.settings);
    let collector = &collector;

    let summary = collect_seasons(DATASET, &mut sink, &params.options, pacing, move |season| {
        collector.fetch_betting_lines(season)
    })
    .await?;

    report(DATASET, &params.output, &summary);
    Ok(summary)
}
