//! `significant-games`: bowls, ranked matchups and upsets.

use crate::{cfbd::CfbdClient, collect::Collector, core::CsvSink, models::SignificantGame, Result};

use super::{
    common::{collect_seasons, report},
    DatasetParams, RunSummary,
};

pub const DEFAULT_START_YEAR: u16 = 2013;
pub const DEFAULT_END_YEAR: u16 = 2025;
pub const DEFAULT_OUTPUT: &str = "significant_games.csv";

pub const DATASET: &str = "significant games";

pub async fn handle_significant_games(
    client: &CfbdClient,
    params: DatasetParams,
) -> Result<RunSummary> {
    let mut sink = CsvSink::<SignificantGame, _>::create(&params.output)?;
    let pacing = params.settings.pacing;
    let collector = Collector::new(client, params.settings);
    let collector = &collector;

    let summary = collect_seasons(DATASET, &mut sink, &params.options, pacing, move |season| {
        collector.fetch_significant_games(season)
    })
    .await?;

    report(DATASET, &params.output, &summary);
    Ok(summary)
}
