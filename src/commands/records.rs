//! `records`: team season records.

use crate::{
    cfbd::CfbdClient,
    collect::{Collected, Collector},
    core::CsvSink,
    models::TeamSeasonRecord,
    Result,
};

use super::{
    common::{collect_seasons, report},
    DatasetParams, RunSummary,
};

pub const DEFAULT_START_YEAR: u16 = 2000;
pub const DEFAULT_END_YEAR: u16 = 2024;
pub const DEFAULT_OUTPUT: &str = "team_records.csv";

pub const DATASET: &str = "team records";

/// Write one row per team per season to `params.output`.
pub async fn handle_records(client: &CfbdClient, params: DatasetParams) -> Result<RunSummary> {
    let mut sink = CsvSink::<TeamSeasonRecord, _>::create(&params.output)?;
    let pacing = params.settings.pacing;
    let collector = Collector::new(client, params.settings);
    let collector = &collector;

    let summary = collect_seasons(
        DATASET,
        &mut sink,
        &params.options,
        pacing,
        move |season| async move { collector.fetch_records(season).await.map(Collected::complete) },
    )
    .await?;

    report(DATASET, &params.output, &summary);
    Ok(summary)
}
