//! The season loop shared by every dataset command.
//!
//! A command creates its CSV sink, then hands a per-season fetch function to
//! [`collect_seasons`], which writes rows, logs progress and keeps a tally of
//! what was skipped.

use std::{future::Future, io::Write, path::Path};

use tracing::{info, warn};

use crate::{
    cli::types::{Season, SeasonRange},
    collect::{Collected, FetchFailure, Pacing},
    core::CsvSink,
    models::CsvRow,
    Result,
};

/// How to walk the seasons of one run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub range: SeasonRange,
    /// Abort on the first failure instead of logging it and moving on.
    pub strict: bool,
}

/// Totals for one dataset.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub seasons: usize,
    pub rows: usize,
    /// Human-readable description of every skipped season or week.
    pub failures: Vec<String>,
}

impl RunSummary {
    pub fn merge(&mut self, other: RunSummary) {
        self.seasons = self.seasons.max(other.seasons);
        self.rows += other.rows;
        self.failures.extend(other.failures);
    }
}

/// Fetch every season in `options.range` and append the rows to `sink`,
/// sleeping `pacing.year_delay` between seasons.
pub async fn collect_seasons<R, W, F, Fut>(
    dataset: &'static str,
    sink: &mut CsvSink<R, W>,
    options: &RunOptions,
    pacing: Pacing,
    mut fetch: F,
) -> Result<RunSummary>
where
    R: CsvRow,
    W: Write,
    F: FnMut(Season) -> Fut,
    Fut: Future<Output = Result<Collected<Vec<R>>>>,
{
    let mut summary = RunSummary::default();
    let last = options.range.end();

    for season in options.range.iter() {
        info!("Processing year {} ({})", season, dataset);

        match fetch(season).await {
            Ok(Collected { data, failures }) => {
                if options.strict {
                    if let Some(first) = failures.into_iter().next() {
                        return Err(first.error);
                    }
                } else {
                    summary
                        .failures
                        .extend(failures.iter().map(ToString::to_string));
                }
                let written = sink.write_rows(&data)?;
                summary.rows += written;
                info!(rows = written, "Completed {} for {}", dataset, season);
            }
            Err(error) => {
                warn!(%error, "Error getting {} for {}", dataset, season);
                if options.strict {
                    return Err(error);
                }
                summary
                    .failures
                    .push(FetchFailure::season(dataset, season, error).to_string());
            }
        }

        summary.seasons += 1;
        if season != last {
            pacing.after_year().await;
        }
    }

    Ok(summary)
}

/// Print where the data went and what was skipped.
pub fn report(dataset: &str, path: &Path, summary: &RunSummary) {
    println!(
        "\n✓ {} rows of {} saved to {}",
        summary.rows,
        dataset,
        path.display()
    );
    if !summary.failures.is_empty() {
        println!(
            "⚠ {} fetches failed and were skipped:",
            summary.failures.len()
        );
        for failure in &summary.failures {
            println!("  - {}", failure);
        }
    }
}
