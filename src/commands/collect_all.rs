//! `all`: records, betting lines and significant games in one run.
//!
//! Each dataset is collected over the full year range before the next one
//! starts, into its default file name under `out_dir`.

use std::path::PathBuf;

use crate::{
    cfbd::CfbdClient,
    collect::{CollectSettings, Pacing},
    Result,
};

use super::{
    betting_lines::{self, handle_betting_lines},
    common::RunOptions,
    records::{self, handle_records},
    significant_games::{self, handle_significant_games},
    DatasetParams, RunSummary,
};

pub const DEFAULT_START_YEAR: u16 = 2013;
pub const DEFAULT_END_YEAR: u16 = 2025;

#[derive(Debug, Clone)]
pub struct CollectAllParams {
    pub options: RunOptions,
    /// Settings for records and significant games.
    pub settings: CollectSettings,
    /// Betting lines keep their own, longer, year delay.
    pub betting_pacing: Pacing,
    pub out_dir: PathBuf,
}

/// Run every dataset of the combined collection. Betting lines always carry outlets.
pub async fn handle_collect_all(
    client: &CfbdClient,
    params: CollectAllParams,
) -> Result<RunSummary> {
    let CollectAllParams {
        options,
        settings,
        betting_pacing,
        out_dir,
    } = params;

    println!(
        "Collecting records, betting lines and significant games for {} into {}",
        options.range,
        out_dir.display()
    );

    let mut summary = handle_records(
        client,
        DatasetParams {
            options,
            settings: settings.clone(),
            output: out_dir.join(records::DEFAULT_OUTPUT),
        },
    )
    .await?;

    summary.merge(
        handle_betting_lines(
            client,
            DatasetParams {
                options,
                settings: betting_settings(&settings, betting_pacing),
                output: out_dir.join(betting_lines::DEFAULT_OUTPUT),
            },
        )
        .await?,
    );

    summary.merge(
        handle_significant_games(
            client,
            DatasetParams {
                options,
                settings,
                output: out_dir.join(significant_games::DEFAULT_OUTPUT),
            },
        )
        .await?,
    );

    println!(
        "\nCollection complete: {} rows, {} failed fetches",
        summary.rows,
        summary.failures.len()
    );
    Ok(summary)
}

/// Betting-line settings inside `all`: outlets on, betting pacing.
pub fn betting_settings(settings: &CollectSettings, pacing: Pacing) -> CollectSettings {
    CollectSettings {
        with_media: true,
        pacing,
        ..settings.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_betting_settings_use_betting_pacing() {
        let settings = CollectSettings {
            poll: "Coaches Poll".into(),
            ..CollectSettings::default()
        };
        let betting = Pacing::new(Duration::from_millis(500), betting_lines::DEFAULT_YEAR_DELAY);

        let derived = betting_settings(&settings, betting);

        assert!(derived.with_media);
        assert_eq!(derived.pacing.year_delay, Duration::from_secs(1));
        assert_eq!(derived.poll, "Coaches Poll");
        assert_eq!(settings.pacing.year_delay, Duration::from_millis(500));
    }
}
