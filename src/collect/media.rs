//! Broadcast outlet lookup.

use tracing::warn;

use super::{Collected, Collector, FetchFailure, LOOKUP_LAST_WEEK};
use crate::{
    cfbd::types::GameMedia,
    cli::types::{Season, Week},
    models::MediaLookup,
};

impl Collector<'_> {
    /// Outlet by game id for weeks 1 through 15 of the season.
    pub async fn fetch_media(&self, season: Season) -> Collected<MediaLookup> {
        let mut lookup = MediaLookup::new();
        let mut failures = Vec::new();

        for week in Week::through(LOOKUP_LAST_WEEK) {
            match self.client.media(season, week).await {
                Ok(entries) => add_media(&mut lookup, &entries),
                Err(error) => {
                    warn!(%season, %week, %error, "error getting media info");
                    failures.push(FetchFailure::week("media", season, week, error));
                }
            }
            self.settings.pacing.after_week().await;
        }

        Collected {
            data: lookup,
            failures,
        }
    }
}

/// Entries without an outlet are skipped.
pub fn add_media(lookup: &mut MediaLookup, entries: &[GameMedia]) {
    for entry in entries {
        if let Some(outlet) = entry.outlet.as_deref().filter(|o| !o.is_empty()) {
            lookup.insert(entry.id, outlet);
        }
    }
}
