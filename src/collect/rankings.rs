//! Poll rank lookup.

use tracing::warn;

use super::{Collected, Collector, FetchFailure, LOOKUP_LAST_WEEK};
use crate::{
    cfbd::types::PollWeek,
    cli::types::{Season, Week},
    models::RankingLookup,
};

impl Collector<'_> {
    /// Ranks from the configured poll for weeks 1 through 15 of the season.
    pub async fn fetch_rankings(&self, season: Season) -> Collected<RankingLookup> {
        let mut lookup = RankingLookup::new();
        let mut failures = Vec::new();

        for week in Week::through(LOOKUP_LAST_WEEK) {
            match self.client.rankings(season, week).await {
                Ok(polls) => add_poll_week(&mut lookup, week, &polls, &self.settings.poll),
                Err(error) => {
                    warn!(%season, %week, %error, "error getting rankings");
                    failures.push(FetchFailure::week("rankings", season, week, error));
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

/// Store the ranks of `poll_name` for `week`. Other polls are ignored; if the
/// poll shows up more than once the last one wins. Entries missing a school or
/// a rank are skipped.
pub fn add_poll_week(lookup: &mut RankingLookup, week: Week, polls: &[PollWeek], poll_name: &str) {
    for entry in polls {
        for poll in entry
            .polls
            .iter()
            .filter(|p| p.poll.as_deref() == Some(poll_name))
        {
            lookup.set_week(
                week,
                poll.ranks
                    .iter()
                    .filter_map(|r| Some((r.school.as_deref()?, r.rank?))),
            );
        }
    }
}
