//! Weekly Elo ratings.

use tracing::{info, warn};

use super::{Collected, Collector, FetchFailure};
use crate::{
    cfbd::types::TeamElo,
    cli::types::{Season, Week},
    models::EloRating,
    Result,
};

impl Collector<'_> {
    /// Ratings for weeks 1 through the season's last week.
    pub async fn fetch_elo_ratings(&self, season: Season) -> Result<Collected<Vec<EloRating>>> {
        let last_week = self.season_max_week(season).await?;
        let mut rows = Vec::new();
        let mut failures = Vec::new();

        for week in Week::through(last_week) {
            info!(%season, %week, "fetching elo ratings");
            match self.client.elo(season, week).await {
                Ok(ratings) => rows.extend(ratings.iter().map(|r| to_elo_row(season, week, r))),
                Err(error) => {
                    warn!(%season, %week, %error, "error getting ratings");
                    failures.push(FetchFailure::week("elo ratings", season, week, error));
                }
            }
            self.settings.pacing.after_week().await;
        }

        Ok(Collected {
            data: rows,
            failures,
        })
    }
}

pub fn to_elo_row(season: Season, week: Week, rating: &TeamElo) -> EloRating {
    EloRating {
        year: season.as_u16(),
        week: week.as_u16(),
        team: rating.team.clone(),
        conference: rating.conference.clone(),
        elo: rating.elo,
    }
}
