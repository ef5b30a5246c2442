//! Betting lines, one row per (game, provider).

use tracing::{info, warn};

use super::{Collected, Collector, FetchFailure};
use crate::{
    cfbd::types::GameLines,
    cli::types::{Season, Week},
    models::{BettingLine, MediaLookup},
    Result,
};

impl Collector<'_> {
    /// Lines for weeks 1 through the season's last week.
    ///
    /// Fails only when the season's games can't be listed; a failed week is
    /// recorded and skipped. With `with_media` set the season's media lookup
    /// is built first and its failures are folded into the result; a season
    /// without games skips the lookup.
    pub async fn fetch_betting_lines(&self, season: Season) -> Result<Collected<Vec<BettingLine>>> {
        let last_week = self.season_max_week(season).await?;
        let mut failures = Vec::new();

        let media = if self.settings.with_media && last_week > 0 {
            let media = self.fetch_media(season).await;
            failures.extend(media.failures);
            Some(media.data)
        } else {
            None
        };

        let mut rows = Vec::new();
        for week in Week::through(last_week) {
            info!(%season, %week, "fetching betting lines");
            match self.client.lines(season, week).await {
                Ok(games) => rows.extend(flatten_lines(season, week, &games, media.as_ref())),
                Err(error) => {
                    warn!(%season, %week, %error, "error getting betting lines");
                    failures.push(FetchFailure::week("betting lines", season, week, error));
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

/// Expand each game's nested provider lines into flat rows, in API order.
pub fn flatten_lines(
    season: Season,
    week: Week,
    games: &[GameLines],
    media: Option<&MediaLookup>,
) -> Vec<BettingLine> {
    games
        .iter()
        .flat_map(|game| {
            let outlet = media
                .and_then(|m| m.outlet(game.id))
                .map(str::to_string);
            game.lines.iter().map(move |line| BettingLine {
                year: season.as_u16(),
                week: week.as_u16(),
                game_id: game.id,
                season_type: game.season_type.clone(),
                start_date: game.start_date.clone(),
                home_team: game.home_team.clone(),
                home_conference: game.home_conference.clone(),
                home_score: game.home_score,
                away_team: game.away_team.clone(),
                away_conference: game.away_conference.clone(),
                away_score: game.away_score,
                provider: line.provider.clone(),
                spread: line.spread,
                formatted_spread: line.formatted_spread.clone(),
                spread_open: line.spread_open,
                over_under: line.over_under,
                over_under_open: line.over_under_open,
                home_moneyline: line.home_moneyline,
                away_moneyline: line.away_moneyline,
                outlet: outlet.clone(),
            })
        })
        .collect()
}
