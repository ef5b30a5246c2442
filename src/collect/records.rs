//! Team season records.

use std::collections::HashSet;

use tracing::info;

use super::Collector;
use crate::{cfbd::types::TeamRecord, cli::types::Season, models::TeamSeasonRecord, Result};

impl Collector<'_> {
    /// One `/records` call for the season, filtered to the configured classification.
    pub async fn fetch_records(&self, season: Season) -> Result<Vec<TeamSeasonRecord>> {
        info!(%season, "fetching team records");
        let records = self.client.records(season).await?;
        Ok(select_records(
            season,
            records,
            &self.settings.classification,
            self.settings.dedupe_teams,
        ))
    }
}

/// Keep records of `classification`, optionally only the first per team name.
pub fn select_records(
    season: Season,
    records: Vec<TeamRecord>,
    classification: &str,
    dedupe_teams: bool,
) -> Vec<TeamSeasonRecord> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| {
            r.classification
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(classification))
        })
        .filter(|r| !dedupe_teams || seen.insert(r.team.clone()))
        .map(|r| to_record_row(season, r))
        .collect()
}

pub fn to_record_row(season: Season, r: &TeamRecord) -> TeamSeasonRecord {
    TeamSeasonRecord {
        year: season.as_u16(),
        team_id: r.team_id,
        team: r.team.clone(),
        conference: r.conference.clone(),
        division: r.division.clone(),
        total_games: r.total.games,
        total_wins: r.total.wins,
        total_losses: r.total.losses,
        conference_games: r.conference_games.games,
        conference_wins: r.conference_games.wins,
        conference_losses: r.conference_games.losses,
        home_games: r.home_games.games,
        home_wins: r.home_games.wins,
        home_losses: r.home_games.losses,
        away_games: r.away_games.games,
        away_wins: r.away_games.wins,
        away_losses: r.away_games.losses,
        neutral_site_games: r.neutral_site_games.games,
        neutral_site_wins: r.neutral_site_games.wins,
        neutral_site_losses: r.neutral_site_games.losses,
        regular_season_games: r.regular_season.games,
        regular_season_wins: r.regular_season.wins,
        regular_season_losses: r.regular_season.losses,
        postseason_games: r.postseason.games,
        postseason_wins: r.postseason.wins,
        postseason_losses: r.postseason.losses,
        expected_wins: r.expected_wins,
    }
}
