//! Significant games: bowls, ranked matchups and upsets.

use tracing::info;

use super::{Collected, Collector};
use crate::{
    cfbd::types::Game,
    cli::types::{Season, Week},
    models::{MediaLookup, RankingLookup, SignificanceTag, SignificantGame},
    Result,
};

impl Collector<'_> {
    /// Every game of the season that earns at least one significance tag.
    ///
    /// The games list is fetched once; the ranking and media lookups are then
    /// built week by week and their failures are folded into the result.
    pub async fn fetch_significant_games(
        &self,
        season: Season,
    ) -> Result<Collected<Vec<SignificantGame>>> {
        let games = self.client.games(season, None).await?;
        info!(%season, games = games.len(), "classifying games");

        let rankings = self.fetch_rankings(season).await;
        let media = self.fetch_media(season).await;

        let rows = games
            .iter()
            .filter_map(|g| classify_game(season, g, &rankings.data, &media.data))
            .collect();

        let mut failures = rankings.failures;
        failures.extend(media.failures);

        Ok(Collected {
            data: rows,
            failures,
        })
    }
}

/// Apply the significance predicate. Returns `None` for a game with no tags.
pub fn classify_game(
    season: Season,
    game: &Game,
    rankings: &RankingLookup,
    media: &MediaLookup,
) -> Option<SignificantGame> {
    let mut tags = Vec::new();

    if game.is_postseason() {
        tags.push(SignificanceTag::BowlGame);
    }

    let rank_of = |team: &Option<String>| {
        let week = Week::new(game.week?);
        rankings.rank(week, team.as_deref()?)
    };
    let home_rank = rank_of(&game.home_team);
    let away_rank = rank_of(&game.away_team);

    if home_rank.is_some() || away_rank.is_some() {
        tags.push(SignificanceTag::RankedMatchup);

        if let (Some(home), Some(away)) = (home_rank, away_rank) {
            if is_upset(home, away, game.home_points, game.away_points) {
                tags.push(SignificanceTag::UpsetVictory);
            }
        }
    }

    if tags.is_empty() {
        return None;
    }

    Some(SignificantGame {
        year: season.as_u16(),
        week: game.week,
        date: game.start_date.clone(),
        home_team: game.home_team.clone(),
        home_conference: game.home_conference.clone(),
        home_points: game.home_points,
        away_team: game.away_team.clone(),
        away_conference: game.away_conference.clone(),
        away_points: game.away_points,
        significance: tags,
        home_rank,
        away_rank,
        outlet: media.outlet(game.id).map(str::to_string),
    })
}

/// The team with the numerically higher (worse) rank won on points.
///
/// A game without both scores is never an upset.
pub fn is_upset(
    home_rank: u16,
    away_rank: u16,
    home_points: Option<u16>,
    away_points: Option<u16>,
) -> bool {
    let (Some(home_points), Some(away_points)) = (home_points, away_points) else {
        return false;
    };
    (home_rank > away_rank && home_points > away_points)
        || (away_rank > home_rank && away_points > home_points)
}
