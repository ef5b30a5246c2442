//! Output rows, one struct per CSV dataset.
//!
//! Field order is column order: the sink writes [`CsvRow::HEADERS`] once and
//! then serializes each row positionally.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::cli::types::GameId;

/// A row type with a fixed CSV header.
pub trait CsvRow: Serialize {
    const HEADERS: &'static [&'static str];
}

/// Win/loss record of one team for one season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSeasonRecord {
    pub year: u16,
    pub team_id: Option<u32>,
    pub team: String,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub total_games: Option<u16>,
    pub total_wins: Option<u16>,
    pub total_losses: Option<u16>,
    pub conference_games: Option<u16>,
    pub conference_wins: Option<u16>,
    pub conference_losses: Option<u16>,
    pub home_games: Option<u16>,
    pub home_wins: Option<u16>,
    pub home_losses: Option<u16>,
    pub away_games: Option<u16>,
    pub away_wins: Option<u16>,
    pub away_losses: Option<u16>,
    pub neutral_site_games: Option<u16>,
    pub neutral_site_wins: Option<u16>,
    pub neutral_site_losses: Option<u16>,
    pub regular_season_games: Option<u16>,
    pub regular_season_wins: Option<u16>,
    pub regular_season_losses: Option<u16>,
    pub postseason_games: Option<u16>,
    pub postseason_wins: Option<u16>,
    pub postseason_losses: Option<u16>,
    pub expected_wins: Option<f64>,
}

impl CsvRow for TeamSeasonRecord {
    const HEADERS: &'static [&'static str] = &[
        "year",
        "team_id",
        "team",
        "conference",
        "division",
        "total_games",
        "total_wins",
        "total_losses",
        "conference_games",
        "conference_wins",
        "conference_losses",
        "home_games",
        "home_wins",
        "home_losses",
        "away_games",
        "away_wins",
        "away_losses",
        "neutral_site_games",
        "neutral_site_wins",
        "neutral_site_losses",
        "regular_season_games",
        "regular_season_wins",
        "regular_season_losses",
        "postseason_games",
        "postseason_wins",
        "postseason_losses",
        "expected_wins",
    ];
}

/// One sportsbook's line for one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BettingLine {
    pub year: u16,
    pub week: u16,
    pub game_id: GameId,
    pub season_type: Option<String>,
    pub start_date: Option<String>,
    pub home_team: Option<String>,
    pub home_conference: Option<String>,
    pub home_score: Option<u16>,
    pub away_team: Option<String>,
    pub away_conference: Option<String>,
    pub away_score: Option<u16>,
    pub provider: Option<String>,
    pub spread: Option<f64>,
    pub formatted_spread: Option<String>,
    pub spread_open: Option<f64>,
    pub over_under: Option<f64>,
    pub over_under_open: Option<f64>,
    pub home_moneyline: Option<i64>,
    pub away_moneyline: Option<i64>,
    pub outlet: Option<String>,
}

impl CsvRow for BettingLine {
    const HEADERS: &'static [&'static str] = &[
        "year",
        "week",
        "game_id",
        "season_type",
        "start_date",
        "home_team",
        "home_conference",
        "home_score",
        "away_team",
        "away_conference",
        "away_score",
        "provider",
        "spread",
        "formatted_spread",
        "spread_open",
        "over_under",
        "over_under_open",
        "home_moneyline",
        "away_moneyline",
        "outlet",
    ];
}

/// Elo rating of one team after one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EloRating {
    pub year: u16,
    pub week: u16,
    pub team: String,
    pub conference: Option<String>,
    pub elo: Option<i64>,
}

impl CsvRow for EloRating {
    const HEADERS: &'static [&'static str] = &["year", "week", "team", "conference", "elo"];
}

/// Why a game counts as significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignificanceTag {
    BowlGame,
    RankedMatchup,
    UpsetVictory,
}

impl SignificanceTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignificanceTag::BowlGame => "bowl_game",
            SignificanceTag::RankedMatchup => "ranked_matchup",
            SignificanceTag::UpsetVictory => "upset_victory",
        }
    }
}

impl fmt::Display for SignificanceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bowl game, ranked matchup or upset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignificantGame {
    pub year: u16,
    pub week: Option<u16>,
    pub date: Option<String>,
    pub home_team: Option<String>,
    pub home_conference: Option<String>,
    pub home_points: Option<u16>,
    pub away_team: Option<String>,
    pub away_conference: Option<String>,
    pub away_points: Option<u16>,
    #[serde(serialize_with = "join_tags")]
    pub significance: Vec<SignificanceTag>,
    pub home_rank: Option<u16>,
    pub away_rank: Option<u16>,
    pub outlet: Option<String>,
}

impl SignificantGame {
    pub fn has_tag(&self, tag: SignificanceTag) -> bool {
        self.significance.contains(&tag)
    }
}

impl CsvRow for SignificantGame {
    const HEADERS: &'static [&'static str] = &[
        "year",
        "week",
        "date",
        "home_team",
        "home_conference",
        "home_points",
        "away_team",
        "away_conference",
        "away_points",
        "significance",
        "home_rank",
        "away_rank",
        "outlet",
    ];
}

fn join_tags<S: Serializer>(tags: &[SignificanceTag], serializer: S) -> Result<S::Ok, S::Error> {
    let joined = tags
        .iter()
        .map(SignificanceTag::as_str)
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}
