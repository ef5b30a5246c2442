//! Response payloads of the CFBD API.
//!
//! Only the fields the collectors read are modelled; serde ignores the rest.
//! Almost everything is optional because the API omits or nulls fields
//! freely, especially for older seasons.

use crate::cli::types::GameId;
use serde::{Deserialize, Serialize};


/// Season type value marking bowl and playoff games.
pub const POSTSEASON: &str = "postseason";

/// One entry of `/games`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    #[serde(default)]
    pub season: Option<u16>,
    #[serde(default)]
    pub week: Option<u16>,
    #[serde(default)]
    pub season_type: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub home_conference: Option<String>,
    #[serde(default)]
    pub home_points: Option<u16>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub away_conference: Option<String>,
    #[serde(default)]
    pub away_points: Option<u16>,
}

impl Game {
    pub fn is_postseason(&self) -> bool {
        self.season_type.as_deref() == Some(POSTSEASON)
    }
}

/// Games / wins / losses for one split of a team record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordSplit {
    #[serde(default)]
    pub games: Option<u16>,
    #[serde(default)]
    pub wins: Option<u16>,
    #[serde(default)]
    pub losses: Option<u16>,
    #[serde(default)]
    pub ties: Option<u16>,
}

/// One entry of `/records`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub team_id: Option<u32>,
    pub team: String,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub expected_wins: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: RecordSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conference_games: RecordSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub home_games: RecordSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub away_games: RecordSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub neutral_site_games: RecordSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub regular_season: RecordSplit,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postseason: RecordSplit,
}

/// A single sportsbook's line for a game.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLine {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub spread: Option<f64>,
    #[serde(default)]
    pub formatted_spread: Option<String>,
    #[serde(default)]
    pub spread_open: Option<f64>,
    #[serde(default)]
    pub over_under: Option<f64>,
    #[serde(default)]
    pub over_under_open: Option<f64>,
    #[serde(default)]
    pub home_moneyline: Option<i64>,
    #[serde(default)]
    pub away_moneyline: Option<i64>,
}

/// One entry of `/lines`: a game with its per-provider lines nested inside.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLines {
    pub id: GameId,
    #[serde(default)]
    pub season_type: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub home_conference: Option<String>,
    #[serde(default)]
    pub home_score: Option<u16>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub away_conference: Option<String>,
    #[serde(default)]
    pub away_score: Option<u16>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lines: Vec<ProviderLine>,
}

/// One entry of `/ratings/elo`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamElo {
    #[serde(default)]
    pub year: Option<u16>,
    pub team: String,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub elo: Option<i64>,
}

/// One entry of `/games/media`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMedia {
    pub id: GameId,
    #[serde(default)]
    pub week: Option<u16>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub outlet: Option<String>,
}

/// A ranked team inside a poll.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankedTeam {
    #[serde(default)]
    pub rank: Option<u16>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
}

/// A named poll ("AP Top 25", "Coaches Poll", ...).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Poll {
    #[serde(default)]
    pub poll: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ranks: Vec<RankedTeam>,
}

/// One entry of `/rankings`: every poll published for a week.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollWeek {
    #[serde(default)]
    pub season: Option<u16>,
    #[serde(default)]
    pub season_type: Option<String>,
    #[serde(default)]
    pub week: Option<u16>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub polls: Vec<Poll>,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
