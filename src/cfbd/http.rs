//! HTTP client for the CFBD API.

use std::time::Duration;

use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cfbd::types::{Game, GameLines, GameMedia, PollWeek, TeamElo, TeamRecord},
    cli::types::{Season, Week},
    core::{auth_header_map, Config},
    CfbdError, Result,
};


const USER_AGENT: &str = concat!("cfbd-collect/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin typed wrapper over the endpoints the collectors use.
///
/// Requests are made one at a time by the callers; the client holds a single
/// connection pool for the whole run.
#[derive(Debug, Clone)]
pub struct CfbdClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
}

impl CfbdClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(&config.host, &config.api_key)
    }

    /// Point the client at an arbitrary host (used by tests against a mock server).
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: auth_header_map(api_key)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /games`: every game of a season, or of one week when `week` is set.
    pub async fn games(&self, season: Season, week: Option<Week>) -> Result<Vec<Game>> {
        let mut query = vec![("year", season.to_string())];
        if let Some(week) = week {
            query.push(("week", week.to_string()));
        }
        self.get_json("/games", &query).await
    }

    /// `GET /records`
    pub async fn records(&self, season: Season) -> Result<Vec<TeamRecord>> {
        self.get_json("/records", &[("year", season.to_string())])
            .await
    }

    /// `GET /lines`
    pub async fn lines(&self, season: Season, week: Week) -> Result<Vec<GameLines>> {
        self.get_json("/lines", &season_week(season, week)).await
    }

    /// `GET /ratings/elo`
    pub async fn elo(&self, season: Season, week: Week) -> Result<Vec<TeamElo>> {
        self.get_json("/ratings/elo", &season_week(season, week))
            .await
    }

    /// `GET /games/media`
    pub async fn media(&self, season: Season, week: Week) -> Result<Vec<GameMedia>> {
        self.get_json("/games/media", &season_week(season, week))
            .await
    }

    /// `GET /rankings`
    pub async fn rankings(&self, season: Season, week: Week) -> Result<Vec<PollWeek>> {
        self.get_json("/rankings", &season_week(season, week))
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let res = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .query(query)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(CfbdError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        let bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn season_week(season: Season, week: Week) -> [(&'static str, String); 2] {
    [("year", season.to_string()), ("week", week.to_string())]
}
