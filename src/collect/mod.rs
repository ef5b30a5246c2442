//! Collectors: turn CFBD responses for one season into output rows.
//!
//! Each `fetch_*` operation walks the weeks of a single season sequentially.
//! Failures are returned, not swallowed: a failure that prevents any work for
//! the season comes back as `Err`, while a failed week is recorded in
//! [`Collected::failures`] and the walk carries on with the next week. The
//! caller decides whether to log and continue or to abort.

pub mod betting;
pub mod elo;
pub mod media;
pub mod rankings;
pub mod records;
pub mod significant;

#[cfg(test)]
mod tests;

use std::{fmt, time::Duration};

use crate::{
    cfbd::{types::Game, CfbdClient},
    cli::types::{Season, Week},
    CfbdError,
};

/// Media and poll lookups cover weeks `1..=LOOKUP_LAST_WEEK`.
pub const LOOKUP_LAST_WEEK: u16 = 15;

/// Poll used for rank lookups unless configured otherwise.
pub const DEFAULT_POLL: &str = "AP Top 25";

/// Classification kept by the records collector unless configured otherwise.
pub const DEFAULT_CLASSIFICATION: &str = "fbs";

/// One fetch that failed and was skipped.
#[derive(Debug)]
pub struct FetchFailure {
    /// What was being fetched, e.g. "betting lines".
    pub dataset: &'static str,
    pub season: Season,
    /// `None` when the whole season failed.
    pub week: Option<Week>,
    pub error: CfbdError,
}

impl FetchFailure {
    pub fn season(dataset: &'static str, season: Season, error: CfbdError) -> Self {
        Self {
            dataset,
            season,
            week: None,
            error,
        }
    }

    pub fn week(dataset: &'static str, season: Season, week: Week, error: CfbdError) -> Self {
        Self {
            dataset,
            season,
            week: Some(week),
            error,
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.week {
            Some(week) => write!(
                f,
                "{} for week {} of {}: {}",
                self.dataset, week, self.season, self.error
            ),
            None => write!(f, "{} for {}: {}", self.dataset, self.season, self.error),
        }
    }
}

/// Data gathered for one season plus the weeks that could not be fetched.
#[derive(Debug)]
pub struct Collected<T> {
    pub data: T,
    pub failures: Vec<FetchFailure>,
}

impl<T> Collected<T> {
    pub fn complete(data: T) -> Self {
        Self {
            data,
            failures: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fixed sleeps between requests. There is no adaptive backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub week_delay: Duration,
    pub year_delay: Duration,
}

impl Pacing {
    pub fn new(week_delay: Duration, year_delay: Duration) -> Self {
        Self {
            week_delay,
            year_delay,
        }
    }

    /// No sleeping at all.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub async fn after_week(&self) {
        pause(self.week_delay).await;
    }

    pub async fn after_year(&self) {
        pause(self.year_delay).await;
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(500))
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// Knobs shared by every collector.
#[derive(Debug, Clone)]
pub struct CollectSettings {
    /// Team classification kept by [`Collector::fetch_records`].
    pub classification: String,
    /// Keep only the first record per team name within a season.
    pub dedupe_teams: bool,
    /// Poll whose ranks feed the ranking lookup.
    pub poll: String,
    /// Attach broadcast outlets to betting lines.
    pub with_media: bool,
    pub pacing: Pacing,
}

impl Default for CollectSettings {
    fn default() -> Self {
        Self {
            classification: DEFAULT_CLASSIFICATION.to_string(),
            dedupe_teams: false,
            poll: DEFAULT_POLL.to_string(),
            with_media: false,
            pacing: Pacing::default(),
        }
    }
}

/// Runs the per-season fetch operations against one API client.
#[derive(Debug, Clone)]
pub struct Collector<'a> {
    client: &'a CfbdClient,
    settings: CollectSettings,
}

impl<'a> Collector<'a> {
    pub fn new(client: &'a CfbdClient, settings: CollectSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &CollectSettings {
        &self.settings
    }

    /// Last week of the season according to `/games`; 0 when there are no games.
    async fn season_max_week(&self, season: Season) -> crate::Result<u16> {
        let games = self.client.games(season, None).await?;
        Ok(max_week(&games))
    }
}

/// Highest week number among `games`, or 0 for an empty slate.
pub fn max_week(games: &[Game]) -> u16 {
    games.iter().filter_map(|g| g.week).max().unwrap_or(0)
}
