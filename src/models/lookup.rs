//! Per-year lookups used to enrich rows. Built fresh for each season and
//! dropped once that season's rows are written.

use std::collections::{BTreeMap, HashMap};

use crate::cli::types::{GameId, Week};

/// Broadcast outlet by game id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaLookup {
    outlets: HashMap<GameId, String>,
}

impl MediaLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outlet; a later entry for the same game replaces the earlier one.
    pub fn insert(&mut self, game_id: GameId, outlet: impl Into<String>) {
        self.outlets.insert(game_id, outlet.into());
    }

    pub fn outlet(&self, game_id: GameId) -> Option<&str> {
        self.outlets.get(&game_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.outlets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outlets.is_empty()
    }
}

/// Poll rank by week, then by school name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingLookup {
    by_week: BTreeMap<Week, HashMap<String, u16>>,
}

impl RankingLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ranks stored for `week`.
    pub fn set_week<I, S>(&mut self, week: Week, ranks: I)
    where
        I: IntoIterator<Item = (S, u16)>,
        S: Into<String>,
    {
        let ranks = ranks.into_iter().map(|(s, r)| (s.into(), r)).collect();
        self.by_week.insert(week, ranks);
    }

    pub fn rank(&self, week: Week, school: &str) -> Option<u16> {
        self.by_week.get(&week)?.get(school).copied()
    }

    pub fn has_week(&self, week: Week) -> bool {
        self.by_week.contains_key(&week)
    }

    /// Number of weeks with a poll.
    pub fn weeks(&self) -> usize {
        self.by_week.len()
    }
}
