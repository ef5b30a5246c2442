//! ID types for CFBD resources.

use crate::error::{CfbdError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for CFBD game IDs.
///
/// Game IDs are the join key between games, betting lines and media
/// coverage, so they get their own type to keep them apart from team IDs
/// and week numbers.
///
/// # Examples
///
/// ```rust
/// use cfbd_collect::GameId;
///
/// let game_id = GameId::new(401_520_281);
/// assert_eq!(game_id.as_u64(), 401_520_281);
/// assert_eq!(game_id.to_string(), "401520281");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a new GameId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = CfbdError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
