//! Time-related types for college football seasons and weeks.

use crate::error::{CfbdError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = CfbdError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Weeks `1..=last`, empty when `last` is 0.
    pub fn through(last: u16) -> impl Iterator<Item = Week> {
        (1..=last).map(Week)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = CfbdError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Inclusive range of seasons a command walks through, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRange {
    start: Season,
    end: Season,
}

impl SeasonRange {
    pub fn new(start: Season, end: Season) -> Result<Self> {
        if start > end {
            return Err(CfbdError::InvalidRange {
                start: start.as_u16(),
                end: end.as_u16(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Season {
        self.start
    }

    pub fn end(&self) -> Season {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end.as_u16() - self.start.as_u16()) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = Season> {
        (self.start.as_u16()..=self.end.as_u16()).map(Season)
    }
}

impl fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_from_str() {
        assert_eq!("2015".parse::<Season>().unwrap(), Season::new(2015));
        assert_eq!(" 2015 ".parse::<Season>().unwrap(), Season::new(2015));
        assert!("twenty-fifteen".parse::<Season>().is_err());
    }

    #[test]
    fn test_week_through() {
        let weeks: Vec<u16> = Week::through(4).map(|w| w.as_u16()).collect();
        assert_eq!(weeks, vec![1, 2, 3, 4]);
        assert_eq!(Week::through(0).count(), 0);
    }

    #[test]
    fn test_season_range_iter() {
        let range = SeasonRange::new(Season::new(2013), Season::new(2016)).unwrap();
        let years: Vec<u16> = range.iter().map(|s| s.as_u16()).collect();
        assert_eq!(years, vec![2013, 2014, 2015, 2016]);
        assert_eq!(range.len(), 4);
        assert_eq!(range.to_string(), "2013-2016");
    }

    #[test]
    fn test_season_range_single_year() {
        let range = SeasonRange::new(Season::new(2020), Season::new(2020)).unwrap();
        assert_eq!(range.len(), 1);
        assert_eq!(range.iter().next(), Some(Season::new(2020)));
    }

    #[test]
    fn test_season_range_rejects_reversed() {
        let err = SeasonRange::new(Season::new(2024), Season::new(2000)).unwrap_err();
        match err {
            CfbdError::InvalidRange { start, end } => {
                assert_eq!(start, 2024);
                assert_eq!(end, 2000);
            }
            other => panic!("Expected InvalidRange, got {other:?}"),
        }
    }
}
