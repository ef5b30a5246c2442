//! Data model: the CSV rows each collector produces and the transient
//! lookups used to enrich them.

pub mod lookup;
pub mod rows;

pub use lookup::{MediaLookup, RankingLookup};
pub use rows::{BettingLine, CsvRow, EloRating, SignificanceTag, SignificantGame, TeamSeasonRecord};
