//! Type-safe wrappers for CFBD identifiers and calendar units.

pub mod ids;
pub mod time;

pub use ids::GameId;
pub use time::{Season, SeasonRange, Week};
