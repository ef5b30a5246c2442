//! CollegeFootballData CSV collector
//!
//! Pulls team records, betting lines, Elo ratings and "significant games"
//! from the CollegeFootballData (CFBD) API and writes each dataset to a CSV
//! file with a fixed header.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cfbd_collect::{
//!     cfbd::CfbdClient,
//!     collect::{CollectSettings, Collector},
//!     core::Config,
//!     Season,
//! };
//!
//! # async fn example() -> cfbd_collect::Result<()> {
//! let client = CfbdClient::new(&Config::from_env()?)?;
//! let collector = Collector::new(&client, CollectSettings::default());
//!
//! let lines = collector.fetch_betting_lines(Season::new(2015)).await?;
//! for failure in &lines.failures {
//!     eprintln!("skipped {failure}");
//! }
//! println!("{} betting lines", lines.data.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The API key is read from the environment (or a `.env` file):
//! ```bash
//! export CFBD_API_KEY=your-token
//! ```

pub mod cfbd;
pub mod cli;
pub mod collect;
pub mod commands;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use cli::types::{GameId, Season, SeasonRange, Week};
pub use error::{CfbdError, Result};

pub const API_KEY_ENV_VAR: &str = "CFBD_API_KEY";
pub const HOST_ENV_VAR: &str = "CFBD_HOST";
