//! Core utilities for the CFBD collector
//!
//! This module consolidates the plumbing shared by every command:
//! - `config`: API host and key resolution
//! - `http`: request header construction
//! - `sink`: CSV output sink

pub mod config;
pub mod http;
pub mod sink;

// Re-export commonly used items for convenience
pub use config::{resolve_api_key, Config, DEFAULT_HOST};
pub use http::auth_header_map;
pub use sink::CsvSink;
