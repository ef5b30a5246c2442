//! CollegeFootballData API access: the HTTP client and its payload types.

pub mod http;
pub mod types;

pub use http::CfbdClient;
