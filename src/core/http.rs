//! HTTP utilities for CFBD API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Build the headers every CFBD request carries: JSON accept plus the bearer token.
pub fn auth_header_map(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))?;
    bearer.set_sensitive(true);
    h.insert(AUTHORIZATION, bearer);
    Ok(h)
}
