// src/utils/url.rs

//! Endpoint URL construction.

use url::Url;

use crate::error::Result;

/// Append a resource path to the API base URL.
///
/// The base keeps its own path (`/api`), unlike `Url::join`, which would
/// replace the last segment of a base without a trailing slash.
pub fn endpoint(base_url: &str, resource: &str) -> Result<Url> {
    let base = base_url.trim().trim_end_matches('/');
    let resource = resource.trim_start_matches('/');
    Ok(Url::parse(&format!("{base}/{resource}"))?)
}
