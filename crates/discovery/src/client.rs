//! Client for the remote skill discovery service.

use std::time::Duration;

use tracing::warn;

use crate::types::DiscoveryResult;

/// Production discovery endpoint used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://external-claude-skills-production.up.railway.app";

/// The hook blocks the host prompt, so the lookup gets one short attempt.
const DISCOVER_TIMEOUT: Duration = Duration::from_secs(5);

/// Get the discovery API base URL, allowing override for testing.
pub fn discovery_api_base() -> String {
    std::env::var("SKILLTAP_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Queries the discovery service for skills relevant to `prompt`.
///
/// Failures never escape this boundary: network errors, timeouts, bad
/// statuses, and undecodable bodies all collapse into a [`DiscoveryResult`]
/// carrying an `error` message, so callers can treat discovery as
/// best-effort.
pub async fn discover(prompt: &str) -> DiscoveryResult {
    match discover_inner(prompt).await {
        Ok(result) => result,
        Err(err) => {
            warn!(error = %err, "skill discovery request failed");
            DiscoveryResult::failure(err.to_string())
        }
    }
}

async fn discover_inner(prompt: &str) -> crate::Result<DiscoveryResult> {
    let base = discovery_api_base();
    let url = format!("{}/discover", base.trim_end_matches('/'));

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .timeout(DISCOVER_TIMEOUT)
        .header(
            "User-Agent",
            concat!("skilltap/", env!("CARGO_PKG_VERSION")),
        )
        .json(&serde_json::json!({ "query": prompt }))
        .send()
        .await?;

    if !response.status().is_success() {
        anyhow::bail!("discovery service returned HTTP {}", response.status());
    }

    Ok(response.json().await?)
}
