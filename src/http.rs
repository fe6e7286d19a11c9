use anyhow::Context;

use crate::config::{TIMEOUT, USER_AGENT};

pub(crate) fn http_client() -> anyhow::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {}", e))
}

pub(crate) fn fetch_feed(client: &reqwest::blocking::Client, url: &str) -> anyhow::Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("failed to fetch {url}"))?
        .error_for_status()?;
    let bytes = response.bytes()?;
    tracing::info!(url, bytes = bytes.len(), "fetched feed");
    Ok(bytes.to_vec())
}
