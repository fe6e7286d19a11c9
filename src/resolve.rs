use percent_encoding::percent_decode_str;
use url::Url;

/// Returns the publisher URL behind a feed link, or `link` itself when it
/// can't be recovered.
pub(crate) fn resolve_publisher_url(client: &reqwest::blocking::Client, link: &str) -> String {
    match try_resolve(client, link) {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::debug!(link, error = %e, "keeping original link");
            link.to_string()
        }
    }
}

fn try_resolve(client: &reqwest::blocking::Client, link: &str) -> anyhow::Result<String> {
    let parsed = Url::parse(link)?;
    if let Some(direct) = embedded_url(&parsed) {
        return Ok(direct);
    }
    let response = client.get(parsed).send()?.error_for_status()?;
    Ok(response.url().to_string())
}

/// The first non-blank `url=` query parameter. Aggregators encode the target
/// once more on top of query encoding, so the value is decoded twice.
fn embedded_url(link: &Url) -> Option<String> {
    link.query_pairs()
        .find(|(key, value)| key == "url" && !value.is_empty())
        .map(|(_, value)| percent_decode_str(&value).decode_utf8_lossy().into_owned())
}
