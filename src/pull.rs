use std::path::Path;

use chrono::Utc;

use crate::config::{MAX_ITEMS, topic_url};
use crate::feed::text::format_utc;
use crate::store::Outcome;

/// Fetches `feed_url`, keeps its newest items and rewrites `out_path` if
/// they changed since the last run.
pub fn run(feed_url: &str, out_path: &Path) -> anyhow::Result<Outcome> {
    let client = crate::http::http_client()?;
    let bytes = crate::http::fetch_feed(&client, feed_url)?;

    // Items past the cap are dropped below, so their links are never resolved.
    let mut seen = 0;
    let mut items = crate::feed::rss::parse(&bytes[..], |link| {
        seen += 1;
        if seen > MAX_ITEMS {
            return link.to_string();
        }
        crate::resolve::resolve_publisher_url(&client, link)
    })?;
    items.truncate(MAX_ITEMS);

    let now = format_utc(Utc::now().naive_utc());
    crate::store::sync(out_path, &topic_url(feed_url), items, now)
}
