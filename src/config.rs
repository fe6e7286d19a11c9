use std::time::Duration;

pub const TOPIC_RSS: &str = "https://news.google.com/rss/topics/\
     CAAqIggKIhxDQkFTRHdvSkwyMHZNREprZG5Sa0VnSnlkU2dBUAE?hl=ru&gl=RU&ceid=RU:ru";
pub const OUT_PATH: &str = "data/news.json";
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub(crate) const TIMEOUT: Duration = Duration::from_secs(20);

/// Number of feed items kept in the output document.
pub(crate) const MAX_ITEMS: usize = 5;
/// Maximum snippet length, in characters.
pub(crate) const SNIPPET_CHARS: usize = 220;

/// Human-facing topic page for a feed URL.
pub(crate) fn topic_url(feed_url: &str) -> String {
    feed_url.replace("/rss/", "/")
}
