use std::sync::LazyLock;

use chrono::{NaiveDateTime, Weekday};
use regex::Regex;

use crate::config::SNIPPET_CHARS;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

/// Width of the `Mon, 01 Jan 2024 10:00:00` prefix of an RFC 822 date.
const PUB_DATE_PREFIX: usize = 25;
/// Layout after the `<weekday>, ` part.
const PUB_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S";

pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").trim().to_string()
}

pub fn snippet(description: &str) -> String {
    strip_tags(description).chars().take(SNIPPET_CHARS).collect()
}

/// Converts a `pubDate` into `YYYY-MM-DDTHH:MM:SSZ`, or an empty string when
/// its first 25 characters don't match the expected layout. The zone suffix
/// is never read; the wall-clock time is taken as UTC. The weekday must be a
/// weekday abbreviation but isn't checked against the date.
pub fn published_at(pub_date: &str) -> String {
    let prefix: String = pub_date.chars().take(PUB_DATE_PREFIX).collect();
    match parse_pub_date(&prefix) {
        Some(naive) => format_utc(naive),
        None => {
            tracing::debug!(pub_date, "unparseable pubDate");
            String::new()
        }
    }
}

fn parse_pub_date(prefix: &str) -> Option<NaiveDateTime> {
    let (weekday, rest) = prefix.split_once(", ")?;
    if weekday.len() != 3 || weekday.parse::<Weekday>().is_err() {
        return None;
    }
    NaiveDateTime::parse_from_str(rest, PUB_DATE_FORMAT).ok()
}

pub fn format_utc(naive: NaiveDateTime) -> String {
    naive.and_utc().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
