use std::collections::BTreeMap;
use std::io::{BufReader, Read};

use anyhow::Context;
use rss::{Channel, Item};

use super::NewsItem;
use super::text::{published_at, snippet};

const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// Parses an RSS document into one record per `<item>`, in document order.
/// `resolve` maps each item's link to the URL stored in the record.
pub fn parse<R: Read>(
    reader: R,
    mut resolve: impl FnMut(&str) -> String,
) -> anyhow::Result<Vec<NewsItem>> {
    let channel =
        Channel::read_from(BufReader::new(reader)).context("failed to parse RSS feed")?;
    let namespaces = channel.namespaces();

    let items: Vec<NewsItem> = channel
        .items()
        .iter()
        .map(|item| {
            let link = item.link().unwrap_or_default().trim();
            NewsItem {
                title: item.title().unwrap_or_default().trim().to_string(),
                snippet: snippet(item.description().unwrap_or_default().trim()),
                source: source_name(item, namespaces).trim().to_string(),
                url: resolve(link),
                published_at: published_at(item.pub_date().unwrap_or_default()),
            }
        })
        .collect();
    tracing::info!(count = items.len(), "parsed feed items");
    Ok(items)
}

/// An Atom `source` element wins over the RSS `<source>` element, even when empty.
/// Its prefix may be bound on the element itself or on the `<rss>` root.
fn source_name<'a>(item: &'a Item, namespaces: &BTreeMap<String, String>) -> &'a str {
    item.extensions()
        .iter()
        .filter_map(|(prefix, elements)| Some((prefix, elements.get("source")?)))
        .flat_map(|(prefix, sources)| sources.iter().map(move |source| (prefix, source)))
        .find(|(prefix, source)| {
            source
                .attrs()
                .get(&format!("xmlns:{prefix}"))
                .or_else(|| namespaces.get(*prefix))
                .is_some_and(|uri| uri == ATOM_NAMESPACE)
        })
        .map(|(_, source)| source.value().unwrap_or_default())
        .or_else(|| item.source().and_then(|s| s.title()))
        .unwrap_or_default()
}
