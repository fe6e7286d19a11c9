use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::feed::NewsItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct OutputDocument {
    pub topic_url: String,
    pub generated_at: String,
    pub items: Vec<NewsItem>,
}

/// The fields of a previously written item that decide whether a rewrite is
/// needed. Fields are optional so hand-edited or older files still load.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub(crate) struct StoredKey {
    pub title: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct StoredDocument {
    #[serde(default)]
    items: Vec<StoredKey>,
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Unchanged,
    Written(PathBuf),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unchanged => write!(f, "No changes in items; skipping write."),
            Outcome::Written(path) => write!(f, "Wrote {}", path.display()),
        }
    }
}

/// Keys of the items in the document at `path`. Anything unreadable counts
/// as an empty document.
pub(crate) fn load_existing(path: &Path) -> Vec<StoredKey> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no previous output");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read previous output");
            return Vec::new();
        }
    };
    match serde_json::from_str::<StoredDocument>(&content) {
        Ok(doc) => doc.items,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "ignoring corrupt previous output"
            );
            Vec::new()
        }
    }
}

pub(crate) fn has_changed(prior: &[StoredKey], items: &[NewsItem]) -> bool {
    prior.len() != items.len()
        || prior.iter().zip(items).any(|(old, new)| {
            old.title.as_deref() != Some(new.title.as_str())
                || old.url.as_deref() != Some(new.url.as_str())
                || old.published_at.as_deref() != Some(new.published_at.as_str())
        })
}

pub(crate) fn save(path: &Path, document: &OutputDocument) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), items = document.items.len(), "wrote output");
    Ok(())
}

/// Replaces the document at `path` with `items` unless it already lists the
/// same items in the same order.
pub(crate) fn sync(
    path: &Path,
    topic_url: &str,
    items: Vec<NewsItem>,
    generated_at: String,
) -> anyhow::Result<Outcome> {
    let prior = load_existing(path);
    if !has_changed(&prior, &items) {
        return Ok(Outcome::Unchanged);
    }
    let document = OutputDocument {
        topic_url: topic_url.to_string(),
        generated_at,
        items,
    };
    save(path, &document)?;
    Ok(Outcome::Written(path.to_path_buf()))
}
