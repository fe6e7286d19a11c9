pub mod rss;
pub mod text;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub snippet: String,
    pub source: String,
    pub url: String,
    pub published_at: String,
}
