use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::foundation::error::{StarfieldError, StarfieldResult};

/// Number of characters a news-card teaser keeps before the ellipsis.
pub const TEASER_CHARS: usize = 150;

/// How many articles the landing page shows.
pub const RECENT_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One entry of the static news feed.
pub struct Article {
    pub id: String,
    pub title: String,
    pub author: String,
    pub date_published: String,
    pub image: String,
    pub content: String,
}

impl Article {
    /// Publication date, if the feed string parses.
    ///
    /// Accepts RFC 3339 or a bare `YYYY-MM-DD` (taken as midnight UTC).
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.date_published.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc().fixed_offset())
    }

    /// Card teaser: the first [`TEASER_CHARS`] characters plus an ellipsis.
    /// The ellipsis is unconditional, matching the cards on the page.
    pub fn teaser(&self) -> String {
        let mut teaser: String = self.content.chars().take(TEASER_CHARS).collect();
        teaser.push_str("...");
        teaser
    }
}

/// Load the news feed from a local JSON file.
///
/// There is nothing transient to retry here; a missing or malformed feed
/// surfaces as one `Content` error and the page shows its single fallback
/// message.
pub fn load_articles(path: impl AsRef<Path>) -> StarfieldResult<Vec<Article>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        StarfieldError::content(format!("open news feed '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        StarfieldError::content(format!("parse news feed '{}': {e}", path.display()))
    })
}

/// The most recent `limit` articles, newest first.
///
/// Articles whose date fails to parse sort after every dated one, in their
/// original feed order.
pub fn recent_articles(articles: &[Article], limit: usize) -> Vec<&Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by(|a, b| match (a.published_at(), b.published_at()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    sorted.truncate(limit);
    sorted
}

/// Lookup for the full-article page.
pub fn find_by_id<'a>(articles: &'a [Article], id: &str) -> Option<&'a Article> {
    articles.iter().find(|a| a.id == id)
}

#[cfg(test)]
#[path = "../../tests/unit/content/articles.rs"]
mod tests;
