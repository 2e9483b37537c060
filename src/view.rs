// src/view.rs
//! Pure projections used by the renderer.

use crate::model::{Sector, Topic};

pub const UNKNOWN_SOURCE: &str = "Unknown Source";
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Topics by ascending importance (1 first). Stable: equal importances keep
/// their backend order.
pub fn sorted_topics(sector: &Sector) -> Vec<&Topic> {
    let mut out: Vec<&Topic> = sector.topics.iter().collect();
    out.sort_by_key(|t| t.importance);
    out
}

/// `(display name, url)` per url. Missing or empty source names become
/// "Unknown Source"; surplus sources without a url are not listed.
pub fn citations(topic: &Topic) -> Vec<(&str, &str)> {
    topic
        .urls
        .iter()
        .enumerate()
        .map(|(i, url)| {
            let name = topic
                .sources
                .get(i)
                .and_then(|s| s.name.as_deref())
                .filter(|n| !n.is_empty())
                .unwrap_or(UNKNOWN_SOURCE);
            (name, url.as_str())
        })
        .collect()
}

/// Summary split on blank lines. Empty paragraphs between two breaks are kept.
pub fn paragraphs(topic: &Topic) -> Vec<&str> {
    topic.summary.split(PARAGRAPH_BREAK).collect()
}
