// src/model.rs
//! Digest payload as returned by the summarization backend.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

pub const MIN_IMPORTANCE: u8 = 1;
pub const MAX_IMPORTANCE: u8 = 10;

/// Outlet a topic cites. `name` may be missing in backend output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    #[serde(default)]
    pub name: Option<String>,
}

impl SourceRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    #[serde(alias = "oneSentenceDescription")]
    pub one_sentence_description: String,
    /// Multi-paragraph text, paragraphs separated by a blank line.
    pub summary: String,
    /// Positionally paired with `urls`; lengths may differ.
    #[serde(default, deserialize_with = "sources_with_nulls")]
    pub sources: Vec<SourceRef>,
    #[serde(default)]
    pub urls: Vec<String>,
    /// 1 is the most important.
    #[serde(deserialize_with = "importance_score")]
    pub importance: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    #[serde(rename = "landingSummary")]
    pub landing_summary: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

pub const FALLBACK_LANDING_SUMMARY: &str = "No recent news observed for this sector.";

impl Sector {
    /// Stand-in for a sector the backend did not report.
    pub fn fallback() -> Self {
        Self {
            landing_summary: FALLBACK_LANDING_SUMMARY.to_string(),
            topics: Vec::new(),
        }
    }
}

/// Sector name -> sector. Keys are expected to be canonical names but the
/// backend may omit some or add others.
pub type NewsDataset = HashMap<String, Sector>;

// `[{"name":"X"}, null, {}]` -> three entries, the last two without a name.
fn sources_with_nulls<'de, D>(de: D) -> Result<Vec<SourceRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<SourceRef>> = Vec::deserialize(de)?;
    Ok(raw.into_iter().map(Option::unwrap_or_default).collect())
}

// The backend averages per-article scores, so fractional values do occur.
fn importance_score<'de, D>(de: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(de)?;
    if !raw.is_finite() {
        return Err(serde::de::Error::custom("importance must be a finite number"));
    }
    let clamped = raw
        .round()
        .clamp(f64::from(MIN_IMPORTANCE), f64::from(MAX_IMPORTANCE));
    Ok(clamped as u8)
}
