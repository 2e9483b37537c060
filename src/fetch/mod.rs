// src/fetch/mod.rs
pub mod client;
pub mod error;
pub mod types;

pub use client::SummaryClient;
pub use error::FetchError;
pub use types::{DigestSource, FetchResult};

use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;

/// One-time metrics registration.
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("brief_fetch_total", "Digest fetch attempts.");
        describe_counter!(
            "brief_fetch_failures_total",
            "Digest fetches that ended in a failure, by kind."
        );
        describe_counter!(
            "brief_fetch_stale_discarded_total",
            "Fetch completions dropped because a newer request superseded them."
        );
        describe_histogram!("brief_fetch_ms", "Digest fetch wall time in milliseconds.");
    });
}
