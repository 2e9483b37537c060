// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod command;
pub mod config;
pub mod fetch;
pub mod model;
pub mod nav;
pub mod render;
pub mod session;
pub mod store;
pub mod taxonomy;
pub mod view;

// ---- Re-exports for stable public API ----
pub use crate::fetch::{DigestSource, FetchError, FetchResult, SummaryClient};
pub use crate::model::{NewsDataset, Sector, SourceRef, Topic};
pub use crate::nav::Navigation;
pub use crate::session::Session;
pub use crate::store::{Action, BriefStore, Effect};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact logs on stderr so they never interleave with the rendered screen.
/// `RUST_LOG` wins; default is `lean_brief=info,warn`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lean_brief=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
