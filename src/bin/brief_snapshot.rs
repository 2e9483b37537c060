//! Fetch the digest once, print the sector overview (or the error) and exit.
//! Exit status is non-zero when the fetch failed.

use anyhow::{bail, Result};
use lean_brief::config::BriefConfig;
use lean_brief::store::{Action, BriefStore};
use lean_brief::{render, DigestSource, FetchResult, SummaryClient};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    lean_brief::init_tracing();

    let cfg = BriefConfig::load_default()?;
    let client = SummaryClient::from_config(&cfg);

    let mut store = BriefStore::new();
    for effect in store.dispatch(Action::Refresh) {
        let lean_brief::Effect::Fetch { generation } = effect;
        let result = client.fetch().await;
        store.dispatch(Action::FetchCompleted { generation, result });
    }

    match store.fetch_result() {
        FetchResult::Success(_) => {
            print!("{}", render::overview(&store.overview()));
            Ok(())
        }
        FetchResult::Failure(msg) => {
            print!("{}", render::error_screen(msg, client.endpoint()));
            bail!("snapshot failed: {msg}")
        }
        FetchResult::Pending => bail!("fetch never completed"),
    }
}
