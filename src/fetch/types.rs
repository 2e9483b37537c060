// src/fetch/types.rs
use crate::fetch::error::FetchError;
use crate::model::NewsDataset;

/// Outcome of the latest fetch attempt. Replaced wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchResult {
    #[default]
    Pending,
    Success(NewsDataset),
    Failure(String),
}

impl FetchResult {
    pub fn dataset(&self) -> Option<&NewsDataset> {
        match self {
            FetchResult::Success(ds) => Some(ds),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FetchResult::Pending)
    }
}

impl From<Result<NewsDataset, FetchError>> for FetchResult {
    fn from(r: Result<NewsDataset, FetchError>) -> Self {
        match r {
            Ok(ds) => FetchResult::Success(ds),
            Err(e) => FetchResult::Failure(e.to_string()),
        }
    }
}

/// Anything that can produce one digest per call. One call = one request,
/// never retried.
#[async_trait::async_trait]
pub trait DigestSource: Send + Sync {
    async fn fetch(&self) -> FetchResult;
    fn name(&self) -> &str;
}
