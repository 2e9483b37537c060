// src/fetch/client.rs
use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::{header::CONTENT_TYPE, Client};
use serde::Deserialize;
use std::time::{Duration, Instant};

use crate::config::BriefConfig;
use crate::fetch::error::FetchError;
use crate::fetch::types::{DigestSource, FetchResult};
use crate::model::NewsDataset;

/// HTTP client for the summarization backend.
#[derive(Clone)]
pub struct SummaryClient {
    endpoint: String,
    trigger_endpoint: String,
    client: Client,
    timeout: Duration,
}

#[derive(Deserialize)]
struct TriggerResponse {
    #[serde(default)]
    message: Option<String>,
}

impl SummaryClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let cfg = BriefConfig::default();
        Self {
            endpoint: endpoint.into(),
            trigger_endpoint: cfg.trigger_endpoint,
            client: Client::new(),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }

    pub fn from_config(cfg: &BriefConfig) -> Self {
        Self::new(cfg.endpoint.clone())
            .with_trigger_endpoint(cfg.trigger_endpoint.clone())
            .with_timeout(cfg.timeout_secs)
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_trigger_endpoint(mut self, url: impl Into<String>) -> Self {
        self.trigger_endpoint = url.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET, no retries.
    pub async fn fetch_dataset(&self) -> Result<NewsDataset, FetchError> {
        crate::fetch::ensure_metrics_described();
        counter!("brief_fetch_total").increment(1);
        let t0 = Instant::now();

        let out = self.get_dataset().await;

        histogram!("brief_fetch_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
        match &out {
            Ok(ds) => {
                tracing::info!(endpoint = %self.endpoint, sectors = ds.len(), "digest fetched");
            }
            Err(e) => {
                counter!("brief_fetch_failures_total", "kind" => e.kind()).increment(1);
                tracing::warn!(endpoint = %self.endpoint, kind = e.kind(), error = %e, "digest fetch failed");
            }
        }
        out
    }

    async fn get_dataset(&self) -> Result<NewsDataset, FetchError> {
        let rsp = self
            .client
            .get(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::network(e, &self.endpoint))?;

        let status = rsp.status();
        let body = rsp
            .text()
            .await
            .map_err(|e| FetchError::network(e, &self.endpoint))?;

        if !status.is_success() {
            return Err(FetchError::backend(status.as_u16(), &body));
        }

        serde_json::from_str::<NewsDataset>(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Ask the backend to rebuild its digest. Returns the server's message.
    /// Does not touch any client state; a refresh picks up the new data.
    pub async fn trigger_processing(&self) -> Result<String, FetchError> {
        let rsp = self
            .client
            .post(&self.trigger_endpoint)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::network(e, &self.trigger_endpoint))?;

        let status = rsp.status();
        let body = rsp
            .text()
            .await
            .map_err(|e| FetchError::network(e, &self.trigger_endpoint))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "processing trigger rejected");
            return Err(FetchError::backend(status.as_u16(), &body));
        }

        let parsed: TriggerResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        let msg = parsed
            .message
            .unwrap_or_else(|| "Processing triggered.".to_string());
        tracing::info!(message = %msg, "processing triggered");
        Ok(msg)
    }
}

#[async_trait]
impl DigestSource for SummaryClient {
    async fn fetch(&self) -> FetchResult {
        self.fetch_dataset().await.into()
    }

    fn name(&self) -> &str {
        &self.endpoint
    }
}
