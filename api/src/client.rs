#![allow(async_fn_in_trait)]

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    CounterAction, CounterSnapshot, GalleryPayload, MetricsPayload, MetricsSummary, VisitorRequest,
};

/// Counter + metrics endpoints.
///
/// Futures are not required to be `Send`: everything runs on the page's
/// single UI thread.
pub trait CounterApi {
    async fn record(&self, action: CounterAction) -> Result<CounterSnapshot, ApiError>;
    async fn metrics(&self) -> Result<MetricsSummary, ApiError>;
}

/// Gallery listing endpoint.
pub trait GalleryApi {
    async fn images(&self) -> Result<Vec<String>, ApiError>;
}

/// reqwest-backed client for the hosted endpoints.
#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ApiConfig,
    http: reqwest::Client,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(ApiConfig::from_build_env())
    }
}

impl CounterApi for HttpApi {
    async fn record(&self, action: CounterAction) -> Result<CounterSnapshot, ApiError> {
        let url = self.config.visitor_url();
        debug!(action = action.as_str(), %url, "recording counter event");
        let response = self
            .http
            .post(&url)
            .json(&VisitorRequest { action })
            .send()
            .await?;
        decode(response).await
    }

    async fn metrics(&self) -> Result<MetricsSummary, ApiError> {
        let url = self.config.metrics_url();
        debug!(%url, "fetching metrics");
        let response = self.http.get(&url).send().await?;
        let payload: MetricsPayload = decode(response).await?;
        payload.summarize()
    }
}

impl GalleryApi for HttpApi {
    async fn images(&self) -> Result<Vec<String>, ApiError> {
        // A unique query keeps caches out of the way without adding request
        // headers, so the cross-origin GET stays a simple request.
        let url = format!("{}?_={}", self.config.gallery_url(), cache_buster());
        debug!(%url, "fetching gallery listing");
        let response = self.http.get(&url).send().await?;
        let payload: GalleryPayload = decode(response).await?;
        Ok(payload.into_images())
    }
}

/// Wall-clock milliseconds plus a per-process sequence number.
fn cache_buster() -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{seq}", epoch_ms())
}

#[cfg(target_arch = "wasm32")]
fn epoch_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn epoch_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    debug!(status = status.as_u16(), "response received");
    if !status.is_success() {
        warn!(status = status.as_u16(), url = %response.url(), "endpoint returned failure status");
        return Err(ApiError::Status(status.as_u16()));
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
