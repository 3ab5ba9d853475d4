use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterAction {
    View,
    Download,
}

impl CounterAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Download => "download",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorRequest {
    pub action: CounterAction,
}

/// Totals returned by the counter endpoint after every recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub views: u64,
    pub downloads: u64,
}

/// Raw body of `GET /metrics`.
///
/// Older deployments send `invocations` as a plain number; newer ones send the
/// datapoint series and a separate `total_invocations`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsPayload {
    #[serde(default)]
    pub avg_duration: Option<f64>,
    #[serde(default)]
    pub invocations: Option<Invocations>,
    #[serde(default)]
    pub total_invocations: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Invocations {
    Count(f64),
    Series(Vec<InvocationDatapoint>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvocationDatapoint {
    #[serde(rename = "Sum", default)]
    pub sum: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSummary {
    pub avg_duration_ms: f64,
    pub invocation_count: u64,
}

impl MetricsPayload {
    pub fn summarize(self) -> Result<MetricsSummary, ApiError> {
        let avg_duration_ms = self
            .avg_duration
            .filter(|value| value.is_finite())
            .ok_or_else(|| ApiError::Malformed("missing avg_duration".into()))?;

        let count = match (self.invocations, self.total_invocations) {
            (Some(Invocations::Count(count)), _) => count,
            (Some(Invocations::Series(_)), Some(total)) | (None, Some(total)) => total,
            (Some(Invocations::Series(points)), None) => points.iter().map(|p| p.sum).sum(),
            (None, None) => return Err(ApiError::Malformed("missing invocations".into())),
        };

        if !count.is_finite() || count < 0.0 {
            return Err(ApiError::Malformed(format!("invalid invocation count {count}")));
        }

        Ok(MetricsSummary {
            avg_duration_ms,
            invocation_count: count.trunc() as u64,
        })
    }
}

/// Raw body of `GET /gallery`. A missing or null `images` is an empty gallery.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryPayload {
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

impl GalleryPayload {
    pub fn into_images(self) -> Vec<String> {
        self.images.unwrap_or_default()
    }
}
