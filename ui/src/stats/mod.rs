//! Visitor/download counters and the metrics tooltip.

mod animate;
mod client;
mod view;

pub use client::{MetricsFetch, StatsClient};
pub use view::{StatsHandle, StatsPanel, StatusIndicator};

use api::{ApiError, CounterSnapshot, MetricsSummary};

use crate::core::countup::CountUp;
use crate::core::format;

/// Shown in place of a count when the counter endpoint failed.
pub const COUNTER_PLACEHOLDER: &str = "---";
/// Shown in the tooltip fields when the metrics endpoint failed.
pub const METRICS_PLACEHOLDER: &str = "Err";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterDisplay {
    #[default]
    Loading,
    Value(u64),
    Placeholder,
}

impl CounterDisplay {
    pub fn text(&self) -> String {
        match self {
            Self::Loading => "0".to_string(),
            Self::Value(value) => value.to_string(),
            Self::Placeholder => COUNTER_PLACEHOLDER.to_string(),
        }
    }

    pub fn numeric(&self) -> Option<u64> {
        match self {
            Self::Value(value) => Some(*value),
            _ => None,
        }
    }
}

/// What a counter should do with a response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterUpdate {
    Animate(CountUp),
    Placeholder,
    Keep,
}

/// `[views, downloads]` updates for the page-load response.
pub fn view_updates(result: &Result<CounterSnapshot, ApiError>) -> [CounterUpdate; 2] {
    match result {
        Ok(snapshot) => [
            CounterUpdate::Animate(CountUp::initial(snapshot.views)),
            CounterUpdate::Animate(CountUp::initial(snapshot.downloads)),
        ],
        Err(_) => [CounterUpdate::Placeholder, CounterUpdate::Placeholder],
    }
}

/// Download counter update after a recorded download. Counts from what is on
/// screen (zero if that is not a number); a failure leaves the display alone.
pub fn download_update(
    current: CounterDisplay,
    result: &Result<CounterSnapshot, ApiError>,
) -> CounterUpdate {
    match result {
        Ok(snapshot) => CounterUpdate::Animate(CountUp::update(
            current.numeric().unwrap_or(0),
            snapshot.downloads,
        )),
        Err(_) => CounterUpdate::Keep,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MetricsDisplay {
    #[default]
    Pending,
    Ready(MetricsSummary),
    Failed,
}

impl MetricsDisplay {
    pub fn from_fetch(current: Self, fetch: &MetricsFetch) -> Self {
        match fetch {
            MetricsFetch::Fetched(summary) | MetricsFetch::Cached(summary) => Self::Ready(*summary),
            MetricsFetch::InFlight => current,
            MetricsFetch::Failed(_) => Self::Failed,
        }
    }

    pub fn latency_text(&self) -> String {
        match self {
            Self::Pending => "…".to_string(),
            Self::Ready(summary) => format::format_ms(summary.avg_duration_ms),
            Self::Failed => METRICS_PLACEHOLDER.to_string(),
        }
    }

    pub fn requests_text(&self) -> String {
        match self {
            Self::Pending => "…".to_string(),
            Self::Ready(summary) => format::format_count(summary.invocation_count),
            Self::Failed => METRICS_PLACEHOLDER.to_string(),
        }
    }
}
