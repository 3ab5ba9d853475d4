use std::cell::{Cell, RefCell};

use api::{ApiError, CounterAction, CounterApi, CounterSnapshot, MetricsSummary};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq)]
enum MetricsSlot {
    Idle,
    Pending,
    Ready(MetricsSummary),
}

/// Result of a status-indicator hover.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsFetch {
    /// First successful fetch this session.
    Fetched(MetricsSummary),
    /// Served from the session cache; no request was made.
    Cached(MetricsSummary),
    /// A request is already outstanding; nothing to do.
    InFlight,
    Failed(ApiError),
}

/// Counter and metrics client for one page mount.
///
/// Holds the last snapshot it received and the session's metrics cache.
/// Borrows of the interior state never span an `.await`.
pub struct StatsClient<A> {
    api: A,
    last: Cell<Option<CounterSnapshot>>,
    metrics: RefCell<MetricsSlot>,
}

impl<A: CounterApi> StatsClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            last: Cell::new(None),
            metrics: RefCell::new(MetricsSlot::Idle),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Most recent snapshot received from the counter endpoint.
    pub fn last_snapshot(&self) -> Option<CounterSnapshot> {
        self.last.get()
    }

    pub async fn record_view(&self) -> Result<CounterSnapshot, ApiError> {
        self.record(CounterAction::View).await
    }

    pub async fn record_download(&self) -> Result<CounterSnapshot, ApiError> {
        self.record(CounterAction::Download).await
    }

    async fn record(&self, action: CounterAction) -> Result<CounterSnapshot, ApiError> {
        match self.api.record(action).await {
            Ok(snapshot) => {
                info!(
                    action = action.as_str(),
                    views = snapshot.views,
                    downloads = snapshot.downloads,
                    "counter updated"
                );
                self.last.set(Some(snapshot));
                Ok(snapshot)
            }
            Err(err) => {
                error!(action = action.as_str(), "error fetching stats: {err}");
                Err(err)
            }
        }
    }

    /// Metrics for the status tooltip, requested at most once per session.
    /// A failed attempt leaves the cache empty so a later hover can try again.
    pub async fn fetch_metrics(&self) -> MetricsFetch {
        {
            let mut slot = self.metrics.borrow_mut();
            let current = *slot;
            match current {
                MetricsSlot::Ready(summary) => return MetricsFetch::Cached(summary),
                MetricsSlot::Pending => return MetricsFetch::InFlight,
                MetricsSlot::Idle => *slot = MetricsSlot::Pending,
            }
        }

        match self.api.metrics().await {
            Ok(summary) => {
                *self.metrics.borrow_mut() = MetricsSlot::Ready(summary);
                MetricsFetch::Fetched(summary)
            }
            Err(err) => {
                error!("error fetching metrics: {err}");
                *self.metrics.borrow_mut() = MetricsSlot::Idle;
                MetricsFetch::Failed(err)
            }
        }
    }
}
