//! Client for the portfolio site's remote endpoints (counter, metrics, gallery).
//!
//! The UI crate talks to the endpoints through the [`CounterApi`] and
//! [`GalleryApi`] traits so views and clients can be exercised against fakes.
//! [`HttpApi`] is the reqwest-backed implementation used in the browser.

mod client;
mod config;
mod error;
mod models;

pub use client::{CounterApi, GalleryApi, HttpApi};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    CounterAction, CounterSnapshot, GalleryPayload, InvocationDatapoint, Invocations,
    MetricsPayload, MetricsSummary, VisitorRequest,
};
