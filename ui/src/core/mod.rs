//! Platform-agnostic building blocks shared by the views.

pub mod countup;
pub mod format;
pub mod platform;
pub mod storage;
pub mod theme;
pub mod timing;
