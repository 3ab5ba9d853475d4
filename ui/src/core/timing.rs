//! Clock and sleep helpers for frame-driven animations.

/// Roughly one display frame at 60 Hz.
pub const FRAME_MS: u64 = 16;

/// Milliseconds on a monotonic clock, or `None` when the page exposes no
/// `performance` object.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> Option<f64> {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    Some(ORIGIN.elapsed().as_secs_f64() * 1000.0)
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_clock_is_present_and_monotonic() {
        let first = now_ms().expect("native clock");
        let second = now_ms().expect("native clock");
        assert!(second >= first);
    }
}
