//! Count-up animation math for the visitor/download counters.
//!
//! Pure and frame-rate independent: callers sample [`CountUp::value_at`] with
//! the elapsed time on every frame until [`CountUp::is_finished`].

/// Duration of the first count-up after page load.
pub const INITIAL_COUNT_MS: f64 = 1500.0;
/// Duration of the count-up after a recorded download.
pub const UPDATE_COUNT_MS: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub start: u64,
    pub end: u64,
    pub duration_ms: f64,
}

impl CountUp {
    pub fn new(start: u64, end: u64, duration_ms: f64) -> Self {
        Self {
            start,
            end,
            duration_ms,
        }
    }

    /// Page-load animation from zero.
    pub fn initial(end: u64) -> Self {
        Self::new(0, end, INITIAL_COUNT_MS)
    }

    /// Short animation from whatever is currently displayed.
    pub fn update(from: u64, end: u64) -> Self {
        Self::new(from, end, UPDATE_COUNT_MS)
    }

    /// Fraction of the animation completed, clamped to `[0, 1]`.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        let raw = elapsed_ms / self.duration_ms;
        if raw.is_nan() {
            0.0
        } else {
            raw.clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// `floor(S + (E - S) * progress)`, exactly `E` once finished.
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.end;
        }

        let start = self.start as f64;
        let end = self.end as f64;
        let value = (start + (end - start) * progress).floor();

        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        (value.max(0.0) as u64).clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Samples the animation the way the view does (fixed frame step) and
    /// returns every rendered value.
    fn frames(plan: CountUp, step_ms: f64) -> Vec<u64> {
        let mut out = Vec::new();
        let mut elapsed = 0.0;
        loop {
            out.push(plan.value_at(elapsed));
            if plan.is_finished(elapsed) {
                return out;
            }
            elapsed += step_ms;
        }
    }

    #[test]
    fn lands_exactly_on_end_for_any_start() {
        for start in [0, 1, 7, 99, 1_000, 123_456] {
            for end in [0, 1, 42, 1_001, 987_654_321] {
                let plan = CountUp::new(start, end, INITIAL_COUNT_MS);
                let rendered = frames(plan, 16.0);
                assert_eq!(*rendered.last().unwrap(), end, "start={start} end={end}");
            }
        }
    }

    #[test]
    fn never_overshoots() {
        let plan = CountUp::initial(1_234);
        for value in frames(plan, 7.0) {
            assert!(value <= 1_234);
        }

        let down = CountUp::update(50, 10);
        for value in frames(down, 3.0) {
            assert!((10..=50).contains(&value));
        }
    }

    #[test]
    fn counts_up_monotonically() {
        let rendered = frames(CountUp::initial(500), 16.0);
        assert!(rendered.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(rendered[0], 0);
    }

    #[test]
    fn uses_floor_midway() {
        let plan = CountUp::new(0, 3, 1000.0);
        assert_eq!(plan.value_at(500.0), 1);
        assert_eq!(plan.value_at(999.0), 2);
        assert_eq!(plan.value_at(1000.0), 3);
    }

    #[test]
    fn durations_are_distinct() {
        assert_eq!(CountUp::initial(10).duration_ms, 1500.0);
        assert_eq!(CountUp::update(3, 10).duration_ms, 500.0);
        assert!(CountUp::update(3, 10).is_finished(500.0));
        assert!(!CountUp::initial(10).is_finished(500.0));
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let plan = CountUp::new(4, 9, 0.0);
        assert!(plan.is_finished(0.0));
        assert_eq!(plan.value_at(0.0), 9);
    }

    #[test]
    fn negative_elapsed_renders_start() {
        let plan = CountUp::new(10, 20, 100.0);
        assert_eq!(plan.value_at(-5.0), 10);
    }
}
