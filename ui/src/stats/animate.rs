//! Frame loop for counter animations, independent of the renderer.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::core::countup::CountUp;

/// Per-counter token source. Claiming a token retires every earlier one, so
/// only the animation for the most recent response keeps drawing.
#[derive(Debug, Clone, Default)]
pub(crate) struct Generation(Rc<Cell<u64>>);

impl Generation {
    pub(crate) fn claim(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    pub(crate) fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

/// Draw `plan` frame by frame until it finishes or `token` is retired.
///
/// `clock` returns milliseconds on a monotonic clock; without one the counter
/// is drawn at its final value straight away.
pub(crate) async fn drive<C, R, S, F>(
    plan: CountUp,
    generation: &Generation,
    token: u64,
    mut clock: C,
    mut render: R,
    mut sleep: S,
) where
    C: FnMut() -> Option<f64>,
    R: FnMut(u64),
    S: FnMut() -> F,
    F: Future<Output = ()>,
{
    let Some(started) = clock() else {
        if generation.is_current(token) {
            render(plan.end);
        }
        return;
    };

    loop {
        if !generation.is_current(token) {
            return;
        }
        let Some(now) = clock() else {
            render(plan.end);
            return;
        };
        let elapsed = now - started;
        render(plan.value_at(elapsed));
        if plan.is_finished(elapsed) {
            return;
        }
        sleep().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Clock that advances one 16 ms frame per reading.
    fn stepping_clock() -> impl FnMut() -> Option<f64> {
        let mut now = 0.0;
        move || {
            let sample = now;
            now += 16.0;
            Some(sample)
        }
    }

    #[test]
    fn runs_to_the_end_value() {
        let generation = Generation::default();
        let shown = RefCell::new(Vec::new());
        let token = generation.claim();

        block_on(drive(
            CountUp::initial(250),
            &generation,
            token,
            stepping_clock(),
            |v| shown.borrow_mut().push(v),
            || async {},
        ));

        let shown = shown.into_inner();
        assert_eq!(shown.first(), Some(&0));
        assert_eq!(shown.last(), Some(&250));
    }

    #[test]
    fn stale_token_draws_nothing() {
        let generation = Generation::default();
        let older = generation.claim();
        let newer = generation.claim();
        let display = Cell::new(0u64);

        block_on(drive(
            CountUp::update(0, 5),
            &generation,
            newer,
            stepping_clock(),
            |v| display.set(v),
            || async {},
        ));
        block_on(drive(
            CountUp::update(0, 99),
            &generation,
            older,
            stepping_clock(),
            |v| display.set(v),
            || async {},
        ));

        assert_eq!(display.get(), 5);
    }

    #[test]
    fn newer_response_mid_animation_wins() {
        let generation = Generation::default();
        let display = Cell::new(0u64);
        let first = generation.claim();
        let newer_plan = CountUp::update(0, 42);
        let mut newer = None;

        // A second response lands while the first animation is between frames.
        block_on(drive(
            CountUp::initial(1_000),
            &generation,
            first,
            stepping_clock(),
            |v| display.set(v),
            || {
                if newer.is_none() {
                    newer = Some(generation.claim());
                }
                async {}
            },
        ));
        assert!(display.get() < 1_000, "older animation kept drawing");

        let newer = newer.expect("second response claimed a token");
        block_on(drive(
            newer_plan,
            &generation,
            newer,
            stepping_clock(),
            |v| display.set(v),
            || async {},
        ));
        assert_eq!(display.get(), 42);
    }

    #[test]
    fn missing_clock_jumps_to_end() {
        let generation = Generation::default();
        let token = generation.claim();
        let shown = RefCell::new(Vec::new());

        block_on(drive(
            CountUp::initial(7_777),
            &generation,
            token,
            || None,
            |v| shown.borrow_mut().push(v),
            || async { panic!("should not wait for a frame without a clock") },
        ));

        assert_eq!(shown.into_inner(), vec![7_777]);
    }
}
