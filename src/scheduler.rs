use std::time::Duration;

use gloo_timers::callback::Interval;
use log::warn;

use crate::config::FRAME_PERIOD_MS;

/// A source of animation frames.
///
/// `every_frame` calls `on_frame` once per frame with the time elapsed since
/// the subscription was made, until the returned handle is dropped.
pub trait FrameScheduler {
    type Handle: 'static;

    fn every_frame(&self, on_frame: Box<dyn FnMut(Duration)>) -> Self::Handle;
}

/// Fixed-tick frames from a `setInterval`, timed with `performance.now()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalScheduler {
    period_ms: u32,
}

impl IntervalScheduler {
    pub fn new(period_ms: u32) -> Self {
        Self { period_ms }
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(FRAME_PERIOD_MS)
    }
}

impl FrameScheduler for IntervalScheduler {
    type Handle = Option<Interval>;

    fn every_frame(&self, mut on_frame: Box<dyn FnMut(Duration)>) -> Self::Handle {
        let Some(performance) = web_sys::window().and_then(|window| window.performance()) else {
            // No clock: deliver one frame past any duration so the value settles.
            warn!("performance clock unavailable, skipping animation");
            on_frame(Duration::MAX);
            return None;
        };

        let started = performance.now();
        Some(Interval::new(self.period_ms, move || {
            let elapsed_ms = (performance.now() - started).max(0.0);
            on_frame(Duration::from_secs_f64(elapsed_ms / 1000.0));
        }))
    }
}
