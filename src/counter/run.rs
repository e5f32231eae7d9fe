use std::cell::RefCell;
use std::rc::Rc;

use super::animator::{CountUp, FrameToken, Reveal};
use crate::motion::MotionPreference;
use crate::scheduler::FrameScheduler;

/// A count-up bound to a frame source and a display sink.
///
/// Holds the frame subscription for as long as the animation runs. The
/// subscription is released when the value settles, when the animator is
/// reset underneath it, or when the run is dropped, whichever comes first.
/// Dropping a run cancels the animator only while that same run is still
/// the one animating; a stale run never stops its successor.
///
/// Callers replacing the source text should drop the old run before
/// `set_raw`, so its subscription is gone before the next run starts.
pub struct CountUpRun<H> {
    count_up: Rc<RefCell<CountUp>>,
    frames: Rc<RefCell<Option<H>>>,
    token: Option<FrameToken>,
}

impl<H: 'static> CountUpRun<H> {
    /// Reveals `count_up` and, if it animates, subscribes to `scheduler`.
    /// `on_display` receives each new display text.
    pub fn start<S>(
        count_up: Rc<RefCell<CountUp>>,
        motion: MotionPreference,
        scheduler: &S,
        on_display: impl Fn(String) + 'static,
    ) -> Self
    where
        S: FrameScheduler<Handle = H>,
    {
        let frames = Rc::new(RefCell::new(None));
        let reveal = count_up.borrow_mut().reveal(motion);
        let mut owned = None;

        match reveal {
            Reveal::Static => {}
            Reveal::Settled => on_display(count_up.borrow().display().to_string()),
            Reveal::Animate(token) => {
                owned = Some(token);
                let animator = count_up.clone();
                let slot = Rc::downgrade(&frames);
                let handle = scheduler.every_frame(Box::new(move |elapsed| {
                    let Ok(mut animator) = animator.try_borrow_mut() else {
                        return;
                    };
                    let display = animator.tick(token, elapsed).map(str::to_string);
                    let finished = !animator.is_running(token);
                    drop(animator);

                    if let Some(display) = display {
                        on_display(display);
                    }
                    if finished {
                        if let Some(slot) = slot.upgrade() {
                            let released = slot.borrow_mut().take();
                            drop(released);
                        }
                    }
                }));

                // The scheduler may have run the whole animation synchronously.
                if count_up.borrow().is_running(token) {
                    *frames.borrow_mut() = Some(handle);
                }
            }
        }

        Self {
            count_up,
            frames,
            token: owned,
        }
    }

    /// Whether the run still holds a frame subscription.
    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.frames.borrow().is_some()
    }
}

impl<H> Drop for CountUpRun<H> {
    fn drop(&mut self) {
        let released = self.frames.try_borrow_mut().ok().and_then(|mut slot| slot.take());
        drop(released);
        let Some(token) = self.token else {
            return;
        };
        if let Ok(mut count_up) = self.count_up.try_borrow_mut() {
            if count_up.is_running(token) {
                count_up.cancel();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::counter::animator::Phase;
    use crate::scheduler::testing::ManualScheduler;
    use pretty_assertions::assert_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn sink() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let writer = frames.clone();
        (frames, move |display| writer.borrow_mut().push(display))
    }

    #[test]
    fn test_runs_to_completion_and_releases_frames() {
        let scheduler = ManualScheduler::default();
        let count_up = Rc::new(RefCell::new(CountUp::new("$450M")));
        let (frames, on_display) = sink();

        let run = CountUpRun::start(count_up.clone(), MotionPreference::Full, &scheduler, on_display);
        assert!(run.is_active());
        assert_eq!(scheduler.active_count(), 1);

        for elapsed in [16, 400, 900] {
            assert_eq!(scheduler.advance_to(ms(elapsed)), 1);
        }
        scheduler.advance_to(ms(1400));

        assert!(!run.is_active());
        assert_eq!(scheduler.active_count(), 0);
        assert_eq!(frames.borrow().len(), 4);
        assert_eq!(frames.borrow().last().map(String::as_str), Some("$450M"));
        assert_eq!(count_up.borrow().phase(), Phase::Settled);
    }

    #[test]
    fn test_drop_mid_animation_stops_all_writes() {
        let scheduler = ManualScheduler::default();
        let count_up = Rc::new(RefCell::new(CountUp::new("40k+")));
        let (frames, on_display) = sink();

        let run = CountUpRun::start(count_up.clone(), MotionPreference::Full, &scheduler, on_display);
        scheduler.advance_to(ms(300));
        let written = frames.borrow().clone();
        drop(run);

        assert_eq!(scheduler.advance_to(ms(600)), 0);
        assert_eq!(scheduler.force_released(ms(900)), 1);
        assert_eq!(*frames.borrow(), written);
        assert_eq!(count_up.borrow().phase(), Phase::Idle);
        assert_eq!(count_up.borrow().display(), "40k+");
    }

    #[test]
    fn test_reduced_motion_emits_only_the_final_text() {
        let scheduler = ManualScheduler::default();
        let count_up = Rc::new(RefCell::new(CountUp::new("99.9%")));
        let (frames, on_display) = sink();

        let run = CountUpRun::start(count_up, MotionPreference::Reduced, &scheduler, on_display);

        assert!(!run.is_active());
        assert_eq!(scheduler.active_count(), 0);
        assert_eq!(*frames.borrow(), vec!["99.9%".to_string()]);
    }

    #[test]
    fn test_non_numeric_value_never_subscribes() {
        let scheduler = ManualScheduler::default();
        let count_up = Rc::new(RefCell::new(CountUp::new("N/A")));
        let (frames, on_display) = sink();

        let run = CountUpRun::start(count_up.clone(), MotionPreference::Full, &scheduler, on_display);

        assert!(!run.is_active());
        assert_eq!(scheduler.active_count(), 0);
        assert!(frames.borrow().is_empty());
        assert_eq!(count_up.borrow().display(), "N/A");
    }

    #[test]
    fn test_reset_underneath_a_run_writes_nothing_more() {
        let scheduler = ManualScheduler::default();
        let count_up = Rc::new(RefCell::new(CountUp::new("$450M")));
        let (frames, on_display) = sink();

        let run = CountUpRun::start(count_up.clone(), MotionPreference::Full, &scheduler, on_display);
        scheduler.advance_to(ms(200));
        count_up.borrow_mut().set_raw("$500M");
        let written = frames.borrow().len();

        scheduler.advance_to(ms(400));
        assert!(!run.is_active());
        assert_eq!(scheduler.active_count(), 0);
        assert_eq!(frames.borrow().len(), written);
        assert_eq!(count_up.borrow().display(), "$500M");
    }

    #[test]
    fn test_stale_run_drop_leaves_the_new_run_alone() {
        let scheduler = ManualScheduler::default();
        let count_up = Rc::new(RefCell::new(CountUp::new("$450M")));
        let (frames, on_display) = sink();

        let first = CountUpRun::start(count_up.clone(), MotionPreference::Full, &scheduler, |_| {});
        scheduler.advance_to(ms(100));
        count_up.borrow_mut().set_raw("$500M");

        let second = CountUpRun::start(count_up.clone(), MotionPreference::Full, &scheduler, on_display);
        scheduler.advance_to(ms(300));
        drop(first);
        assert!(second.is_active());
        assert_eq!(count_up.borrow().phase(), Phase::Animating);

        scheduler.advance_to(ms(1400));
        assert!(!second.is_active());
        assert_eq!(count_up.borrow().phase(), Phase::Settled);
        assert_eq!(frames.borrow().last().map(String::as_str), Some("$500M"));
    }

    #[test]
    fn test_dropping_before_reset_never_overlaps_runs() {
        let scheduler = ManualScheduler::default();
        let count_up = Rc::new(RefCell::new(CountUp::new("$450M")));
        let (frames, on_display) = sink();

        let first = CountUpRun::start(count_up.clone(), MotionPreference::Full, &scheduler, |_| {});
        scheduler.advance_to(ms(100));
        drop(first);
        assert_eq!(scheduler.active_count(), 0);

        assert!(count_up.borrow_mut().set_raw("$500M"));
        let second = CountUpRun::start(count_up.clone(), MotionPreference::Full, &scheduler, on_display);
        assert_eq!(scheduler.active_count(), 1);

        scheduler.advance_to(ms(1400));
        assert!(!second.is_active());
        assert_eq!(frames.borrow().last().map(String::as_str), Some("$500M"));
    }

    #[test]
    fn test_restart_after_drop_uses_a_fresh_subscription() {
        let scheduler = ManualScheduler::default();
        let count_up = Rc::new(RefCell::new(CountUp::new("16%")));
        let (frames, on_display) = sink();

        let first = CountUpRun::start(count_up.clone(), MotionPreference::Full, &scheduler, |_| {});
        scheduler.advance_to(ms(100));
        drop(first);

        let second = CountUpRun::start(count_up.clone(), MotionPreference::Full, &scheduler, on_display);
        assert_eq!(scheduler.active_count(), 1);
        scheduler.advance_to(ms(1400));
        assert!(!second.is_active());
        assert_eq!(frames.borrow().last().map(String::as_str), Some("16%"));
        assert_eq!(scheduler.force_released(ms(1500)), 2);
        assert_eq!(frames.borrow().len(), 1);
    }
}
