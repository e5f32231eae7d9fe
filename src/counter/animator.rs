//! Count-up state machine for a single KPI value.
//!
//! `Idle → Animating → Settled`, driven by explicit events instead of
//! framework effects: `reveal` when the value first becomes visible, `tick`
//! from whatever frame source the caller owns, `cancel` on teardown and
//! `set_raw` when the source text changes.

use std::time::Duration;

use log::debug;

use super::easing::CubicBezier;
use super::format::format;
use super::parse::{parse, ParsedValue};
use crate::config::COUNT_UP_DURATION;
use crate::motion::MotionPreference;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
    Settled,
}

/// Identifies one animation run. Ticks carrying an older token are ignored,
/// so a frame source that outlives its run cannot write to the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameToken(u64);

/// What `reveal` decided to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Nothing numeric to animate, or not idle; the display is unchanged.
    Static,
    /// Frames are expected, tagged with this token.
    Animate(FrameToken),
    /// Reduced motion: the final text is already on display.
    Settled,
}

#[derive(Debug)]
pub struct CountUp {
    raw: String,
    parsed: Option<ParsedValue>,
    phase: Phase,
    display: String,
    current_value: f64,
    generation: u64,
    last_elapsed: Duration,
    duration: Duration,
    easing: CubicBezier,
}

impl CountUp {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse(&raw);
        Self {
            display: raw.clone(),
            raw,
            parsed,
            phase: Phase::Idle,
            current_value: 0.0,
            generation: 0,
            last_elapsed: Duration::ZERO,
            duration: COUNT_UP_DURATION,
            easing: CubicBezier::EASE_OUT,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_easing(mut self, easing: CubicBezier) -> Self {
        self.easing = easing;
        self
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Text to show right now.
    pub fn display(&self) -> &str {
        &self.display
    }

    #[cfg(test)]
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Whether ticks tagged with `token` would still be applied.
    pub fn is_running(&self, token: FrameToken) -> bool {
        self.phase == Phase::Animating && token.0 == self.generation
    }

    /// The value has become visible for the first time.
    pub fn reveal(&mut self, motion: MotionPreference) -> Reveal {
        if self.phase != Phase::Idle {
            return Reveal::Static;
        }
        let Some(target) = self.parsed.as_ref().map(ParsedValue::value) else {
            return Reveal::Static;
        };

        if !motion.allows_animation() {
            self.settle(target);
            return Reveal::Settled;
        }

        self.generation += 1;
        self.phase = Phase::Animating;
        self.current_value = 0.0;
        self.last_elapsed = Duration::ZERO;
        debug!("count-up started for {:?}", self.raw);
        Reveal::Animate(FrameToken(self.generation))
    }

    /// Advances the run identified by `token` to `elapsed` since it started.
    ///
    /// Returns the new display text, or `None` when the tick belongs to a
    /// cancelled run, arrives after settling, or goes back in time.
    pub fn tick(&mut self, token: FrameToken, elapsed: Duration) -> Option<&str> {
        if self.phase != Phase::Animating || token.0 != self.generation {
            return None;
        }
        if elapsed < self.last_elapsed {
            return None;
        }
        self.last_elapsed = elapsed;

        let parsed = self.parsed.as_ref()?;
        let target = parsed.value();
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };

        if progress >= 1.0 {
            self.settle(target);
        } else {
            self.current_value = target * self.easing.apply(progress);
            self.display = format(parsed, self.current_value);
        }
        Some(&self.display)
    }

    /// Stops the active run, if any, and returns to `Idle`.
    ///
    /// Outstanding tokens become stale. A settled value stays settled.
    pub fn cancel(&mut self) {
        if self.phase != Phase::Animating {
            return;
        }
        self.generation += 1;
        self.phase = Phase::Idle;
        self.current_value = 0.0;
        self.display = self.raw.clone();
        debug!("count-up cancelled for {:?}", self.raw);
    }

    /// Replaces the source text. Any run in flight is cancelled and the
    /// animator starts over from `Idle`. Returns whether anything changed.
    pub fn set_raw(&mut self, raw: impl Into<String>) -> bool {
        let raw = raw.into();
        if raw == self.raw {
            return false;
        }
        self.cancel();
        self.generation += 1;
        self.parsed = parse(&raw);
        self.display = raw.clone();
        self.raw = raw;
        self.phase = Phase::Idle;
        self.current_value = 0.0;
        true
    }

    // The terminal frame is the source text itself, never a reformatted
    // number, so separators and precision come out exactly as written.
    fn settle(&mut self, target: f64) {
        self.phase = Phase::Settled;
        self.current_value = target;
        self.display = self.raw.clone();
        debug!("count-up settled on {:?}", self.raw);
    }
}
