use std::time::Duration;

use log::Level;

/// How long a KPI counts up from zero before settling.
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(1400);

/// Period of the fixed-tick frame driver (~60fps).
pub const FRAME_PERIOD_MS: u32 = 16;

/// How long the contact form confirmation stays on screen.
pub const TOAST_LIFETIME_MS: u32 = 6_000;

/// Fraction of an element that must be visible before its trigger fires.
pub mod thresholds {
    pub const KPI_CARD: f64 = 0.9;
    pub const CONTACT: f64 = 0.2;
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
