//! Animated KPI values: parse a display string, count up to its number and
//! settle back on the exact source text.

pub mod animator;
pub mod easing;
pub mod format;
pub mod parse;
pub mod run;

pub use animator::CountUp;
pub use run::CountUpRun;
