//! Reduced-motion preference.
//!
//! The browser's `prefers-reduced-motion` media query decides by default. A
//! `reduce_motion` key in localStorage (`1`, `reduced`, `0`, `full`, ...)
//! overrides it.

use log::{debug, warn};
use yew::prelude::*;

const MEDIA_QUERY: &str = "(prefers-reduced-motion: reduce)";
const OVERRIDE_KEY: &str = "reduce_motion";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    /// Animate normally.
    #[default]
    Full,
    /// Show final states immediately.
    Reduced,
}

impl MotionPreference {
    #[must_use]
    pub fn allows_animation(&self) -> bool {
        matches!(self, MotionPreference::Full)
    }
}

/// Parses an override value. Unknown values leave the decision to the
/// media query.
#[must_use]
pub fn parse_motion_preference(value: &str) -> Option<MotionPreference> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "reduced" | "reduce" => Some(MotionPreference::Reduced),
        "0" | "false" | "no" | "full" => Some(MotionPreference::Full),
        _ => None,
    }
}

/// Reads the user's preference from the browser.
///
/// Without a window or media query support this reports `Reduced`, so
/// values render in their final state rather than depending on animation
/// machinery that is not there.
pub fn detect_motion_preference() -> MotionPreference {
    let Some(window) = web_sys::window() else {
        debug!("no window, rendering without motion");
        return MotionPreference::Reduced;
    };

    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(OVERRIDE_KEY).ok())
        .flatten();
    if let Some(preference) = stored.as_deref().and_then(parse_motion_preference) {
        debug!("motion preference overridden to {:?}", preference);
        return preference;
    }

    match window.match_media(MEDIA_QUERY) {
        Ok(Some(query)) if query.matches() => MotionPreference::Reduced,
        Ok(Some(_)) => MotionPreference::Full,
        Ok(None) | Err(_) => {
            warn!("matchMedia unavailable, rendering without motion");
            MotionPreference::Reduced
        }
    }
}

/// The preference is read once per component; it does not follow live
/// changes to the system setting.
#[hook]
pub fn use_motion_preference() -> MotionPreference {
    *use_state(detect_motion_preference)
}
