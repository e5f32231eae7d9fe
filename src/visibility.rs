//! One-shot "became visible" triggers.
//!
//! `VisibilityLatch` holds the decision logic; `VisibilityObserver` feeds it
//! from an `IntersectionObserver`; `use_in_view` wires both to a node and
//! reports an `InView` status.

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Browsers report ratios like 0.8999 when the element sits exactly on the
// threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Latches `false -> true` the first time enough of an element is visible,
/// and never goes back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityLatch {
    amount: f64,
    has_become_visible: bool,
}

impl VisibilityLatch {
    /// `amount` is the visible fraction of the element's area (0.0 to 1.0)
    /// that counts as "in view".
    pub fn new(amount: f64) -> Self {
        Self {
            amount: amount.clamp(0.0, 1.0),
            has_become_visible: false,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    #[cfg(test)]
    pub fn has_become_visible(&self) -> bool {
        self.has_become_visible
    }

    /// Feeds one intersection sample. Returns `true` only for the sample
    /// that flips the latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.has_become_visible || !is_intersecting {
            return false;
        }
        if ratio + RATIO_TOLERANCE < self.amount {
            return false;
        }
        self.has_become_visible = true;
        true
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches one element and calls back once when its latch flips.
///
/// Disconnects on drop. Where `IntersectionObserver` is unavailable the
/// observer is inert: it never fires and never fails.
pub struct VisibilityObserver {
    observer: Option<IntersectionObserver>,
    _callback: Option<EntriesCallback>,
}

impl VisibilityObserver {
    pub fn observe(target: &Element, amount: f64, on_visible: impl FnOnce() + 'static) -> Self {
        let mut latch = VisibilityLatch::new(amount);
        let mut on_visible = Some(on_visible);

        let callback = EntriesCallback::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if latch.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                    observer.disconnect();
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                    break;
                }
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(latch.amount()));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(target);
                Self {
                    observer: Some(observer),
                    _callback: Some(callback),
                }
            }
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                Self::inert()
            }
        }
    }

    pub fn inert() -> Self {
        Self {
            observer: None,
            _callback: None,
        }
    }

    pub fn is_inert(&self) -> bool {
        self.observer.is_none()
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

/// Where a watched node stands, as seen by `use_in_view`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InView {
    /// Observed, threshold not reached yet.
    Pending,
    /// Crossed the threshold at least once.
    Visible,
    /// Nothing can report intersections for this node, so it never fires.
    Unobservable,
}

impl InView {
    pub fn is_visible(self) -> bool {
        self == InView::Visible
    }

    /// Only a node that is still waiting on its trigger should be held back.
    pub fn is_pending(self) -> bool {
        self == InView::Pending
    }
}

/// Tracks `node` until `amount` of it has been on screen; `Visible` from
/// then on for the rest of the component's life.
#[hook]
pub fn use_in_view(node: NodeRef, amount: f64) -> InView {
    let in_view = use_state(|| InView::Pending);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = match (*in_view, node.cast::<Element>()) {
                    (InView::Pending, Some(element)) => {
                        let on_visible = in_view.clone();
                        let observer = VisibilityObserver::observe(&element, amount, move || {
                            on_visible.set(InView::Visible)
                        });
                        if observer.is_inert() {
                            in_view.set(InView::Unobservable);
                        }
                        observer
                    }
                    _ => VisibilityObserver::inert(),
                };
                move || drop(observer)
            },
            node,
        );
    }

    *in_view
}
