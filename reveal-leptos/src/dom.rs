//! Browser hosts for the reveal engine.
//!
//! [`DomObserver`] wraps `IntersectionObserver`, [`LeptosScheduler`] wraps
//! Leptos timeouts. Both only do something useful on `wasm32` in a browser.

use std::time::Duration;

use leptos::prelude::{set_timeout, set_timeout_with_handle};
use reveal_engine::config::DEFAULT_ROOT_MARGIN;
use reveal_engine::{EventSink, IntersectionEntry, Scheduler, Subscription, TimerHandle, VisibilityObserver};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// `IntersectionObserver`-backed visibility host.
///
/// One browser observer per subscription, disconnected on release.
#[derive(Clone, Debug)]
pub struct DomObserver {
    root_margin: String,
}

impl DomObserver {
    /// Observer with a CSS margin around the viewport, e.g. `"0px 0px -50px 0px"`.
    pub fn new(root_margin: impl Into<String>) -> Self {
        let root_margin = root_margin.into();
        let root_margin = if root_margin.trim().is_empty() {
            DEFAULT_ROOT_MARGIN.to_string()
        } else {
            root_margin
        };
        Self { root_margin }
    }

    pub fn root_margin(&self) -> &str {
        &self.root_margin
    }
}

impl Default for DomObserver {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_MARGIN)
    }
}

impl VisibilityObserver for DomObserver {
    type Target = Element;

    fn observe(&self, target: &Element, threshold: f64, mut sink: EventSink) -> Option<Subscription> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        sink(IntersectionEntry {
                            is_intersecting: entry.is_intersecting(),
                            intersection_ratio: entry.intersection_ratio(),
                        });
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(&self.root_margin);

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                tracing::warn!(?err, root_margin = %self.root_margin, "IntersectionObserver unavailable");
                return None;
            }
        };
        observer.observe(target);

        Some(Subscription::new(move || {
            observer.disconnect();
            // Release usually happens inside `callback` itself (reveal on the
            // first entry), so the closure is freed on a later tick.
            set_timeout(move || drop(callback), Duration::ZERO);
        }))
    }
}

/// Timer host on top of `window.setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeptosScheduler;

impl Scheduler for LeptosScheduler {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => TimerHandle::new(move || handle.clear()),
            Err(err) => {
                tracing::warn!(?err, delay_ms = delay.as_millis() as u64, "failed to schedule timeout");
                TimerHandle::new(|| ())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_root_margin_falls_back() {
        assert_eq!(DomObserver::new("").root_margin(), "0px");
        assert_eq!(DomObserver::new("   ").root_margin(), "0px");
        assert_eq!(DomObserver::new("0px 0px -50px 0px").root_margin(), "0px 0px -50px 0px");
        assert_eq!(DomObserver::default().root_margin(), "0px");
    }
}
