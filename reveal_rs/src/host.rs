//! Capabilities the engine borrows from its host.
//!
//! The engine never talks to a browser, a terminal or a clock directly. A host
//! provides two primitives:
//!
//! - [`VisibilityObserver`] reports how much of a region is on screen, as
//!   callback events, starting with an initial observation.
//! - [`Scheduler`] runs a callback once after a delay.
//!
//! Both hand back RAII handles. Dropping a [`Subscription`] or a
//! [`TimerHandle`] releases the underlying resource; explicit release is
//! idempotent and safe after the resource has already gone away.

use std::fmt;
use std::time::Duration;

use crate::types::IntersectionEntry;

/// Receiver for visibility events of one subscription.
pub type EventSink = Box<dyn FnMut(IntersectionEntry)>;

/// Source of visibility events for regions of type [`Self::Target`].
pub trait VisibilityObserver {
    /// What a subscription watches (a DOM element, a region name, ...).
    type Target: ?Sized;

    /// Start delivering events for `target` to `sink`.
    ///
    /// The host must deliver an initial observation soon after subscribing
    /// (synchronously is allowed), not only on future threshold crossings.
    /// Returns `None` when the host can't observe the target; callers treat
    /// that as "never visible".
    fn observe(&self, target: &Self::Target, threshold: f64, sink: EventSink) -> Option<Subscription>;
}

/// One-shot timer source.
pub trait Scheduler {
    /// Run `callback` once, `delay` from now.
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Runs a release action at most once: on demand or on drop.
struct Release(Option<Box<dyn FnOnce()>>);

impl Release {
    fn new(release: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(release)))
    }

    fn run(&mut self) {
        if let Some(release) = self.0.take() {
            release();
        }
    }

    fn is_pending(&self) -> bool {
        self.0.is_some()
    }
}

impl Drop for Release {
    fn drop(&mut self) {
        self.run();
    }
}

/// Live visibility subscription. Unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Release,
}

impl Subscription {
    /// Wrap the host's unsubscribe action.
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            release: Release::new(unsubscribe),
        }
    }

    /// Stop delivery now. Further calls do nothing.
    pub fn unsubscribe(&mut self) {
        self.release.run();
    }

    /// `false` once unsubscribed.
    pub fn is_active(&self) -> bool {
        self.release.is_pending()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Pending one-shot timer. Cancels on drop.
#[must_use = "dropping a TimerHandle cancels the timer"]
pub struct TimerHandle {
    release: Release,
}

impl TimerHandle {
    /// Wrap the host's cancel action. Hosts must make it a no-op once the
    /// timer has fired.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            release: Release::new(cancel),
        }
    }

    /// Cancel the timer. Safe to call repeatedly and after firing.
    pub fn cancel(&mut self) {
        self.release.run();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("pending", &self.release.is_pending())
            .finish()
    }
}
