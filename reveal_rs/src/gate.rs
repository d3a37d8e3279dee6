//! Fire-once visibility gate.
//!
//! A [`VisibilityGate`] watches one region and flips from
//! [`VisibilityState::Hidden`] to [`VisibilityState::Revealed`] the first time
//! an observation meets its threshold. The subscription is released right
//! there, so each block costs at most one observation period.
//!
//! ```rust
//! use reveal_engine::{GateConfig, ManualViewport, VisibilityGate, VisibilityState};
//!
//! let viewport = ManualViewport::new();
//! let gate = VisibilityGate::new(GateConfig::default());
//! gate.mount(&viewport, Some("cards"));
//!
//! viewport.report("cards", 0.1);
//! assert_eq!(gate.state(), VisibilityState::Hidden);
//!
//! viewport.report("cards", 0.6);
//! assert_eq!(gate.state(), VisibilityState::Revealed);
//! assert_eq!(viewport.active(), 0);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::GateConfig;
use crate::host::{Subscription, VisibilityObserver};
use crate::latch::Latch;
use crate::types::{IntersectionEntry, VisibilityState};

type RevealHook = Box<dyn FnOnce()>;

struct GateInner {
    threshold: f64,
    state: Cell<VisibilityState>,
    latch: Latch,
    subscription: RefCell<Option<Subscription>>,
    hooks: RefCell<Vec<RevealHook>>,
}

impl GateInner {
    fn handle_entry(&self, entry: IntersectionEntry) {
        if self.latch.is_fired() || !entry.meets(self.threshold) {
            return;
        }
        if !self.latch.try_fire() {
            return;
        }

        self.state.set(VisibilityState::Revealed);
        tracing::debug!(
            ratio = entry.intersection_ratio,
            threshold = self.threshold,
            "block revealed"
        );
        self.release();

        let hooks = std::mem::take(&mut *self.hooks.borrow_mut());
        for hook in hooks {
            hook();
        }
    }

    fn release(&self) {
        // take first so the host's unsubscribe runs without our borrow held
        let subscription = self.subscription.borrow_mut().take();
        if let Some(mut subscription) = subscription {
            subscription.unsubscribe();
            tracing::trace!("visibility subscription released");
        }
    }
}

/// Watches one region and reveals it exactly once.
pub struct VisibilityGate {
    inner: Rc<GateInner>,
}

impl VisibilityGate {
    pub fn new(config: GateConfig) -> Self {
        let config = config.sanitized();
        Self {
            inner: Rc::new(GateInner {
                threshold: config.threshold,
                state: Cell::new(VisibilityState::Hidden),
                latch: Latch::new(),
                subscription: RefCell::new(None),
                hooks: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Run `hook` once when the gate reveals. Runs immediately if it already has.
    pub fn on_reveal(&self, hook: impl FnOnce() + 'static) {
        if self.is_revealed() {
            hook();
        } else {
            self.inner.hooks.borrow_mut().push(Box::new(hook));
        }
    }

    /// Subscribe to visibility events for `target`.
    ///
    /// Any previous subscription is released first. A missing target leaves
    /// the gate hidden without subscribing. A revealed gate never subscribes
    /// again.
    pub fn mount<O>(&self, observer: &O, target: Option<&O::Target>)
    where
        O: VisibilityObserver + ?Sized,
    {
        self.inner.release();

        if self.is_revealed() {
            return;
        }
        let Some(target) = target else {
            tracing::debug!("no target to observe, block stays hidden");
            return;
        };

        let weak: Weak<GateInner> = Rc::downgrade(&self.inner);
        let sink = Box::new(move |entry: IntersectionEntry| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_entry(entry);
            }
        });

        let Some(mut subscription) = observer.observe(target, self.inner.threshold, sink) else {
            tracing::warn!("visibility host refused to observe target, block stays hidden");
            return;
        };

        // The host may have delivered a qualifying initial observation while
        // `observe` was still running; there was nothing to release then.
        if self.is_revealed() {
            subscription.unsubscribe();
            return;
        }

        tracing::trace!(threshold = self.inner.threshold, "visibility subscription acquired");
        *self.inner.subscription.borrow_mut() = Some(subscription);
    }

    /// Apply one observation directly, as if delivered by the host.
    pub fn handle_entry(&self, entry: IntersectionEntry) {
        self.inner.handle_entry(entry);
    }

    pub fn state(&self) -> VisibilityState {
        self.inner.state.get()
    }

    pub fn is_revealed(&self) -> bool {
        self.state().is_revealed()
    }

    /// Whether a subscription is currently held.
    pub fn is_observing(&self) -> bool {
        self.inner
            .subscription
            .borrow()
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    pub fn threshold(&self) -> f64 {
        self.inner.threshold
    }

    /// Release the subscription without touching the state. Idempotent.
    ///
    /// Pending reveal hooks are dropped: a torn-down gate can't reveal.
    pub fn teardown(&self) {
        self.inner.release();
        self.inner.hooks.borrow_mut().clear();
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}

impl Drop for VisibilityGate {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for VisibilityGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityGate")
            .field("threshold", &self.inner.threshold)
            .field("state", &self.state())
            .field("observing", &self.is_observing())
            .finish()
    }
}
