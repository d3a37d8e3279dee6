//! In-memory hosts driven by hand.
//!
//! [`ManualViewport`] and [`ManualClock`] implement the host traits without a
//! browser: regions are named strings, time only moves on [`ManualClock::advance`].
//! Headless renderers use them directly, and they make every timing and
//! ordering property of the engine checkable in plain unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::host::{EventSink, Scheduler, Subscription, TimerHandle, VisibilityObserver};
use crate::types::IntersectionEntry;

struct Watch {
    region: String,
    threshold: f64,
    sink: Rc<RefCell<EventSink>>,
}

#[derive(Default)]
struct ViewportState {
    next_id: u64,
    watches: BTreeMap<u64, Watch>,
    initial: HashMap<String, f64>,
    delivered: usize,
}

/// Viewport with named regions whose visibility is reported by the caller.
#[derive(Clone, Default)]
pub struct ManualViewport {
    state: Rc<RefCell<ViewportState>>,
}

impl ManualViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `region` as already `ratio` on screen.
    ///
    /// New subscriptions on the region receive this as their initial
    /// observation, synchronously from inside `observe`.
    pub fn set_initial(&self, region: &str, ratio: f64) {
        self.state.borrow_mut().initial.insert(region.to_string(), ratio);
    }

    /// Deliver an observation for `region` to every live subscription on it.
    ///
    /// Returns how many sinks received the event.
    pub fn report(&self, region: &str, ratio: f64) -> usize {
        let entry = IntersectionEntry::visible(ratio);
        self.state.borrow_mut().initial.insert(region.to_string(), ratio);
        // Collect first: sinks may unsubscribe (and so touch the state) while running.
        let sinks: Vec<Rc<RefCell<EventSink>>> = self
            .state
            .borrow()
            .watches
            .values()
            .filter(|w| w.region == region)
            .map(|w| w.sink.clone())
            .collect();

        let mut delivered = 0;
        for sink in sinks {
            if let Ok(mut sink) = sink.try_borrow_mut() {
                (sink)(entry);
                delivered += 1;
            }
        }
        self.state.borrow_mut().delivered += delivered;
        delivered
    }

    /// Live subscriptions across all regions.
    pub fn active(&self) -> usize {
        self.state.borrow().watches.len()
    }

    /// Live subscriptions on `region`.
    pub fn active_on(&self, region: &str) -> usize {
        self.state
            .borrow()
            .watches
            .values()
            .filter(|w| w.region == region)
            .count()
    }

    /// Thresholds requested by live subscriptions on `region`.
    pub fn thresholds_on(&self, region: &str) -> Vec<f64> {
        self.state
            .borrow()
            .watches
            .values()
            .filter(|w| w.region == region)
            .map(|w| w.threshold)
            .collect()
    }

    /// Total events handed to sinks so far.
    pub fn delivered(&self) -> usize {
        self.state.borrow().delivered
    }
}

impl VisibilityObserver for ManualViewport {
    type Target = str;

    fn observe(&self, target: &str, threshold: f64, sink: EventSink) -> Option<Subscription> {
        let sink = Rc::new(RefCell::new(sink));
        let (id, initial) = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.watches.insert(
                id,
                Watch {
                    region: target.to_string(),
                    threshold,
                    sink: sink.clone(),
                },
            );
            (id, state.initial.get(target).copied())
        };

        if let Some(ratio) = initial {
            (sink.borrow_mut())(IntersectionEntry::visible(ratio));
            self.state.borrow_mut().delivered += 1;
        }

        let weak: Weak<RefCell<ViewportState>> = Rc::downgrade(&self.state);
        Some(Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().watches.remove(&id);
            }
        }))
    }
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    // keyed by (due, id) so equal deadlines fire in scheduling order
    timers: BTreeMap<(Duration, u64), Box<dyn FnOnce()>>,
    fired: usize,
}

/// Virtual monotonic clock with one-shot timers.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Move time forward by `by`, firing every timer that comes due, in order.
    /// Timers scheduled by a firing callback run too if they fall in the window.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                match state.timers.keys().next().copied() {
                    Some(key) if key.0 <= target => {
                        state.now = key.0;
                        state.fired += 1;
                        state.timers.remove(&key)
                    }
                    _ => None,
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }

    /// [`Self::advance`] in milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Timers scheduled but not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Timers fired so far.
    pub fn fired(&self) -> usize {
        self.state.borrow().fired
    }
}

impl Scheduler for ManualClock {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let key = {
            let mut state = self.state.borrow_mut();
            let key = (state.now + delay, state.next_id);
            state.next_id += 1;
            state.timers.insert(key, callback);
            key
        };

        let weak = Rc::downgrade(&self.state);
        TimerHandle::new(move || {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().timers.remove(&key);
            }
        })
    }
}
