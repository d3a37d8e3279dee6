//! Staged text reveal.
//!
//! A [`StagedTextReveal`] owns a [`VisibilityGate`] and, once that gate
//! reveals, arms a single completion timer for the whole schedule. Segment
//! animation itself needs no timers: every segment's delay is known up front
//! (see [`RevealSchedule`]) and hosts either hand it to CSS transitions or
//! evaluate it against one clock.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use reveal_engine::{ManualClock, ManualViewport, StagedTextReveal, TextRevealConfig};
//!
//! let viewport = ManualViewport::new();
//! let clock = ManualClock::new();
//! let reveal = StagedTextReveal::new(TextRevealConfig::new("hi there"), Rc::new(clock.clone()));
//!
//! let done = Rc::new(Cell::new(0));
//! let counter = done.clone();
//! reveal.on_complete(move || counter.set(counter.get() + 1));
//! reveal.mount(&viewport, Some("headline"));
//!
//! viewport.report("headline", 1.0);
//! clock.advance_ms(1249);
//! assert_eq!(done.get(), 0);
//! clock.advance_ms(1);
//! assert_eq!(done.get(), 1);
//! ```

use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::TextRevealConfig;
use crate::gate::VisibilityGate;
use crate::host::{Scheduler, TimerHandle, VisibilityObserver};
use crate::latch::Latch;
use crate::render::SegmentFrame;
use crate::schedule::RevealSchedule;
use crate::segment::{Segment, segment_text};
use crate::types::{AnimateBy, Direction, VisibilityState};

type CompletionHook = Rc<dyn Fn()>;

struct TextInner {
    animate_by: AnimateBy,
    direction: Direction,
    schedule: RevealSchedule,
    text: RefCell<String>,
    segments: RefCell<Vec<Segment>>,
    scheduler: Rc<dyn Scheduler>,
    completion: Latch,
    timer: RefCell<Option<TimerHandle>>,
    on_complete: RefCell<Option<CompletionHook>>,
    torn_down: Cell<bool>,
}

impl TextInner {
    /// Arm the completion timer. Any pending one is cancelled first.
    fn arm(self: &Rc<Self>) {
        self.cancel_timer();
        if self.completion.is_fired() || self.torn_down.get() {
            return;
        }

        let count = self.segments.borrow().len();
        if count == 0 {
            tracing::debug!("empty text, completing at reveal");
            self.complete();
            return;
        }

        let delay = self.schedule.completion_delay(count);
        tracing::debug!(segments = count, delay_ms = delay.as_millis() as u64, "completion timer armed");

        let weak: Weak<TextInner> = Rc::downgrade(self);
        let handle = self.scheduler.after(
            delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.timer.borrow_mut().take();
                    inner.complete();
                }
            }),
        );
        *self.timer.borrow_mut() = Some(handle);
    }

    fn complete(&self) {
        if !self.completion.try_fire() {
            return;
        }
        tracing::debug!("staged reveal complete");
        // clone out so the hook may re-enter (e.g. read state) freely
        let hook = self.on_complete.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    fn cancel_timer(&self) {
        let timer = self.timer.borrow_mut().take();
        if let Some(mut timer) = timer {
            timer.cancel();
            tracing::trace!("completion timer cancelled");
        }
    }
}

/// Text that reveals segment by segment once it scrolls into view.
pub struct StagedTextReveal {
    gate: VisibilityGate,
    inner: Rc<TextInner>,
}

impl StagedTextReveal {
    /// Build from `config`; completion is timed by `scheduler`.
    pub fn new(config: TextRevealConfig, scheduler: Rc<dyn Scheduler>) -> Self {
        let config = config.sanitized();
        let segments = segment_text(&config.text, config.animate_by);
        let inner = Rc::new(TextInner {
            animate_by: config.animate_by,
            direction: config.direction,
            schedule: RevealSchedule::new(config.delay_ms, config.step_duration),
            text: RefCell::new(config.text.clone()),
            segments: RefCell::new(segments),
            scheduler,
            completion: Latch::new(),
            timer: RefCell::new(None),
            on_complete: RefCell::new(None),
            torn_down: Cell::new(false),
        });

        let gate = VisibilityGate::new(config.gate());
        let weak = Rc::downgrade(&inner);
        gate.on_reveal(move || {
            if let Some(inner) = weak.upgrade() {
                inner.arm();
            }
        });

        Self { gate, inner }
    }

    /// Callback for the end of the schedule. Fires at most once.
    pub fn on_complete(&self, hook: impl Fn() + 'static) {
        *self.inner.on_complete.borrow_mut() = Some(Rc::new(hook));
    }

    /// Subscribe to visibility events for `target`. See [`VisibilityGate::mount`].
    pub fn mount<O>(&self, observer: &O, target: Option<&O::Target>)
    where
        O: VisibilityObserver + ?Sized,
    {
        if self.inner.torn_down.get() {
            return;
        }
        self.gate.mount(observer, target);
    }

    /// Replace the text.
    ///
    /// Segments are rebuilt. If the reveal already happened and hasn't
    /// completed, the pending completion timer is cancelled and re-armed for
    /// the new segment count, measured from now.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        if *self.inner.text.borrow() == text {
            return;
        }
        *self.inner.segments.borrow_mut() = segment_text(&text, self.inner.animate_by);
        *self.inner.text.borrow_mut() = text;

        self.inner.cancel_timer();
        if self.gate.is_revealed() {
            self.inner.arm();
        }
    }

    pub fn text(&self) -> Ref<'_, String> {
        self.inner.text.borrow()
    }

    pub fn segments(&self) -> Ref<'_, Vec<Segment>> {
        self.inner.segments.borrow()
    }

    pub fn schedule(&self) -> RevealSchedule {
        self.inner.schedule
    }

    pub fn direction(&self) -> Direction {
        self.inner.direction
    }

    pub fn animate_by(&self) -> AnimateBy {
        self.inner.animate_by
    }

    /// Render model for the current segments.
    pub fn frames(&self) -> Vec<SegmentFrame> {
        let schedule = self.inner.schedule;
        self.inner
            .segments
            .borrow()
            .iter()
            .map(|s| SegmentFrame {
                index: s.index,
                text: s.text.clone(),
                is_whitespace: s.is_whitespace,
                delay_ms: (!s.is_whitespace).then(|| schedule.delay_ms(s.index)),
            })
            .collect()
    }

    pub fn state(&self) -> VisibilityState {
        self.gate.state()
    }

    /// Whether the completion notification has fired.
    pub fn is_complete(&self) -> bool {
        self.inner.completion.is_fired()
    }

    /// Whether a completion timer is pending.
    pub fn is_pending(&self) -> bool {
        self.inner.timer.borrow().is_some()
    }

    /// The underlying gate, e.g. to feed observations directly.
    pub fn gate(&self) -> &VisibilityGate {
        &self.gate
    }

    /// Release the subscription and cancel a pending completion. Idempotent.
    /// Nothing fires after this returns.
    pub fn teardown(&self) {
        self.inner.torn_down.set(true);
        self.gate.teardown();
        self.inner.cancel_timer();
    }
}

impl Drop for StagedTextReveal {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for StagedTextReveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StagedTextReveal")
            .field("text", &*self.inner.text.borrow())
            .field("animate_by", &self.inner.animate_by)
            .field("state", &self.state())
            .field("complete", &self.is_complete())
            .finish()
    }
}
