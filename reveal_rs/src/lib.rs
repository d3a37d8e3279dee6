//! # reveal-engine
//!
//! Viewport-triggered staged reveal engine.
//!
//! Blocks of a page start hidden and reveal the first time they scroll into
//! view; text reveals segment by segment with a linear stagger and reports a
//! single completion. The engine is host-agnostic: visibility detection and
//! timers are borrowed from the host through two small traits, so the same
//! logic runs behind a browser `IntersectionObserver` or a hand-driven test
//! viewport.
//!
//! ## Guarantees
//!
//! - **Fire once** - a gate transitions `Hidden -> Revealed` at most once and
//!   never reverts, however many events arrive.
//! - **Deterministic timing** - segment `i` starts at `delay + i * step`;
//!   completion fires `delay + count * step` after the reveal.
//! - **Clean teardown** - subscriptions and timers are RAII handles; after
//!   `teardown` (or drop) no callback reaches the instance.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use reveal_engine::{ManualClock, ManualViewport, StagedTextReveal, TextRevealConfig};
//!
//! let viewport = ManualViewport::new();
//! let clock = ManualClock::new();
//!
//! let title = StagedTextReveal::new(TextRevealConfig::new("hi there"), Rc::new(clock.clone()));
//! title.mount(&viewport, Some("title"));
//!
//! let delays: Vec<Option<f64>> = title.frames().iter().map(|f| f.delay_ms).collect();
//! assert_eq!(delays, vec![Some(200.0), None, Some(900.0)]);
//!
//! viewport.report("title", 0.8);
//! assert!(title.state().is_revealed());
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - state and option enums
//! - [`segment`] - word/letter segmentation
//! - [`schedule`] - delays and completion time
//! - [`gate`] - [`VisibilityGate`]
//! - [`text`] - [`StagedTextReveal`]
//! - [`host`] - capability traits and RAII handles
//! - [`manual`] - in-memory hosts
//! - [`render`] - inline styles
//! - [`config`] - TOML configuration
//!
//! ---
//!
//! Made for the DIST / MDDVVM site (c)2025

pub mod config;
pub mod error;
pub mod gate;
pub mod host;
pub mod latch;
pub mod manual;
pub mod render;
pub mod schedule;
pub mod segment;
pub mod text;
pub mod types;

pub use config::{GateConfig, RevealConfig, TextRevealConfig};
pub use error::{Result, RevealError};
pub use gate::VisibilityGate;
pub use host::{EventSink, Scheduler, Subscription, TimerHandle, VisibilityObserver};
pub use latch::Latch;
pub use manual::{ManualClock, ManualViewport};
pub use render::{SegmentFrame, gate_style};
pub use schedule::{RevealSchedule, SegmentPhase};
pub use segment::{Segment, join_segments, segment_text};
pub use text::StagedTextReveal;
pub use types::{AnimateBy, Direction, IntersectionEntry, VisibilityState};
