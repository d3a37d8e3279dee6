//! Reveal timing derived from `(delay, step)`.
//!
//! Nothing here is stored per segment. A [`RevealSchedule`] is two numbers and
//! every delay is computed on demand, so a host can evaluate the whole
//! sequence against a single clock reading taken at the visibility transition
//! instead of running one timer per segment.

use std::time::Duration;

use crate::segment::Segment;

/// Length of one segment's visual transition.
pub const SEGMENT_TRANSITION_MS: f64 = 500.0;

/// Linear stagger: `delay(i) = base + i * step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSchedule {
    base_delay_ms: f64,
    step_ms: f64,
}

/// Where a segment is in its animation at a given moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentPhase {
    /// Delay not yet elapsed.
    Pending,
    /// Transition in progress.
    Animating,
    /// At rest. Whitespace is always here.
    Settled,
}

impl RevealSchedule {
    /// `delay_ms` before the first segment, `step_duration` seconds between
    /// consecutive indices. Negative or non-finite steps collapse to zero.
    pub fn new(delay_ms: u32, step_duration: f64) -> Self {
        let step = if step_duration.is_finite() && step_duration > 0.0 {
            step_duration
        } else {
            0.0
        };
        Self {
            base_delay_ms: f64::from(delay_ms),
            step_ms: step * 1000.0,
        }
    }

    /// Base delay in milliseconds.
    pub fn base_delay_ms(&self) -> f64 {
        self.base_delay_ms
    }

    /// Stagger between indices in milliseconds.
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    /// Transition delay for the segment at `index`.
    pub fn delay_ms(&self, index: usize) -> f64 {
        self.base_delay_ms + index as f64 * self.step_ms
    }

    /// Per-segment delays; `None` for whitespace, which renders immediately.
    pub fn segment_delays(&self, segments: &[Segment]) -> Vec<Option<f64>> {
        segments
            .iter()
            .map(|s| (!s.is_whitespace).then(|| self.delay_ms(s.index)))
            .collect()
    }

    /// When the completion notification fires, measured from the transition.
    ///
    /// Uses the full segment *count*, whitespace included, so the span can run
    /// past the last visible animation when the text ends in whitespace. An
    /// empty sequence completes immediately.
    pub fn completion_delay_ms(&self, segment_count: usize) -> f64 {
        if segment_count == 0 {
            return 0.0;
        }
        self.base_delay_ms + segment_count as f64 * self.step_ms
    }

    /// [`Self::completion_delay_ms`] as a [`Duration`], rounded to the microsecond.
    pub fn completion_delay(&self, segment_count: usize) -> Duration {
        millis_to_duration(self.completion_delay_ms(segment_count))
    }

    /// Phase of `segment` `elapsed` after the transition.
    pub fn phase_at(&self, segment: &Segment, elapsed: Duration) -> SegmentPhase {
        if segment.is_whitespace {
            return SegmentPhase::Settled;
        }
        let elapsed_ms = elapsed.as_micros() as f64 / 1000.0;
        let start = self.delay_ms(segment.index);
        if elapsed_ms < start {
            SegmentPhase::Pending
        } else if elapsed_ms < start + SEGMENT_TRANSITION_MS {
            SegmentPhase::Animating
        } else {
            SegmentPhase::Settled
        }
    }

    /// Number of non-whitespace segments whose animation has started by `elapsed`.
    pub fn started_count(&self, segments: &[Segment], elapsed: Duration) -> usize {
        segments
            .iter()
            .filter(|s| !s.is_whitespace && self.phase_at(s, elapsed) != SegmentPhase::Pending)
            .count()
    }
}

fn millis_to_duration(ms: f64) -> Duration {
    Duration::from_micros((ms * 1000.0).round().max(0.0) as u64)
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self::new(200, 0.35)
    }
}
