//! Render model: inline styles for gates and segments.
//!
//! Hosts that render to HTML use these strings as-is; everything visual is a
//! pure function of the [`VisibilityState`] and the segment's delay.

use serde::Serialize;

use crate::types::{Direction, VisibilityState};

/// Gate fade/slide length.
pub const GATE_TRANSITION_MS: u32 = 700;

/// Vertical offset of hidden segments, in rem.
const SEGMENT_OFFSET_REM: f64 = 0.75;

/// Inline style for a gated block.
pub fn gate_style(state: VisibilityState) -> String {
    let resting = match state {
        VisibilityState::Hidden => "opacity:0;transform:translateY(2rem)",
        VisibilityState::Revealed => "opacity:1;transform:none",
    };
    format!("{resting};transition:opacity {GATE_TRANSITION_MS}ms ease-out,transform {GATE_TRANSITION_MS}ms ease-out")
}

/// Everything a host needs to draw one segment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentFrame {
    pub index: usize,
    pub text: String,
    pub is_whitespace: bool,
    /// `None` for whitespace, which is never delayed.
    pub delay_ms: Option<f64>,
}

impl SegmentFrame {
    /// Inline style for this segment.
    ///
    /// Whitespace is plain inline-block text, always. Other segments sit
    /// offset, blurred and transparent until `state` is revealed, then
    /// transition to rest after their delay.
    pub fn style(&self, state: VisibilityState, direction: Direction) -> String {
        let Some(delay) = self.delay_ms else {
            return "display:inline-block;white-space:pre".to_string();
        };
        let pose = match state {
            VisibilityState::Hidden => format!(
                "opacity:0;transform:translateY({}rem);filter:blur(4px)",
                direction.offset_sign() * SEGMENT_OFFSET_REM
            ),
            VisibilityState::Revealed => "opacity:1;transform:translateY(0);filter:blur(0)".to_string(),
        };
        format!(
            "display:inline-block;will-change:transform;{pose};transition:all {}ms ease-out;transition-delay:{}ms",
            crate::schedule::SEGMENT_TRANSITION_MS,
            format_ms(delay)
        )
    }
}

/// Milliseconds without a trailing `.0`, at most three decimals.
fn format_ms(ms: f64) -> String {
    let rounded = (ms * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}
