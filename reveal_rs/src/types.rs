//! Shared value types for the reveal engine.
//!
//! Everything here is plain data: cheap to copy, serializable where it shows
//! up in configuration, and free of host-specific handles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One-way visibility state of a gated block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisibilityState {
    /// Not yet seen. Rendered in the suppressed form.
    #[default]
    Hidden,
    /// Seen at least once. Terminal for the instance's lifetime.
    Revealed,
}

impl VisibilityState {
    /// `true` once the block has been revealed.
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// A single observation delivered by a visibility host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntersectionEntry {
    /// Whether the region currently intersects the viewport.
    pub is_intersecting: bool,
    /// Fraction of the region inside the viewport, `0.0..=1.0`.
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    /// Entry for a region with `ratio` of its area on screen.
    pub fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: ratio > 0.0,
            intersection_ratio: ratio,
        }
    }

    /// Entry for a region fully off screen.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Does this observation satisfy `threshold`?
    ///
    /// A zero threshold accepts any intersecting entry, including edge-adjacent
    /// ones that report a ratio of exactly zero.
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.intersection_ratio >= threshold
    }
}

/// How text is split into animated segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AnimateBy {
    /// Words and the whitespace runs between them.
    #[default]
    Words,
    /// One segment per character.
    Letters,
}

impl AnimateBy {
    /// Lenient parse: anything that isn't `letters` means words.
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("letters") {
            Self::Letters
        } else {
            Self::Words
        }
    }

    /// Lowercase name as used in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Letters => "letters",
        }
    }
}

impl FromStr for AnimateBy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl From<String> for AnimateBy {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl fmt::Display for AnimateBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side segments slide in from. Purely cosmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Direction {
    /// Start above the resting position.
    #[default]
    Top,
    /// Start below the resting position.
    Bottom,
}

impl Direction {
    /// Sign of the initial vertical offset (`-1.0` for top, `1.0` for bottom).
    pub fn offset_sign(self) -> f64 {
        match self {
            Self::Top => -1.0,
            Self::Bottom => 1.0,
        }
    }
}

impl From<String> for Direction {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("bottom") {
            Self::Bottom
        } else {
            Self::Top
        }
    }
}
