//! Text segmentation.
//!
//! Splits a string into the ordered units that animate independently.
//! Whitespace is never discarded: in word mode each whitespace run becomes its
//! own segment, in letter mode each whitespace character does. Concatenating
//! the segments in order always gives back the input.

use serde::Serialize;

use crate::types::AnimateBy;

/// One animated unit of text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Position in the full segment sequence, whitespace included.
    pub index: usize,
    /// The slice of source text this segment covers.
    pub text: String,
    /// Whitespace segments render immediately and never animate.
    pub is_whitespace: bool,
}

impl Segment {
    fn new(index: usize, text: &str) -> Self {
        Self {
            index,
            text: text.to_string(),
            is_whitespace: !text.is_empty() && text.chars().all(char::is_whitespace),
        }
    }
}

/// Split `text` according to `mode`.
pub fn segment_text(text: &str, mode: AnimateBy) -> Vec<Segment> {
    match mode {
        AnimateBy::Letters => split_letters(text),
        AnimateBy::Words => split_words(text),
    }
}

fn split_letters(text: &str) -> Vec<Segment> {
    text.char_indices()
        .enumerate()
        .map(|(index, (start, ch))| Segment::new(index, &text[start..start + ch.len_utf8()]))
        .collect()
}

/// Alternating runs of non-whitespace and whitespace. Empty runs can't occur,
/// so there is nothing to filter afterwards.
fn split_words(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut run_start = 0;
    let mut run_is_space: Option<bool> = None;

    for (pos, ch) in text.char_indices() {
        let is_space = ch.is_whitespace();
        match run_is_space {
            Some(current) if current != is_space => {
                segments.push(Segment::new(segments.len(), &text[run_start..pos]));
                run_start = pos;
                run_is_space = Some(is_space);
            }
            Some(_) => {}
            None => run_is_space = Some(is_space),
        }
    }

    if run_start < text.len() {
        segments.push(Segment::new(segments.len(), &text[run_start..]));
    }

    segments
}

/// Rebuild the source text from its segments.
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
