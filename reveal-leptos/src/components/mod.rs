//! Leptos components wrapping the reveal engine.
//!
//! Each component owns one engine instance for its lifetime: created with
//! the component, mounted once its element exists, torn down on cleanup.
//!
//! # Component Hierarchy
//!
//! ```text
//! VisibilityGate          (div, gate_style)
//! └── children
//!
//! StagedTextReveal        (span)
//! ├── span.reveal-segment (animated, delayed)
//! └── span.reveal-space   (static)
//! ```

mod gate;
mod text;

pub use gate::VisibilityGate;
pub use text::StagedTextReveal;
