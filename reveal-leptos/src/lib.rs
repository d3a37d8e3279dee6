//! # reveal-leptos
//!
//! Leptos 0.8 components for viewport-triggered reveals, built on
//! [`reveal_engine`].
//!
//! - [`VisibilityGate`] - wraps a block, reveals it once when it scrolls into view
//! - [`StagedTextReveal`] - blurs text in segment by segment, with a completion callback
//!
//! ## Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use reveal_leptos::{StagedTextReveal, VisibilityGate};
//!
//! view! {
//!     <h1>
//!         <StagedTextReveal
//!             text="Miami energy. Global sound."
//!             delay=150
//!             on_complete=Callback::new(|_| tracing::info!("headline done"))
//!         />
//!     </h1>
//!     <VisibilityGate threshold=0.2>
//!         <p>"Bass is a feeling."</p>
//!     </VisibilityGate>
//! }
//! ```
//!
//! Browser hosts live in [`dom`]: [`dom::DomObserver`] over
//! `IntersectionObserver` and [`dom::LeptosScheduler`] over `setTimeout`.

pub mod components;
pub mod dom;

pub use components::{StagedTextReveal, VisibilityGate};
pub use dom::{DomObserver, LeptosScheduler};
