//! Staggered text component

use std::rc::Rc;

use leptos::html::Span;
use leptos::prelude::*;
use reveal_engine::config::{DEFAULT_DELAY_MS, DEFAULT_ROOT_MARGIN, DEFAULT_STEP_DURATION, DEFAULT_TEXT_THRESHOLD};
use reveal_engine::{AnimateBy, Direction, TextRevealConfig, VisibilityState};

use crate::dom::{DomObserver, LeptosScheduler};

/// Text that blurs in word by word (or letter by letter) once visible.
///
/// Whitespace between words is rendered as-is and never animates, so the
/// original spacing survives.
#[component]
pub fn StagedTextReveal(
    #[prop(into)] text: String,
    #[prop(optional)] animate_by: AnimateBy,
    #[prop(optional)] direction: Direction,
    /// Milliseconds before the first segment.
    #[prop(default = DEFAULT_DELAY_MS)]
    delay: u32,
    /// Seconds between consecutive segments.
    #[prop(default = DEFAULT_STEP_DURATION)]
    step_duration: f64,
    #[prop(default = DEFAULT_TEXT_THRESHOLD)] threshold: f64,
    #[prop(into, default = DEFAULT_ROOT_MARGIN.to_string())] root_margin: String,
    #[prop(optional, into)] class: String,
    /// Called once, after the last segment's slot has elapsed.
    #[prop(optional, into)]
    on_complete: Option<Callback<()>>,
) -> impl IntoView {
    let node_ref = NodeRef::<Span>::new();
    let (state, set_state) = signal(VisibilityState::Hidden);

    let reveal = reveal_engine::StagedTextReveal::new(
        TextRevealConfig {
            text,
            animate_by,
            direction,
            delay_ms: delay,
            step_duration,
            threshold,
            root_margin: root_margin.clone(),
        },
        Rc::new(LeptosScheduler),
    );
    reveal.gate().on_reveal(move || set_state.set(VisibilityState::Revealed));
    if let Some(on_complete) = on_complete {
        reveal.on_complete(move || on_complete.run(()));
    }

    let frames = reveal.frames();
    let direction = reveal.direction();
    let reveal = StoredValue::new_local(reveal);
    let observer = DomObserver::new(root_margin);

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            let el: &web_sys::Element = &el;
            reveal.with_value(|reveal| reveal.mount(&observer, Some(el)));
        }
    });

    on_cleanup(move || {
        let _ = reveal.try_with_value(|reveal| reveal.teardown());
    });

    let segments = frames
        .into_iter()
        .map(|frame| {
            let text = frame.text.clone();
            if frame.is_whitespace {
                let style = frame.style(VisibilityState::Hidden, direction);
                view! { <span class="reveal-space" style=style>{text}</span> }.into_any()
            } else {
                view! {
                    <span class="reveal-segment" style=move || frame.style(state.get(), direction)>
                        {text}
                    </span>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <span node_ref=node_ref class=class>
            {segments}
        </span>
    }
}
