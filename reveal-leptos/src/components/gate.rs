//! Block gate component

use leptos::html::Div;
use leptos::prelude::*;
use reveal_engine::config::{DEFAULT_GATE_THRESHOLD, DEFAULT_ROOT_MARGIN};
use reveal_engine::{GateConfig, VisibilityState, gate_style};

use crate::dom::DomObserver;

/// Wraps `children` and fades/slides them in the first time they scroll into view.
#[component]
pub fn VisibilityGate(
    /// Fraction of the block that must be on screen.
    #[prop(default = DEFAULT_GATE_THRESHOLD)]
    threshold: f64,
    /// Margin around the viewport, CSS syntax.
    #[prop(into, default = DEFAULT_ROOT_MARGIN.to_string())]
    root_margin: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let (state, set_state) = signal(VisibilityState::Hidden);

    let gate = reveal_engine::VisibilityGate::new(GateConfig {
        threshold,
        root_margin: root_margin.clone(),
    });
    gate.on_reveal(move || set_state.set(VisibilityState::Revealed));
    let gate = StoredValue::new_local(gate);
    let observer = DomObserver::new(root_margin);

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            let el: &web_sys::Element = &el;
            gate.with_value(|gate| gate.mount(&observer, Some(el)));
        }
    });

    on_cleanup(move || {
        let _ = gate.try_with_value(|gate| gate.teardown());
    });

    view! {
        <div
            node_ref=node_ref
            class=class
            data-reveal=move || if state.get().is_revealed() { "revealed" } else { "hidden" }
            style=move || gate_style(state.get())
        >
            {children()}
        </div>
    }
}
