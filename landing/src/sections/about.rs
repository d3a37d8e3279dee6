use leptos::prelude::*;
use reveal_leptos::{StagedTextReveal, VisibilityGate};

use super::reveal_config;

#[component]
pub fn About() -> impl IntoView {
    let config = reveal_config();

    view! {
        <section id="about" class="about">
            <div class="container">
                <h3 class="section-title">
                    <StagedTextReveal
                        text="About DIST"
                        direction=reveal_engine::Direction::Bottom
                        threshold=config.text.threshold
                    />
                </h3>
                <VisibilityGate threshold=config.gate.threshold root_margin=config.gate.root_margin>
                    <p>
                        "DIST creates music for big systems and late nights. From Miami energy to global bass pressure."
                    </p>
                    <p class="quote-source">
                        "The goal isn't just streams, it's presence: the same timelines as the big bass channels."
                    </p>
                </VisibilityGate>
            </div>
        </section>
    }
}
