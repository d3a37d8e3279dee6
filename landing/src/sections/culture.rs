use leptos::prelude::*;
use reveal_leptos::VisibilityGate;

use super::reveal_config;

const QUOTES: &[(&str, &str)] = &[
    ("\u{201c}Energy never lies.\u{201d} (Skrillex)", "DIST: That's the mindset that shaped this track."),
    ("\u{201c}Bass is a feeling.\u{201d}", "DIST: Big systems first. Everything else follows."),
    ("\u{201c}No filler, just energy.\u{201d}", "DIST: Clips, reposts, heavy rotation."),
];

#[component]
pub fn Culture() -> impl IntoView {
    let gate = reveal_config().gate;

    view! {
        <section id="culture" class="culture">
            <div class="container">
                <h3 class="section-title">"DIST culture"</h3>
                <div class="culture-grid">
                    {QUOTES
                        .iter()
                        .map(|&(quote, source)| {
                            view! {
                                <VisibilityGate
                                    threshold=gate.threshold
                                    root_margin=gate.root_margin.clone()
                                    class="quote-card"
                                >
                                    <p class="quote-text">{quote}</p>
                                    <p class="quote-source">{source}</p>
                                </VisibilityGate>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
