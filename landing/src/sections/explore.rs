use leptos::prelude::*;
use reveal_leptos::VisibilityGate;

use super::reveal_config;

#[component]
pub fn Explore() -> impl IntoView {
    view! {
        <section id="explore" class="explore">
            <div class="container">
                <div class="explore-grid">
                    <ExploreCard
                        title="Featured track"
                        description="DIST 003, out now. Designed for massive systems."
                        href="#featured"
                        accent="emerald"
                    />
                    <ExploreCard
                        title="Music"
                        description="Explore releases by cover, name, and genre."
                        href="#music"
                        accent="blue"
                    />
                    <ExploreCard
                        title="Culture"
                        description="Quotes and influences that shape DIST's energy."
                        href="#culture"
                        accent="purple"
                    />
                    <ExploreCard
                        title="About & Contact"
                        description="Short story and ways to connect with DIST."
                        href="#about"
                        accent="amber"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ExploreCard(
    title: &'static str,
    description: &'static str,
    href: &'static str,
    accent: &'static str,
) -> impl IntoView {
    let gate = reveal_config().gate;

    view! {
        <VisibilityGate threshold=gate.threshold root_margin=gate.root_margin>
            <a class="explore-card" href=href>
                <div class=format!("explore-accent {accent}")></div>
                <h3 class="explore-title">{title}</h3>
                <p class="explore-description">{description}</p>
                <span class="explore-link">"Open section ↗"</span>
            </a>
        </VisibilityGate>
    }
}
