use leptos::prelude::*;
use reveal_leptos::StagedTextReveal;

use super::reveal_config;

#[component]
pub fn Hero() -> impl IntoView {
    let text = reveal_config().text;
    let tagline_delay = text.delay_ms + 300;

    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">
                    <StagedTextReveal
                        text="DIST"
                        animate_by=reveal_engine::AnimateBy::Letters
                        direction=text.direction
                        delay=text.delay_ms
                        step_duration=text.step_duration
                        threshold=text.threshold
                        root_margin=text.root_margin.clone()
                        on_complete=Callback::new(|_| tracing::info!(block = "title", "hero reveal complete"))
                    />
                </h1>
                <p class="hero-tagline">
                    <StagedTextReveal
                        text="Miami energy. Global sound."
                        animate_by=text.animate_by
                        direction=text.direction
                        delay=tagline_delay
                        step_duration=text.step_duration
                        threshold=text.threshold
                        root_margin=text.root_margin.clone()
                        on_complete=Callback::new(|_| tracing::info!(block = "tagline", "hero reveal complete"))
                    />
                </p>
                <p class="hero-description">
                    "Bass-heavy house, royal trap energy, and dubstep pressure built for timelines and big systems."
                </p>
                <div class="hero-actions">
                    <a href="https://open.spotify.com/track/1EwUrVcbZ3GUHVX3hTbsCp" target="_blank" class="btn btn-primary">
                        "Listen on Spotify"
                    </a>
                    <a href="#explore" class="btn btn-secondary">
                        "Follow the journey"
                    </a>
                </div>
            </div>
        </section>
    }
}
