// DIST Landing Page, Leptos 0.8 Edition
// MDDVVM (c)2025

mod sections;

use leptos::prelude::*;
use reveal_engine::RevealConfig;
use sections::*;

/// Reveal defaults shipped with the page.
const REVEAL_TOML: &str = include_str!("../reveal.toml");

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = RevealConfig::from_toml_or_default(REVEAL_TOML);
    tracing::debug!(
        gate_threshold = config.gate.threshold,
        text_delay_ms = config.text.delay_ms,
        "reveal config loaded"
    );
    provide_context(config);

    view! {
        <main>
            <Hero />
            <Explore />
            <Culture />
            <Releases />
            <About />
        </main>
        <Footer />
    }
}
