use leptos::prelude::*;
use reveal_leptos::VisibilityGate;

use super::reveal_config;

struct Release {
    name: &'static str,
    genre: &'static str,
    url: &'static str,
}

const RELEASES: &[Release] = &[
    Release { name: "DIST 003", genre: "Royal Bass", url: "https://open.spotify.com/track/1EwUrVcbZ3GUHVX3hTbsCp" },
    Release { name: "DIST 002", genre: "House", url: "#" },
    Release { name: "DIST 001", genre: "Dubstep", url: "#" },
];

#[component]
pub fn Releases() -> impl IntoView {
    let gate = reveal_config().gate;

    view! {
        <section id="music" class="releases">
            <div class="container">
                <h3 class="section-title">"Releases"</h3>
                <VisibilityGate threshold=gate.threshold root_margin=gate.root_margin>
                    <div class="release-grid">
                        {RELEASES
                            .iter()
                            .map(|release| {
                                view! {
                                    <div class="release-card">
                                        <div class="release-cover"></div>
                                        <div class="release-meta">
                                            <h4>{release.name}</h4>
                                            <span class="release-genre">{release.genre}</span>
                                        </div>
                                        <a href=release.url target="_blank" rel="noreferrer" class="btn btn-secondary">
                                            "Listen"
                                        </a>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </VisibilityGate>
            </div>
        </section>
    }
}
