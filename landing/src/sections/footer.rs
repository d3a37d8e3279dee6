use leptos::prelude::*;

const COLUMNS: &[(&str, &[&str])] = &[
    ("Project", &["Concept deck", "Release roadmap", "Visual identity"]),
    (
        "Music & content",
        &["MDDVVM sessions", "Live recordings", "Behind the scenes", "Field notes", "Merch drops"],
    ),
    ("DIST", &["Story", "Vision", "Collaborations", "Demo policy", "Contact"]),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="footer-columns">
                <p class="footer-blurb">
                    "MDDVVM is the experimental home of DIST, a fictional imprint where club anthems, "
                    "internet folklore, and late-night sound design all live in the same timeline."
                </p>
                {COLUMNS
                    .iter()
                    .map(|&(heading, links)| {
                        view! {
                            <div>
                                <h3>{heading}</h3>
                                <ul>
                                    {links
                                        .iter()
                                        .map(|&label| {
                                            view! {
                                                <li>
                                                    <a href="#">{label}</a>
                                                    {(label == "Collaborations")
                                                        .then(|| view! { <span class="footer-badge">"HIRING"</span> })}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="footer-bottom">
                <p>"© 2025 MDDVVM / DIST, concept project."</p>
                <p>"All rights reserved in our heads."</p>
            </div>
            <h1 class="footer-wordmark">"DIST"</h1>
        </footer>
    }
}
