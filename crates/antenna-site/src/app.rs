//! Root Component

use leptos::prelude::*;

/// Top-level view of the site
#[component]
pub fn Root() -> impl IntoView {
    view! {
        <main class="antenna">
            <header class="hero">
                <h1>"Hello"</h1>
                <p class="tagline">"Tree-sitter query results, collected by antenna"</p>
            </header>
        </main>
    }
}
