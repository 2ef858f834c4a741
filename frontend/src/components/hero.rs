//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Solana Token Launchpad"</h1>
            <p class="subtitle">"Create and mint your own token"</p>
        </div>
    }
}
