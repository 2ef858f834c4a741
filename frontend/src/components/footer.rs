//! Footer component

use leptos::*;

use crate::config::RPC_ENDPOINT;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <span class="footer-link">"RPC: " {RPC_ENDPOINT}</span>
                <a href="https://explorer.solana.com/?cluster=devnet" class="footer-link" target="_blank">
                    "Explorer"
                </a>
                <a href="https://faucet.solana.com" class="footer-link" target="_blank">
                    "Devnet faucet"
                </a>
            </div>
        </footer>
    }
}
