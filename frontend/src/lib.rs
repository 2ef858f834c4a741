//! Token Launchpad - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that creates an SPL token mint on Solana devnet and
//! mints its initial supply to the connected wallet.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SessionProvider (RpcConnection + BrowserWallet context)     │
//! │  ├── Header (wallet connection)                              │
//! │  ├── Hero (title, description)                               │
//! │  └── LaunchForm (Create Token / Mint Tokens)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster, Footer                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Toast, WalletState, etc.)
//! - [`components`] - UI components (Header, LaunchForm, Toaster, etc.)
//! - [`services`] - Solana communication (JSON-RPC, wallet)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Toasts
    Toast, ToastLevel,
    // Wallet
    DetectedWallet, WalletAccount, WalletState,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    provide_toasts();

    view! {
        <SessionProvider endpoint=RPC_ENDPOINT>
            <Header/>

            <div class="container">
                <Hero/>
                <LaunchForm/>
            </div>
        </SessionProvider>

        <Toaster/>
        <Footer/>
    }
}
