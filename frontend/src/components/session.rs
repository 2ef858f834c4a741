//! Session provider: one connection and one wallet for the whole page.

use leptos::*;
use leptos_meta::Style;

use crate::config::COMMITMENT;
use crate::services::{BrowserWallet, RpcConnection};

/// Capabilities provided to every component below [`SessionProvider`].
#[derive(Clone)]
pub struct SessionContext {
    pub connection: RpcConnection,
    pub wallet: BrowserWallet,
}

/// Read the session set up by the nearest [`SessionProvider`].
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Styling for the wallet controls.
const WALLET_STYLES: &str = r#"
.wallet-controls { display: flex; gap: 12px; align-items: center; position: relative; }
.wallet-button {
    background: #512da8; color: #fff; border: none; border-radius: 4px;
    padding: 0 24px; height: 48px; font-weight: 600; font-size: 16px; cursor: pointer;
}
.wallet-button:hover:not([disabled]) { background: #1a1f2e; }
.wallet-button[disabled] { background: #404144; color: #999; cursor: not-allowed; }
.wallet-picker {
    position: absolute; top: 56px; left: 0; list-style: none; margin: 0; padding: 8px;
    background: #2c2d30; border-radius: 10px; box-shadow: 0 8px 20px rgba(0, 0, 0, 0.6); z-index: 10;
}
.wallet-option {
    display: flex; gap: 12px; align-items: center; width: 100%; padding: 8px 16px;
    background: transparent; color: #fff; border: none; cursor: pointer; font-size: 15px;
}
.wallet-option:hover { background: #1a1f2e; }
.wallet-icon { width: 24px; height: 24px; }
"#;

/// Establishes the connection for `endpoint`, starts wallet detection and
/// auto-connect, and injects the wallet control styles.
#[component]
pub fn SessionProvider(
    /// JSON-RPC endpoint
    #[prop(into)]
    endpoint: String,
    children: Children,
) -> impl IntoView {
    log::info!("🌐 Session endpoint: {}", endpoint);

    let session = SessionContext {
        connection: RpcConnection::new(&endpoint, COMMITMENT),
        wallet: BrowserWallet::new(),
    };
    provide_context(session.clone());
    session.wallet.init();

    view! {
        <Style>{WALLET_STYLES}</Style>
        {children()}
    }
}
