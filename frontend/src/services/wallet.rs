//! Wallet Standard integration (Phantom, Solflare, Backpack, ...).
//!
//! Wallets announce themselves to the page through the Wallet Standard
//! registration events; `wallet.js` collects them. Nothing is configured
//! explicitly: whatever registers is offered to the user.

use std::str::FromStr;

use js_sys::Uint8Array;
use launchpad::error::{WalletError, WalletResult};
use launchpad::{deserialize_transaction, serialize_transaction, Pubkey, Transaction, Wallet};
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::config::{WALLET_CHAIN, WALLET_NAME_STORAGE_KEY};
use crate::types::{DetectedWallet, WalletAccount, WalletState};

/// Reactive handle on the browser wallet.
///
/// Cheap to copy; every copy shares the same signals.
#[derive(Clone, Copy)]
pub struct BrowserWallet {
    state: RwSignal<WalletState>,
    detected: RwSignal<Vec<DetectedWallet>>,
}

impl BrowserWallet {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(WalletState::Disconnected),
            detected: create_rw_signal(Vec::new()),
        }
    }

    /// Current connection state (tracked).
    pub fn state(&self) -> WalletState {
        self.state.get()
    }

    /// Wallets registered on the page (tracked).
    pub fn detected(&self) -> Vec<DetectedWallet> {
        self.detected.get()
    }

    pub fn detected_untracked(&self) -> Vec<DetectedWallet> {
        self.detected.get_untracked()
    }

    /// Whether an account is connected (tracked).
    pub fn connected(&self) -> bool {
        self.state.with(|state| state.is_connected())
    }

    /// Start listening for wallet registrations and account changes, then try
    /// to reconnect the remembered wallet.
    pub fn init(&self) {
        let this = *self;
        let on_wallets = Closure::wrap(Box::new(move |wallets: JsValue| {
            match serde_wasm_bindgen::from_value::<Vec<DetectedWallet>>(wallets) {
                Ok(wallets) => {
                    log::info!("👛 {} wallet(s) detected", wallets.len());
                    this.detected.set(wallets);
                    this.auto_connect();
                }
                Err(e) => log::warn!("Could not read wallet list: {}", e),
            }
        }) as Box<dyn FnMut(JsValue)>);
        on_wallets_changed(&on_wallets);
        on_wallets.forget();

        let on_account = Closure::wrap(Box::new(move |account: JsValue| {
            if account.is_null() || account.is_undefined() {
                log::info!("🔌 Wallet disconnected");
                this.state.set(WalletState::Disconnected);
                return;
            }
            match serde_wasm_bindgen::from_value::<WalletAccount>(account) {
                Ok(account) => {
                    if let Err(e) = this.set_account(account) {
                        log::warn!("Ignoring account change: {}", e);
                    }
                }
                Err(e) => log::warn!("Could not read wallet account: {}", e),
            }
        }) as Box<dyn FnMut(JsValue)>);
        on_account_changed(&on_account);
        on_account.forget();

        init_wallets();
    }

    /// Reconnect silently to the wallet used last time, if it is present.
    fn auto_connect(&self) {
        if !matches!(self.state.get_untracked(), WalletState::Disconnected) {
            return;
        }
        let Some(name) = remembered_wallet() else {
            return;
        };
        if !self
            .detected
            .with_untracked(|wallets| wallets.iter().any(|w| w.name == name))
        {
            return;
        }
        let this = *self;
        spawn_local(async move {
            if let Err(e) = this.connect_with(&name, true).await {
                log::warn!("Auto-connect to {} failed: {}", name, e);
            }
        });
    }

    /// Connect to the named wallet, prompting the user.
    pub async fn connect(&self, name: &str) -> WalletResult<Pubkey> {
        self.connect_with(name, false).await
    }

    async fn connect_with(&self, name: &str, silent: bool) -> WalletResult<Pubkey> {
        log::info!("🔑 Connecting to {}...", name);
        self.state.set(WalletState::Connecting(name.to_string()));

        let result = JsFuture::from(connect_wallet(name, silent))
            .await
            .map_err(js_error)
            .and_then(|value| {
                serde_wasm_bindgen::from_value::<WalletAccount>(value)
                    .map_err(|e| WalletError::InvalidResponse(e.to_string()))
            });

        match result {
            Ok(account) => {
                let public_key = self.set_account(account)?;
                remember_wallet(Some(name));
                Ok(public_key)
            }
            Err(e) => {
                log::error!("❌ Wallet connection failed: {}", e);
                self.state.set(if silent {
                    WalletState::Disconnected
                } else {
                    WalletState::Error(e.to_string())
                });
                Err(e)
            }
        }
    }

    fn set_account(&self, account: WalletAccount) -> WalletResult<Pubkey> {
        let public_key = Pubkey::from_str(&account.address).map_err(|e| {
            WalletError::InvalidResponse(format!("bad address '{}': {}", account.address, e))
        })?;
        log::info!("✅ Connected to {}: {}", account.name, public_key);
        self.state.set(WalletState::Connected {
            name: account.name,
            public_key,
        });
        Ok(public_key)
    }

    /// Disconnect and forget the wallet.
    pub async fn disconnect(&self) {
        if let Err(e) = JsFuture::from(disconnect_wallet()).await {
            log::warn!("Wallet disconnect reported: {}", js_error(e));
        }
        remember_wallet(None);
        self.state.set(WalletState::Disconnected);
    }
}

impl Default for BrowserWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl Wallet for BrowserWallet {
    fn public_key(&self) -> Option<Pubkey> {
        self.state.with_untracked(|state| state.public_key())
    }

    async fn sign_transaction(&self, transaction: Transaction) -> WalletResult<Transaction> {
        if self.public_key().is_none() {
            return Err(WalletError::NotConnected);
        }
        let bytes = serialize_transaction(&transaction)?;

        let signed = JsFuture::from(sign_transaction_js(&Uint8Array::from(bytes.as_slice()), WALLET_CHAIN))
            .await
            .map_err(js_error)?;

        let signed = Uint8Array::new(&signed).to_vec();
        Ok(deserialize_transaction(&signed)?)
    }
}

/// Extract a message from a rejected JS promise.
fn js_error(e: JsValue) -> WalletError {
    let message = js_sys::Reflect::get(&e, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| e.as_string())
        .unwrap_or_else(|| "Unknown wallet error".to_string());
    WalletError::Rejected(message)
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn remembered_wallet() -> Option<String> {
    let raw = storage()?.get_item(WALLET_NAME_STORAGE_KEY).ok().flatten()?;
    Some(serde_json::from_str::<String>(&raw).unwrap_or(raw))
}

fn remember_wallet(name: Option<&str>) {
    let Some(storage) = storage() else {
        return;
    };
    let result = match name {
        // Stored JSON-encoded, like the JS adapters do.
        Some(name) => storage.set_item(
            WALLET_NAME_STORAGE_KEY,
            &serde_json::to_string(name).unwrap_or_default(),
        ),
        None => storage.remove_item(WALLET_NAME_STORAGE_KEY),
    };
    if result.is_err() {
        log::warn!("Could not persist wallet choice");
    }
}

/// JavaScript functions from wallet.js
#[wasm_bindgen(module = "/src/js/wallet.js")]
extern "C" {
    #[wasm_bindgen(js_name = "initWallets")]
    fn init_wallets();

    #[wasm_bindgen(js_name = "onWalletsChanged")]
    fn on_wallets_changed(callback: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(js_name = "onAccountChanged")]
    fn on_account_changed(callback: &Closure<dyn FnMut(JsValue)>);

    #[wasm_bindgen(js_name = "connectWallet")]
    fn connect_wallet(name: &str, silent: bool) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "disconnectWallet")]
    fn disconnect_wallet() -> js_sys::Promise;

    #[wasm_bindgen(js_name = "signTransaction")]
    fn sign_transaction_js(transaction: &Uint8Array, chain: &str) -> js_sys::Promise;
}
