//! Application configuration.
//!
//! Centralized configuration for the launchpad frontend. Values are compiled
//! in; the RPC endpoint can be overridden at build time with
//! `LAUNCHPAD_RPC_URL`.

use launchpad::Commitment;

/// Solana JSON-RPC endpoint.
///
/// Devnet unless `LAUNCHPAD_RPC_URL` was set when building.
pub const RPC_ENDPOINT: &str = match option_env!("LAUNCHPAD_RPC_URL") {
    Some(url) => url,
    None => launchpad::DEVNET_RPC_URL,
};

/// Wallet Standard chain identifier matching [`RPC_ENDPOINT`].
pub const WALLET_CHAIN: &str = "solana:devnet";

/// Commitment used for blockhashes, preflight and confirmation.
pub const COMMITMENT: Commitment = launchpad::DEFAULT_COMMITMENT;

/// Application name shown in the page title.
pub const APP_NAME: &str = "Solana Token Launchpad";

/// `localStorage` key remembering the last connected wallet.
///
/// Same key the JS wallet adapters use, so auto-connect carries over.
pub const WALLET_NAME_STORAGE_KEY: &str = "walletName";

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Maximum toasts shown at once.
pub const MAX_TOASTS: usize = 5;

/// Delay between two signature status polls.
pub const CONFIRMATION_POLL_INTERVAL_MS: u32 = 1_000;
