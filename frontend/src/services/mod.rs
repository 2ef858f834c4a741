//! Wallet and network services.
//!
//! # Services
//!
//! - [`wallet`] - Wallet Standard integration (connect, disconnect, sign)
//! - [`rpc`] - Solana JSON-RPC connection over `gloo-net`
//!
//! # JavaScript Bindings
//!
//! The wallet service uses JavaScript bindings located in `src/js/`:
//! - `wallet.js` - Wallet Standard registry and signing

pub mod rpc;
pub mod wallet;

pub use rpc::*;
pub use wallet::*;
