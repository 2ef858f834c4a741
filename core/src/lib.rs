//! # Launchpad - SPL token create-then-mint workflow
//!
//! Creates a new token mint owned by the connected wallet, then mints an
//! initial supply into the wallet's associated token account.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  TokenForm  │────▶│  Validate   │────▶│ Instructions│────▶│ Wallet sign │
//! │ (4 fields)  │     │ (local only)│     │ (spl-token) │     │ + broadcast │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Wallet and network are injected as [`Wallet`] and [`Connection`]
//! capabilities, so the whole workflow runs against mocks in tests.
//!
//! ## Modules
//!
//! - [`config`] - Workflow constants (decimals, endpoint, commitment)
//! - [`error`] - Hierarchical error types
//! - [`form`] - Launch form fields and validation
//! - [`supply`] - Exact decimal scaling of the initial supply
//! - [`token`] - Token program instruction sets
//! - [`rpc`] - JSON-RPC request/response envelopes
//! - [`capability`] - Wallet and connection traits
//! - [`workflow`] - The create/mint state machine

pub mod config;
pub mod error;

pub mod form;
pub mod supply;
pub mod token;

pub mod capability;
pub mod rpc;

pub mod workflow;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Commitment, DEFAULT_COMMITMENT, DEVNET_RPC_URL, MINT_ACCOUNT_LEN, TOKEN_DECIMALS};

pub use error::{
    LaunchError, LaunchResult, RpcError, RpcResult, SupplyError, TransactionError,
    ValidationError, WalletError, WalletResult,
};

pub use form::{FormField, TokenForm};

pub use capability::{
    deserialize_transaction, send_transaction, serialize_transaction, Connection, Wallet,
};

pub use rpc::{ConfirmationState, LatestBlockhash, RpcRequest};

pub use workflow::{
    CreatedMint, LaunchAction, LaunchObserver, LaunchPhase, LaunchSession, MintReceipt,
    Notification, NotificationLevel,
};

// Solana types that appear in the public API.
pub use solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::Transaction};
