//! Error types for the launch workflow.
//!
//! - [`SupplyError`] - Initial supply parsing errors
//! - [`ValidationError`] - Local checks that run before any network call
//! - [`RpcError`] - JSON-RPC transport and response errors
//! - [`WalletError`] - Wallet connection and signing errors
//! - [`TransactionError`] - Instruction building and local signing errors
//! - [`LaunchError`] - Top-level errors returned by the workflow
//!
//! Conversion is automatic via `From` implementations so `?` works across
//! error boundaries.

use thiserror::Error;

// =============================================================================
// Supply Errors
// =============================================================================

/// Errors while turning the initial supply string into base units.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SupplyError {
    /// Nothing to parse.
    #[error("Initial supply is empty")]
    Empty,

    /// Not a plain non-negative decimal number.
    #[error("Initial supply '{0}' is not a valid number")]
    Invalid(String),

    /// More fractional digits than the mint can represent.
    #[error("Initial supply has more than {decimals} decimal places")]
    TooManyDecimals { decimals: u8 },

    /// Scaled amount does not fit in a token amount.
    #[error("Initial supply is too large")]
    Overflow,
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Local precondition failures. No network call has been made when one of
/// these is returned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One of name, symbol, image or initial supply is blank.
    #[error("All fields are required")]
    MissingFields,

    /// No wallet public key is available.
    #[error("Please connect your wallet first")]
    WalletNotConnected,

    /// Mint requested before a mint account was created.
    #[error("Please create a token mint first")]
    MintNotCreated,

    /// Initial supply could not be scaled.
    #[error(transparent)]
    Supply(#[from] SupplyError),
}

// =============================================================================
// RPC Errors
// =============================================================================

/// Errors from the JSON-RPC connection.
#[derive(Debug, Error)]
pub enum RpcError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Response did not have the expected shape.
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transaction landed but failed on chain.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Blockhash expired before the signature was confirmed.
    #[error("Signature {0} has expired: block height exceeded")]
    BlockhashExpired(String),

    /// Transaction could not be put on the wire.
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

// =============================================================================
// Wallet Errors
// =============================================================================

/// Errors from the wallet capability.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Wallet has no connected account.
    #[error("Wallet not connected")]
    NotConnected,

    /// Requested wallet is not registered on the page.
    #[error("Wallet '{0}' not found")]
    NotFound(String),

    /// User or wallet refused the request.
    #[error("{0}")]
    Rejected(String),

    /// Wallet returned something we could not decode.
    #[error("Invalid wallet response: {0}")]
    InvalidResponse(String),

    /// Transaction bytes exchanged with the wallet were malformed.
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

// =============================================================================
// Transaction Errors
// =============================================================================

/// Errors while building or locally signing a transaction.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// Instruction builder rejected its inputs.
    #[error("Failed to build instruction: {0}")]
    Instruction(String),

    /// Local signer failed.
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Wire encoding or decoding failed.
    #[error("Transaction wire format error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl From<solana_sdk::signer::SignerError> for TransactionError {
    fn from(err: solana_sdk::signer::SignerError) -> Self {
        TransactionError::Signing(err.to_string())
    }
}

impl From<spl_token::solana_program::program_error::ProgramError> for TransactionError {
    fn from(err: spl_token::solana_program::program_error::ProgramError) -> Self {
        TransactionError::Instruction(err.to_string())
    }
}

// =============================================================================
// Launch Errors (top-level)
// =============================================================================

/// Top-level workflow errors.
///
/// This is the error returned by [`crate::workflow::LaunchSession`].
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Local validation error.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// RPC error.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// Wallet error.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// Transaction building error.
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// Another action is already in flight.
    #[error("Another action is already in progress")]
    Busy,
}

impl From<SupplyError> for LaunchError {
    fn from(err: SupplyError) -> Self {
        LaunchError::Validation(err.into())
    }
}

impl LaunchError {
    /// True when the failure happened before anything was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, LaunchError::Validation(_) | LaunchError::Busy)
    }

    /// Message shown to the user.
    ///
    /// Validation messages are shown as they are; collaborator failures are
    /// prefixed with the action that failed.
    pub fn user_message(&self, action_failed: &str) -> String {
        if self.is_local() {
            self.to_string()
        } else {
            format!("{}: {}", action_failed, self)
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Result type for transaction building.
pub type TransactionResult<T> = Result<T, TransactionError>;

/// Result type for workflow operations.
pub type LaunchResult<T> = Result<T, LaunchError>;
