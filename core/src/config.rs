//! Workflow configuration.
//!
//! Constants shared by every front end of the launch workflow. UI-specific
//! settings (toast timing, storage keys) live in the frontend crate.

/// Decimal places configured on every mint created by the launchpad.
///
/// Also the scaling exponent applied to the initial supply when minting.
pub const TOKEN_DECIMALS: u8 = 9;

/// Public Solana devnet JSON-RPC endpoint.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Commitment level used for blockhash lookups and confirmation.
pub const DEFAULT_COMMITMENT: Commitment = Commitment::Confirmed;

/// Byte size of an SPL token mint account.
pub const MINT_ACCOUNT_LEN: usize = 82;

/// Cluster commitment levels understood by the JSON-RPC API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}
