//! Capabilities injected into the workflow.
//!
//! The launchpad never owns a wallet or a network client. It receives a
//! [`Wallet`] and a [`Connection`] from whoever hosts it (the browser session
//! provider, or mocks in tests) and only sequences calls into them.

use solana_sdk::{pubkey::Pubkey, signature::Signature, transaction::Transaction};

use crate::error::{LaunchResult, RpcResult, TransactionError, TransactionResult, WalletResult};
use crate::rpc::LatestBlockhash;

/// Network connection to one JSON-RPC endpoint.
#[allow(async_fn_in_trait)]
pub trait Connection {
    /// Endpoint URL this connection talks to.
    fn endpoint(&self) -> &str;

    /// Lamports needed for an account of `data_len` bytes to be rent exempt.
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> RpcResult<u64>;

    async fn get_latest_blockhash(&self) -> RpcResult<LatestBlockhash>;

    /// Broadcast a fully signed transaction.
    async fn send_raw_transaction(&self, transaction: &Transaction) -> RpcResult<Signature>;

    /// Wait until `signature` is confirmed or `blockhash` expires.
    async fn confirm_transaction(
        &self,
        signature: &Signature,
        blockhash: &LatestBlockhash,
    ) -> RpcResult<()>;
}

/// A connected (or not) user wallet.
#[allow(async_fn_in_trait)]
pub trait Wallet {
    /// Public key of the connected account, `None` when disconnected.
    fn public_key(&self) -> Option<Pubkey>;

    fn is_connected(&self) -> bool {
        self.public_key().is_some()
    }

    /// Ask the wallet to add its signature. Other signatures already present
    /// on the transaction must be preserved.
    async fn sign_transaction(&self, transaction: Transaction) -> WalletResult<Transaction>;
}

/// Bincode wire bytes of `transaction`, as sent to the node and the wallet.
pub fn serialize_transaction(transaction: &Transaction) -> TransactionResult<Vec<u8>> {
    Ok(bincode::serialize(transaction)?)
}

/// Parse wire bytes returned by a wallet.
pub fn deserialize_transaction(bytes: &[u8]) -> TransactionResult<Transaction> {
    Ok(bincode::deserialize(bytes)?)
}

/// Have the wallet sign `transaction` and broadcast it through `connection`.
pub async fn send_transaction<W, C>(
    wallet: &W,
    connection: &C,
    transaction: Transaction,
) -> LaunchResult<Signature>
where
    W: Wallet,
    C: Connection,
{
    let signed = wallet.sign_transaction(transaction).await?;
    if !signed.is_signed() {
        return Err(TransactionError::Signing("transaction is missing required signatures".into()).into());
    }
    let signature = connection.send_raw_transaction(&signed).await?;
    log::debug!("Broadcast transaction {} via {}", signature, connection.endpoint());
    Ok(signature)
}
