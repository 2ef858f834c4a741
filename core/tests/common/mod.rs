//! In-memory wallet, connection and observer for workflow tests.

#![allow(dead_code)]

use std::cell::RefCell;

use launchpad::error::{RpcError, RpcResult, WalletError, WalletResult};
use launchpad::rpc::LatestBlockhash;
use launchpad::{Connection, LaunchAction, LaunchObserver, LaunchPhase, Notification, Wallet};
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

pub const RENT_EXEMPT_MINT_LAMPORTS: u64 = 1_461_600;

// =============================================================================
// Connection
// =============================================================================

/// Records every call and answers from canned values.
#[derive(Default)]
pub struct MockConnection {
    pub calls: RefCell<Vec<&'static str>>,
    pub sent: RefCell<Vec<Transaction>>,
    pub confirmed: RefCell<Vec<Signature>>,
    pub blockhash: Hash,
    pub fail_rent: Option<String>,
    pub fail_blockhash: Option<String>,
    pub fail_send: Option<String>,
    pub fail_confirm: Option<String>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self {
            blockhash: Hash::new_unique(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn sent(&self) -> Vec<Transaction> {
        self.sent.borrow().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }
}

fn rpc_failure(message: &Option<String>) -> RpcResult<()> {
    match message {
        Some(message) => Err(RpcError::Http(message.clone())),
        None => Ok(()),
    }
}

impl Connection for MockConnection {
    fn endpoint(&self) -> &str {
        "mock://devnet"
    }

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> RpcResult<u64> {
        self.record("getMinimumBalanceForRentExemption");
        rpc_failure(&self.fail_rent)?;
        assert_eq!(data_len, launchpad::MINT_ACCOUNT_LEN);
        Ok(RENT_EXEMPT_MINT_LAMPORTS)
    }

    async fn get_latest_blockhash(&self) -> RpcResult<LatestBlockhash> {
        self.record("getLatestBlockhash");
        rpc_failure(&self.fail_blockhash)?;
        Ok(LatestBlockhash {
            blockhash: self.blockhash,
            last_valid_block_height: 300,
        })
    }

    async fn send_raw_transaction(&self, transaction: &Transaction) -> RpcResult<Signature> {
        self.record("sendTransaction");
        rpc_failure(&self.fail_send)?;
        transaction
            .verify()
            .map_err(|e| RpcError::TransactionFailed(e.to_string()))?;
        self.sent.borrow_mut().push(transaction.clone());
        Ok(transaction.signatures[0])
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        _blockhash: &LatestBlockhash,
    ) -> RpcResult<()> {
        self.record("confirmTransaction");
        rpc_failure(&self.fail_confirm)?;
        self.confirmed.borrow_mut().push(*signature);
        Ok(())
    }
}

/// Wraps a connection so every call suspends once before answering, the
/// way a real network round trip does.
pub struct YieldingConnection<C>(pub C);

impl<C: Connection> Connection for YieldingConnection<C> {
    fn endpoint(&self) -> &str {
        self.0.endpoint()
    }

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> RpcResult<u64> {
        tokio::task::yield_now().await;
        self.0.get_minimum_balance_for_rent_exemption(data_len).await
    }

    async fn get_latest_blockhash(&self) -> RpcResult<LatestBlockhash> {
        tokio::task::yield_now().await;
        self.0.get_latest_blockhash().await
    }

    async fn send_raw_transaction(&self, transaction: &Transaction) -> RpcResult<Signature> {
        tokio::task::yield_now().await;
        self.0.send_raw_transaction(transaction).await
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        blockhash: &LatestBlockhash,
    ) -> RpcResult<()> {
        tokio::task::yield_now().await;
        self.0.confirm_transaction(signature, blockhash).await
    }
}

// =============================================================================
// Wallet
// =============================================================================

/// Signs with a local key pair; can be disconnected or made to refuse.
pub struct MockWallet {
    pub keypair: Keypair,
    pub connected: RefCell<bool>,
    pub reject_with: RefCell<Option<String>>,
}

impl MockWallet {
    pub fn connected() -> Self {
        Self {
            keypair: Keypair::new(),
            connected: RefCell::new(true),
            reject_with: RefCell::new(None),
        }
    }

    pub fn disconnected() -> Self {
        let wallet = Self::connected();
        wallet.disconnect();
        wallet
    }

    pub fn disconnect(&self) {
        *self.connected.borrow_mut() = false;
    }

    pub fn address(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}

impl Wallet for MockWallet {
    fn public_key(&self) -> Option<Pubkey> {
        if *self.connected.borrow() {
            Some(self.keypair.pubkey())
        } else {
            None
        }
    }

    async fn sign_transaction(&self, mut transaction: Transaction) -> WalletResult<Transaction> {
        if !*self.connected.borrow() {
            return Err(WalletError::NotConnected);
        }
        if let Some(reason) = self.reject_with.borrow().clone() {
            return Err(WalletError::Rejected(reason));
        }
        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_partial_sign(&[&self.keypair], blockhash)
            .map_err(|e| WalletError::Rejected(e.to_string()))?;
        Ok(transaction)
    }
}

// =============================================================================
// Observer
// =============================================================================

#[derive(Default)]
pub struct RecordingObserver {
    pub notifications: RefCell<Vec<Notification>>,
    pub busy: RefCell<Vec<Option<LaunchAction>>>,
    pub mint_addresses: RefCell<Vec<Option<Pubkey>>>,
}

impl RecordingObserver {
    pub fn messages(&self) -> Vec<String> {
        self.notifications
            .borrow()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.borrow().last().cloned()
    }
}

impl LaunchObserver for RecordingObserver {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }

    fn busy_changed(&self, running: Option<LaunchAction>) {
        self.busy.borrow_mut().push(running);
    }

    fn phase_changed(&self, phase: &LaunchPhase) {
        self.mint_addresses.borrow_mut().push(phase.mint_address());
    }
}

/// Program ids of a transaction's instructions, in order.
pub fn program_ids(transaction: &Transaction) -> Vec<Pubkey> {
    transaction
        .message
        .instructions
        .iter()
        .map(|ix| transaction.message.account_keys[ix.program_id_index as usize])
        .collect()
}
