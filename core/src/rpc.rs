//! Solana JSON-RPC envelopes.
//!
//! Request builders and response types for the handful of methods the
//! launchpad calls. Transport is left to the caller: the browser posts these
//! with `gloo-net`, tests never leave memory.

use std::str::FromStr;

use base64::Engine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use solana_sdk::{hash::Hash, signature::Signature, transaction::Transaction};

use crate::capability::serialize_transaction;
use crate::config::Commitment;
use crate::error::{RpcError, RpcResult};

// =============================================================================
// Requests
// =============================================================================

/// JSON-RPC methods used by the launchpad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RpcMethod {
    GetMinimumBalanceForRentExemption,
    GetLatestBlockhash,
    SendTransaction,
    GetSignatureStatuses,
    GetBlockHeight,
}

impl RpcMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::GetMinimumBalanceForRentExemption => "getMinimumBalanceForRentExemption",
            RpcMethod::GetLatestBlockhash => "getLatestBlockhash",
            RpcMethod::SendTransaction => "sendTransaction",
            RpcMethod::GetSignatureStatuses => "getSignatureStatuses",
            RpcMethod::GetBlockHeight => "getBlockHeight",
        }
    }
}

/// A JSON-RPC 2.0 request body.
#[derive(Clone, Debug, Serialize)]
pub struct RpcRequest {
    jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: Value,
}

impl RpcRequest {
    pub fn new(method: RpcMethod, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method: method.as_str(),
            params,
        }
    }

    pub fn minimum_balance_for_rent_exemption(data_len: usize) -> Self {
        Self::new(RpcMethod::GetMinimumBalanceForRentExemption, json!([data_len]))
    }

    pub fn latest_blockhash(commitment: Commitment) -> Self {
        Self::new(
            RpcMethod::GetLatestBlockhash,
            json!([{ "commitment": commitment.as_str() }]),
        )
    }

    /// `sendTransaction` with the bincode wire format, base64 encoded.
    pub fn send_transaction(transaction: &Transaction, commitment: Commitment) -> RpcResult<Self> {
        let wire = serialize_transaction(transaction)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(wire);
        Ok(Self::new(
            RpcMethod::SendTransaction,
            json!([
                encoded,
                {
                    "encoding": "base64",
                    "preflightCommitment": commitment.as_str()
                }
            ]),
        ))
    }

    pub fn signature_statuses(signatures: &[Signature]) -> Self {
        let signatures: Vec<String> = signatures.iter().map(|s| s.to_string()).collect();
        Self::new(
            RpcMethod::GetSignatureStatuses,
            json!([signatures, { "searchTransactionHistory": false }]),
        )
    }

    pub fn block_height(commitment: Commitment) -> Self {
        Self::new(
            RpcMethod::GetBlockHeight,
            json!([{ "commitment": commitment.as_str() }]),
        )
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Error object of a failed JSON-RPC call.
#[derive(Clone, Debug, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// A JSON-RPC 2.0 response body.
#[derive(Clone, Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

impl<T> RpcResponse<T> {
    pub fn into_result(self) -> RpcResult<T> {
        match (self.result, self.error) {
            (_, Some(error)) => Err(RpcError::Rpc {
                code: error.code,
                message: error.message,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(RpcError::InvalidResponse(
                "response has neither result nor error".to_string(),
            )),
        }
    }
}

/// Decode a raw response body.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> RpcResult<T> {
    serde_json::from_str::<RpcResponse<T>>(body)?.into_result()
}

/// `{ "context": { "slot": .. }, "value": .. }` wrapper used by most methods.
#[derive(Clone, Debug, Deserialize)]
pub struct RpcContextual<T> {
    pub context: RpcContext,
    pub value: T,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RpcContext {
    pub slot: u64,
}

/// Raw `getLatestBlockhash` value.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlockhash {
    pub blockhash: String,
    pub last_valid_block_height: u64,
}

/// Parsed blockhash together with its expiry height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatestBlockhash {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

impl TryFrom<RpcBlockhash> for LatestBlockhash {
    type Error = RpcError;

    fn try_from(raw: RpcBlockhash) -> RpcResult<Self> {
        let blockhash = Hash::from_str(&raw.blockhash)
            .map_err(|e| RpcError::InvalidResponse(format!("bad blockhash: {}", e)))?;
        Ok(Self {
            blockhash,
            last_valid_block_height: raw.last_valid_block_height,
        })
    }
}

/// Parse the signature string returned by `sendTransaction`.
pub fn parse_signature(raw: &str) -> RpcResult<Signature> {
    Signature::from_str(raw)
        .map_err(|e| RpcError::InvalidResponse(format!("bad signature '{}': {}", raw, e)))
}

/// One entry of `getSignatureStatuses`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureStatus {
    pub slot: u64,
    pub confirmations: Option<u64>,
    pub err: Option<Value>,
    pub confirmation_status: Option<Commitment>,
}

// =============================================================================
// Confirmation
// =============================================================================

/// Where a submitted signature stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmationState {
    /// Not yet at the target commitment; poll again.
    Pending,
    /// Reached the target commitment without error.
    Confirmed,
    /// Landed with an on-chain error.
    Failed(String),
    /// Blockhash is no longer valid and the signature never landed.
    Expired,
}

/// Classify a signature status against the blockhash expiry.
pub fn confirmation_state(
    status: Option<&SignatureStatus>,
    target: Commitment,
    block_height: u64,
    last_valid_block_height: u64,
) -> ConfirmationState {
    if let Some(status) = status {
        if let Some(err) = &status.err {
            return ConfirmationState::Failed(err.to_string());
        }
        // A status without confirmationStatus and without confirmations is rooted.
        let reached = status.confirmation_status.unwrap_or(if status.confirmations.is_none() {
            Commitment::Finalized
        } else {
            Commitment::Processed
        });
        if reached >= target {
            return ConfirmationState::Confirmed;
        }
    }
    if block_height > last_valid_block_height {
        ConfirmationState::Expired
    } else {
        ConfirmationState::Pending
    }
}
