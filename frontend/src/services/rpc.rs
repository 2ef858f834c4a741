//! JSON-RPC connection to the Solana cluster.
//!
//! Posts the request envelopes from [`launchpad::rpc`] with `gloo-net`.

use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use launchpad::error::{RpcError, RpcResult};
use launchpad::rpc::{
    self, confirmation_state, decode_response, ConfirmationState, LatestBlockhash, RpcBlockhash,
    RpcContextual, RpcRequest, SignatureStatus,
};
use launchpad::{Commitment, Connection, Signature, Transaction};
use serde::de::DeserializeOwned;

use crate::config::CONFIRMATION_POLL_INTERVAL_MS;

/// Connection handle shared by every component under the session provider.
#[derive(Clone, Debug)]
pub struct RpcConnection {
    endpoint: Rc<str>,
    commitment: Commitment,
}

impl RpcConnection {
    pub fn new(endpoint: &str, commitment: Commitment) -> Self {
        Self {
            endpoint: Rc::from(endpoint),
            commitment,
        }
    }

    async fn call<T: DeserializeOwned>(&self, request: RpcRequest) -> RpcResult<T> {
        log::debug!("➡️  {} {}", request.method, self.endpoint);

        let body = serde_json::to_string(&request)?;
        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| RpcError::Http(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| RpcError::Http(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RpcError::Http(format!("Failed to read response: {}", e)))?;

        if !response.ok() {
            return Err(RpcError::Http(format!("Server error ({}): {}", status, text)));
        }

        decode_response(&text)
    }

    async fn signature_status(&self, signature: &Signature) -> RpcResult<Option<SignatureStatus>> {
        let statuses: RpcContextual<Vec<Option<SignatureStatus>>> = self
            .call(RpcRequest::signature_statuses(std::slice::from_ref(signature)))
            .await?;
        Ok(statuses.value.into_iter().next().flatten())
    }

    async fn block_height(&self) -> RpcResult<u64> {
        self.call(RpcRequest::block_height(self.commitment)).await
    }
}

impl Connection for RpcConnection {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> RpcResult<u64> {
        self.call(RpcRequest::minimum_balance_for_rent_exemption(data_len))
            .await
    }

    async fn get_latest_blockhash(&self) -> RpcResult<LatestBlockhash> {
        let raw: RpcContextual<RpcBlockhash> = self
            .call(RpcRequest::latest_blockhash(self.commitment))
            .await?;
        LatestBlockhash::try_from(raw.value)
    }

    async fn send_raw_transaction(&self, transaction: &Transaction) -> RpcResult<Signature> {
        let raw: String = self
            .call(RpcRequest::send_transaction(transaction, self.commitment)?)
            .await?;
        rpc::parse_signature(&raw)
    }

    async fn confirm_transaction(
        &self,
        signature: &Signature,
        blockhash: &LatestBlockhash,
    ) -> RpcResult<()> {
        log::info!("⏳ Waiting for confirmation of {}", signature);
        loop {
            let status = self.signature_status(signature).await?;
            let height = self.block_height().await?;
            match confirmation_state(
                status.as_ref(),
                self.commitment,
                height,
                blockhash.last_valid_block_height,
            ) {
                ConfirmationState::Confirmed => {
                    log::info!("✅ {} confirmed", signature);
                    return Ok(());
                }
                ConfirmationState::Failed(err) => return Err(RpcError::TransactionFailed(err)),
                ConfirmationState::Expired => {
                    return Err(RpcError::BlockhashExpired(signature.to_string()))
                }
                ConfirmationState::Pending => {
                    TimeoutFuture::new(CONFIRMATION_POLL_INTERVAL_MS).await;
                }
            }
        }
    }
}
