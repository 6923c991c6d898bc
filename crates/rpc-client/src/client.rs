//! The JSON-RPC client for one node endpoint.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use url::Url;

use neoforge_core::{CoreError, Transaction, UInt256};

use crate::error::{RpcError, RpcResult};
use crate::models::{InvokeResult, RawInvokeResult, RawSendResult, RpcEnvelope};

/// A client bound to a single node endpoint.
#[derive(Debug, Clone)]
pub struct RpcClient {
    endpoint: Url,
    http: Client,
}

static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

impl RpcClient {
    pub fn new(endpoint: &str) -> RpcResult<Self> {
        Ok(RpcClient {
            endpoint: Url::parse(endpoint)?,
            http: Client::new(),
        })
    }

    /// Reuses an existing HTTP client, sharing its connection pool.
    pub fn with_client(endpoint: Url, http: Client) -> Self {
        RpcClient { endpoint, http }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> RpcResult<T> {
        let id = REQUEST_ID.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        tracing::debug!(endpoint = %self.endpoint, method, id, "rpc call");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let envelope: RpcEnvelope<T> = response.json().await?;

        if let Some(error) = envelope.error {
            return Err(RpcError::Server {
                code: error.code,
                message: error.message,
            });
        }
        envelope
            .result
            .ok_or_else(|| RpcError::Protocol(format!("{method}: missing result")))
    }

    /// Current chain height.
    pub async fn get_block_count(&self) -> RpcResult<u32> {
        self.call("getblockcount", json!([])).await
    }

    /// Dry-runs an invocation script for fee estimation.
    pub async fn invoke_script(&self, script: &[u8]) -> RpcResult<InvokeResult> {
        let raw: RawInvokeResult = self
            .call("invokescript", json!([hex::encode(script)]))
            .await?;
        raw.try_into()
    }

    /// Submits a signed transaction, returning its id.
    ///
    /// Older nodes acknowledge with a bare boolean; the id is then derived
    /// locally from the transaction body.
    pub async fn send_raw_transaction(&self, tx: &Transaction) -> RpcResult<UInt256> {
        let encoded = tx.to_hex().map_err(core_error)?;
        let raw: RawSendResult = self.call("sendrawtransaction", json!([encoded])).await?;
        match raw {
            RawSendResult::Detailed { hash } => Ok(hash),
            RawSendResult::Accepted(true) => tx.hash().map_err(core_error),
            RawSendResult::Accepted(false) => Err(RpcError::Protocol(
                "node rejected the transaction without an error".to_string(),
            )),
        }
    }
}

fn core_error(err: CoreError) -> RpcError {
    RpcError::Protocol(format!("transaction encoding failed: {err}"))
}
