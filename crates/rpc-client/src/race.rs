//! Fastest-responder selection across candidate endpoints.

use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::timeout;

use crate::client::RpcClient;
use crate::error::{RpcError, RpcResult};

/// Probes all candidate endpoints concurrently and returns a client for the
/// first one to answer a height query. Every losing probe is aborted as
/// soon as a winner is known; failures only surface when no endpoint
/// responds within `per_node_timeout`.
pub async fn fastest_node(
    endpoints: &[String],
    per_node_timeout: Duration,
) -> RpcResult<RpcClient> {
    let attempted = endpoints.len();
    let mut probes = JoinSet::new();
    for endpoint in endpoints {
        let endpoint = endpoint.clone();
        probes.spawn(async move {
            let client = RpcClient::new(&endpoint)?;
            let height = timeout(per_node_timeout, client.get_block_count())
                .await
                .map_err(|_| RpcError::Protocol(format!("{endpoint}: probe timed out")))??;
            Ok::<_, RpcError>((client, height))
        });
    }

    while let Some(joined) = probes.join_next().await {
        match joined {
            Ok(Ok((client, height))) => {
                tracing::debug!(endpoint = %client.endpoint(), height, "selected fastest node");
                probes.abort_all();
                return Ok(client);
            }
            Ok(Err(err)) => {
                tracing::debug!(error = %err, "node probe failed");
            }
            // A probe panicked or was cancelled; treat like a failure.
            Err(_) => {}
        }
    }
    Err(RpcError::NoResponsiveNode { attempted })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_candidate_list() {
        let err = fastest_node(&[], Duration::from_millis(10)).await.unwrap_err();
        assert!(matches!(err, RpcError::NoResponsiveNode { attempted: 0 }));
    }

    #[tokio::test]
    async fn test_unparseable_endpoints_all_fail() {
        let endpoints = vec!["not a url".to_string(), "also bad".to_string()];
        let err = fastest_node(&endpoints, Duration::from_millis(10))
            .await
            .unwrap_err();
        assert!(matches!(err, RpcError::NoResponsiveNode { attempted: 2 }));
    }
}
