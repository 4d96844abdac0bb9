//! Node RPC abstraction.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::BoxStream;
use ledgerlink_wire::RawMessage;

use crate::error::{ClientError, Result};

/// Per-chain event stream of commit notifications.
pub type EventStream = BoxStream<'static, Result<RawMessage>>;

/// Raw RPC surface of the ledger node network, addressed by node name.
///
/// Implementations are shared long-lived handles, safe for concurrent
/// independent invocations; the pipeline never pools or locks them.
/// Per-call timeouts are the caller's concern, not the transport's.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// Contract invocation, used both for endorsement and for read-only
    /// queries.
    async fn invoke(&self, node: &str, msg: RawMessage) -> Result<RawMessage>;

    /// Submits an endorsed transaction bundle for commitment.
    async fn submit(&self, node: &str, msg: RawMessage) -> Result<RawMessage>;

    async fn query_tx_by_hash(&self, node: &str, msg: RawMessage) -> Result<RawMessage>;

    async fn query_tx_result_by_hash(&self, node: &str, msg: RawMessage) -> Result<RawMessage>;

    async fn query_block_by_number(&self, node: &str, msg: RawMessage) -> Result<RawMessage>;

    async fn query_block_by_tx_hash(&self, node: &str, msg: RawMessage) -> Result<RawMessage>;

    async fn query_latest_chain_state(&self, node: &str, msg: RawMessage) -> Result<RawMessage>;

    /// Subscribes to the per-chain event stream of committed block results.
    async fn subscribe(&self, node: &str, chain_id: &str) -> Result<EventStream>;
}

/// Applies the bounded per-call wait to a node RPC future.
pub(crate) async fn with_timeout<T>(
    node: &str,
    op: &'static str,
    wait: Duration,
    fut: impl Future<Output = Result<T>>,
) -> Result<T> {
    match tokio::time::timeout(wait, fut).await {
        Ok(result) => result,
        Err(_) => Err(ClientError::TransportTimeout {
            node: node.to_owned(),
            op,
        }),
    }
}
