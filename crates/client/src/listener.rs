//! Background event listener.
//!
//! One process-lifetime task subscribes to the per-chain event stream of
//! the query node and logs every transaction outcome as blocks commit. It
//! is independent of the request path and holds no request state.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use ledgerlink_wire::{BlockResult, WireError};
use prost::Message as _;
use tokio::task::JoinHandle;

use crate::config::ChainConfig;
use crate::error::Result;
use crate::rpc::NodeRpc;

/// What to do when the event stream ends or fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartPolicy {
    /// Log and terminate the task. Historical behavior, and the default.
    Never,
    /// Resubscribe after the given delay.
    Always { delay: Duration },
}

/// Watches the per-chain event stream and logs each commit outcome.
pub struct EventListener {
    rpc: Arc<dyn NodeRpc>,
    node: String,
    chain_id: String,
    policy: RestartPolicy,
}

impl EventListener {
    pub fn new(rpc: Arc<dyn NodeRpc>, config: &ChainConfig) -> Self {
        Self {
            rpc,
            node: config.query_node.clone(),
            chain_id: config.chain_id.clone(),
            policy: RestartPolicy::Never,
        }
    }

    pub fn with_policy(mut self, policy: RestartPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Spawns the listener task. Called once at process start; the handle
    /// is usually dropped and the task lives as long as the process.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(self) {
        loop {
            match self.watch().await {
                Ok(()) => {
                    tracing::warn!(chain_id = %self.chain_id, "event stream ended");
                }
                Err(err) => {
                    tracing::error!(%err, chain_id = %self.chain_id, "event stream terminated");
                }
            }
            match self.policy {
                RestartPolicy::Never => return,
                RestartPolicy::Always { delay } => tokio::time::sleep(delay).await,
            }
        }
    }

    async fn watch(&self) -> Result<()> {
        let mut events = self.rpc.subscribe(&self.node, &self.chain_id).await?;
        while let Some(event) = events.next().await {
            let raw = event?;
            let result = BlockResult::decode(raw.payload.as_slice()).map_err(WireError::from)?;
            for tx in &result.tx_results {
                // only Valid marks a successful commit
                tracing::debug!(
                    tx_id = %hex::encode(&tx.tx_hash),
                    status = ?tx.status(),
                    "transaction committed"
                );
            }
        }
        Ok(())
    }
}
