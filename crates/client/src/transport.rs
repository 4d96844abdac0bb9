//! HTTP transport for [`NodeRpc`].
//!
//! Maps node names to base URLs and POSTs protobuf-encoded envelopes to
//! per-verb endpoints. The event stream rides a chunked GET response where
//! each chunk is one encoded `RawMessage`.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::StreamExt;
use ledgerlink_wire::{RawMessage, WireError};
use prost::Message as _;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

use crate::error::{ClientError, Result};
use crate::rpc::{EventStream, NodeRpc};

/// HTTP implementation of the node RPC surface.
pub struct HttpNodeRpc {
    nodes: HashMap<String, Url>,
    http: Client,
}

impl HttpNodeRpc {
    pub fn new(nodes: HashMap<String, Url>) -> Self {
        Self::with_client(nodes, Client::new())
    }

    /// Uses an existing HTTP client, e.g. one with custom TLS settings.
    pub fn with_client(nodes: HashMap<String, Url>, http: Client) -> Self {
        Self { nodes, http }
    }

    fn url(&self, node: &str, verb: &str) -> Result<Url> {
        let base = self.nodes.get(node).ok_or_else(|| {
            ClientError::Configuration(format!("no base url configured for node `{node}`"))
        })?;
        base.join(verb)
            .map_err(|err| ClientError::Configuration(format!("bad verb path `{verb}`: {err}")))
    }

    async fn post(&self, node: &str, verb: &str, msg: RawMessage) -> Result<RawMessage> {
        let url = self.url(node, verb)?;
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/x-protobuf")
            .body(msg.encode_to_vec())
            .send()
            .await
            .map_err(|err| ClientError::Transport {
                node: node.to_owned(),
                reason: err.to_string(),
            })?;
        let bytes = response.bytes().await.map_err(|err| ClientError::Transport {
            node: node.to_owned(),
            reason: err.to_string(),
        })?;
        RawMessage::decode(bytes.as_ref()).map_err(|err| ClientError::Wire(WireError::from(err)))
    }
}

#[async_trait]
impl NodeRpc for HttpNodeRpc {
    async fn invoke(&self, node: &str, msg: RawMessage) -> Result<RawMessage> {
        self.post(node, "contract/invoke", msg).await
    }

    async fn submit(&self, node: &str, msg: RawMessage) -> Result<RawMessage> {
        self.post(node, "contract/transaction", msg).await
    }

    async fn query_tx_by_hash(&self, node: &str, msg: RawMessage) -> Result<RawMessage> {
        self.post(node, "query/tx", msg).await
    }

    async fn query_tx_result_by_hash(&self, node: &str, msg: RawMessage) -> Result<RawMessage> {
        self.post(node, "query/tx-result", msg).await
    }

    async fn query_block_by_number(&self, node: &str, msg: RawMessage) -> Result<RawMessage> {
        self.post(node, "query/block-by-number", msg).await
    }

    async fn query_block_by_tx_hash(&self, node: &str, msg: RawMessage) -> Result<RawMessage> {
        self.post(node, "query/block-by-tx", msg).await
    }

    async fn query_latest_chain_state(&self, node: &str, msg: RawMessage) -> Result<RawMessage> {
        self.post(node, "query/chain-state", msg).await
    }

    async fn subscribe(&self, node: &str, chain_id: &str) -> Result<EventStream> {
        let url = self.url(node, &format!("event/listen/{chain_id}"))?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| ClientError::Transport {
                node: node.to_owned(),
                reason: err.to_string(),
            })?;
        let node = node.to_owned();
        let stream = response.bytes_stream().map(move |chunk| {
            let chunk = chunk.map_err(|err| ClientError::Transport {
                node: node.clone(),
                reason: err.to_string(),
            })?;
            RawMessage::decode(chunk.as_ref())
                .map_err(|err| ClientError::Wire(WireError::from(err)))
        });
        Ok(stream.boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_node_is_a_configuration_error() {
        let rpc = HttpNodeRpc::new(HashMap::new());
        let err = rpc
            .invoke("node0", RawMessage::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }
}
