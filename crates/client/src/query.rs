//! Transaction and block lookups against the query node.
//!
//! Everything here follows the read-path rule: a decodable-but-unsuccessful
//! node status or a malformed identifier is a normal miss, logged and
//! reported as `None`. Only transport failures and undecodable payloads
//! are errors.

use std::sync::Arc;
use std::time::Duration;

use ledgerlink_wire::{message, Block, LatestChainState, Response, Status, Tx, TxResult, TxStatus};
use prost::Message as _;

use crate::config::ChainConfig;
use crate::error::Result;
use crate::rpc::{with_timeout, NodeRpc};

/// Read-only lookups of committed transactions and blocks.
#[derive(Clone)]
pub struct ChainQuery {
    rpc: Arc<dyn NodeRpc>,
    chain_id: String,
    query_node: String,
    rpc_timeout: Duration,
}

impl ChainQuery {
    pub fn new(rpc: Arc<dyn NodeRpc>, config: &ChainConfig) -> Self {
        Self {
            rpc,
            chain_id: config.chain_id.clone(),
            query_node: config.query_node.clone(),
            rpc_timeout: config.rpc_timeout(),
        }
    }

    /// Looks up a committed transaction by hex id.
    pub async fn tx_by_tx_id(&self, tx_id: &str) -> Result<Option<Tx>> {
        let Some(hash) = decode_tx_id(tx_id) else {
            return Ok(None);
        };
        let msg = message::build_tx_query_msg(&self.chain_id, &hash);
        let raw = with_timeout(
            &self.query_node,
            "query_tx_by_hash",
            self.rpc_timeout,
            self.rpc.query_tx_by_hash(&self.query_node, msg),
        )
        .await?;
        let response = decode_response(&raw)?;
        if response.status() != Status::Success {
            log_miss("tx lookup", &response);
            return Ok(None);
        }
        Ok(Some(Tx::decode(response.payload.as_slice()).map_err(
            ledgerlink_wire::WireError::from,
        )?))
    }

    /// Looks up the terminal status of a committed transaction. `None`
    /// means the chain does not know the transaction (yet).
    pub async fn tx_result_by_tx_id(&self, tx_id: &str) -> Result<Option<TxStatus>> {
        let Some(hash) = decode_tx_id(tx_id) else {
            return Ok(None);
        };
        let msg = message::build_tx_query_msg(&self.chain_id, &hash);
        let raw = with_timeout(
            &self.query_node,
            "query_tx_result_by_hash",
            self.rpc_timeout,
            self.rpc.query_tx_result_by_hash(&self.query_node, msg),
        )
        .await?;
        let response = decode_response(&raw)?;
        if response.status() != Status::Success {
            log_miss("tx result lookup", &response);
            return Ok(None);
        }
        let result = TxResult::decode(response.payload.as_slice())
            .map_err(ledgerlink_wire::WireError::from)?;
        Ok(Some(result.status()))
    }

    /// Looks up a block by number; numbering starts at 0.
    pub async fn block_by_number(&self, number: u64) -> Result<Option<Block>> {
        let msg = message::build_block_query_msg(&self.chain_id, number);
        let raw = with_timeout(
            &self.query_node,
            "query_block_by_number",
            self.rpc_timeout,
            self.rpc.query_block_by_number(&self.query_node, msg),
        )
        .await?;
        self.decode_block(&raw)
    }

    /// Looks up the block containing the given transaction.
    pub async fn block_by_tx_id(&self, tx_id: &str) -> Result<Option<Block>> {
        let Some(hash) = decode_tx_id(tx_id) else {
            return Ok(None);
        };
        let msg = message::build_tx_query_msg(&self.chain_id, &hash);
        let raw = with_timeout(
            &self.query_node,
            "query_block_by_tx_hash",
            self.rpc_timeout,
            self.rpc.query_block_by_tx_hash(&self.query_node, msg),
        )
        .await?;
        self.decode_block(&raw)
    }

    /// Looks up the newest block.
    pub async fn last_block(&self) -> Result<Option<Block>> {
        let number = self.last_block_number().await?;
        self.block_by_number(number).await
    }

    /// Number of the newest block; 0 when the chain state is unavailable.
    pub async fn last_block_number(&self) -> Result<u64> {
        let msg = message::build_chain_state_query_msg(&self.chain_id);
        let raw = with_timeout(
            &self.query_node,
            "query_latest_chain_state",
            self.rpc_timeout,
            self.rpc.query_latest_chain_state(&self.query_node, msg),
        )
        .await?;
        let response = decode_response(&raw)?;
        if response.status() != Status::Success {
            log_miss("latest chain state lookup", &response);
            return Ok(0);
        }
        let state = LatestChainState::decode(response.payload.as_slice())
            .map_err(ledgerlink_wire::WireError::from)?;
        Ok(state.height.saturating_sub(1))
    }

    fn decode_block(&self, raw: &ledgerlink_wire::RawMessage) -> Result<Option<Block>> {
        let response = decode_response(raw)?;
        if response.status() != Status::Success {
            log_miss("block lookup", &response);
            return Ok(None);
        }
        Ok(Some(Block::decode(response.payload.as_slice()).map_err(
            ledgerlink_wire::WireError::from,
        )?))
    }
}

fn decode_response(raw: &ledgerlink_wire::RawMessage) -> Result<Response> {
    Ok(Response::decode(raw.payload.as_slice()).map_err(ledgerlink_wire::WireError::from)?)
}

fn decode_tx_id(tx_id: &str) -> Option<Vec<u8>> {
    match hex::decode(tx_id) {
        Ok(hash) => Some(hash),
        Err(err) => {
            tracing::error!(%tx_id, %err, "transaction id is not valid hex");
            None
        }
    }
}

fn log_miss(what: &str, response: &Response) {
    tracing::error!(
        status = ?response.status(),
        info = %response.status_info,
        "{what} failed"
    );
}
