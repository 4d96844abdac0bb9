//! Contract invocation pipeline: endorsement, assembly, submission,
//! confirmation and read-only queries.

use std::sync::Arc;

use ledgerlink_wire::{
    message, CommonTxData, RawMessage, Response, Status, Transaction, TxBundle, TxPayload,
    TxStatus, WireError,
};
use prost::Message as _;

use crate::config::ChainConfig;
use crate::error::{ClientError, Result};
use crate::funcs::ContractFunc;
use crate::poller::{poll_until_resolved, PollSchedule};
use crate::query::ChainQuery;
use crate::rpc::{with_timeout, NodeRpc};

/// Outcome of a synchronous write: the transaction id plus the terminal
/// status reported by confirmation polling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendReceipt {
    pub tx_id: String,
    pub status: TxStatus,
}

/// Drives named contract functions through the configured ledger nodes.
///
/// Each operation runs on the caller's task; remote calls are awaited
/// under the configured per-call timeout and no state is shared between
/// independent calls.
pub struct ContractService {
    rpc: Arc<dyn NodeRpc>,
    config: ChainConfig,
    chain_query: ChainQuery,
    schedule: PollSchedule,
}

impl ContractService {
    pub fn new(rpc: Arc<dyn NodeRpc>, config: ChainConfig) -> Self {
        let chain_query = ChainQuery::new(rpc.clone(), &config);
        Self {
            rpc,
            config,
            chain_query,
            schedule: PollSchedule::default(),
        }
    }

    /// Replaces the confirmation polling schedule.
    pub fn with_schedule(mut self, schedule: PollSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Lookups against the configured query node.
    pub fn queries(&self) -> &ChainQuery {
        &self.chain_query
    }

    /// Fire-and-forget write: endorse on every configured endorser,
    /// assemble the bundle, submit it to the consensus node. Returns the
    /// hex transaction id once the consensus node accepted the bundle.
    pub async fn send(&self, func: &dyn ContractFunc, args: &[String]) -> Result<String> {
        let responses = self.collect_endorsements(func, args).await?;
        let bundle = TxBundle::assemble(&responses)?;
        let tx_id = bundle.tx_id();
        tracing::debug!(%tx_id, func = func.wire_name(), "submitting endorsed transaction");
        self.submit_to_consensus(bundle).await?;
        Ok(tx_id)
    }

    /// Write followed by confirmation polling.
    ///
    /// A `ConfirmationTimeout` from this method means the submission
    /// itself succeeded and only the terminal status is unknown; every
    /// other error is a failed write.
    pub async fn send_sync(&self, func: &dyn ContractFunc, args: &[String]) -> Result<SendReceipt> {
        let tx_id = self.send(func, args).await?;
        let chain_query = &self.chain_query;
        let status = poll_until_resolved(&tx_id, self.schedule, || {
            chain_query.tx_result_by_tx_id(&tx_id)
        })
        .await?;
        Ok(SendReceipt { tx_id, status })
    }

    /// Read-only contract invocation against the query node.
    ///
    /// A non-success node status is a normal miss and yields `None`; this
    /// is deliberately asymmetric with the write path, which always
    /// surfaces failures as errors.
    pub async fn query(&self, func: &dyn ContractFunc, args: &[String]) -> Result<Option<String>> {
        let msg = self.invoke_msg(func, args);
        let node = &self.config.query_node;
        let raw = with_timeout(
            node,
            "invoke",
            self.config.rpc_timeout(),
            self.rpc.invoke(node, msg),
        )
        .await?;

        let response = Response::decode(raw.payload.as_slice()).map_err(WireError::from)?;
        if response.status() != Status::Success {
            tracing::error!(
                status = ?response.status(),
                info = %response.status_info,
                func = func.wire_name(),
                "query invocation failed"
            );
            return Ok(None);
        }

        // peel the nested envelopes down to the contract's response payload
        let tx = Transaction::decode(response.payload.as_slice()).map_err(WireError::from)?;
        let payload = TxPayload::decode(tx.payload.as_slice()).map_err(WireError::from)?;
        let data = CommonTxData::decode(payload.data.as_slice()).map_err(WireError::from)?;
        let value = data.response.unwrap_or_default().payload;
        Ok(Some(String::from_utf8_lossy(&value).into_owned()))
    }

    fn invoke_msg(&self, func: &dyn ContractFunc, args: &[String]) -> RawMessage {
        message::build_invoke_msg(
            &self.config.chain_id,
            &self.config.contract_name,
            func.wire_name(),
            args,
        )
    }

    /// Requests an endorsement from every configured endorser, in order.
    /// All-or-nothing: one failing or timed-out node aborts the write.
    async fn collect_endorsements(
        &self,
        func: &dyn ContractFunc,
        args: &[String],
    ) -> Result<Vec<RawMessage>> {
        let nodes = self.config.endorsers();
        if nodes.is_empty() {
            return Err(ClientError::Configuration(
                "at least one endorser node must be configured".to_owned(),
            ));
        }
        let msg = self.invoke_msg(func, args);
        let mut responses = Vec::with_capacity(nodes.len());
        for node in &nodes {
            let raw = with_timeout(
                node,
                "invoke",
                self.config.rpc_timeout(),
                self.rpc.invoke(node, msg.clone()),
            )
            .await?;
            responses.push(raw);
        }
        Ok(responses)
    }

    async fn submit_to_consensus(&self, bundle: TxBundle) -> Result<()> {
        let node = &self.config.consensus_node;
        let raw = with_timeout(
            node,
            "transaction",
            self.config.rpc_timeout(),
            self.rpc.submit(node, bundle.msg),
        )
        .await?;
        let response = Response::decode(raw.payload.as_slice()).map_err(WireError::from)?;
        if response.status() != Status::Success {
            return Err(ClientError::RemoteStatus {
                status: response.status(),
                info: response.status_info,
            });
        }
        Ok(())
    }
}
