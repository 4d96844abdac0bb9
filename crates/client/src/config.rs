//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Bounded wait applied to every node RPC, in seconds.
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 200;

/// Connection settings for one chain.
///
/// The surrounding application decides where these values come from; the
/// pipeline only needs the chain id, the contract name and the node roles.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Chain identifier; `default` on a stock deployment.
    pub chain_id: String,
    /// Name of the deployed contract.
    pub contract_name: String,
    /// Endorser node names, comma-separated, in endorsement order.
    pub endorser_nodes: String,
    /// Node that accepts endorsed transactions for commitment.
    pub consensus_node: String,
    /// Node used for read-only invocations and state lookups.
    pub query_node: String,
    /// Per-call RPC timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: "default".to_owned(),
            contract_name: String::new(),
            endorser_nodes: String::new(),
            consensus_node: String::new(),
            query_node: String::new(),
            rpc_timeout_secs: DEFAULT_RPC_TIMEOUT_SECS,
        }
    }
}

impl ChainConfig {
    /// Endorser list in configured order. Blank entries are dropped.
    pub fn endorsers(&self) -> Vec<String> {
        self.endorser_nodes
            .split(',')
            .map(str::trim)
            .filter(|node| !node.is_empty())
            .map(str::to_owned)
            .collect()
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endorsers_preserve_order_and_drop_blanks() {
        let config = ChainConfig {
            endorser_nodes: "node2, node0 ,,node1".to_owned(),
            ..ChainConfig::default()
        };
        assert_eq!(config.endorsers(), vec!["node2", "node0", "node1"]);
    }

    #[test]
    fn defaults_apply_when_fields_are_missing() {
        let config: ChainConfig =
            serde_json::from_str(r#"{"contract_name":"hrchain","query_node":"node0"}"#).unwrap();
        assert_eq!(config.chain_id, "default");
        assert_eq!(config.rpc_timeout(), Duration::from_secs(200));
        assert!(config.endorsers().is_empty());
    }
}
