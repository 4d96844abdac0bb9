//! Transaction entities as they appear on the ledger.
//!
//! Committed layout:
//!
//! ```text
//! Tx {
//!   hash
//!   full -> Transaction {
//!     approvals [{ identity, sign, org_name }]
//!     payload -> TxPayload {
//!       header { chain_id, timestamp, creator { org } }
//!       data -> CommonTxData {
//!         contract_invocation
//!         response { status, payload }
//!         state_updates [{ namespace, kv_updates { updates [{ key, value }] } }]
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! `TxPayload.data` only carries a `CommonTxData` for contract transactions;
//! genesis and contract-voting blocks put something else (or nothing) there.

use crate::message::Response;

/// A node's approval of a proposed transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Approval {
    /// X.509 certificate of the approving identity.
    #[prost(bytes = "vec", tag = "1")]
    pub identity: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub sign: Vec<u8>,
    /// Organization name, when the node filled it in explicitly.
    #[prost(string, tag = "3")]
    pub org_name: String,
}

/// One endorser's reply to an invocation: the produced transaction payload
/// plus that node's approval.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Endorsement {
    /// Encoded [`TxPayload`] produced by contract execution.
    #[prost(bytes = "vec", tag = "1")]
    pub tx_payload: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub approval: Option<Approval>,
}

/// Fully endorsed transaction body.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
    #[prost(message, repeated, tag = "1")]
    pub approvals: Vec<Approval>,
    /// Encoded [`TxPayload`].
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
}

/// Committed transaction: hash plus full body.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tx {
    #[prost(bytes = "vec", tag = "1")]
    pub hash: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub full: Option<Transaction>,
}

/// Identity of the organization that created a transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Creator {
    #[prost(string, tag = "1")]
    pub org: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxHeader {
    #[prost(string, tag = "1")]
    pub chain_id: String,
    #[prost(int64, tag = "2")]
    pub timestamp: i64,
    #[prost(message, optional, tag = "3")]
    pub creator: Option<Creator>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxPayload {
    #[prost(message, optional, tag = "1")]
    pub header: Option<TxHeader>,
    /// Encoded [`CommonTxData`] for contract transactions; other block
    /// kinds put unrelated (or no) bytes here.
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

/// The contract call a transaction executed.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContractInvocation {
    #[prost(string, tag = "1")]
    pub contract_name: String,
    #[prost(string, tag = "2")]
    pub func_name: String,
    #[prost(string, repeated, tag = "3")]
    pub args: Vec<String>,
}

/// Contract payload of a committed transaction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommonTxData {
    /// Encoded [`ContractInvocation`].
    #[prost(bytes = "vec", tag = "1")]
    pub contract_invocation: Vec<u8>,
    /// Contract execution response; its payload is the query-path value.
    #[prost(message, optional, tag = "2")]
    pub response: Option<Response>,
    #[prost(message, repeated, tag = "3")]
    pub state_updates: Vec<StateUpdates>,
}

/// State writes of one namespace.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StateUpdates {
    #[prost(string, tag = "1")]
    pub namespace: String,
    #[prost(message, optional, tag = "2")]
    pub kv_updates: Option<KvUpdates>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KvUpdates {
    #[prost(message, repeated, tag = "1")]
    pub updates: Vec<KeyValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyValue {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

/// One state write as surfaced to callers, qualified by its namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateKeyValue {
    pub namespace: String,
    pub key: String,
    pub value: Vec<u8>,
}

/// Terminal classification of a committed transaction.
///
/// Only `Valid` marks a successful commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TxStatus {
    Unknown = 0,
    Valid = 1,
    Invalid = 2,
    Conflict = 3,
    Expired = 4,
}

/// Result entry for one transaction, as reported by confirmation lookups
/// and the per-chain event stream.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxResult {
    #[prost(bytes = "vec", tag = "1")]
    pub tx_hash: Vec<u8>,
    #[prost(enumeration = "TxStatus", tag = "2")]
    pub status: i32,
}
