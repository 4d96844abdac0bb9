//! Raw message envelopes and builders.
//!
//! Every exchange with a ledger node is a [`RawMessage`]: a typed, opaque
//! envelope whose payload is itself an encoded protobuf message. Builders
//! here produce the envelopes for contract invocation and the various query
//! verbs; [`TxBundle`] performs the deterministic transaction assembly step
//! between endorsement and consensus submission.

use prost::Message as _;
use sha2::{Digest, Sha256};

use crate::error::{Result, WireError};
use crate::transaction::{Endorsement, Transaction, Tx};

/// Wire discriminator of a raw message envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MessageType {
    /// Contract invocation sent directly to a node.
    Direct = 0,
    /// Endorsed transaction bundle bound for a consensus node.
    Transaction = 1,
    /// Ledger state lookup.
    Query = 2,
}

/// Status code carried by every node response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Status {
    Success = 0,
    BadRequest = 1,
    NotFound = 2,
    InternalError = 3,
    Rejected = 4,
}

/// Opaque typed envelope exchanged with ledger nodes.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RawMessage {
    #[prost(enumeration = "MessageType", tag = "1")]
    pub r#type: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub payload: Vec<u8>,
}

impl RawMessage {
    pub fn new(r#type: MessageType, payload: Vec<u8>) -> Self {
        Self {
            r#type: r#type as i32,
            payload,
        }
    }
}

/// Response returned by a node for any invoke, submit or query verb.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    #[prost(enumeration = "Status", tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub status_info: String,
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

impl Response {
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Status::Success as i32,
            status_info: String::new(),
            payload,
        }
    }

    pub fn failure(status: Status, info: impl Into<String>) -> Self {
        Self {
            status: status as i32,
            status_info: info.into(),
            payload: Vec::new(),
        }
    }
}

/// A named contract call with its ordered string arguments.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Invocation {
    #[prost(string, tag = "1")]
    pub chain_id: String,
    #[prost(string, tag = "2")]
    pub contract_name: String,
    #[prost(string, tag = "3")]
    pub func_name: String,
    #[prost(string, repeated, tag = "4")]
    pub args: Vec<String>,
}

/// Lookup of a transaction (or its result) by hash.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TxQuery {
    #[prost(string, tag = "1")]
    pub chain_id: String,
    #[prost(bytes = "vec", tag = "2")]
    pub tx_hash: Vec<u8>,
}

/// Lookup of a block by number.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockQuery {
    #[prost(string, tag = "1")]
    pub chain_id: String,
    #[prost(uint64, tag = "2")]
    pub number: u64,
}

/// Lookup of the latest chain state.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChainStateQuery {
    #[prost(string, tag = "1")]
    pub chain_id: String,
}

/// Builds the invocation envelope sent to endorser and query nodes.
pub fn build_invoke_msg(
    chain_id: &str,
    contract_name: &str,
    func_name: &str,
    args: &[String],
) -> RawMessage {
    let invocation = Invocation {
        chain_id: chain_id.to_owned(),
        contract_name: contract_name.to_owned(),
        func_name: func_name.to_owned(),
        args: args.to_vec(),
    };
    RawMessage::new(MessageType::Direct, invocation.encode_to_vec())
}

/// Builds the by-hash envelope used for tx, tx-result and block-by-tx lookups.
pub fn build_tx_query_msg(chain_id: &str, tx_hash: &[u8]) -> RawMessage {
    let query = TxQuery {
        chain_id: chain_id.to_owned(),
        tx_hash: tx_hash.to_vec(),
    };
    RawMessage::new(MessageType::Query, query.encode_to_vec())
}

/// Builds the block-by-number lookup envelope.
pub fn build_block_query_msg(chain_id: &str, number: u64) -> RawMessage {
    let query = BlockQuery {
        chain_id: chain_id.to_owned(),
        number,
    };
    RawMessage::new(MessageType::Query, query.encode_to_vec())
}

/// Builds the latest-chain-state lookup envelope.
pub fn build_chain_state_query_msg(chain_id: &str) -> RawMessage {
    let query = ChainStateQuery {
        chain_id: chain_id.to_owned(),
    };
    RawMessage::new(MessageType::Query, query.encode_to_vec())
}

/// An endorsed transaction ready for consensus submission.
///
/// The hash is a pure function of the *ordered* endorsement responses.
/// Callers must hand responses over in collection order; reordering or
/// deduplicating the same set changes the hash.
#[derive(Clone, Debug, PartialEq)]
pub struct TxBundle {
    /// Transaction hash derived from the endorsement responses.
    pub hash: [u8; 32],
    /// Wire bundle bound for the consensus node.
    pub msg: RawMessage,
}

impl TxBundle {
    /// Assembles the transaction bundle from the ordered endorsement
    /// responses of one invocation.
    pub fn assemble(responses: &[RawMessage]) -> Result<Self> {
        if responses.is_empty() {
            return Err(WireError::EmptyEndorsements);
        }

        let mut hasher = Sha256::new();
        let mut approvals = Vec::with_capacity(responses.len());
        let mut payload = Vec::new();
        for raw in responses {
            hasher.update(&raw.payload);
            let response = Response::decode(raw.payload.as_slice())?;
            let endorsement = Endorsement::decode(response.payload.as_slice())?;
            // every endorser returns the same produced payload; keep the first
            if payload.is_empty() {
                payload = endorsement.tx_payload;
            }
            if let Some(approval) = endorsement.approval {
                approvals.push(approval);
            }
        }
        let hash: [u8; 32] = hasher.finalize().into();

        let tx = Tx {
            hash: hash.to_vec(),
            full: Some(Transaction { approvals, payload }),
        };
        Ok(Self {
            hash,
            msg: RawMessage::new(MessageType::Transaction, tx.encode_to_vec()),
        })
    }

    /// Hex form of the bundle hash; the transaction id seen by callers.
    pub fn tx_id(&self) -> String {
        hex::encode(self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::{Approval, TxPayload};

    fn endorsement_response(org: &str, payload: &[u8]) -> RawMessage {
        let endorsement = Endorsement {
            tx_payload: payload.to_vec(),
            approval: Some(Approval {
                identity: Vec::new(),
                sign: vec![0xAA],
                org_name: org.to_owned(),
            }),
        };
        RawMessage::new(
            MessageType::Direct,
            Response::success(endorsement.encode_to_vec()).encode_to_vec(),
        )
    }

    #[test]
    fn assemble_rejects_empty_input() {
        assert!(matches!(
            TxBundle::assemble(&[]),
            Err(WireError::EmptyEndorsements)
        ));
    }

    #[test]
    fn assemble_is_deterministic_for_identical_ordered_input() {
        let payload = TxPayload::default().encode_to_vec();
        let responses = vec![
            endorsement_response("org1", &payload),
            endorsement_response("org2", &payload),
        ];
        let a = TxBundle::assemble(&responses).unwrap();
        let b = TxBundle::assemble(&responses).unwrap();
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.tx_id(), b.tx_id());
        assert_eq!(a.tx_id().len(), 64);
        assert!(a.tx_id().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn assemble_is_order_sensitive() {
        let payload = TxPayload::default().encode_to_vec();
        let first = endorsement_response("org1", &payload);
        let second = endorsement_response("org2", &payload);
        let forward = TxBundle::assemble(&[first.clone(), second.clone()]).unwrap();
        let reversed = TxBundle::assemble(&[second, first]).unwrap();
        assert_ne!(forward.hash, reversed.hash);
    }

    #[test]
    fn assemble_collects_every_approval_in_order() {
        let payload = TxPayload::default().encode_to_vec();
        let responses = vec![
            endorsement_response("org1", &payload),
            endorsement_response("org2", &payload),
        ];
        let bundle = TxBundle::assemble(&responses).unwrap();
        let tx = Tx::decode(bundle.msg.payload.as_slice()).unwrap();
        let orgs: Vec<_> = tx
            .full
            .unwrap()
            .approvals
            .iter()
            .map(|a| a.org_name.clone())
            .collect();
        assert_eq!(orgs, vec!["org1", "org2"]);
    }

    #[test]
    fn invoke_msg_round_trips_its_invocation() {
        let args = vec!["r1".to_owned(), "{}".to_owned()];
        let msg = build_invoke_msg("default", "hrchain", "insertResume", &args);
        assert_eq!(msg.r#type(), MessageType::Direct);
        let invocation = Invocation::decode(msg.payload.as_slice()).unwrap();
        assert_eq!(invocation.func_name, "insertResume");
        assert_eq!(invocation.args, args);
    }
}
