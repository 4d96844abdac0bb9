//! Wire-level data layer for the ledgerlink contract client.
//!
//! Everything in this crate is pure: protobuf envelopes, deterministic
//! transaction assembly, and decoding of committed blocks and transactions.
//! Network I/O lives in `ledgerlink-client`.
//!
//! ## Components
//!
//! - **message**: raw message envelopes, invocation and query builders,
//!   transaction bundle assembly
//! - **transaction**: transaction entities as they appear on the ledger
//! - **block**: block entities and event payloads
//! - **decode**: pure accessors over committed blocks and transactions
//! - **identity**: X.509 subject organization extraction

pub mod block;
pub mod decode;
pub mod error;
pub mod identity;
pub mod message;
pub mod transaction;

pub use block::{Block, BlockBody, BlockHeader, BlockResult, LatestChainState};
pub use error::{Result, WireError};
pub use message::{Invocation, MessageType, RawMessage, Response, Status, TxBundle};
pub use transaction::{
    Approval, CommonTxData, ContractInvocation, Creator, Endorsement, KeyValue, KvUpdates,
    StateKeyValue, StateUpdates, Transaction, Tx, TxHeader, TxPayload, TxResult, TxStatus,
};
