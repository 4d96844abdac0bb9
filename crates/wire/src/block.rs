//! Block entities and event payloads.
//!
//! Layout:
//!
//! ```text
//! Block {
//!   header { number, timestamp, body_hash }
//!   body -> BlockBody { tx_list [ Tx ] }
//! }
//! ```

use crate::transaction::{Tx, TxResult};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockHeader {
    /// Block number, counted from 0.
    #[prost(uint64, tag = "1")]
    pub number: u64,
    #[prost(int64, tag = "2")]
    pub timestamp: i64,
    #[prost(bytes = "vec", tag = "3")]
    pub body_hash: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Block {
    #[prost(message, optional, tag = "1")]
    pub header: Option<BlockHeader>,
    /// Encoded [`BlockBody`].
    #[prost(bytes = "vec", tag = "2")]
    pub body: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockBody {
    #[prost(message, repeated, tag = "1")]
    pub tx_list: Vec<Tx>,
}

/// Commit notification delivered on the per-chain event stream.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockResult {
    #[prost(message, repeated, tag = "1")]
    pub tx_results: Vec<TxResult>,
}

/// Latest chain state as reported by a query node.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LatestChainState {
    /// Chain height; the newest block number is `height - 1`.
    #[prost(uint64, tag = "1")]
    pub height: u64,
}
