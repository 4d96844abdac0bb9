//! Transaction pipeline for a permissioned contract ledger.
//!
//! The crate drives named contract functions through endorsing and
//! consensus nodes and reads committed state back out:
//!
//! - **ContractService**: `send` / `send_sync` / `query` orchestration
//! - **ChainQuery**: transaction and block lookups against the query node
//! - **EventListener**: background watcher logging commit outcomes
//! - **ResumeApi / TxRecordApi / PointsApi**: domain facades over the
//!   contract function families
//!
//! Wire formats and payload decoding live in `ledgerlink-wire`.

pub mod config;
pub mod contract;
pub mod error;
pub mod funcs;
pub mod listener;
pub mod points_api;
pub mod poller;
pub mod query;
pub mod resume_api;
pub mod rpc;
pub mod transport;
pub mod tx_record_api;

pub use config::ChainConfig;
pub use contract::{ContractService, SendReceipt};
pub use error::{ClientError, ErrorCode, Result, ServiceError};
pub use funcs::{ContractFunc, ContractKey, ResumeFunc, TxRecordFunc};
pub use listener::{EventListener, RestartPolicy};
pub use poller::PollSchedule;
pub use query::ChainQuery;
pub use resume_api::ResumeApi;
pub use rpc::{EventStream, NodeRpc};
pub use transport::HttpNodeRpc;
pub use tx_record_api::TxRecordApi;

#[allow(deprecated)]
pub use funcs::PointsFunc;
#[allow(deprecated)]
pub use points_api::PointsApi;
