use std::fmt;

use ledgerlink_wire::{Status, WireError};
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised by the submission and query pipeline
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client is misconfigured; raised before any network I/O
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A bounded node RPC did not complete in time
    #[error("rpc to node `{node}` timed out during {op}")]
    TransportTimeout { node: String, op: &'static str },

    /// The node transport failed outright
    #[error("transport failure on node `{node}`: {reason}")]
    Transport { node: String, reason: String },

    /// A node answered with a non-success status
    #[error("node returned status {status:?}: {info}")]
    RemoteStatus { status: Status, info: String },

    /// A wire payload failed to decode or re-encode
    #[error(transparent)]
    Wire(#[from] WireError),

    /// A decoded value failed a required type conversion
    #[error("unexpected value format: {0}")]
    DataFormat(String),

    /// Confirmation polling exhausted its deadline. The submission itself
    /// already succeeded; only the terminal status is unknown.
    #[error("transaction {tx_id} was submitted but not confirmed in time")]
    ConfirmationTimeout { tx_id: String },
}

/// Operation codes the domain facades use when wrapping pipeline errors,
/// so callers can tell which step of which operation failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    ResumeInsert,
    ResumeQuery,
    ResumeDataInvalid,
    ResumeDelete,
    TxRecordInsert,
    TxRecordQuery,
    PointsSet,
    PointsQuery,
    PointsDataFormat,
    PointsTransfer,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::ResumeInsert => "resume-insert",
            ErrorCode::ResumeQuery => "resume-query",
            ErrorCode::ResumeDataInvalid => "resume-data-invalid",
            ErrorCode::ResumeDelete => "resume-delete",
            ErrorCode::TxRecordInsert => "tx-record-insert",
            ErrorCode::TxRecordQuery => "tx-record-query",
            ErrorCode::PointsSet => "points-set",
            ErrorCode::PointsQuery => "points-query",
            ErrorCode::PointsDataFormat => "points-data-format",
            ErrorCode::PointsTransfer => "points-transfer",
        };
        f.write_str(name)
    }
}

/// A pipeline error wrapped with the facade operation it failed in
#[derive(Debug, Error)]
#[error("{code}: {source}")]
pub struct ServiceError {
    pub code: ErrorCode,
    #[source]
    pub source: ClientError,
}

impl ServiceError {
    pub fn new(code: ErrorCode, source: ClientError) -> Self {
        Self { code, source }
    }
}
