use thiserror::Error;

/// Result type for wire-level operations
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors raised by the pure data layer
#[derive(Debug, Error)]
pub enum WireError {
    /// A protobuf payload failed to decode
    #[error("payload decode failed: {0}")]
    Decode(#[from] prost::DecodeError),

    /// An approval identity could not be parsed as an X.509 certificate
    #[error("certificate parse failed: {0}")]
    Certificate(String),

    /// Transaction assembly needs at least one endorsement response
    #[error("cannot assemble a transaction from zero endorsement responses")]
    EmptyEndorsements,

    /// A decoded value failed a required type conversion
    #[error("unexpected value format: {0}")]
    DataFormat(String),
}
