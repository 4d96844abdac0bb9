//! Point-transfer audit record facade.
//!
//! Records are keyed `tx_record:<transactionHistoryId>` and stored as one
//! JSON-text argument. Inserts are fire-and-forget: the audit trail favors
//! write latency over synchronous confirmation.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::contract::ContractService;
use crate::error::{ClientError, ErrorCode, ServiceError};
use crate::funcs::{ContractKey, TxRecordFunc};

pub struct TxRecordApi {
    service: Arc<ContractService>,
}

impl TxRecordApi {
    pub fn new(service: Arc<ContractService>) -> Self {
        Self { service }
    }

    /// Writes an audit record. Returns the tx id without waiting for
    /// confirmation.
    pub async fn insert_tx_record<T: Serialize>(
        &self,
        record_id: &str,
        record: &T,
    ) -> Result<String, ServiceError> {
        let key = ContractKey::TxRecord.key(record_id);
        let json = serde_json::to_string(record).map_err(|err| {
            ServiceError::new(
                ErrorCode::TxRecordInsert,
                ClientError::DataFormat(err.to_string()),
            )
        })?;
        self.service
            .send(&TxRecordFunc::Insert, &[key, json])
            .await
            .map_err(|err| ServiceError::new(ErrorCode::TxRecordInsert, err))
    }

    /// Reads an audit record back; `None` when nothing is stored under
    /// the id.
    pub async fn query_tx_record<T: DeserializeOwned>(
        &self,
        record_id: &str,
    ) -> Result<Option<T>, ServiceError> {
        let key = ContractKey::TxRecord.key(record_id);
        let value = self
            .service
            .query(&TxRecordFunc::Query, &[key])
            .await
            .map_err(|err| ServiceError::new(ErrorCode::TxRecordQuery, err))?;
        match value {
            None => Ok(None),
            Some(json) => serde_json::from_str(&json).map(Some).map_err(|err| {
                ServiceError::new(
                    ErrorCode::TxRecordQuery,
                    ClientError::DataFormat(err.to_string()),
                )
            }),
        }
    }
}
