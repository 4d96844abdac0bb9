//! Resume contract facade.
//!
//! Resume records travel as a single JSON-text argument; the contract owns
//! the storage key layout, so only the resume id is passed alongside.

use std::sync::Arc;

use ledgerlink_wire::TxStatus;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::contract::ContractService;
use crate::error::{ClientError, ErrorCode, ServiceError};
use crate::funcs::ResumeFunc;

pub struct ResumeApi {
    service: Arc<ContractService>,
}

impl ResumeApi {
    pub fn new(service: Arc<ContractService>) -> Self {
        Self { service }
    }

    /// Writes a resume and waits for confirmation. Returns the tx id.
    pub async fn insert_resume<T: Serialize>(
        &self,
        resume_id: &str,
        resume: &T,
    ) -> Result<String, ServiceError> {
        let json = serde_json::to_string(resume).map_err(|err| {
            ServiceError::new(
                ErrorCode::ResumeDataInvalid,
                ClientError::DataFormat(err.to_string()),
            )
        })?;
        let receipt = self
            .service
            .send_sync(&ResumeFunc::Insert, &[resume_id.to_owned(), json])
            .await
            .map_err(|err| ServiceError::new(ErrorCode::ResumeInsert, err))?;
        Ok(receipt.tx_id)
    }

    /// Reads a resume back; `None` when nothing is stored under the id.
    pub async fn query_resume<T: DeserializeOwned>(
        &self,
        resume_id: &str,
    ) -> Result<Option<T>, ServiceError> {
        let value = self
            .service
            .query(&ResumeFunc::Query, &[resume_id.to_owned()])
            .await
            .map_err(|err| ServiceError::new(ErrorCode::ResumeQuery, err))?;
        match value {
            None => Ok(None),
            Some(json) => serde_json::from_str(&json).map(Some).map_err(|err| {
                ServiceError::new(
                    ErrorCode::ResumeDataInvalid,
                    ClientError::DataFormat(err.to_string()),
                )
            }),
        }
    }

    /// Deletes a resume and waits for confirmation. Returns the terminal
    /// status.
    pub async fn delete_resume(&self, resume_id: &str) -> Result<TxStatus, ServiceError> {
        let receipt = self
            .service
            .send_sync(&ResumeFunc::Delete, &[resume_id.to_owned()])
            .await
            .map_err(|err| ServiceError::new(ErrorCode::ResumeDelete, err))?;
        Ok(receipt.status)
    }
}
