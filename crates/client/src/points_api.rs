//! Legacy point balance facade.
//!
//! Retained for existing integrations; new code records transfers through
//! the tx-record family instead. Point keys follow the `point:<userId>`
//! convention.

#![allow(deprecated)]

use std::sync::Arc;

use ledgerlink_wire::TxStatus;

use crate::contract::ContractService;
use crate::error::{ClientError, ErrorCode, ServiceError};
use crate::funcs::{ContractKey, PointsFunc};

#[deprecated(note = "superseded by the tx-record family; retained for legacy integrations")]
pub struct PointsApi {
    service: Arc<ContractService>,
}

impl PointsApi {
    pub fn new(service: Arc<ContractService>) -> Self {
        Self { service }
    }

    /// Sets a user's balance and waits for confirmation.
    pub async fn set_integral(&self, user_id: &str, points: i64) -> Result<TxStatus, ServiceError> {
        let key = ContractKey::Points.key(user_id);
        let receipt = self
            .service
            .send_sync(&PointsFunc::Set, &[key, points.to_string()])
            .await
            .map_err(|err| ServiceError::new(ErrorCode::PointsSet, err))?;
        Ok(receipt.status)
    }

    /// Reads a user's balance.
    pub async fn query_integral(&self, user_id: &str) -> Result<i64, ServiceError> {
        let key = ContractKey::Points.key(user_id);
        let value = self
            .service
            .query(&PointsFunc::Query, &[key])
            .await
            .map_err(|err| ServiceError::new(ErrorCode::PointsQuery, err))?;
        let text = value.ok_or_else(|| {
            ServiceError::new(
                ErrorCode::PointsQuery,
                ClientError::DataFormat("no balance recorded".to_owned()),
            )
        })?;
        text.trim().parse().map_err(|_| {
            ServiceError::new(
                ErrorCode::PointsDataFormat,
                ClientError::DataFormat(format!("non-numeric point balance: {text:?}")),
            )
        })
    }

    /// Moves points between two users, fire-and-forget. Returns the tx id.
    pub async fn transfer_integral(
        &self,
        from_user_id: &str,
        to_user_id: &str,
        points: i64,
    ) -> Result<String, ServiceError> {
        let from_key = ContractKey::Points.key(from_user_id);
        let to_key = ContractKey::Points.key(to_user_id);
        self.service
            .send(&PointsFunc::Transfer, &[from_key, to_key, points.to_string()])
            .await
            .map_err(|err| ServiceError::new(ErrorCode::PointsTransfer, err))
    }
}
