//! Pure accessors over committed blocks and transactions.
//!
//! Nothing here performs I/O; every function takes an already-fetched
//! entity and peels the nested envelopes. The one subtlety is
//! [`key_values`]: `None` and `Some(empty)` are different answers and both
//! are correct for different block kinds.

use base64::{engine::general_purpose, Engine as _};
use prost::Message as _;

use crate::block::{Block, BlockBody};
use crate::error::{Result, WireError};
use crate::identity;
use crate::transaction::{CommonTxData, ContractInvocation, StateKeyValue, Tx, TxHeader, TxPayload};

/// Block number, counted from 0.
pub fn block_number(block: &Block) -> u64 {
    block.header.as_ref().map(|h| h.number).unwrap_or_default()
}

pub fn block_timestamp(block: &Block) -> i64 {
    block
        .header
        .as_ref()
        .map(|h| h.timestamp)
        .unwrap_or_default()
}

/// Body hash in base64, the form used for display and logging.
pub fn block_body_hash(block: &Block) -> String {
    let hash = block
        .header
        .as_ref()
        .map(|h| h.body_hash.as_slice())
        .unwrap_or_default();
    general_purpose::STANDARD.encode(hash)
}

/// All transactions of a block, in commit order.
pub fn block_transactions(block: &Block) -> Result<Vec<Tx>> {
    let body = BlockBody::decode(block.body.as_slice())?;
    Ok(body.tx_list)
}

/// Hex transaction ids of every transaction in a block.
pub fn block_tx_ids(block: &Block) -> Result<Vec<String>> {
    Ok(block_transactions(block)?.iter().map(tx_id).collect())
}

/// Lowercase hex transaction id.
pub fn tx_id(tx: &Tx) -> String {
    hex::encode(&tx.hash)
}

pub fn tx_timestamp(tx: &Tx) -> Result<i64> {
    Ok(tx_header(tx)?.timestamp)
}

/// Name of the contract a transaction invoked, or `None` for blocks that
/// carry no contract payload.
pub fn contract_name(tx: &Tx) -> Result<Option<String>> {
    let Some(data) = common_tx_data(tx)? else {
        return Ok(None);
    };
    let invocation = ContractInvocation::decode(data.contract_invocation.as_slice())?;
    Ok(Some(invocation.contract_name))
}

/// State writes recorded by a transaction.
///
/// Returns `None` when the transaction carries no contract payload at all
/// (genesis or contract-voting block) and `Some(empty)` when a contract
/// payload exists but wrote nothing. Callers rely on the distinction.
pub fn key_values(tx: &Tx) -> Result<Option<Vec<StateKeyValue>>> {
    let Some(data) = common_tx_data(tx)? else {
        return Ok(None);
    };
    let mut out = Vec::new();
    for updates in &data.state_updates {
        let Some(kv) = &updates.kv_updates else {
            continue;
        };
        for update in &kv.updates {
            out.push(StateKeyValue {
                namespace: updates.namespace.clone(),
                key: update.key.clone(),
                value: update.value.clone(),
            });
        }
    }
    Ok(Some(out))
}

/// Organizations that endorsed a transaction, in approval order.
///
/// An explicit `org_name` on the approval wins; only blank ones fall back
/// to parsing the identity certificate.
pub fn endorsing_orgs(tx: &Tx) -> Result<Vec<String>> {
    let full = tx.full.clone().unwrap_or_default();
    let mut orgs = Vec::with_capacity(full.approvals.len());
    for approval in &full.approvals {
        if !approval.org_name.is_empty() {
            orgs.push(approval.org_name.clone());
            continue;
        }
        orgs.push(identity::organization_from_cert(&approval.identity)?);
    }
    Ok(orgs)
}

/// Organization that created a transaction: the explicit creator when the
/// header names one, otherwise the first endorsing organization.
pub fn creator_org(tx: &Tx) -> Result<String> {
    let header = tx_header(tx)?;
    if let Some(creator) = header.creator {
        return Ok(creator.org);
    }
    Ok(endorsing_orgs(tx)?.into_iter().next().unwrap_or_default())
}

fn tx_header(tx: &Tx) -> Result<TxHeader> {
    Ok(tx_payload(tx)?.header.unwrap_or_default())
}

fn tx_payload(tx: &Tx) -> Result<TxPayload> {
    let full = tx.full.clone().unwrap_or_default();
    Ok(TxPayload::decode(full.payload.as_slice())?)
}

fn common_tx_data(tx: &Tx) -> Result<Option<CommonTxData>> {
    let payload = tx_payload(tx)?;
    if payload.data.is_empty() {
        return Ok(None);
    }
    match CommonTxData::decode(payload.data.as_slice()) {
        Ok(data) => Ok(Some(data)),
        Err(err) => {
            // genesis and contract-voting blocks put non-contract bytes here
            tracing::error!(%err, "transaction carries no contract payload");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockHeader;
    use crate::message::Response;
    use crate::transaction::{Approval, Creator, KeyValue, KvUpdates, StateUpdates, Transaction};

    fn contract_tx(writes: Vec<KeyValue>, creator: Option<Creator>) -> Tx {
        let invocation = ContractInvocation {
            contract_name: "hrchain".to_owned(),
            func_name: "insertResume".to_owned(),
            args: vec!["r1".to_owned()],
        };
        let state_updates = vec![StateUpdates {
            namespace: "hrchain".to_owned(),
            kv_updates: Some(KvUpdates { updates: writes }),
        }];
        let data = CommonTxData {
            contract_invocation: invocation.encode_to_vec(),
            response: Some(Response::success(b"ok".to_vec())),
            state_updates,
        };
        let payload = TxPayload {
            header: Some(TxHeader {
                chain_id: "default".to_owned(),
                timestamp: 1_699_000_000,
                creator,
            }),
            data: data.encode_to_vec(),
        };
        Tx {
            hash: vec![0x1F; 32],
            full: Some(Transaction {
                approvals: vec![Approval {
                    identity: Vec::new(),
                    sign: vec![0xAB],
                    org_name: "org1".to_owned(),
                }],
                payload: payload.encode_to_vec(),
            }),
        }
    }

    fn genesis_tx() -> Tx {
        let payload = TxPayload {
            header: Some(TxHeader {
                chain_id: "default".to_owned(),
                timestamp: 0,
                creator: None,
            }),
            data: Vec::new(),
        };
        Tx {
            hash: vec![0x00; 32],
            full: Some(Transaction {
                approvals: Vec::new(),
                payload: payload.encode_to_vec(),
            }),
        }
    }

    #[test]
    fn key_values_distinguishes_absent_from_empty() {
        assert_eq!(key_values(&genesis_tx()).unwrap(), None);

        // voting blocks carry bytes that are not a CommonTxData
        let mut voting = genesis_tx();
        let mut payload = TxPayload::decode(
            voting.full.as_ref().unwrap().payload.as_slice(),
        )
        .unwrap();
        payload.data = vec![0xFF, 0xFF, 0xFF];
        voting.full.as_mut().unwrap().payload = payload.encode_to_vec();
        assert_eq!(key_values(&voting).unwrap(), None);

        let no_writes = contract_tx(Vec::new(), None);
        assert_eq!(key_values(&no_writes).unwrap(), Some(Vec::new()));

        let one_write = contract_tx(
            vec![KeyValue {
                key: "resume:r1".to_owned(),
                value: b"{}".to_vec(),
            }],
            None,
        );
        let kvs = key_values(&one_write).unwrap().unwrap();
        assert_eq!(kvs.len(), 1);
        assert_eq!(kvs[0].namespace, "hrchain");
        assert_eq!(kvs[0].key, "resume:r1");
    }

    #[test]
    fn explicit_org_name_short_circuits_certificate_parsing() {
        let mut tx = contract_tx(Vec::new(), None);
        // garbage identity bytes must never be touched when org_name is set
        tx.full.as_mut().unwrap().approvals[0].identity = vec![0xDE, 0xAD, 0xBE, 0xEF];
        assert_eq!(endorsing_orgs(&tx).unwrap(), vec!["org1".to_owned()]);
    }

    #[test]
    fn creator_org_prefers_the_header_creator() {
        let tx = contract_tx(
            Vec::new(),
            Some(Creator {
                org: "creator-org".to_owned(),
            }),
        );
        assert_eq!(creator_org(&tx).unwrap(), "creator-org");
    }

    #[test]
    fn creator_org_falls_back_to_first_endorser() {
        let tx = contract_tx(Vec::new(), None);
        assert_eq!(creator_org(&tx).unwrap(), "org1");
    }

    #[test]
    fn contract_name_is_none_without_contract_payload() {
        assert_eq!(contract_name(&genesis_tx()).unwrap(), None);
        let tx = contract_tx(Vec::new(), None);
        assert_eq!(contract_name(&tx).unwrap(), Some("hrchain".to_owned()));
    }

    #[test]
    fn block_round_trips_header_fields_and_transactions() {
        let tx = contract_tx(Vec::new(), None);
        let body = BlockBody {
            tx_list: vec![tx.clone()],
        };
        let block = Block {
            header: Some(BlockHeader {
                number: 42,
                timestamp: 1_699_000_123,
                body_hash: vec![0x0D; 32],
            }),
            body: body.encode_to_vec(),
        };

        let decoded = Block::decode(block.encode_to_vec().as_slice()).unwrap();
        assert_eq!(block_number(&decoded), 42);
        assert_eq!(block_timestamp(&decoded), 1_699_000_123);
        assert_eq!(
            block_body_hash(&decoded),
            general_purpose::STANDARD.encode([0x0D; 32])
        );
        let txs = block_transactions(&decoded).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(block_tx_ids(&decoded).unwrap(), vec![tx_id(&tx)]);
        assert_eq!(tx_id(&txs[0]), hex::encode([0x1F; 32]));
    }
}
