//! Named contract entry points and storage key conventions.

/// A contract entry point with a stable wire name.
///
/// Wire names are canonical string constants the contract registered its
/// functions under; they are never derived from the Rust identifier.
pub trait ContractFunc {
    fn wire_name(&self) -> &'static str;
}

/// Resume contract family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResumeFunc {
    Insert,
    Query,
    Delete,
}

impl ContractFunc for ResumeFunc {
    fn wire_name(&self) -> &'static str {
        match self {
            ResumeFunc::Insert => "insertResume",
            ResumeFunc::Query => "queryResume",
            ResumeFunc::Delete => "deleteResume",
        }
    }
}

/// Point-transfer audit record family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxRecordFunc {
    Insert,
    Query,
}

impl ContractFunc for TxRecordFunc {
    fn wire_name(&self) -> &'static str {
        match self {
            TxRecordFunc::Insert => "insertTxRecord",
            TxRecordFunc::Query => "queryTxRecord",
        }
    }
}

/// Legacy point balance family, kept compilable for existing callers.
#[deprecated(note = "superseded by the tx-record family; retained for legacy integrations")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointsFunc {
    Set,
    Query,
    Transfer,
}

#[allow(deprecated)]
impl ContractFunc for PointsFunc {
    fn wire_name(&self) -> &'static str {
        match self {
            PointsFunc::Set => "setIntegral",
            PointsFunc::Query => "queryIntegral",
            PointsFunc::Transfer => "transferIntegral",
        }
    }
}

/// Storage key convention used by the contract: `<entity>:<id>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractKey {
    Resume,
    Points,
    TxRecord,
}

impl ContractKey {
    pub fn key(&self, id: &str) -> String {
        match self {
            ContractKey::Resume => format!("resume:{id}"),
            ContractKey::Points => format!("point:{id}"),
            ContractKey::TxRecord => format!("tx_record:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(deprecated)]
    fn wire_names_match_the_contract_registration() {
        assert_eq!(ResumeFunc::Insert.wire_name(), "insertResume");
        assert_eq!(ResumeFunc::Query.wire_name(), "queryResume");
        assert_eq!(ResumeFunc::Delete.wire_name(), "deleteResume");
        assert_eq!(TxRecordFunc::Insert.wire_name(), "insertTxRecord");
        assert_eq!(TxRecordFunc::Query.wire_name(), "queryTxRecord");
        assert_eq!(PointsFunc::Set.wire_name(), "setIntegral");
        assert_eq!(PointsFunc::Query.wire_name(), "queryIntegral");
        assert_eq!(PointsFunc::Transfer.wire_name(), "transferIntegral");
    }

    #[test]
    fn keys_follow_the_entity_id_convention() {
        assert_eq!(ContractKey::Resume.key("r1"), "resume:r1");
        assert_eq!(ContractKey::Points.key("u1"), "point:u1");
        assert_eq!(ContractKey::TxRecord.key("t1"), "tx_record:t1");
    }
}
