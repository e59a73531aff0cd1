//! Transaction snapshot loading.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tallybook_core::RawTransaction;
use tallybook_shared::AppError;
use tallybook_shared::types::BusinessId;

/// A transaction snapshot as stored on disk.
///
/// Accepts either a bare array of transactions or an object carrying the
/// business id alongside them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SnapshotFile {
    /// `{ "businessId": ..., "transactions": [...] }`
    Wrapped {
        /// Business the snapshot belongs to.
        #[serde(rename = "businessId", default)]
        business_id: Option<BusinessId>,
        /// Transaction records.
        transactions: Vec<RawTransaction>,
    },
    /// `[...]`
    Bare(Vec<RawTransaction>),
}

impl SnapshotFile {
    /// Parses a snapshot from JSON text.
    ///
    /// Individual records never fail here; only a document that is not
    /// JSON, or not an array or object of records, is an error.
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        let snapshot = serde_json::from_str(json).map_err(|err| {
            AppError::Validation(format!(
                "Snapshot is not a transaction array or object: {err}"
            ))
        })?;
        Ok(snapshot)
    }

    /// Reads and parses a snapshot file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
                _ => AppError::Internal(err.to_string()),
            })
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        Self::parse(&json).with_context(|| format!("Failed to parse snapshot {}", path.display()))
    }

    /// Business id, if the snapshot names one.
    pub fn business_id(&self) -> Option<&BusinessId> {
        match self {
            Self::Wrapped { business_id, .. } => business_id.as_ref(),
            Self::Bare(_) => None,
        }
    }

    /// Transaction records.
    pub fn transactions(&self) -> &[RawTransaction] {
        match self {
            Self::Wrapped { transactions, .. } | Self::Bare(transactions) => transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let snapshot = SnapshotFile::parse(
            r#"[{"id":"1","date":"2026-03-01","type":"revenue","amount":100}]"#,
        )
        .unwrap();
        assert!(snapshot.business_id().is_none());
        assert_eq!(snapshot.transactions().len(), 1);
    }

    #[test]
    fn test_parse_wrapped_object() {
        let snapshot = SnapshotFile::parse(
            r#"{"businessId":"biz-9","transactions":[{"id":"1"},{"id":"2"}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.business_id().map(BusinessId::as_str), Some("biz-9"));
        assert_eq!(snapshot.transactions().len(), 2);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        let err = SnapshotFile::parse(r#""just a string""#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Validation(_))
        ));
        assert!(SnapshotFile::parse("{not json").is_err());
    }

    #[test]
    fn test_mistyped_record_does_not_fail_snapshot() {
        let snapshot = SnapshotFile::parse(
            r#"[
                {"id":"1","date":"2026-03-01","type":"revenue","amount":100},
                {"id":"2","date":20260301,"type":"revenue","amount":100},
                {"id":"3","date":"2026-03-01","type":"expense","amount":true},
                {"id":"4","date":"2026-03-01","type":"expense","amount":1e30}
            ]"#,
        )
        .unwrap();
        assert_eq!(snapshot.transactions().len(), 4);

        let snapshot = SnapshotFile::parse(
            r#"{"businessId":"biz-1","transactions":[{"id":"1","amount":false}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.business_id().map(BusinessId::as_str), Some("biz-1"));
        assert_eq!(snapshot.transactions().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SnapshotFile::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read snapshot"));
        let app = err.downcast_ref::<AppError>().unwrap();
        assert!(matches!(app, AppError::NotFound(_)));
        assert_eq!(app.exit_code(), 66);
    }
}
