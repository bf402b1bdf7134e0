use crate::domain::common::RecordId;
use serde::{Deserialize, Serialize};

/// Body of every bulk pipeline action (`POST /pencetakan`, `/packing`, `/pengiriman`, `/proses`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOrdersRequest {
    #[serde(rename = "pesanan_ids")]
    pub order_ids: Vec<RecordId>,
}

impl BulkOrdersRequest {
    /// Ids are sent sorted and without duplicates.
    pub fn new(ids: impl IntoIterator<Item = RecordId>) -> Self {
        let mut order_ids: Vec<RecordId> = ids.into_iter().collect();
        order_ids.sort_unstable();
        order_ids.dedup();
        Self { order_ids }
    }

    pub fn is_empty(&self) -> bool {
        self.order_ids.is_empty()
    }
}

/// Optional summary a bulk pipeline action may return.
///
/// Any 2xx answer means the action went through; the body only refines the toast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkResult {
    #[serde(default)]
    pub processed: Option<usize>,
    #[serde(default)]
    pub skipped: Option<usize>,
    #[serde(default)]
    pub message: Option<String>,
}

impl BulkResult {
    /// Reads whatever summary the response body carries. Bodies of another
    /// shape (empty, arrays of created records) yield an empty summary.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_dedups_and_uses_wire_name() {
        let req = BulkOrdersRequest::new(vec![5, 3, 5, 1]);
        assert_eq!(req.order_ids, vec![1, 3, 5]);
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"pesanan_ids":[1,3,5]}"#
        );
    }

    #[test]
    fn test_empty_request() {
        assert!(BulkOrdersRequest::new(Vec::new()).is_empty());
        assert!(!BulkOrdersRequest::new(vec![2]).is_empty());
    }

    #[test]
    fn test_result_defaults_missing_fields() {
        let r = BulkResult::from_body(r#"{"processed": 4}"#);
        assert_eq!(r.processed, Some(4));
        assert_eq!(r.skipped, None);
        assert!(r.message.is_none());
    }

    #[test]
    fn test_result_tolerates_other_bodies() {
        assert_eq!(BulkResult::from_body(""), BulkResult::default());
        assert_eq!(BulkResult::from_body("{}"), BulkResult::default());
        assert_eq!(BulkResult::from_body(r#"[{"id": 1}, {"id": 2}]"#), BulkResult::default());
        assert_eq!(
            BulkResult::from_body(r#"{"message": "3 label dibuat"}"#).message.as_deref(),
            Some("3 label dibuat")
        );
    }
}
