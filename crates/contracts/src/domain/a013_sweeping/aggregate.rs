use crate::domain::common::{empty_as_none, Record, RecordId};
use crate::enums::order_status::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/proses";

/// Sweeping (reconciliation) record: one order's status moved outside the normal flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepingRecord {
    pub id: RecordId,
    #[serde(rename = "pesanan_id")]
    pub order_id: RecordId,
    #[serde(rename = "no_pesanan")]
    pub order_number: String,
    #[serde(rename = "status_awal")]
    pub status_before: OrderStatus,
    #[serde(rename = "status_akhir")]
    pub status_after: OrderStatus,
    #[serde(rename = "diproses_oleh", default)]
    pub operator: String,
    #[serde(rename = "waktu")]
    pub at: DateTime<Utc>,
    #[serde(rename = "catatan", default, deserialize_with = "empty_as_none")]
    pub note: Option<String>,
}

impl SweepingRecord {
    /// Sweep moved the order backwards in the main flow (e.g. packed → printed).
    pub fn is_rollback(&self) -> bool {
        match (self.status_before.flow_index(), self.status_after.flow_index()) {
            (Some(before), Some(after)) => after < before,
            _ => false,
        }
    }
}

impl Record for SweepingRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!(
            "{}: {} → {}",
            self.order_number,
            self.status_before.label(),
            self.status_after.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rollback_detection() {
        let rec: SweepingRecord = serde_json::from_str(
            r#"{
                "id": 1, "pesanan_id": 9, "no_pesanan": "INV-9",
                "status_awal": "packed", "status_akhir": "printed",
                "waktu": "2024-05-01T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(rec.is_rollback());
        assert_eq!(rec.display_name(), "INV-9: Dipacking → Dicetak");
    }
}
