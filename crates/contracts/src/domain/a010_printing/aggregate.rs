use crate::domain::common::{Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/pencetakan";

/// Label printing record (pencetakan) created by the print bulk action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintingRecord {
    pub id: RecordId,
    #[serde(rename = "pesanan_id")]
    pub order_id: RecordId,
    #[serde(rename = "no_pesanan")]
    pub order_number: String,
    #[serde(rename = "dicetak_oleh", default)]
    pub operator: String,
    #[serde(rename = "waktu")]
    pub at: DateTime<Utc>,
}

impl Record for PrintingRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.order_number.clone()
    }
}
