use crate::domain::common::{Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/packing";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingRecord {
    pub id: RecordId,
    #[serde(rename = "pesanan_id")]
    pub order_id: RecordId,
    #[serde(rename = "no_pesanan")]
    pub order_number: String,
    #[serde(rename = "dipacking_oleh", default)]
    pub operator: String,
    #[serde(rename = "waktu")]
    pub at: DateTime<Utc>,
}

impl Record for PackingRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.order_number.clone()
    }
}
