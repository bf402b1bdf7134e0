use crate::domain::common::{empty_as_none, Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/pengiriman";

/// Hand-over of an order to the courier (pengiriman).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRecord {
    pub id: RecordId,
    #[serde(rename = "pesanan_id")]
    pub order_id: RecordId,
    #[serde(rename = "no_pesanan")]
    pub order_number: String,
    #[serde(rename = "no_resi", default, deserialize_with = "empty_as_none")]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub nama_jasa: Option<String>,
    #[serde(rename = "dikirim_oleh", default)]
    pub operator: String,
    #[serde(rename = "waktu")]
    pub at: DateTime<Utc>,
}

impl Record for ShippingRecord {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        match &self.tracking_number {
            Some(resi) => format!("{} / {}", self.order_number, resi),
            None => self.order_number.clone(),
        }
    }
}
