use crate::domain::common::{Record, RecordId};
use crate::shared::validation::require_length;
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/jasa-pengiriman";

/// Courier / shipping service (jasa pengiriman).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingService {
    pub id: RecordId,
    #[serde(rename = "nama_jasa")]
    pub name: String,
    #[serde(rename = "kode_jasa")]
    pub code: String,
}

impl Record for ShippingService {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingServiceDto {
    #[serde(rename = "nama_jasa", default)]
    pub name: String,
    #[serde(rename = "kode_jasa", default)]
    pub code: String,
}

impl ShippingServiceDto {
    pub fn validate(&self) -> Result<(), String> {
        require_length("Nama jasa", &self.name, 2, 100)?;
        require_length("Kode jasa", &self.code, 2, 10)
    }
}
