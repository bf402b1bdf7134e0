use crate::domain::common::{Record, RecordId};
use crate::shared::validation::require_length;
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/gudang";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: RecordId,
    #[serde(rename = "nama_gudang")]
    pub name: String,
    #[serde(rename = "alamat", default)]
    pub address: String,
}

impl Record for Warehouse {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarehouseDto {
    #[serde(rename = "nama_gudang", default)]
    pub name: String,
    #[serde(rename = "alamat", default)]
    pub address: String,
}

impl WarehouseDto {
    pub fn validate(&self) -> Result<(), String> {
        require_length("Nama gudang", &self.name, 2, 100)?;
        require_length("Alamat", &self.address, 5, 300)
    }
}
