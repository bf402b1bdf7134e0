use crate::domain::common::{Record, RecordId};
use crate::shared::validation::{require_length, require_phone};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/pembeli";

/// Buyer (pembeli) the order is shipped to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RecordId,
    #[serde(rename = "nama_pembeli")]
    pub name: String,
    #[serde(rename = "no_hp", default)]
    pub phone: String,
    #[serde(rename = "alamat", default)]
    pub address: String,
}

impl Record for Customer {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    #[serde(rename = "nama_pembeli", default)]
    pub name: String,
    #[serde(rename = "no_hp", default)]
    pub phone: String,
    #[serde(rename = "alamat", default)]
    pub address: String,
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), String> {
        require_length("Nama pembeli", &self.name, 2, 150)?;
        require_phone("No HP", &self.phone)?;
        require_length("Alamat", &self.address, 5, 500)
    }
}
