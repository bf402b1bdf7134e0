use crate::domain::common::{empty_as_none, Record, RecordId};
use crate::shared::validation::{optional_length, require_length};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/brand";

/// Brand whose products are printed and fulfilled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: RecordId,
    #[serde(rename = "nama_brand")]
    pub name: String,
    #[serde(rename = "kode_brand")]
    pub code: String,
    #[serde(rename = "deskripsi", default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
}

impl Record for Brand {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Create/update payload for `POST /brand` and `PATCH /brand/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandDto {
    #[serde(rename = "nama_brand", default)]
    pub name: String,
    #[serde(rename = "kode_brand", default)]
    pub code: String,
    #[serde(rename = "deskripsi", default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
}

impl BrandDto {
    pub fn validate(&self) -> Result<(), String> {
        require_length("Nama brand", &self.name, 2, 100)?;
        require_length("Kode brand", &self.code, 2, 20)?;
        if self.code.trim().contains(char::is_whitespace) {
            return Err("Kode brand tidak boleh mengandung spasi".into());
        }
        optional_length("Deskripsi", self.description.as_deref(), 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_code_without_spaces() {
        let dto = BrandDto {
            name: "Kopi Kita".into(),
            code: "KK 01".into(),
            description: None,
        };
        assert_eq!(
            dto.validate().unwrap_err(),
            "Kode brand tidak boleh mengandung spasi"
        );
    }

    #[test]
    fn test_brand_wire_names() {
        let brand: Brand = serde_json::from_str(
            r#"{"id": 1, "nama_brand": "Kopi Kita", "kode_brand": "KK", "deskripsi": ""}"#,
        )
        .unwrap();
        assert_eq!(brand.display_name(), "Kopi Kita (KK)");
        assert_eq!(brand.description, None);
    }
}
