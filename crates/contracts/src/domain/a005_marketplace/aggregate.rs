use crate::domain::common::{empty_as_none, Record, RecordId};
use crate::shared::validation::require_length;
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/marketplace";

/// Sales channel an order comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marketplace {
    pub id: RecordId,
    #[serde(rename = "nama_marketplace")]
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub url: Option<String>,
}

impl Record for Marketplace {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceDto {
    #[serde(rename = "nama_marketplace", default)]
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub url: Option<String>,
}

impl MarketplaceDto {
    pub fn validate(&self) -> Result<(), String> {
        require_length("Nama marketplace", &self.name, 2, 100)?;
        if let Some(url) = &self.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("URL harus diawali http:// atau https://".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_scheme() {
        let mut dto = MarketplaceDto {
            name: "Tokopedia".into(),
            url: Some("tokopedia.com".into()),
        };
        assert!(dto.validate().is_err());
        dto.url = Some("https://tokopedia.com".into());
        assert!(dto.validate().is_ok());
        dto.url = None;
        assert!(dto.validate().is_ok());
    }
}
