use crate::domain::common::{Record, RecordId};
use crate::shared::validation::{require_length, require_range};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/produk";

/// Product (produk) of a brand, with the stock level maintained by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub brand_id: RecordId,
    #[serde(default)]
    pub nama_brand: Option<String>,
    pub sku: String,
    #[serde(rename = "nama_produk")]
    pub name: String,
    #[serde(rename = "harga")]
    pub price: f64,
    #[serde(rename = "stok", default)]
    pub stock: i64,
    #[serde(rename = "stok_minimum", default)]
    pub min_stock: i64,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

impl Record for Product {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.sku, self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub brand_id: Option<RecordId>,
    #[serde(default)]
    pub sku: String,
    #[serde(rename = "nama_produk", default)]
    pub name: String,
    #[serde(rename = "harga", default)]
    pub price: f64,
    #[serde(rename = "stok_minimum", default)]
    pub min_stock: i64,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.brand_id.is_none() {
            return Err("Brand wajib dipilih".into());
        }
        require_length("SKU", &self.sku, 3, 50)?;
        require_length("Nama produk", &self.name, 2, 200)?;
        require_range("Harga", self.price, 0.0, 1_000_000_000.0)?;
        require_range("Stok minimum", self.min_stock, 0, 1_000_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_price_rejected() {
        let dto = ProductDto {
            brand_id: Some(2),
            sku: "KK-001".into(),
            name: "Kaos hitam".into(),
            price: -5.0,
            min_stock: 0,
        };
        assert!(dto.validate().unwrap_err().starts_with("Harga"));
    }

    #[test]
    fn test_low_stock() {
        let p: Product = serde_json::from_str(
            r#"{"id": 3, "brand_id": 1, "sku": "A-1", "nama_produk": "Mug", "harga": 25000, "stok": 2, "stok_minimum": 5}"#,
        )
        .unwrap();
        assert!(p.is_low_stock());
        assert_eq!(p.display_name(), "A-1 - Mug");
    }
}
