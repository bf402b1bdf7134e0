use crate::domain::common::{empty_as_none, Record, RecordId};
use crate::enums::stock_movement::StockMovement;
use crate::shared::validation::{optional_length, require_range};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/transaksi-stok";

/// Stock movement of a product in a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockTransaction {
    pub id: RecordId,
    #[serde(rename = "produk_id")]
    pub product_id: RecordId,
    #[serde(default)]
    pub nama_produk: Option<String>,
    #[serde(rename = "gudang_id")]
    pub warehouse_id: RecordId,
    #[serde(default)]
    pub nama_gudang: Option<String>,
    #[serde(rename = "jenis")]
    pub movement: StockMovement,
    #[serde(rename = "jumlah")]
    pub quantity: i64,
    #[serde(rename = "tanggal")]
    pub date: NaiveDate,
    #[serde(rename = "keterangan", default, deserialize_with = "empty_as_none")]
    pub note: Option<String>,
}

impl StockTransaction {
    /// Quantity with the sign applied to the stock level.
    pub fn signed_quantity(&self) -> i64 {
        match self.movement {
            StockMovement::Masuk => self.quantity,
            StockMovement::Keluar => -self.quantity,
            StockMovement::Penyesuaian => self.quantity,
        }
    }
}

impl Record for StockTransaction {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        format!(
            "{} {} {}",
            self.movement.label(),
            self.quantity,
            self.nama_produk.as_deref().unwrap_or("")
        )
        .trim_end()
        .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockTransactionDto {
    #[serde(rename = "produk_id", default)]
    pub product_id: Option<RecordId>,
    #[serde(rename = "gudang_id", default)]
    pub warehouse_id: Option<RecordId>,
    #[serde(rename = "jenis")]
    pub movement: StockMovement,
    #[serde(rename = "jumlah", default)]
    pub quantity: i64,
    #[serde(rename = "tanggal", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "keterangan", default, deserialize_with = "empty_as_none")]
    pub note: Option<String>,
}

impl Default for StockTransactionDto {
    fn default() -> Self {
        Self {
            product_id: None,
            warehouse_id: None,
            movement: StockMovement::Masuk,
            quantity: 0,
            date: None,
            note: None,
        }
    }
}

impl StockTransactionDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.product_id.is_none() {
            return Err("Produk wajib dipilih".into());
        }
        if self.warehouse_id.is_none() {
            return Err("Gudang wajib dipilih".into());
        }
        if self.date.is_none() {
            return Err("Tanggal wajib diisi".into());
        }
        if self.movement.allows_negative() {
            if self.quantity == 0 {
                return Err("Jumlah penyesuaian tidak boleh 0".into());
            }
        } else {
            require_range("Jumlah", self.quantity, 1, 1_000_000)?;
        }
        optional_length("Keterangan", self.note.as_deref(), 300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(movement: StockMovement, quantity: i64) -> StockTransactionDto {
        StockTransactionDto {
            product_id: Some(1),
            warehouse_id: Some(1),
            movement,
            quantity,
            date: NaiveDate::from_ymd_opt(2024, 3, 1),
            note: None,
        }
    }

    #[test]
    fn test_quantity_rules_by_movement() {
        assert!(dto(StockMovement::Masuk, 10).validate().is_ok());
        assert!(dto(StockMovement::Keluar, -3).validate().is_err());
        assert!(dto(StockMovement::Penyesuaian, -3).validate().is_ok());
        assert!(dto(StockMovement::Penyesuaian, 0).validate().is_err());
    }

    #[test]
    fn test_signed_quantity() {
        let tx: StockTransaction = serde_json::from_str(
            r#"{"id": 1, "produk_id": 2, "gudang_id": 3, "jenis": "keluar", "jumlah": 4, "tanggal": "2024-03-01"}"#,
        )
        .unwrap();
        assert_eq!(tx.signed_quantity(), -4);
    }
}
