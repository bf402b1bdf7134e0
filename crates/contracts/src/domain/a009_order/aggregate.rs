use crate::domain::common::{empty_as_none, Record, RecordId};
use crate::enums::order_status::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/pesanan";

/// Line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "produk_id")]
    pub product_id: RecordId,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub nama_produk: Option<String>,
    #[serde(rename = "jumlah")]
    pub quantity: i64,
    #[serde(rename = "harga", default)]
    pub price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Order (pesanan) as listed by `GET /pesanan` and its filtered/search variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RecordId,
    #[serde(rename = "no_pesanan")]
    pub order_number: String,
    #[serde(default)]
    pub marketplace_id: Option<RecordId>,
    #[serde(default)]
    pub nama_marketplace: Option<String>,
    #[serde(rename = "pembeli_id", default)]
    pub customer_id: Option<RecordId>,
    #[serde(default)]
    pub nama_pembeli: Option<String>,
    #[serde(default)]
    pub brand_id: Option<RecordId>,
    #[serde(default)]
    pub nama_brand: Option<String>,
    #[serde(default)]
    pub jasa_pengiriman_id: Option<RecordId>,
    #[serde(default)]
    pub nama_jasa: Option<String>,
    #[serde(rename = "no_resi", default, deserialize_with = "empty_as_none")]
    pub tracking_number: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

impl Record for Order {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.order_number.clone()
    }
}

/// Body of `PATCH /pesanan/:id/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusPatch {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Order {
        serde_json::from_str(
            r#"{
                "id": 10,
                "no_pesanan": "INV/2024/0001",
                "nama_pembeli": "Budi",
                "no_resi": "JNE123",
                "status": "packed",
                "items": [
                    {"produk_id": 1, "sku": "KAOS-HTM", "jumlah": 2, "harga": 50000},
                    {"produk_id": 2, "sku": "MUG-01", "jumlah": 1, "harga": 30000}
                ],
                "created_at": "2024-05-01T08:00:00Z"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_totals() {
        let o = sample();
        assert_eq!(o.total(), 130000.0);
        assert_eq!(o.total_quantity(), 3);
    }

    #[test]
    fn test_status_patch_body() {
        let body = OrderStatusPatch {
            status: OrderStatus::Shipped,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"shipped"}"#);
    }
}
