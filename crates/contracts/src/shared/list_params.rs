//! Query parameters of list endpoints (`/pesanan/filter`, `/pesanan/search`, stage lists).

use crate::domain::common::RecordId;
use crate::enums::order_status::OrderStatus;
use crate::shared::validation::require_date_order;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured filter of a list screen.
///
/// Implementors serialize to the query string of the screen's filter endpoint.
pub trait ListFilter: Clone + Default + PartialEq + Serialize + Send + Sync + 'static {
    /// No criteria set: applying it is the same as listing everything.
    fn is_empty(&self) -> bool;

    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Free-text search, sent as `?q=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into() }
    }
}

/// Date-only filter used by the pipeline stage histories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeFilter {
    #[serde(rename = "tanggal_awal", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "tanggal_akhir", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

impl ListFilter for DateRangeFilter {
    fn is_empty(&self) -> bool {
        self.date_from.is_none() && self.date_to.is_none()
    }

    fn validate(&self) -> Result<(), String> {
        require_date_order("Tanggal awal", self.date_from, "Tanggal akhir", self.date_to)
    }
}

/// Filter of `GET /pesanan/filter` and `GET /pesanan/export-filter`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
    #[serde(rename = "tanggal_awal", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "tanggal_akhir", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jasa_pengiriman_id: Option<RecordId>,
}

impl ListFilter for OrderFilter {
    fn is_empty(&self) -> bool {
        *self == OrderFilter::default()
    }

    fn validate(&self) -> Result<(), String> {
        require_date_order("Tanggal awal", self.date_from, "Tanggal akhir", self.date_to)
    }
}

/// Filter of the reference (master data) screens: they only search, never filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoFilter {}

impl ListFilter for NoFilter {
    fn is_empty(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    }

    #[test]
    fn test_order_filter_emptiness() {
        assert!(OrderFilter::default().is_empty());
        let f = OrderFilter {
            status: Some(OrderStatus::Packed),
            ..Default::default()
        };
        assert!(!f.is_empty());
    }

    #[test]
    fn test_order_filter_rejects_inverted_range() {
        let f = OrderFilter {
            date_from: date("2024-05-10"),
            date_to: date("2024-05-01"),
            ..Default::default()
        };
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_order_filter_json_skips_unset() {
        let f = OrderFilter {
            date_from: date("2024-05-01"),
            brand_id: Some(3),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&f).unwrap(),
            r#"{"tanggal_awal":"2024-05-01","brand_id":3}"#
        );
    }
}
