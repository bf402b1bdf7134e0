use crate::domain::common::{empty_as_none, Record, RecordId};
use crate::shared::validation::{optional_length, require_date_order, require_length, require_range};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/kerjasama";

/// Cooperation contract (kerjasama) between the business and a brand's client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cooperation {
    pub id: RecordId,
    pub brand_id: RecordId,
    #[serde(default)]
    pub nama_brand: Option<String>,
    #[serde(rename = "nama_klien")]
    pub client_name: String,
    #[serde(rename = "tanggal_mulai")]
    pub start_date: NaiveDate,
    #[serde(rename = "tanggal_selesai", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "persentase_fee")]
    pub fee_percent: f64,
    #[serde(rename = "aktif", default)]
    pub active: bool,
    #[serde(rename = "catatan", default, deserialize_with = "empty_as_none")]
    pub note: Option<String>,
}

impl Cooperation {
    /// Active flag set and `today` within the contract period.
    pub fn is_running(&self, today: NaiveDate) -> bool {
        self.active
            && self.start_date <= today
            && self.end_date.map_or(true, |end| today <= end)
    }
}

impl Record for Cooperation {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.client_name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CooperationDto {
    #[serde(default)]
    pub brand_id: Option<RecordId>,
    #[serde(rename = "nama_klien", default)]
    pub client_name: String,
    #[serde(rename = "tanggal_mulai", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "tanggal_selesai", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "persentase_fee", default)]
    pub fee_percent: f64,
    #[serde(rename = "aktif", default)]
    pub active: bool,
    #[serde(rename = "catatan", default, deserialize_with = "empty_as_none")]
    pub note: Option<String>,
}

impl CooperationDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.brand_id.is_none() {
            return Err("Brand wajib dipilih".into());
        }
        require_length("Nama klien", &self.client_name, 2, 150)?;
        if self.start_date.is_none() {
            return Err("Tanggal mulai wajib diisi".into());
        }
        require_date_order(
            "Tanggal mulai",
            self.start_date,
            "Tanggal selesai",
            self.end_date,
        )?;
        require_range("Persentase fee", self.fee_percent, 0.0, 100.0)?;
        optional_length("Catatan", self.note.as_deref(), 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn valid_dto() -> CooperationDto {
        CooperationDto {
            brand_id: Some(1),
            client_name: "PT Maju".into(),
            start_date: Some(d("2024-01-01")),
            end_date: Some(d("2024-12-31")),
            fee_percent: 12.5,
            active: true,
            note: None,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_validate_end_before_start() {
        let dto = CooperationDto {
            end_date: Some(d("2023-12-31")),
            ..valid_dto()
        };
        assert_eq!(
            dto.validate().unwrap_err(),
            "Tanggal selesai tidak boleh sebelum Tanggal mulai"
        );
    }

    #[test]
    fn test_validate_fee_range() {
        let dto = CooperationDto {
            fee_percent: 120.0,
            ..valid_dto()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_is_running() {
        let coop = Cooperation {
            id: 1,
            brand_id: 1,
            nama_brand: None,
            client_name: "PT Maju".into(),
            start_date: d("2024-01-01"),
            end_date: None,
            fee_percent: 10.0,
            active: true,
            note: None,
        };
        assert!(coop.is_running(d("2030-01-01")));
        assert!(!coop.is_running(d("2023-06-01")));
    }
}
