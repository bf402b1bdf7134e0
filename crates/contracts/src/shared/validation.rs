//! Form-level validation primitives shared by all write DTOs.
//!
//! The backend remains the authority; these checks only stop obviously broken
//! forms before a request is sent. Messages are shown to the operator as-is.

use chrono::NaiveDate;

/// Trimmed length (in chars) must be within `min..=max`.
pub fn require_length(label: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len == 0 && min > 0 {
        return Err(format!("{} wajib diisi", label));
    }
    if len < min {
        return Err(format!("{} minimal {} karakter", label, min));
    }
    if len > max {
        return Err(format!("{} maksimal {} karakter", label, max));
    }
    Ok(())
}

/// Same as [`require_length`] but an empty/absent value is accepted.
pub fn optional_length(
    label: &str,
    value: Option<&str>,
    max: usize,
) -> Result<(), String> {
    match value {
        Some(v) if !v.trim().is_empty() => require_length(label, v, 0, max),
        _ => Ok(()),
    }
}

/// Inclusive numeric range check.
pub fn require_range<T>(label: &str, value: T, min: T, max: T) -> Result<(), String>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(format!("{} harus antara {} dan {}", label, min, max));
    }
    Ok(())
}

/// `to` must not be earlier than `from` when both are present.
pub fn require_date_order(
    from_label: &str,
    from: Option<NaiveDate>,
    to_label: &str,
    to: Option<NaiveDate>,
) -> Result<(), String> {
    if let (Some(from), Some(to)) = (from, to) {
        if to < from {
            return Err(format!(
                "{} tidak boleh sebelum {}",
                to_label, from_label
            ));
        }
    }
    Ok(())
}

/// Digits with an optional leading `+`, 8..=15 digits.
pub fn require_phone(label: &str, value: &str) -> Result<(), String> {
    let v = value.trim();
    let digits = v.strip_prefix('+').unwrap_or(v);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("{} hanya boleh berisi angka", label));
    }
    require_range(label, digits.len(), 8, 15)
        .map_err(|_| format!("{} harus 8 sampai 15 digit", label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        assert!(require_length("Nama", "Acme", 2, 10).is_ok());
        assert_eq!(
            require_length("Nama", "   ", 2, 10).unwrap_err(),
            "Nama wajib diisi"
        );
        assert_eq!(
            require_length("Kode", "A", 2, 10).unwrap_err(),
            "Kode minimal 2 karakter"
        );
        assert_eq!(
            require_length("Kode", "ABCDEFGHIJK", 2, 10).unwrap_err(),
            "Kode maksimal 10 karakter"
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert!(require_length("Nama", "ÄÖÜ", 3, 3).is_ok());
    }

    #[test]
    fn test_optional_length() {
        assert!(optional_length("Catatan", None, 5).is_ok());
        assert!(optional_length("Catatan", Some(""), 5).is_ok());
        assert!(optional_length("Catatan", Some("panjang sekali"), 5).is_err());
    }

    #[test]
    fn test_range() {
        assert!(require_range("Fee", 0.0, 0.0, 100.0).is_ok());
        assert!(require_range("Fee", 100.0, 0.0, 100.0).is_ok());
        assert_eq!(
            require_range("Fee", 100.5, 0.0, 100.0).unwrap_err(),
            "Fee harus antara 0 dan 100"
        );
        assert!(require_range("Stok", -1, 0, i64::MAX).is_err());
    }

    #[test]
    fn test_date_order() {
        let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
        assert!(require_date_order("Mulai", d("2024-01-01"), "Selesai", d("2024-01-01")).is_ok());
        assert!(require_date_order("Mulai", d("2024-01-01"), "Selesai", None).is_ok());
        assert_eq!(
            require_date_order("Mulai", d("2024-02-01"), "Selesai", d("2024-01-31")).unwrap_err(),
            "Selesai tidak boleh sebelum Mulai"
        );
    }

    #[test]
    fn test_phone() {
        assert!(require_phone("No HP", "081234567890").is_ok());
        assert!(require_phone("No HP", "+6281234567890").is_ok());
        assert!(require_phone("No HP", "0812-3456").is_err());
        assert!(require_phone("No HP", "1234").is_err());
    }
}
