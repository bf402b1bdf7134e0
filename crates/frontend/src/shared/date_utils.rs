/// Date and time display helpers.
///
/// The backend sends UTC timestamps; the dashboard shows them in the browser's
/// local time as `DD/MM/YYYY HH:MM`.
use chrono::{DateTime, Local, NaiveDate, Utc};

pub fn format_datetime(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Value for `<input type="date">`.
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parses `<input type="date">` output; empty or invalid input yields `None`.
pub fn from_input_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Short relative time for the recent-orders strip.
pub fn format_relative(at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = (*now - *at).num_seconds().max(0);
    match secs {
        0..=59 => "baru saja".to_string(),
        60..=3599 => format!("{} menit lalu", secs / 60),
        3600..=86_399 => format!("{} jam lalu", secs / 3600),
        _ => format!("{} hari lalu", secs / 86_400),
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(&d), "05/03/2024");
    }

    #[test]
    fn test_input_value_roundtrip() {
        let d = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(to_input_value(Some(d)), "2024-12-31");
        assert_eq!(from_input_value("2024-12-31"), Some(d));
        assert_eq!(from_input_value(""), None);
        assert_eq!(from_input_value("31/12/2024"), None);
        assert_eq!(to_input_value(None), "");
    }

    #[test]
    fn test_format_relative() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let ago = |secs: i64| now - chrono::Duration::seconds(secs);
        assert_eq!(format_relative(&ago(10), &now), "baru saja");
        assert_eq!(format_relative(&ago(180), &now), "3 menit lalu");
        assert_eq!(format_relative(&ago(7200), &now), "2 jam lalu");
        assert_eq!(format_relative(&ago(3 * 86_400), &now), "3 hari lalu");
        assert_eq!(format_relative(&(now + chrono::Duration::seconds(5)), &now), "baru saja");
    }
}
