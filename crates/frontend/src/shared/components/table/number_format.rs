//! Number formatting for table cells (Indonesian conventions: `.` groups thousands, `,` decimals).

/// Groups thousands with `.` and writes `decimals` digits after a `,`.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Whole number with thousands separators.
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Rupiah amount without cents: `Rp 1.250.000`.
pub fn format_rupiah(value: f64) -> String {
    format!("Rp {}", format_number_int(value))
}

/// Percentage with up to two decimals, trailing zeros dropped: `12,5%`.
pub fn format_percent(value: f64) -> String {
    let text = format_number_with_decimals(value, 2);
    let text = text.trim_end_matches('0').trim_end_matches(',');
    format!("{}%", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1.234.567");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_number_with_decimals(-0.001, 0), "0");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(1250000.0), "Rp 1.250.000");
        assert_eq!(format_rupiah(0.0), "Rp 0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.5), "12,5%");
        assert_eq!(format_percent(10.0), "10%");
        assert_eq!(format_percent(7.25), "7,25%");
    }
}
