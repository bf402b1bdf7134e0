//! Extraction of a human-readable message from a backend error body.
//!
//! The API answers failures with one of:
//! - a JSON string: `"Stok tidak cukup"`
//! - an object: `{"error": "..."}` or `{"message": "..."}`
//! - an object whose `error` is itself an object with a `message`
//! - plain text (proxies, gateway errors)

use serde_json::Value;

/// Returns `None` when the body carries nothing worth showing.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => message_from_value(&value),
        // Not JSON: show the text unless it is an HTML error page
        Err(_) if trimmed.starts_with('<') => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Object(map) => {
            for key in ["error", "message", "detail"] {
                if let Some(inner) = map.get(key) {
                    if let Some(msg) = message_from_value(inner) {
                        return Some(msg);
                    }
                }
            }
            if let Some(Value::Array(errors)) = map.get("errors") {
                let parts: Vec<String> = errors.iter().filter_map(message_from_value).collect();
                if !parts.is_empty() {
                    return Some(parts.join("; "));
                }
            }
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_body() {
        assert_eq!(
            extract_error_message(r#""Stok tidak cukup""#).as_deref(),
            Some("Stok tidak cukup")
        );
    }

    #[test]
    fn test_object_with_error_field() {
        assert_eq!(
            extract_error_message(r#"{"error": "SKU sudah dipakai"}"#).as_deref(),
            Some("SKU sudah dipakai")
        );
        assert_eq!(
            extract_error_message(r#"{"message": "Tidak ditemukan"}"#).as_deref(),
            Some("Tidak ditemukan")
        );
    }

    #[test]
    fn test_nested_error_object() {
        let body = r#"{"error": {"code": 422, "message": "Tanggal tidak valid"}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Tanggal tidak valid")
        );
    }

    #[test]
    fn test_errors_array() {
        let body = r#"{"errors": ["nama wajib", {"message": "harga negatif"}]}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("nama wajib; harga negatif")
        );
    }

    #[test]
    fn test_plain_text_and_empty() {
        assert_eq!(
            extract_error_message("Bad Gateway").as_deref(),
            Some("Bad Gateway")
        );
        assert_eq!(extract_error_message("  "), None);
        assert_eq!(extract_error_message("<html><body>502</body></html>"), None);
        assert_eq!(extract_error_message(r#"{"status": 500}"#), None);
    }
}
