use serde::{Deserialize, Deserializer};

/// Primary key type used by every backend table.
pub type RecordId = i64;

/// A row the dashboard can list, select and act on.
pub trait Record {
    fn record_id(&self) -> RecordId;

    /// Text shown in toasts and confirmation prompts
    fn display_name(&self) -> String;
}

/// Treats `""` as `None` for optional text columns.
///
/// Form inputs post empty strings for cleared fields; the backend stores NULL.
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        id: RecordId,
        #[serde(default, deserialize_with = "empty_as_none")]
        note: Option<String>,
    }

    #[test]
    fn test_empty_note_is_none() {
        let row: Row = serde_json::from_str(r#"{"id": 1, "note": "  "}"#).unwrap();
        assert_eq!((row.id, row.note), (1, None));
        let row: Row = serde_json::from_str(r#"{"id": 1, "note": "fragile"}"#).unwrap();
        assert_eq!(row.note.as_deref(), Some("fragile"));
    }
}
