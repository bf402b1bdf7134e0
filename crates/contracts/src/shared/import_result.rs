use serde::{Deserialize, Serialize};

/// Per-row failure reported by an Excel import.
///
/// Older endpoints report bare strings, newer ones `{ "row": n, "message": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImportRowError {
    Detailed {
        #[serde(alias = "baris")]
        row: Option<usize>,
        #[serde(alias = "error", alias = "pesan")]
        message: String,
    },
    Text(String),
}

impl ImportRowError {
    pub fn describe(&self) -> String {
        match self {
            ImportRowError::Detailed {
                row: Some(row),
                message,
            } => format!("Baris {}: {}", row, message),
            ImportRowError::Detailed { row: None, message } => message.clone(),
            ImportRowError::Text(s) => s.clone(),
        }
    }
}

/// Response of `POST /<entity>/import`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    #[serde(default)]
    pub success_count: usize,
    #[serde(default)]
    pub failed_count: usize,
    #[serde(default)]
    pub errors: Vec<ImportRowError>,
}

/// How the UI should present an import result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Success,
    Partial,
    Failed,
    Empty,
}

impl ImportResult {
    pub fn outcome(&self) -> ImportOutcome {
        let failed = self.failed_count.max(self.errors.len());
        match (self.success_count, failed) {
            (0, 0) => ImportOutcome::Empty,
            (_, 0) => ImportOutcome::Success,
            (0, _) => ImportOutcome::Failed,
            _ => ImportOutcome::Partial,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} baris berhasil, {} baris gagal",
            self.success_count,
            self.failed_count.max(self.errors.len())
        )
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.errors.iter().map(ImportRowError::describe).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_mixed_error_shapes() {
        let body = r#"{
            "success_count": 8,
            "failed_count": 2,
            "errors": ["SKU kosong", {"row": 5, "message": "harga tidak valid"}]
        }"#;
        let r: ImportResult = serde_json::from_str(body).unwrap();
        assert_eq!(r.outcome(), ImportOutcome::Partial);
        assert_eq!(
            r.error_lines(),
            vec!["SKU kosong".to_string(), "Baris 5: harga tidak valid".to_string()]
        );
        assert_eq!(r.summary(), "8 baris berhasil, 2 baris gagal");
    }

    #[test]
    fn test_outcomes() {
        let ok = ImportResult {
            success_count: 3,
            ..Default::default()
        };
        assert_eq!(ok.outcome(), ImportOutcome::Success);

        let failed = ImportResult {
            failed_count: 1,
            ..Default::default()
        };
        assert_eq!(failed.outcome(), ImportOutcome::Failed);
        assert_eq!(ImportResult::default().outcome(), ImportOutcome::Empty);
    }

    #[test]
    fn test_errors_without_count_still_fail() {
        let r: ImportResult =
            serde_json::from_str(r#"{"success_count": 0, "errors": [{"baris": 2, "pesan": "x"}]}"#)
                .unwrap();
        assert_eq!(r.outcome(), ImportOutcome::Failed);
        assert_eq!(r.error_lines(), vec!["Baris 2: x".to_string()]);
    }
}
