use crate::domain::common::{Record, RecordId};
use crate::enums::role::Role;
use crate::shared::validation::require_length;
use serde::{Deserialize, Serialize};

pub const ENDPOINT: &str = "/user";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    #[serde(rename = "nama", default)]
    pub full_name: String,
    pub role: Role,
    #[serde(rename = "aktif", default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Record for User {
    fn record_id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self) -> String {
        self.username.clone()
    }
}

/// Create/update payload. `password` is only sent when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub username: String,
    #[serde(rename = "nama", default)]
    pub full_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "aktif", default = "default_true")]
    pub is_active: bool,
}

impl Default for UserDto {
    fn default() -> Self {
        Self {
            username: String::new(),
            full_name: String::new(),
            role: Role::Operator,
            password: None,
            is_active: true,
        }
    }
}

impl UserDto {
    /// `creating` requires a password; edits may leave it empty.
    pub fn validate(&self, creating: bool) -> Result<(), String> {
        require_length("Username", &self.username, 3, 50)?;
        if !self
            .username
            .trim()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            return Err("Username hanya boleh huruf, angka, titik dan garis bawah".into());
        }
        require_length("Nama", &self.full_name, 2, 100)?;
        match self.password.as_deref().filter(|p| !p.is_empty()) {
            Some(p) => require_length("Password", p, 8, 128),
            None if creating => Err("Password wajib diisi".into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> UserDto {
        UserDto {
            username: "dewi.ops".into(),
            full_name: "Dewi".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_password_required_on_create_only() {
        assert_eq!(dto().validate(true).unwrap_err(), "Password wajib diisi");
        assert!(dto().validate(false).is_ok());
        let with_short = UserDto {
            password: Some("123".into()),
            ..dto()
        };
        assert!(with_short.validate(false).is_err());
    }

    #[test]
    fn test_username_charset() {
        let bad = UserDto {
            username: "dewi ops".into(),
            ..dto()
        };
        assert!(bad.validate(false).is_err());
    }

    #[test]
    fn test_password_not_serialized_when_unset() {
        let json = serde_json::to_string(&dto()).unwrap();
        assert!(!json.contains("password"));
    }
}
