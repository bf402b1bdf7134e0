use serde::{Deserialize, Serialize};

/// Dashboard role as stored in the `role` cookie and on `/user` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Operator,
    Gudang,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Operator, Role::Gudang];

    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
            Role::Gudang => "gudang",
        }
    }

    /// Cookie values are written by the auth service and may differ in case.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|r| r.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Operator => "Operator",
            Role::Gudang => "Staf Gudang",
        }
    }

    pub fn can_manage_users(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Role::from_code("Admin"), Some(Role::Admin));
        assert_eq!(Role::from_code(" gudang "), Some(Role::Gudang));
        assert_eq!(Role::from_code("guest"), None);
    }

    #[test]
    fn test_only_admin_manages_users() {
        assert!(Role::Admin.can_manage_users());
        assert!(!Role::Operator.can_manage_users());
    }
}
