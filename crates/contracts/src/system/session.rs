use crate::enums::role::Role;

/// Cookie names written by the external auth flow.
pub const ROLE_COOKIE: &str = "role";
pub const USERNAME_COOKIE: &str = "username";

/// Operator session as read from cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

impl Session {
    /// Parses a `document.cookie` string (`a=1; b=2`).
    ///
    /// Both cookies must be present and the role must be known.
    pub fn from_cookie_header(header: &str) -> Option<Session> {
        let mut username = None;
        let mut role = None;
        for pair in header.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let value = decode_cookie_value(value.trim());
            match name.trim() {
                ROLE_COOKIE => role = Role::from_code(&value),
                USERNAME_COOKIE if !value.is_empty() => username = Some(value),
                _ => {}
            }
        }
        Some(Session {
            username: username?,
            role: role?,
        })
    }
}

/// Minimal percent-decoding for cookie values (`%20`, `%40`, ...).
fn decode_cookie_value(raw: &str) -> String {
    let raw = raw.trim_matches('"');
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let decoded = std::str::from_utf8(&bytes[i + 1..i + 3])
                .ok()
                .and_then(|hex| u8::from_str_radix(hex, 16).ok());
            if let Some(b) = decoded {
                out.push(b);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_cookies() {
        let s = Session::from_cookie_header("theme=dark; role=admin; username=siti%40gudang").unwrap();
        assert_eq!(s.role, Role::Admin);
        assert_eq!(s.username, "siti@gudang");
    }

    #[test]
    fn test_missing_or_unknown_role() {
        assert!(Session::from_cookie_header("username=budi").is_none());
        assert!(Session::from_cookie_header("username=budi; role=guest").is_none());
        assert!(Session::from_cookie_header("role=operator; username=").is_none());
    }

    #[test]
    fn test_trailing_percent_kept() {
        assert_eq!(decode_cookie_value("100%"), "100%");
        assert_eq!(decode_cookie_value("a%2"), "a%2");
    }
}
