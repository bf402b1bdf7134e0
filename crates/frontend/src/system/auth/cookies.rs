//! Access to the session cookies written by the external auth flow.

use contracts::system::session::{Session, ROLE_COOKIE, USERNAME_COOKIE};
use wasm_bindgen::JsCast;

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Raw `document.cookie`, empty when unavailable.
pub fn cookie_header() -> String {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

pub fn read_session() -> Option<Session> {
    Session::from_cookie_header(&cookie_header())
}

/// `Set-Cookie`-style assignment that expires `name` immediately.
pub fn expired_cookie(name: &str) -> String {
    format!("{}=; Path=/; Max-Age=0; SameSite=Lax", name)
}

/// Expires both session cookies.
pub fn clear_session() {
    let Some(doc) = html_document() else {
        return;
    };
    for name in [ROLE_COOKIE, USERNAME_COOKIE] {
        if let Err(e) = doc.set_cookie(&expired_cookie(name)) {
            log::warn!("failed to clear cookie {}: {:?}", name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_cookie() {
        assert_eq!(
            expired_cookie("role"),
            "role=; Path=/; Max-Age=0; SameSite=Lax"
        );
    }
}
