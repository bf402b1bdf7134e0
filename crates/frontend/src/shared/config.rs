//! Runtime configuration of the dashboard.
//!
//! The API base can be baked in at build time with `DASHBOARD_API_BASE`
//! (e.g. `DASHBOARD_API_BASE=https://ops.example.com/api trunk build`).
//! Without it the API is expected under `/api` of the page origin.

/// Build-time override of the API base URL.
const API_BASE_OVERRIDE: Option<&str> = option_env!("DASHBOARD_API_BASE");

pub const APP_TITLE: &str = "Fulfillment Back-Office";

/// Page of the external auth flow that sets the session cookies.
pub const LOGIN_PATH: &str = "/login";

/// Quiet period before a search box issues its request.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// How long a toast stays on screen.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Window of the "recent orders" strip on the orders screen.
pub const RECENT_ORDERS_MINUTES: u32 = 5;

/// Fixed page sizes per screen.
pub mod page_size {
    pub const ORDERS: usize = 10;
    pub const READY_QUEUE: usize = 10;
    pub const STAGE_HISTORY: usize = 10;
    pub const REFERENCE: usize = 10;
    pub const RECENT_ORDERS: usize = 5;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    /// Resolves the configuration for the current page.
    pub fn load() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::resolve(API_BASE_OVERRIDE, &origin)
    }

    fn resolve(override_base: Option<&str>, origin: &str) -> Self {
        let api_base = match override_base.map(str::trim).filter(|s| !s.is_empty()) {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("{}/api", origin.trim_end_matches('/')),
        };
        Self { api_base }
    }

    /// Full URL for an endpoint path (`/pesanan/12/status`).
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.api_base, endpoint)
        } else {
            format!("{}/{}", self.api_base, endpoint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_origin() {
        let cfg = AppConfig::resolve(None, "https://ops.example.com/");
        assert_eq!(cfg.api_base, "https://ops.example.com/api");
        assert_eq!(cfg.url("/pesanan"), "https://ops.example.com/api/pesanan");
    }

    #[test]
    fn test_override_wins_and_is_trimmed() {
        let cfg = AppConfig::resolve(Some(" http://localhost:8000/ "), "https://ignored");
        assert_eq!(cfg.api_base, "http://localhost:8000");
        assert_eq!(cfg.url("brand"), "http://localhost:8000/brand");
    }

    #[test]
    fn test_blank_override_falls_back() {
        let cfg = AppConfig::resolve(Some("  "), "http://127.0.0.1:8080");
        assert_eq!(cfg.api_base, "http://127.0.0.1:8080/api");
    }
}
