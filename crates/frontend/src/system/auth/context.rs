use super::cookies;
use contracts::enums::role::Role;
use contracts::system::session::Session;
use leptos::prelude::*;

/// Current operator session; `None` until the auth flow has set the cookies.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            session: RwSignal::new(cookies::read_session()),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn username(&self) -> String {
        self.session
            .with(|s| s.as_ref().map(|s| s.username.clone()).unwrap_or_default())
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.as_ref().map(|s| s.role))
    }

    pub fn is_admin(&self) -> bool {
        self.role().map(|r| r.can_manage_users()).unwrap_or(false)
    }

    /// Re-reads the cookies, e.g. after the auth page set them in another tab.
    pub fn refresh(&self) {
        self.session.set(cookies::read_session());
    }

    /// Expires the session cookies and drops the in-memory session.
    pub fn logout(&self) {
        cookies::clear_session();
        self.session.set(None);
        log::info!("session closed");
    }
}

/// Reads the session cookies once and provides [`AuthContext`] to `children`.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new();
    match auth.session.get_untracked() {
        Some(s) => log::info!("session: {} ({})", s.username, s.role.code()),
        None => log::warn!("no session cookies"),
    }
    provide_context(auth);
    children()
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
