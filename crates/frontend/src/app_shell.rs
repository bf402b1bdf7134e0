//! Root of the signed-in application: session gate around the main layout.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, HOME_TAB};
use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;
use leptos::prelude::*;

/// Main layout. Restores the tab from `?active=` or opens the home dashboard.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration(tab_label_for_key);
    if tabs_store.opened.with_untracked(|tabs| tabs.is_empty()) {
        tabs_store.open_tab(HOME_TAB, tab_label_for_key(HOME_TAB));
    }

    view! { <Shell /> }
}

/// Shows the main layout only while a session cookie is present.
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireSession>
            <MainLayout />
        </RequireSession>
    }
}
