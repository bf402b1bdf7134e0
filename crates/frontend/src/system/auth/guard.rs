use super::context::use_auth;
use crate::shared::config::LOGIN_PATH;
use leptos::prelude::*;
use thaw::*;

/// Renders `children` only while session cookies are present.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || auth.is_authenticated() fallback=|| view! { <SessionMissing /> }>
            {children()}
        </Show>
    }
}

/// Renders `children` only for roles allowed to manage users.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_admin()
            fallback=|| view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    <MessageBarBody>
                        <MessageBarTitle>"Akses ditolak"</MessageBarTitle>
                        "Halaman ini hanya untuk administrator."
                    </MessageBarBody>
                </MessageBar>
            }
        >
            {children()}
        </Show>
    }
}

#[component]
fn SessionMissing() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="session-missing">
            <MessageBar intent=MessageBarIntent::Warning>
                <MessageBarBody>
                    <MessageBarTitle>"Sesi tidak ditemukan"</MessageBarTitle>
                    "Silakan masuk terlebih dahulu."
                </MessageBarBody>
                <MessageBarActions>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(LOGIN_PATH);
                        }
                    }>
                        "Masuk"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| auth.refresh()>
                        "Periksa lagi"
                    </Button>
                </MessageBarActions>
            </MessageBar>
        </div>
    }
}
