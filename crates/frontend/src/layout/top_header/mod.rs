//! Application top bar: sidebar toggle, title, current user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::APP_TITLE;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let logout = move |_| {
        auth.logout();
        ctx.close_all();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Sembunyikan menu" } else { "Tampilkan menu" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">{APP_TITLE}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth.username()}</span>
                    {move || auth.role().map(|r| view! {
                        <span class="top-header__role">{r.label()}</span>
                    })}
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Keluar">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
