use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal::{ModalHost, ModalService};
use crate::shared::query_cache::QueryCache;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());
    provide_context(QueryCache::new());
    provide_context(ModalService::new());

    view! {
        <AuthProvider>
            <AppShell />
            <ModalHost />
            <ToastHost />
        </AuthProvider>
    }
}
