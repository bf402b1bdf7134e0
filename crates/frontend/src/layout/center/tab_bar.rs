use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs__bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabHandle tab=tab /> }
            />
        </div>
    }
}

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        tabs_store.active.with(|a| a.as_deref() == Some(key.get_value().as_str()))
    });

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    view! {
        <div
            class="tabs__handle"
            class:tabs__handle--active=is_active
            on:click=move |_| tabs_store.activate_tab(&key.get_value())
        >
            <span class="tabs__title">{tab.title}</span>
            <button class="tabs__close" title="Tutup" on:click=on_close>
                {icon("x")}
            </button>
        </div>
    }
}
