//! Sidebar with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{stage_tab_key, tab_label_for_key, HOME_TAB, ORDERS_TAB, USERS_TAB};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::enums::order_status::PipelineStage;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "operations",
            label: "Operasional",
            icon: "orders",
            items: vec![
                (ORDERS_TAB, "orders"),
                (stage_tab_key(PipelineStage::Print), "printer"),
                (stage_tab_key(PipelineStage::Pack), "package"),
                (stage_tab_key(PipelineStage::Ship), "truck"),
                (stage_tab_key(PipelineStage::Sweep), "shuffle"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "inventory",
            label: "Inventori",
            icon: "stock",
            items: vec![
                ("a003_product", "package"),
                ("a004_warehouse", "warehouse"),
                ("a008_stock_transaction", "stock"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "references",
            label: "Data Master",
            icon: "tag",
            items: vec![
                ("a001_brand", "tag"),
                ("a002_cooperation", "handshake"),
                ("a005_marketplace", "store"),
                ("a006_shipping_service", "truck"),
                ("a007_customer", "customers"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "settings",
            label: "Pengaturan",
            icon: "users",
            items: vec![(USERS_TAB, "users")],
            admin_only: true,
        },
    ]
}

/// Groups shown for the given role; admin-only groups are hidden from everyone else.
fn visible_groups(is_admin: bool) -> Vec<MenuGroup> {
    get_menu_groups()
        .into_iter()
        .filter(|g| is_admin || !g.admin_only)
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    let expanded_groups = RwSignal::new(vec!["operations".to_string()]);
    let is_active = move |key: &'static str| ctx.active.with(|a| a.as_deref() == Some(key));

    view! {
        <div class="app-sidebar__content">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || is_active(HOME_TAB)
                on:click=move |_| ctx.open_tab(HOME_TAB, tab_label_for_key(HOME_TAB))
            >
                <div class="app-sidebar__item-content">
                    {icon("home")}
                    <span>{tab_label_for_key(HOME_TAB)}</span>
                </div>
            </div>

            {move || visible_groups(auth.is_admin())
                .into_iter()
                .map(|group| {
                    let gid = group.id;
                    let is_expanded = move || expanded_groups.with(|g| g.iter().any(|x| x == gid));
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                on:click=move |_| expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| x == gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid.to_string());
                                    }
                                })
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group.items.iter().map(|&(key, icon_name)| view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || is_active(key)
                                            on:click=move |_| ctx.open_tab(key, tab_label_for_key(key))
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{tab_label_for_key(key)}</span>
                                            </div>
                                        </div>
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_menu_only_for_admin() {
        let has_users = |groups: Vec<MenuGroup>| {
            groups.iter().any(|g| g.items.iter().any(|(k, _)| *k == USERS_TAB))
        };
        assert!(has_users(visible_groups(true)));
        assert!(!has_users(visible_groups(false)));
    }

    #[test]
    fn test_every_menu_item_has_a_title() {
        for group in get_menu_groups() {
            for (key, _) in group.items {
                assert_ne!(tab_label_for_key(key), "Halaman", "{}", key);
            }
        }
    }
}
