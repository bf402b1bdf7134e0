//! Maps a tab key to the screen it shows.

use super::tab_labels::{stage_tab_key, HOME_TAB, ORDERS_TAB, USERS_TAB};
use crate::dashboards::OverviewDashboard;
use crate::domain::a001_brand::ui::list::BrandList;
use crate::domain::a002_cooperation::ui::list::CooperationList;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_warehouse::ui::list::WarehouseList;
use crate::domain::a005_marketplace::ui::list::MarketplaceList;
use crate::domain::a006_shipping_service::ui::list::ShippingServiceList;
use crate::domain::a007_customer::ui::list::CustomerList;
use crate::domain::a008_stock_transaction::ui::list::StockTransactionList;
use crate::domain::a009_order::ui::list::OrderList;
use crate::domain::a010_printing::ui::list::PrintingPage;
use crate::domain::a011_packing::ui::list::PackingPage;
use crate::domain::a012_shipping::ui::list::ShippingPage;
use crate::domain::a013_sweeping::ui::list::SweepingPage;
use crate::system::users::ui::list::UsersListPage;
use contracts::enums::order_status::PipelineStage;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of the tab `key`; unknown keys get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        HOME_TAB => view! { <OverviewDashboard /> }.into_any(),

        "a001_brand" => view! { <BrandList /> }.into_any(),
        "a002_cooperation" => view! { <CooperationList /> }.into_any(),
        "a003_product" => view! { <ProductList /> }.into_any(),
        "a004_warehouse" => view! { <WarehouseList /> }.into_any(),
        "a005_marketplace" => view! { <MarketplaceList /> }.into_any(),
        "a006_shipping_service" => view! { <ShippingServiceList /> }.into_any(),
        "a007_customer" => view! { <CustomerList /> }.into_any(),
        "a008_stock_transaction" => view! { <StockTransactionList /> }.into_any(),

        ORDERS_TAB => view! { <OrderList /> }.into_any(),
        k if k == stage_tab_key(PipelineStage::Print) => view! { <PrintingPage /> }.into_any(),
        k if k == stage_tab_key(PipelineStage::Pack) => view! { <PackingPage /> }.into_any(),
        k if k == stage_tab_key(PipelineStage::Ship) => view! { <ShippingPage /> }.into_any(),
        k if k == stage_tab_key(PipelineStage::Sweep) => view! { <SweepingPage /> }.into_any(),

        USERS_TAB => view! { <UsersListPage /> }.into_any(),

        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">"Halaman tidak ditemukan"</div> }.into_any()
        }
    }
}
