use crate::shared::api_utils::ApiRequest;
use crate::shared::components::ui::OrderStatusBadge;
use crate::shared::config::{page_size, RECENT_ORDERS_MINUTES};
use crate::shared::date_utils::format_relative;
use crate::shared::query_cache::{use_query_cache, QueryKey};
use contracts::domain::a009_order::aggregate::{Order, ENDPOINT};
use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Most recently touched first, at most `limit` rows.
pub fn latest(mut rows: Vec<Order>, limit: usize) -> Vec<Order> {
    rows.sort_by(|a, b| {
        let at = |o: &Order| o.updated_at.unwrap_or(o.created_at);
        at(b).cmp(&at(a))
    });
    rows.truncate(limit);
    rows
}

/// Strip of orders changed in the last few minutes; refreshed after every order write.
#[component]
pub fn RecentOrders(on_open: Callback<Order>) -> impl IntoView {
    let cache = use_query_cache();
    let rows = RwSignal::new(Vec::<Order>::new());

    Effect::new(move |_| {
        cache.revision(ENDPOINT);
        spawn_local(async move {
            let result = cache
                .fetch::<Vec<Order>>(
                    QueryKey::recent_orders(),
                    ApiRequest::get(format!("{}/recent", ENDPOINT)),
                )
                .await;
            match result {
                Ok(list) => rows.set(latest(list, page_size::RECENT_ORDERS)),
                Err(e) => log::warn!("recent orders not loaded: {}", e),
            }
        });
    });

    view! {
        <Show when=move || rows.with(|r| !r.is_empty())>
            <div class="recent-strip">
                <span class="recent-strip__title">
                    {format!("Diperbarui {} menit terakhir", RECENT_ORDERS_MINUTES)}
                </span>
                <For
                    each=move || rows.get()
                    key=|o| (o.id, o.updated_at)
                    children=move |order| {
                        let at = order.updated_at.unwrap_or(order.created_at);
                        let number = order.order_number.clone();
                        let status = order.status;
                        view! {
                            <button class="recent-strip__item" on:click=move |_| on_open.run(order.clone())>
                                <span class="recent-strip__number">{number}</span>
                                <OrderStatusBadge status=status />
                                <span class="recent-strip__time">{format_relative(&at, &Utc::now())}</span>
                            </button>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::enums::order_status::OrderStatus;

    fn order(id: i64, created_min: u32, updated_min: Option<u32>) -> Order {
        let at = |m: u32| Utc.with_ymd_and_hms(2024, 6, 1, 10, m, 0).unwrap();
        Order {
            id,
            order_number: format!("INV-{}", id),
            marketplace_id: None,
            nama_marketplace: None,
            customer_id: None,
            nama_pembeli: None,
            brand_id: None,
            nama_brand: None,
            jasa_pengiriman_id: None,
            nama_jasa: None,
            tracking_number: None,
            status: OrderStatus::Pending,
            items: Vec::new(),
            created_at: at(created_min),
            updated_at: updated_min.map(at),
        }
    }

    #[test]
    fn test_latest_uses_update_time() {
        let rows = vec![order(1, 1, Some(9)), order(2, 5, None), order(3, 2, Some(3))];
        let ids: Vec<i64> = latest(rows, 2).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
