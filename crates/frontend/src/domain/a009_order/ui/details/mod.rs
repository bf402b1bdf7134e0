use crate::shared::api_utils::ApiRequest;
use crate::shared::components::table::{format_number_int, TableCellMoney};
use crate::shared::components::ui::OrderStatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::query_cache::{use_query_cache, QueryKey};
use contracts::domain::a009_order::aggregate::{Order, ENDPOINT};
use contracts::domain::common::RecordId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Read-only view of one order with its item lines.
#[component]
pub fn OrderDetails(id: RecordId, on_close: Callback<()>) -> impl IntoView {
    let cache = use_query_cache();
    let order = RwSignal::new(None::<Order>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        cache.revision(ENDPOINT);
        spawn_local(async move {
            match cache
                .fetch::<Order>(
                    QueryKey::item(ENDPOINT, id),
                    ApiRequest::get(format!("{}/{}", ENDPOINT, id)),
                )
                .await
            {
                Ok(o) => order.set(Some(o)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        <div class="details-container">
            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>{e}</MessageBarBody>
                </MessageBar>
            })}
            {move || match order.get() {
                None => view! { <div class="details__loading">"Memuat..."</div> }.into_any(),
                Some(o) => view! { <OrderSummary order=o /> }.into_any(),
            }}
            <div class="details-actions">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Tutup"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn OrderSummary(order: Order) -> impl IntoView {
    let dash = || "—".to_string();
    let fields = vec![
        ("No pesanan", order.order_number.clone()),
        ("Tanggal", format_datetime(&order.created_at)),
        (
            "Diperbarui",
            order.updated_at.as_ref().map(format_datetime).unwrap_or_else(dash),
        ),
        ("Marketplace", order.nama_marketplace.clone().unwrap_or_else(dash)),
        ("Pembeli", order.nama_pembeli.clone().unwrap_or_else(dash)),
        ("Brand", order.nama_brand.clone().unwrap_or_else(dash)),
        ("Jasa pengiriman", order.nama_jasa.clone().unwrap_or_else(dash)),
        ("No resi", order.tracking_number.clone().unwrap_or_else(dash)),
    ];
    let total = order.total();
    let quantity = order.total_quantity();
    let items = order.items.clone();

    view! {
        <div class="details-grid">
            {fields
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="details-grid__label">{label}</div>
                    <div class="details-grid__value">{value}</div>
                })
                .collect_view()}
            <div class="details-grid__label">"Status"</div>
            <div class="details-grid__value">
                <OrderStatusBadge status=order.status />
            </div>
        </div>

        <h4 class="details__section-title">"Item"</h4>
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"SKU"</TableHeaderCell>
                    <TableHeaderCell>"Produk"</TableHeaderCell>
                    <TableHeaderCell>"Jumlah"</TableHeaderCell>
                    <TableHeaderCell>"Harga"</TableHeaderCell>
                    <TableHeaderCell>"Subtotal"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {items
                    .into_iter()
                    .map(|item| {
                        let subtotal = item.subtotal();
                        view! {
                        <TableRow>
                            <TableCell>{item.sku.clone().unwrap_or_else(|| "—".into())}</TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    {item.nama_produk.clone().unwrap_or_else(|| format!("#{}", item.product_id))}
                                </TableCellLayout>
                            </TableCell>
                            <TableCell class="table__cell--number">{format_number_int(item.quantity as f64)}</TableCell>
                            <TableCellMoney value=Some(item.price) />
                            <TableCellMoney value=Some(subtotal) />
                        </TableRow>
                        }
                    })
                    .collect_view()}
                <TableRow class="table__totals-row">
                    <TableCell attr:colspan="2">"Total"</TableCell>
                    <TableCell class="table__cell--number">{format_number_int(quantity as f64)}</TableCell>
                    <TableCell>""</TableCell>
                    <TableCellMoney value=Some(total) bold=true />
                </TableRow>
            </TableBody>
        </Table>
    }
}
