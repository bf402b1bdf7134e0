pub mod state;

use self::state::{requested_status, status_options, tab_label, tabs, visible_orders};
use super::details::OrderDetails;
use super::recent::RecentOrders;
use crate::shared::api_utils::{fetch_json, send, ApiError, ApiRequest};
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::OrderStatusBadge;
use crate::shared::components::{
    DateRangePicker, FilterPanel, FilterTag, HeaderCheckbox, PageHeader, PaginationControls,
    SelectionBar, TableCheckbox,
};
use crate::shared::config::page_size;
use crate::shared::crud::options_from_rows;
use crate::shared::date_utils::{format_date, format_datetime, today};
use crate::shared::debounce::Generation;
use crate::shared::export::{default_export_name, export_file};
use crate::shared::icons::icon;
use crate::shared::import::{ImportButton, ImportReport};
use crate::shared::list_controller::{ListMode, ListState};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal::use_modal;
use crate::shared::query_cache::{use_query_cache, Mutation, QueryCache, QueryKey};
use crate::shared::toast::use_toast;
use chrono::NaiveDate;
use contracts::domain::a001_brand::aggregate::ENDPOINT as BRAND_ENDPOINT;
use contracts::domain::a005_marketplace::aggregate::ENDPOINT as MARKETPLACE_ENDPOINT;
use contracts::domain::a006_shipping_service::aggregate::ENDPOINT as SHIPPING_SERVICE_ENDPOINT;
use contracts::domain::a009_order::aggregate::{Order, OrderStatusPatch, ENDPOINT};
use contracts::domain::common::RecordId;
use contracts::enums::order_status::OrderStatus;
use contracts::shared::import_result::ImportResult;
use contracts::shared::list_params::{ListFilter, OrderFilter, SearchQuery};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const ENTITY: &str = "pesanan";

async fn change_status(id: RecordId, status: OrderStatus) -> Result<(), ApiError> {
    let request =
        ApiRequest::patch(format!("{}/{}/status", ENDPOINT, id)).json(&OrderStatusPatch { status })?;
    send(request).await
}

/// Request for the collection shown in `mode`. Only the full list is cached.
async fn load_orders(cache: QueryCache, mode: ListMode<OrderFilter>) -> Result<Vec<Order>, ApiError> {
    match mode {
        ListMode::Search(q) => {
            let request = ApiRequest::get(format!("{}/search", ENDPOINT)).query(&SearchQuery::new(q))?;
            fetch_json(request).await
        }
        ListMode::Filter(filter) => {
            let request = ApiRequest::get(format!("{}/filter", ENDPOINT)).query(&filter)?;
            fetch_json(request).await
        }
        ListMode::All | ListMode::Ready => {
            cache
                .fetch(QueryKey::all(ENTITY), ApiRequest::get(ENDPOINT))
                .await
        }
    }
}

fn parse_id(raw: &str) -> Option<RecordId> {
    raw.trim().parse().ok()
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let cache = use_query_cache();
    let toast = use_toast();
    let modal = use_modal();

    let state = RwSignal::new(
        ListState::<OrderFilter>::new(page_size::ORDERS).sorted_by("created_at", false),
    );
    let tab = RwSignal::new(None::<OrderStatus>);
    let items = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let import_result = RwSignal::new(None::<ImportResult>);
    let busy = RwSignal::new(false);
    let filter_expanded = RwSignal::new(false);
    let draft = RwSignal::new(OrderFilter::default());
    let bulk_target = RwSignal::new(OrderStatus::Printed);
    let requests = StoredValue::new(Generation::default());
    // Bumped when a row's status change is rejected to put its dropdown back
    let status_resets = RwSignal::new(0u64);

    let mode = Memo::new(move |_| state.with(|s| s.mode().clone()));

    // Reload on mode change or after any write that touched orders
    Effect::new(move |_| {
        let mode = mode.get();
        let revision = cache.revision(ENTITY);
        let ticket = requests.try_update_value(|g| g.bump()).unwrap_or_default();
        loading.set(true);
        spawn_local(async move {
            let result = load_orders(cache, mode).await;
            // A newer request superseded this one
            if !requests.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(rows) => {
                    log!("pesanan: {} rows (rev {})", rows.len(), revision);
                    items.set(rows);
                    load_error.set(None);
                }
                Err(e) => {
                    log::warn!("pesanan load failed: {}", e);
                    load_error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        let (field, ascending) = state.with(|s| (s.sort_field.clone(), s.sort_ascending));
        items.with(|rows| visible_orders(rows, tab.get(), &field, ascending))
    });

    Effect::new(move |_| {
        let ids: Vec<RecordId> = visible.with(|rows| rows.iter().map(|o| o.id).collect());
        state.update(|s| {
            s.set_dataset(ids);
        });
    });

    let page_rows = move || {
        let rows = visible.get();
        state.with(|s| s.page_window(&rows).to_vec())
    };
    let search_text = Signal::derive(move || state.with(|s| s.search_text().to_string()));

    let select_tab = move |next: Option<OrderStatus>| {
        tab.set(next);
        state.update(|s| s.set_page(0));
    };

    let on_status_change = move |id: RecordId, status: OrderStatus| {
        spawn_local(async move {
            match change_status(id, status).await {
                Ok(()) => {
                    toast.success(format!("Status diubah ke {}", status.label()));
                    cache.invalidate(&Mutation::OrderStatus { order_id: id });
                }
                Err(e) => {
                    status_resets.update(|n| *n += 1);
                    toast.api_error("Gagal mengubah status", &e);
                }
            }
        });
    };

    let apply_bulk_status = move |_| {
        let ids = state.with_untracked(|s| s.selected_ids());
        let target = bulk_target.get_untracked();
        if ids.is_empty() {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let total = ids.len();
            let mut changed = Vec::with_capacity(total);
            for id in ids {
                match change_status(id, target).await {
                    Ok(()) => changed.push(id),
                    Err(e) => log::warn!("status of pesanan {} not changed: {}", id, e),
                }
            }
            let failed = total - changed.len();
            busy.set(false);
            state.update(|s| s.clear_selection());
            if !changed.is_empty() {
                cache.invalidate(&Mutation::OrderStatusBulk { order_ids: changed });
            }
            if failed == 0 {
                toast.success(format!("{} pesanan diubah ke {}", total, target.label()));
            } else {
                toast.warning(
                    "Sebagian gagal diubah",
                    format!("{} dari {} pesanan gagal diubah", failed, total),
                );
            }
        });
    };

    let apply_filter = move |_| {
        let filter = draft.get_untracked();
        if let Err(msg) = filter.validate() {
            toast.warning("Filter tidak valid", msg);
            return;
        }
        state.update(|s| s.apply_filter(filter));
    };

    let reset_filter = move || {
        draft.set(OrderFilter::default());
        state.update(|s| s.clear_filter());
    };

    let remove_criterion = move |clear: fn(&mut OrderFilter)| {
        draft.update(clear);
        let filter = draft.get_untracked();
        state.update(|s| s.apply_filter(filter));
    };

    let export = move |_| {
        busy.set(true);
        let filter = state.with_untracked(|s| s.filter().cloned());
        spawn_local(async move {
            let endpoint = format!("{}/export-filter", ENDPOINT);
            let fallback = default_export_name(ENTITY, today());
            match export_file(&endpoint, filter.as_ref(), &fallback).await {
                Ok(name) => toast.success(format!("File {} diunduh", name)),
                Err(e) => toast.api_error("Export gagal", &e),
            }
            busy.set(false);
        });
    };

    let open_details = move |order: Order| {
        modal.open(format!("Pesanan {}", order.order_number), move |handle| {
            view! { <OrderDetails id=order.id on_close=Callback::new(move |_| handle.close()) /> }
                .into_any()
        });
    };

    let active_filters_count = Signal::derive(move || {
        state.with(|s| {
            s.filter().map_or(0, |f| {
                [
                    f.date_from.is_some() || f.date_to.is_some(),
                    f.status.is_some(),
                    f.marketplace_id.is_some(),
                    f.brand_id.is_some(),
                    f.jasa_pengiriman_id.is_some(),
                ]
                .iter()
                .filter(|set| **set)
                .count()
            })
        })
    });

    view! {
        <div class="page">
            <PageHeader title="Pesanan" subtitle="Semua pesanan dari marketplace">
                <ImportButton
                    endpoint=ENDPOINT
                    on_imported=Callback::new(move |result: ImportResult| {
                        import_result.set(Some(result));
                        cache.invalidate(&Mutation::OrderImport);
                    })
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || busy.get())
                    on_click=export
                >
                    {icon("download")}
                    {move || if state.with(|s| s.filter().is_some()) { "Export hasil filter" } else { "Export Excel" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| cache.invalidate(&Mutation::OrderImport)
                >
                    {icon("refresh")}
                    "Muat ulang"
                </Button>
            </PageHeader>

            <RecentOrders on_open=Callback::new(open_details) />

            <ImportReport
                result=import_result
                on_close=Callback::new(move |_| import_result.set(None))
            />

            <div class="status-tabs">
                {tabs()
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class="status-tabs__item"
                            class:status-tabs__item--active=move || tab.get() == t
                            on:click=move |_| select_tab(t)
                        >
                            {tab_label(t)}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="list-toolbar">
                <SearchInput
                    value=search_text
                    on_change=Callback::new(move |q: String| {
                        if !q.trim().is_empty() {
                            draft.set(OrderFilter::default());
                        }
                        state.update(|s| s.set_search(&q));
                    })
                    placeholder="Cari no pesanan, pembeli, resi, SKU..."
                />
            </div>

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=active_filters_count
                pagination_controls=move || view! {
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page()))
                        total_pages=Signal::derive(move || state.with(|s| s.page_count()))
                        total_count=Signal::derive(move || state.with(|s| s.total()))
                        on_page_change=Callback::new(move |p| state.update(|s| s.set_page(p)))
                    />
                }
                filter_content=move || view! {
                    <div class="filter-panel__grid">
                        <DateRangePicker
                            date_from=Signal::derive(move || draft.with(|f| f.date_from))
                            date_to=Signal::derive(move || draft.with(|f| f.date_to))
                            on_change=Callback::new(move |(from, to): (Option<NaiveDate>, Option<NaiveDate>)| draft.update(|f| {
                                f.date_from = from;
                                f.date_to = to;
                            }))
                        />
                        <div class="form-group">
                            <label>"Status"</label>
                            <select on:change=move |ev| {
                                let code = event_target_value(&ev);
                                draft.update(|f| f.status = OrderStatus::from_code(&code));
                            }>
                                <option value="" selected=move || draft.with(|f| f.status.is_none())>"Semua status"</option>
                                {OrderStatus::ALL.iter().map(|s| {
                                    let s = *s;
                                    view! {
                                        <option value=s.code() selected=move || draft.with(|f| f.status == Some(s))>
                                            {s.label()}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                        <ReferenceSelect
                            label="Marketplace"
                            endpoint=MARKETPLACE_ENDPOINT
                            label_key="nama_marketplace"
                            value=Signal::derive(move || draft.with(|f| f.marketplace_id))
                            on_change=Callback::new(move |id| draft.update(|f| f.marketplace_id = id))
                        />
                        <ReferenceSelect
                            label="Brand"
                            endpoint=BRAND_ENDPOINT
                            label_key="nama_brand"
                            value=Signal::derive(move || draft.with(|f| f.brand_id))
                            on_change=Callback::new(move |id| draft.update(|f| f.brand_id = id))
                        />
                        <ReferenceSelect
                            label="Jasa pengiriman"
                            endpoint=SHIPPING_SERVICE_ENDPOINT
                            label_key="nama_jasa"
                            value=Signal::derive(move || draft.with(|f| f.jasa_pengiriman_id))
                            on_change=Callback::new(move |id| draft.update(|f| f.jasa_pengiriman_id = id))
                        />
                    </div>
                    <div class="filter-panel__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=apply_filter>
                            "Terapkan"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset_filter()>
                            "Reset"
                        </Button>
                    </div>
                }
                filter_tags=move || view! {
                    {move || state.with(|s| s.filter().cloned()).map(|f| view! {
                        {(f.date_from.is_some() || f.date_to.is_some()).then(|| view! {
                            <FilterTag
                                label=format!(
                                    "Tanggal: {} - {}",
                                    f.date_from.as_ref().map(format_date).unwrap_or_default(),
                                    f.date_to.as_ref().map(format_date).unwrap_or_default(),
                                )
                                on_remove=Callback::new(move |_| remove_criterion(|f| {
                                    f.date_from = None;
                                    f.date_to = None;
                                }))
                            />
                        })}
                        {f.status.map(|s| view! {
                            <FilterTag
                                label=format!("Status: {}", s.label())
                                on_remove=Callback::new(move |_| remove_criterion(|f| f.status = None))
                            />
                        })}
                        {f.marketplace_id.map(|_| view! {
                            <FilterTag
                                label="Marketplace"
                                on_remove=Callback::new(move |_| remove_criterion(|f| f.marketplace_id = None))
                            />
                        })}
                        {f.brand_id.map(|_| view! {
                            <FilterTag
                                label="Brand"
                                on_remove=Callback::new(move |_| remove_criterion(|f| f.brand_id = None))
                            />
                        })}
                        {f.jasa_pengiriman_id.map(|_| view! {
                            <FilterTag
                                label="Jasa pengiriman"
                                on_remove=Callback::new(move |_| remove_criterion(|f| f.jasa_pengiriman_id = None))
                            />
                        })}
                    })}
                }
            />

            <SelectionBar
                selected=Signal::derive(move || state.with(|s| s.selection_count()))
                total=Signal::derive(move || state.with(|s| s.total()))
                scope=Signal::derive(move || state.with(|s| s.scope()))
                on_select_page=Callback::new(move |_| state.update(|s| s.select_page()))
                on_select_all=Callback::new(move |_| state.update(|s| s.select_all()))
                on_clear=Callback::new(move |_| state.update(|s| s.clear_selection()))
            >
                <select
                    class="selection-bar__select"
                    on:change=move |ev| {
                        if let Some(s) = OrderStatus::from_code(&event_target_value(&ev)) {
                            bulk_target.set(s);
                        }
                    }
                >
                    {OrderStatus::ALL.iter().map(|s| {
                        let s = *s;
                        view! {
                            <option value=s.code() selected=move || bulk_target.get() == s>{s.label()}</option>
                        }
                    }).collect_view()}
                </select>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || busy.get() || state.with(|s| !s.has_selection()))
                    on_click=apply_bulk_status
                >
                    {icon("check")}
                    "Ubah status"
                </Button>
            </SelectionBar>

            {move || load_error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>
                        <MessageBarTitle>"Gagal memuat pesanan"</MessageBarTitle>
                        {e}
                    </MessageBarBody>
                </MessageBar>
            })}

            <div class="table-container">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <HeaderCheckbox
                                checked=Signal::derive(move || state.with(|s| s.page_fully_selected()))
                                indeterminate=Signal::derive(move || state.with(|s| s.page_partially_selected() && !s.page_fully_selected()))
                                on_change=Callback::new(move |checked: bool| state.update(|s| {
                                    if checked { s.select_page() } else { s.deselect_page() }
                                }))
                            />
                            {[
                                ("no_pesanan", "No pesanan"),
                                ("created_at", "Tanggal"),
                                ("nama_pembeli", "Pembeli"),
                                ("nama_marketplace", "Marketplace"),
                                ("nama_brand", "Brand"),
                                ("no_resi", "No resi"),
                                ("total", "Total"),
                                ("status", "Status"),
                            ]
                            .into_iter()
                            .map(|(field, label)| view! {
                                <SortableHeaderCell
                                    label=label
                                    sort_field=field
                                    current_sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)))
                                />
                            })
                            .collect_view()}
                            <TableHeaderCell resizable=false min_width=180.0>"Ubah status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = page_rows();
                            if rows.is_empty() {
                                let text = if loading.get() { "Memuat..." } else { "Tidak ada pesanan" };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="10">
                                            <div class="table__empty">{text}</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            let query = search_text.get();
                            rows.into_iter()
                                .map(|order| {
                                    let id = order.id;
                                    let status = order.status;
                                    let total = order.total();
                                    let for_details = order.clone();
                                    let order_number = highlight_matches(&order.order_number, &query);
                                    let nama_pembeli = highlight_matches(order.nama_pembeli.as_deref().unwrap_or("—"), &query);
                                    let tracking_number = highlight_matches(order.tracking_number.as_deref().unwrap_or("—"), &query);
                                    view! {
                                        <TableRow
                                            class:table__row--selected=move || state.with(|s| s.is_selected(id))
                                            on:dblclick=move |_| open_details(for_details.clone())
                                        >
                                            <TableCheckbox
                                                checked=Signal::derive(move || state.with(|s| s.is_selected(id)))
                                                on_change=Callback::new(move |checked| state.update(|s| s.toggle_row(id, checked)))
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {order_number}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{format_datetime(&order.created_at)}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {nama_pembeli}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{order.nama_marketplace.clone().unwrap_or_else(|| "—".into())}</TableCell>
                                            <TableCell>{order.nama_brand.clone().unwrap_or_else(|| "—".into())}</TableCell>
                                            <TableCell>
                                                {tracking_number}
                                            </TableCell>
                                            <TableCellMoney value=Some(total) />
                                            <TableCell>
                                                <OrderStatusBadge status=status />
                                            </TableCell>
                                            <TableCell>
                                                <select
                                                    class="status-select"
                                                    on:click=|ev| ev.stop_propagation()
                                                    prop:value=move || {
                                                        status_resets.track();
                                                        status.code()
                                                    }
                                                    on:change=move |ev| {
                                                        if let Some(next) = requested_status(status, &event_target_value(&ev)) {
                                                            on_status_change(id, next);
                                                        }
                                                    }
                                                >
                                                    {status_options(status)
                                                        .into_iter()
                                                        .map(|(s, label)| view! {
                                                            <option value=s.code() selected={s == status}>{label}</option>
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

/// Filter dropdown over the rows of a reference endpoint.
#[component]
fn ReferenceSelect(
    label: &'static str,
    endpoint: &'static str,
    label_key: &'static str,
    #[prop(into)] value: Signal<Option<RecordId>>,
    on_change: Callback<Option<RecordId>>,
) -> impl IntoView {
    let cache = use_query_cache();
    let options = RwSignal::new(Vec::<(String, String)>::new());

    spawn_local(async move {
        match cache
            .fetch::<Vec<serde_json::Value>>(QueryKey::all(endpoint), ApiRequest::get(endpoint))
            .await
        {
            Ok(rows) => options.set(options_from_rows(&rows, label_key)),
            Err(e) => log::warn!("options of {} not loaded: {}", endpoint, e),
        }
    });

    view! {
        <div class="form-group">
            <label>{label}</label>
            <select on:change=move |ev| on_change.run(parse_id(&event_target_value(&ev)))>
                <option value="" selected=move || value.get().is_none()>"Semua"</option>
                <For
                    each=move || options.get()
                    key=|(id, _)| id.clone()
                    children=move |(id, text)| {
                        let selected = parse_id(&id);
                        view! {
                            <option value=id selected=move || value.get().is_some() && value.get() == selected>
                                {text}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
