use super::bulk_toast;
use crate::shared::api_utils::{fetch_text, ApiRequest};
use crate::shared::components::table::format_number_int;
use crate::shared::components::ui::OrderStatusBadge;
use crate::shared::components::{HeaderCheckbox, PaginationControls, SelectionBar, TableCheckbox};
use crate::shared::config::page_size;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListState;
use crate::shared::modal::confirm;
use crate::shared::query_cache::{use_query_cache, Mutation, QueryKey};
use crate::shared::selection_store;
use crate::shared::toast::use_toast;
use contracts::domain::a009_order::aggregate::Order;
use contracts::domain::common::RecordId;
use contracts::enums::order_status::PipelineStage;
use contracts::shared::bulk::{BulkOrdersRequest, BulkResult};
use contracts::shared::list_params::NoFilter;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Orders eligible for `stage`, oldest first, with bulk selection and the stage action.
///
/// Stages that persist their selection restore it after a reload as long as the
/// queue still holds exactly the same orders.
#[component]
pub fn ReadyQueue(stage: PipelineStage) -> impl IntoView {
    let cache = use_query_cache();
    let toast = use_toast();
    let entity = stage.entity_key();

    let state = RwSignal::new(ListState::<NoFilter>::ready_queue(page_size::READY_QUEUE));
    let items = RwSignal::new(Vec::<Order>::new());
    let loaded = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move |_| {
        let revision = cache.revision(entity);
        loading.set(true);
        spawn_local(async move {
            let result = cache
                .fetch::<Vec<Order>>(QueryKey::ready(stage), ApiRequest::get(stage.ready_endpoint()))
                .await;
            match result {
                Ok(mut rows) => {
                    rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
                    log!("{} ready: {} orders (rev {})", entity, rows.len(), revision);
                    items.set(rows);
                    loaded.set(true);
                    load_error.set(None);
                }
                Err(e) => {
                    log::warn!("{} ready queue failed: {}", entity, e);
                    load_error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    // New dataset: drop or restore the selection
    Effect::new(move |_| {
        if !loaded.get() {
            return;
        }
        let ids: Vec<RecordId> = items.with(|rows| rows.iter().map(|o| o.id).collect());
        state.update(|s| {
            if s.set_dataset(ids) && stage.persists_selection() {
                if let Some(fingerprint) = s.fingerprint().map(str::to_string) {
                    let stored = selection_store::load(entity, &fingerprint);
                    s.restore_selection(&stored);
                }
            }
        });
    });

    // Keep the stored selection in sync
    Effect::new(move |_| {
        if !stage.persists_selection() {
            return;
        }
        let snapshot = state.with(|s| s.fingerprint().map(|f| (f.to_string(), s.selected_ids())));
        if let Some((fingerprint, ids)) = snapshot {
            selection_store::save(entity, &fingerprint, &ids);
        }
    });

    let page_rows = move || {
        let rows = items.get();
        state.with(|s| s.page_window(&rows).to_vec())
    };

    let run_bulk = move |_| {
        let request = BulkOrdersRequest::new(state.with_untracked(|s| s.selected_ids()));
        if request.is_empty() {
            return;
        }
        let requested = request.order_ids.len();
        if !confirm(&format!("{} {} pesanan?", stage.action_label(), requested)) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let result = match ApiRequest::post(stage.endpoint()).json(&request) {
                Ok(req) => fetch_text(req).await,
                Err(e) => Err(e),
            };
            busy.set(false);
            match result {
                Ok(body) => {
                    let summary = BulkResult::from_body(&body);
                    let (kind, title, message) = bulk_toast(stage, &summary, requested);
                    toast.show(kind, title, message);
                    state.update(|s| s.clear_selection());
                    selection_store::clear(entity);
                    cache.invalidate(&Mutation::StageBulk {
                        stage,
                        order_ids: request.order_ids,
                    });
                }
                Err(e) => toast.api_error(&format!("{} gagal", stage.title()), &e),
            }
        });
    };

    view! {
        <section class="stage-section">
            <div class="stage-section__header">
                <h2 class="stage-section__title">
                    {icon("clock")}
                    {move || format!("Siap diproses ({})", state.with(|s| s.total()))}
                </h2>
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page()))
                    total_pages=Signal::derive(move || state.with(|s| s.page_count()))
                    total_count=Signal::derive(move || state.with(|s| s.total()))
                    on_page_change=Callback::new(move |p| state.update(|s| s.set_page(p)))
                />
            </div>

            <SelectionBar
                selected=Signal::derive(move || state.with(|s| s.selection_count()))
                total=Signal::derive(move || state.with(|s| s.total()))
                scope=Signal::derive(move || state.with(|s| s.scope()))
                on_select_page=Callback::new(move |_| state.update(|s| s.select_page()))
                on_select_all=Callback::new(move |_| state.update(|s| s.select_all()))
                on_clear=Callback::new(move |_| state.update(|s| s.clear_selection()))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || busy.get() || state.with(|s| !s.has_selection()))
                    on_click=run_bulk
                >
                    {icon("check")}
                    {move || format!("{} ({})", stage.action_label(), state.with(|s| s.selection_count()))}
                </Button>
            </SelectionBar>

            {move || load_error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>
                        <MessageBarTitle>"Gagal memuat antrean"</MessageBarTitle>
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
                            <TableHeaderCell>"No pesanan"</TableHeaderCell>
                            <TableHeaderCell>"Tanggal"</TableHeaderCell>
                            <TableHeaderCell>"Pembeli"</TableHeaderCell>
                            <TableHeaderCell>"Marketplace"</TableHeaderCell>
                            <TableHeaderCell>"Jasa pengiriman"</TableHeaderCell>
                            <TableHeaderCell>"Item"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = page_rows();
                            if rows.is_empty() {
                                let text = if loading.get() { "Memuat..." } else { "Tidak ada pesanan yang menunggu" };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="8">
                                            <div class="table__empty">{text}</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|order| {
                                    let id = order.id;
                                    let total_quantity = order.total_quantity();
                                    view! {
                                        <TableRow class:table__row--selected=move || state.with(|s| s.is_selected(id))>
                                            <TableCheckbox
                                                checked=Signal::derive(move || state.with(|s| s.is_selected(id)))
                                                on_change=Callback::new(move |checked| state.update(|s| s.toggle_row(id, checked)))
                                            />
                                            <TableCell>{order.order_number.clone()}</TableCell>
                                            <TableCell>{format_datetime(&order.created_at)}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {order.nama_pembeli.clone().unwrap_or_else(|| "—".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{order.nama_marketplace.clone().unwrap_or_else(|| "—".into())}</TableCell>
                                            <TableCell>{order.nama_jasa.clone().unwrap_or_else(|| "—".into())}</TableCell>
                                            <TableCell class="table__cell--number">
                                                {format_number_int(total_quantity as f64)}
                                            </TableCell>
                                            <TableCell>
                                                <OrderStatusBadge status=order.status />
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
        </section>
    }
}
