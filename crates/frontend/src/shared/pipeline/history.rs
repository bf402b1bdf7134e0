use crate::shared::api_utils::{fetch_json, ApiError, ApiRequest};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{DateRangePicker, PaginationControls};
use crate::shared::config::page_size;
use crate::shared::crud::{visible_rows, Column};
use crate::shared::date_utils::today;
use crate::shared::debounce::Generation;
use crate::shared::export::{default_export_name, export_file};
use crate::shared::icons::icon;
use crate::shared::list_controller::{ListMode, ListState};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::query_cache::{use_query_cache, QueryCache, QueryKey};
use crate::shared::toast::use_toast;
use chrono::NaiveDate;
use contracts::domain::common::{Record, RecordId};
use contracts::enums::order_status::PipelineStage;
use contracts::shared::list_params::{DateRangeFilter, ListFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thaw::*;

/// Stage records: the cached full list, or the date-filtered list from the server.
async fn load_history<R: DeserializeOwned>(
    cache: QueryCache,
    stage: PipelineStage,
    filter: Option<DateRangeFilter>,
) -> Result<Vec<R>, ApiError> {
    match filter {
        Some(filter) => fetch_json(ApiRequest::get(stage.endpoint()).query(&filter)?).await,
        None => {
            cache
                .fetch(QueryKey::all(stage.entity_key()), ApiRequest::get(stage.endpoint()))
                .await
        }
    }
}

/// Records created by `stage`, newest first.
#[component]
pub fn StageHistory<R>(stage: PipelineStage, columns: &'static [Column<R>]) -> impl IntoView
where
    R: Record + Clone + PartialEq + DeserializeOwned + Send + Sync + 'static,
{
    let cache = use_query_cache();
    let toast = use_toast();
    let entity = stage.entity_key();

    let default_sort = columns.iter().find(|c| c.key == "waktu").map_or("", |c| c.key);
    let state = RwSignal::new(
        ListState::<DateRangeFilter>::new(page_size::STAGE_HISTORY).sorted_by(default_sort, false),
    );
    let items = RwSignal::new(Vec::<R>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let exporting = RwSignal::new(false);
    let requests = StoredValue::new(Generation::default());

    // Search filters the fetched rows; only the date filter goes to the server
    let server_filter = Memo::new(move |_| {
        state.with(|s| match s.mode() {
            ListMode::Filter(f) => Some(f.clone()),
            _ => None,
        })
    });

    Effect::new(move |_| {
        let filter = server_filter.get();
        cache.revision(entity);
        let ticket = requests.try_update_value(|g| g.bump()).unwrap_or_default();
        loading.set(true);
        spawn_local(async move {
            let result = load_history::<R>(cache, stage, filter).await;
            if !requests.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(rows) => {
                    items.set(rows);
                    load_error.set(None);
                }
                Err(e) => {
                    log::warn!("{} history failed: {}", entity, e);
                    load_error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        state.with(|s| {
            items.with(|rows| visible_rows(columns, rows, s.search_text(), &s.sort_field, s.sort_ascending))
        })
    });

    Effect::new(move |_| {
        let ids: Vec<RecordId> = visible.with(|rows| rows.iter().map(Record::record_id).collect());
        state.update(|s| {
            s.set_dataset(ids);
        });
    });

    let page_rows = move || {
        let rows = visible.get();
        state.with(|s| s.page_window(&rows).to_vec())
    };
    let search_text = Signal::derive(move || state.with(|s| s.search_text().to_string()));
    let range = Signal::derive(move || state.with(|s| s.filter().cloned().unwrap_or_default()));

    let on_range = Callback::new(move |(date_from, date_to): (Option<NaiveDate>, Option<NaiveDate>)| {
        let filter = DateRangeFilter { date_from, date_to };
        if let Err(msg) = filter.validate() {
            toast.warning("Rentang tanggal tidak valid", msg);
            return;
        }
        state.update(|s| s.apply_filter(filter));
    });

    let export = move |_| {
        exporting.set(true);
        let filter = state.with_untracked(|s| s.filter().cloned());
        spawn_local(async move {
            let fallback = default_export_name(entity, today());
            match export_file(&stage.export_endpoint(), filter.as_ref(), &fallback).await {
                Ok(name) => toast.success(format!("File {} diunduh", name)),
                Err(e) => toast.api_error("Export gagal", &e),
            }
            exporting.set(false);
        });
    };

    view! {
        <section class="stage-section">
            <div class="stage-section__header">
                <h2 class="stage-section__title">"Riwayat"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || exporting.get())
                    on_click=export
                >
                    {icon("download")}
                    "Export Excel"
                </Button>
            </div>

            <div class="list-toolbar">
                <SearchInput
                    value=search_text
                    on_change=Callback::new(move |q: String| state.update(|s| s.set_search(&q)))
                    placeholder="Cari no pesanan, operator..."
                />
                <DateRangePicker
                    date_from=Signal::derive(move || range.get().date_from)
                    date_to=Signal::derive(move || range.get().date_to)
                    on_change=on_range
                />
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page()))
                    total_pages=Signal::derive(move || state.with(|s| s.page_count()))
                    total_count=Signal::derive(move || state.with(|s| s.total()))
                    on_page_change=Callback::new(move |p| state.update(|s| s.set_page(p)))
                />
            </div>

            {move || load_error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>
                        <MessageBarTitle>"Gagal memuat riwayat"</MessageBarTitle>
                        {e}
                    </MessageBarBody>
                </MessageBar>
            })}

            <div class="table-container">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {columns.iter().map(|column| view! {
                                <SortableHeaderCell
                                    label=column.label
                                    sort_field=column.key
                                    current_sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)))
                                />
                            }).collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = page_rows();
                            if rows.is_empty() {
                                let text = if loading.get() { "Memuat..." } else { "Belum ada riwayat" };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=columns.len().to_string()>
                                            <div class="table__empty">{text}</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            let query = search_text.get();
                            rows.iter()
                                .map(|row| {
                                    let cells = columns
                                        .iter()
                                        .map(|column| {
                                            let value = (column.value)(row);
                                            let text = value.display();
                                            let class = if value.is_numeric() { "table__cell--number" } else { "" };
                                            let content = if column.searchable {
                                                highlight_matches(&text, &query)
                                            } else {
                                                view! { <span>{text}</span> }.into_any()
                                            };
                                            view! {
                                                <TableCell class=class>
                                                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view();
                                    view! { <TableRow>{cells}</TableRow> }
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
