use super::form::EntityForm;
use super::EntityDescriptor;
use crate::shared::api_utils::{send, ApiRequest};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{HeaderCheckbox, PageHeader, PaginationControls, SelectionBar, TableCheckbox};
use crate::shared::date_utils::today;
use crate::shared::export::{default_export_name, export_file};
use crate::shared::icons::icon;
use crate::shared::import::{ImportButton, ImportReport};
use crate::shared::list_controller::ListState;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal::{confirm, use_modal};
use crate::shared::query_cache::{use_query_cache, Mutation, QueryKey};
use crate::shared::toast::use_toast;
use contracts::domain::common::{Record, RecordId};
use contracts::shared::import_result::ImportResult;
use contracts::shared::list_params::NoFilter;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thaw::*;

/// List screen of a reference entity: search, sort, pagination, bulk delete,
/// create/edit in a modal, Excel import and export.
#[component]
pub fn CrudListPage<T>(descriptor: &'static EntityDescriptor<T>) -> impl IntoView
where
    T: Record + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    let cache = use_query_cache();
    let toast = use_toast();
    let modal = use_modal();
    let entity = descriptor.entity_key();

    let state = RwSignal::new(
        ListState::<NoFilter>::new(descriptor.page_size).sorted_by(descriptor.default_sort, true),
    );
    let items = RwSignal::new(Vec::<T>::new());
    let loading = RwSignal::new(false);
    let load_error = RwSignal::new(None::<String>);
    let import_result = RwSignal::new(None::<ImportResult>);
    let busy = RwSignal::new(false);

    let invalidate = move || {
        cache.invalidate(&Mutation::Reference {
            entity: entity.to_string(),
        })
    };

    // Refetch whenever a write invalidates this entity
    Effect::new(move |_| {
        let revision = cache.revision(entity);
        loading.set(true);
        spawn_local(async move {
            let result = cache
                .fetch::<Vec<T>>(QueryKey::all(entity), ApiRequest::get(descriptor.endpoint))
                .await;
            match result {
                Ok(rows) => {
                    log!("{}: {} rows (rev {})", entity, rows.len(), revision);
                    items.set(rows);
                    load_error.set(None);
                }
                Err(e) => load_error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        state.with(|s| {
            items.with(|rows| {
                descriptor.visible_rows(rows, s.search_text(), &s.sort_field, s.sort_ascending)
            })
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

    let open_form = move |row: Option<T>| {
        let saving = RwSignal::new(false);
        let title = match &row {
            Some(r) => format!("Ubah {}: {}", descriptor.singular, r.display_name()),
            None => format!("Tambah {}", descriptor.singular),
        };
        modal.open_guarded(
            title,
            move || !saving.get_untracked(),
            move |handle| {
                view! {
                    <EntityForm
                        descriptor=descriptor
                        row=row.clone()
                        saving=saving
                        on_saved=Callback::new(move |_| handle.close())
                        on_cancel=Callback::new(move |_| handle.close())
                    />
                }
                .into_any()
            },
        );
    };

    let delete_one = move |row: T| {
        if !confirm(&format!("Hapus {} \"{}\"?", descriptor.singular, row.display_name())) {
            return;
        }
        let id = row.record_id();
        spawn_local(async move {
            match send(ApiRequest::delete(descriptor.item_endpoint(id))).await {
                Ok(()) => {
                    toast.success(format!("{} dihapus", descriptor.singular));
                    invalidate();
                }
                Err(e) => toast.api_error("Gagal menghapus", &e),
            }
        });
    };

    let delete_selected = move |_| {
        let ids = state.with_untracked(|s| s.selected_ids());
        if ids.is_empty() || !confirm(&format!("Hapus {} data terpilih?", ids.len())) {
            return;
        }
        busy.set(true);
        spawn_local(async move {
            let total = ids.len();
            let mut failed = 0;
            for id in ids {
                if let Err(e) = send(ApiRequest::delete(descriptor.item_endpoint(id))).await {
                    log::warn!("delete {}/{} failed: {}", entity, id, e);
                    failed += 1;
                }
            }
            busy.set(false);
            state.update(|s| s.clear_selection());
            invalidate();
            if failed == 0 {
                toast.success(format!("{} data dihapus", total));
            } else {
                toast.warning(
                    "Sebagian gagal dihapus",
                    format!("{} dari {} data gagal dihapus", failed, total),
                );
            }
        });
    };

    let export = move |_| {
        busy.set(true);
        spawn_local(async move {
            let endpoint = format!("{}/export", descriptor.endpoint);
            let fallback = default_export_name(entity, today());
            match export_file::<NoFilter>(&endpoint, None, &fallback).await {
                Ok(name) => toast.success(format!("File {} diunduh", name)),
                Err(e) => toast.api_error("Export gagal", &e),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader title=descriptor.title>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_form(None)>
                    {icon("plus")}
                    "Tambah"
                </Button>
                {descriptor.excel.then(|| view! {
                    <ImportButton
                        endpoint=descriptor.endpoint
                        on_imported=Callback::new(move |result: ImportResult| {
                            import_result.set(Some(result));
                            invalidate();
                        })
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || busy.get())
                        on_click=export
                    >
                        {icon("download")}
                        "Export Excel"
                    </Button>
                })}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| invalidate()>
                    {icon("refresh")}
                    "Muat ulang"
                </Button>
            </PageHeader>

            <ImportReport
                result=import_result
                on_close=Callback::new(move |_| import_result.set(None))
            />

            <div class="list-toolbar">
                <SearchInput
                    value=search_text
                    on_change=Callback::new(move |q: String| state.update(|s| s.set_search(&q)))
                    placeholder=format!("Cari {}...", descriptor.singular.to_lowercase())
                />
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
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || busy.get() || state.with(|s| !s.has_selection()))
                    on_click=delete_selected
                >
                    {icon("delete")}
                    {move || format!("Hapus ({})", state.with(|s| s.selection_count()))}
                </Button>
            </SelectionBar>

            {move || load_error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>
                        <MessageBarTitle>"Gagal memuat data"</MessageBarTitle>
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
                            {descriptor.columns.iter().map(|column| view! {
                                <SortableHeaderCell
                                    label=column.label
                                    sort_field=column.key
                                    current_sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                                    sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
                                    on_sort=Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)))
                                />
                            }).collect_view()}
                            <TableHeaderCell resizable=false>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = page_rows();
                            if rows.is_empty() {
                                let text = if loading.get() { "Memuat..." } else { "Tidak ada data" };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan={(descriptor.columns.len() + 2).to_string()}>
                                            <div class="table__empty">{text}</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            let query = search_text.get();
                            rows.into_iter()
                                .map(|row| {
                                    let id = row.record_id();
                                    let for_edit = row.clone();
                                    let for_delete = row.clone();
                                    let cells = descriptor
                                        .columns
                                        .iter()
                                        .map(|column| {
                                            let value = (column.value)(&row);
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
                                    view! {
                                        <TableRow
                                            class:table__row--selected=move || state.with(|s| s.is_selected(id))
                                            on:dblclick=move |_| open_form(Some(for_edit.clone()))
                                        >
                                            <TableCheckbox
                                                checked=Signal::derive(move || state.with(|s| s.is_selected(id)))
                                                on_change=Callback::new(move |checked| state.update(|s| s.toggle_row(id, checked)))
                                            />
                                            {cells}
                                            <TableCell>
                                                <div class="table__row-actions">
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click={
                                                            let row = row.clone();
                                                            move |_| open_form(Some(row.clone()))
                                                        }
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| delete_one(for_delete.clone())
                                                    >
                                                        {icon("delete")}
                                                    </Button>
                                                </div>
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
