use crate::domain::a009_order::ui::list::state::count_by_status;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{stage_tab_key, tab_label_for_key, ORDERS_TAB};
use crate::shared::api_utils::ApiRequest;
use crate::shared::components::ui::badge::status_variant;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::icons::icon;
use crate::shared::query_cache::{use_query_cache, QueryKey};
use contracts::domain::a009_order::aggregate::{Order, ENDPOINT};
use contracts::enums::order_status::{OrderStatus, PipelineStage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

/// Home screen: order counts per status and the size of each ready queue.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let cache = use_query_cache();
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let status_counts = RwSignal::new(None::<HashMap<OrderStatus, usize>>);
    let ready_counts = RwSignal::new(HashMap::<PipelineStage, usize>::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let _ = cache.revision(ENDPOINT);
        spawn_local(async move {
            match cache
                .fetch::<Vec<Order>>(QueryKey::all(ENDPOINT), ApiRequest::get(ENDPOINT))
                .await
            {
                Ok(rows) => {
                    status_counts.set(Some(count_by_status(&rows)));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load order counts: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    for stage in PipelineStage::ALL {
        Effect::new(move |_| {
            let _ = cache.revision(stage.entity_key());
            spawn_local(async move {
                match cache
                    .fetch::<Vec<Order>>(
                        QueryKey::ready(stage),
                        ApiRequest::get(stage.ready_endpoint()),
                    )
                    .await
                {
                    Ok(rows) => ready_counts.update(|c| {
                        c.insert(stage, rows.len());
                    }),
                    Err(e) => log::warn!("{} ready queue not loaded: {}", stage.title(), e),
                }
            });
        });
    }

    let open = move |key: &'static str| -> Callback<()> {
        Callback::new(move |_: ()| tabs_store.open_tab(key, tab_label_for_key(key)))
    };
    let total = Signal::derive(move || status_counts.with(|c| c.as_ref().map(|c| c.values().sum::<usize>())));
    let in_progress = Signal::derive(move || {
        status_counts.with(|c| {
            c.as_ref().map(|c| {
                c.iter()
                    .filter(|(status, _)| !status.is_terminal())
                    .map(|(_, n)| n)
                    .sum::<usize>()
            })
        })
    });

    view! {
        <div class="page page--dashboard">
            <PageHeader title="Ringkasan" subtitle="Kondisi pesanan dan antrian proses saat ini">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| open(ORDERS_TAB).run(())
                >
                    {icon("orders")}
                    "Buka pesanan"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>
                    <MessageBarBody>
                        <MessageBarTitle>"Gagal memuat ringkasan"</MessageBarTitle>
                        {e}
                    </MessageBarBody>
                </MessageBar>
            })}

            <h3 class="dashboard__section-title">"Pesanan per status"</h3>
            <div class="dashboard__grid">
                <StatCard
                    label="Semua pesanan"
                    icon_name="orders"
                    value=total
                    tone="primary"
                    on_click=open(ORDERS_TAB)
                />
                <StatCard
                    label="Dalam proses"
                    icon_name="refresh"
                    value=in_progress
                    subtitle="Belum selesai, batal atau retur"
                    on_click=open(ORDERS_TAB)
                />
                {OrderStatus::ALL
                    .into_iter()
                    .map(|status| view! {
                        <StatCard
                            label=status.label()
                            icon_name="clock"
                            value=Signal::derive(move || {
                                status_counts.with(|c| c.as_ref().map(|c| c.get(&status).copied().unwrap_or(0)))
                            })
                            tone=status_variant(status)
                            on_click=open(ORDERS_TAB)
                        />
                    })
                    .collect_view()}
            </div>

            <h3 class="dashboard__section-title">"Antrian siap proses"</h3>
            <div class="dashboard__grid">
                {PipelineStage::ALL
                    .into_iter()
                    .map(|stage| view! {
                        <StatCard
                            label=stage.title()
                            icon_name=stage_icon(stage)
                            value=Signal::derive(move || ready_counts.with(|c| c.get(&stage).copied()))
                            subtitle=format!("Siap {}", stage.action_label().to_lowercase())
                            on_click=open(stage_tab_key(stage))
                        />
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn stage_icon(stage: PipelineStage) -> &'static str {
    match stage {
        PipelineStage::Print => "printer",
        PipelineStage::Pack => "package",
        PipelineStage::Ship => "truck",
        PipelineStage::Sweep => "shuffle",
    }
}
