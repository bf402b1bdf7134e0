use crate::shared::components::table::format_number_int;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard tile: icon, label and a count. `None` renders as a placeholder while loading.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    #[prop(into)] value: Signal<Option<usize>>,
    /// "primary", "success", "warning", "error" or empty
    #[prop(optional, into)]
    tone: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = if tone.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", tone)
    };
    let formatted = move || match value.get() {
        Some(v) => format_number_int(v as f64),
        None => "…".to_string(),
    };

    view! {
        <div
            class=class
            class:stat-card--clickable=on_click.is_some()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
