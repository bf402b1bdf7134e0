use crate::shared::icons::icon;
use leptos::prelude::*;

/// First / previous / next / last buttons around a `page / pages (total)` label.
///
/// Pages are 0-indexed; the label is 1-indexed. Page sizes are fixed per screen.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_start
                title="Halaman pertama"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=at_start
                title="Halaman sebelumnya"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=at_end
                title="Halaman berikutnya"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().saturating_sub(1))
                disabled=at_end
                title="Halaman terakhir"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
