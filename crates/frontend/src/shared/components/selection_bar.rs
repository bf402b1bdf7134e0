use crate::shared::list_controller::SelectionScope;
use leptos::prelude::*;
use thaw::*;

/// Bulk-selection summary shown above a table.
///
/// Offers "select page" and "select all results" and reports which scope is active.
#[component]
pub fn SelectionBar(
    #[prop(into)] selected: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] scope: Signal<SelectionScope>,
    on_select_page: Callback<()>,
    on_select_all: Callback<()>,
    on_clear: Callback<()>,
    /// Bulk action buttons rendered on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let summary = move || {
        let n = selected.get();
        match scope.get() {
            SelectionScope::All if n > 0 => format!("Semua {} hasil dipilih", n),
            SelectionScope::Page if n > 0 => format!("{} dipilih (halaman ini)", n),
            _ => format!("{} dipilih", n),
        }
    };

    view! {
        <div class="selection-bar" class:selection-bar--active={move || selected.get() > 0}>
            <span class="selection-bar__summary">{summary}</span>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| on_select_page.run(())
            >
                "Pilih halaman"
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                disabled=Signal::derive(move || total.get() == 0)
                on_click=move |_| on_select_all.run(())
            >
                {move || format!("Pilih semua ({})", total.get())}
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                disabled=Signal::derive(move || selected.get() == 0)
                on_click=move |_| on_clear.run(())
            >
                "Batal pilih"
            </Button>
            <div class="selection-bar__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
