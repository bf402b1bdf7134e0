use super::number_format::format_rupiah;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned Rupiah cell. Missing values render as a dash.
#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Signal<Option<f64>>,
    #[prop(optional, default = false)] bold: bool,
) -> impl IntoView {
    let text = move || value.get().map(format_rupiah).unwrap_or_else(|| "—".to_string());
    let style = if bold {
        "text-align: right; font-weight: 600;"
    } else {
        "text-align: right;"
    };

    view! {
        <TableCell>
            <div class="table__cell-money" style=style>
                {text}
            </div>
        </TableCell>
    }
}
