use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Row checkbox cell. Clicks do not reach the row's own handler.
#[component]
pub fn TableCheckbox(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                prop:disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableCell>
    }
}

/// Page checkbox in the header: checked when the whole page is selected,
/// indeterminate when only part of it is.
#[component]
pub fn HeaderCheckbox(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] indeterminate: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let partial = indeterminate.get() && !checked.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                el.set_indeterminate(partial);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Pilih halaman ini"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
