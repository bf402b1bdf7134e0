use super::{form_payload, initial_values, options_from_rows, EntityDescriptor, FieldKind, FieldSpec, FormValues, OptionSource};
use crate::shared::api_utils::{send, ApiRequest};
use crate::shared::query_cache::{use_query_cache, Mutation, QueryKey};
use crate::shared::toast::use_toast;
use contracts::domain::common::Record;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use thaw::*;

/// Create/edit form of one reference record.
///
/// `saving` is owned by the caller so the surrounding modal can refuse to close mid-request.
#[component]
pub fn EntityForm<T>(
    descriptor: &'static EntityDescriptor<T>,
    /// `None` creates a new record
    row: Option<T>,
    saving: RwSignal<bool>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView
where
    T: Record + Serialize + Clone + Send + Sync + 'static,
{
    let toast = use_toast();
    let cache = use_query_cache();
    let editing_id = row.as_ref().map(Record::record_id);
    let values = RwSignal::new(initial_values(descriptor.fields, row.as_ref()));
    let error = RwSignal::new(None::<String>);

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let creating = editing_id.is_none();
        let body = match form_payload(descriptor.fields, &values.get_untracked())
            .and_then(|body| (descriptor.validate)(body, creating))
        {
            Ok(body) => body,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };
        error.set(None);
        saving.set(true);

        spawn_local(async move {
            let request = match editing_id {
                Some(id) => ApiRequest::patch(descriptor.item_endpoint(id)),
                None => ApiRequest::post(descriptor.endpoint),
            };
            let result = match request.json(&body) {
                Ok(request) => send(request).await,
                Err(e) => Err(e),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    cache.invalidate(&Mutation::Reference {
                        entity: descriptor.entity_key().to_string(),
                    });
                    let verb = if creating { "ditambahkan" } else { "diperbarui" };
                    toast.success(format!("{} berhasil {}", descriptor.singular, verb));
                    on_saved.run(());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    toast.api_error("Gagal menyimpan", &e);
                }
            }
        });
    };

    view! {
        <form
            class="details-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <MessageBar intent=MessageBarIntent::Error>
                                <MessageBarBody>{e}</MessageBarBody>
                            </MessageBar>
                        }
                    })
            }}

            {descriptor
                .fields
                .iter()
                .map(|field| view! { <FormField field=*field values=values /> })
                .collect_view()}

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=move |_| submit()
                >
                    {move || {
                        if saving.get() {
                            "Menyimpan..."
                        } else if editing_id.is_some() {
                            "Simpan"
                        } else {
                            "Tambah"
                        }
                    }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || saving.get())
                    on_click=move |_| on_cancel.run(())
                >
                    "Batal"
                </Button>
            </div>
        </form>
    }
}

#[component]
fn FormField(field: FieldSpec, values: RwSignal<FormValues>) -> impl IntoView {
    let key = field.key;
    let value = move || values.with(|v| v.get(key).cloned().unwrap_or_default());
    let set = move |raw: String| {
        values.update(|v| {
            v.insert(key, raw);
        })
    };

    let input = match field.kind {
        FieldKind::Textarea => view! {
            <textarea
                id=key
                rows="3"
                placeholder=field.placeholder
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                type="checkbox"
                id=key
                prop:checked=move || value() == "true"
                on:change=move |ev| set(event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        FieldKind::Select(source) => view! {
            <SelectField
                id=key
                source=source
                value=Signal::derive(value)
                on_change=Callback::new(set)
            />
        }
        .into_any(),
        kind => {
            let (input_type, input_mode) = match kind {
                FieldKind::Password => ("password", "text"),
                FieldKind::Date => ("date", "text"),
                FieldKind::Integer => ("text", "numeric"),
                FieldKind::Decimal => ("text", "decimal"),
                _ => ("text", "text"),
            };
            view! {
                <input
                    type=input_type
                    inputmode=input_mode
                    id=key
                    placeholder=field.placeholder
                    prop:value=value
                    on:input=move |ev| set(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-group">
            <label for=key>{field.label}</label>
            {input}
        </div>
    }
}

/// `<select>` whose options come from a fixed list or another reference endpoint.
#[component]
fn SelectField(
    id: &'static str,
    source: OptionSource,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let cache = use_query_cache();
    let options = RwSignal::new(Vec::<(String, String)>::new());

    match source {
        OptionSource::Fixed(pairs) => options.set(
            pairs
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string()))
                .collect(),
        ),
        OptionSource::Endpoint {
            endpoint,
            label_key,
        } => spawn_local(async move {
            match cache
                .fetch::<Vec<serde_json::Value>>(QueryKey::all(endpoint), ApiRequest::get(endpoint))
                .await
            {
                Ok(rows) => options.set(options_from_rows(&rows, label_key)),
                Err(e) => log::warn!("options of {} not loaded: {}", endpoint, e),
            }
        }),
    }
    let needs_placeholder = matches!(source, OptionSource::Endpoint { .. });

    view! {
        <select id=id on:change=move |ev| on_change.run(event_target_value(&ev))>
            {needs_placeholder
                .then(|| view! { <option value="" selected=move || value.get().is_empty()>"-- Pilih --"</option> })}
            <For
                each=move || options.get()
                key=|(code, _)| code.clone()
                children=move |(code, label)| {
                    let selected_code = code.clone();
                    view! {
                        <option value=code selected=move || value.get() == selected_code>
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
