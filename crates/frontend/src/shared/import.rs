//! Excel import: the chosen file is posted as multipart field `file` to
//! `<entity>/import`; the backend parses it and answers with an [`ImportResult`].

use crate::shared::api_utils::{fetch_json, ApiError, ApiRequest};
use crate::shared::icons::icon;
use crate::shared::toast::{use_toast, ToastKind};
use contracts::shared::import_result::{ImportOutcome, ImportResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

pub const FILE_FIELD: &str = "file";
pub const ACCEPTED_TYPES: &str = ".xlsx,.xls";

pub fn import_endpoint(entity_endpoint: &str) -> String {
    format!("{}/import", entity_endpoint.trim_end_matches('/'))
}

pub async fn upload_import(
    entity_endpoint: &str,
    file: &web_sys::File,
) -> Result<ImportResult, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::Unexpected(format!("FormData: {:?}", e)))?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|e| ApiError::Unexpected(format!("FormData: {:?}", e)))?;
    let request = ApiRequest::post(import_endpoint(entity_endpoint)).multipart(form);
    fetch_json(request).await
}

/// Toast that summarizes an import.
pub fn toast_for(result: &ImportResult) -> (ToastKind, &'static str, String) {
    match result.outcome() {
        ImportOutcome::Success => (ToastKind::Success, "Import berhasil", result.summary()),
        ImportOutcome::Partial => (ToastKind::Warning, "Import sebagian", result.summary()),
        ImportOutcome::Failed => (ToastKind::Error, "Import gagal", result.summary()),
        ImportOutcome::Empty => (
            ToastKind::Info,
            "Import",
            "File tidak berisi baris data".to_string(),
        ),
    }
}

/// Button that picks an Excel file and uploads it.
///
/// `on_imported` runs after any response from the backend, including partial
/// failures, so the caller can refresh and show [`ImportReport`].
#[component]
pub fn ImportButton(
    #[prop(into)] endpoint: String,
    on_imported: Callback<ImportResult>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let toast = use_toast();
    let (busy, set_busy) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let endpoint = StoredValue::new(endpoint);
    let label = label.unwrap_or_else(|| "Import Excel".to_string());

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow picking the same file again
        input.set_value("");

        set_busy.set(true);
        let endpoint = endpoint.get_value();
        spawn_local(async move {
            match upload_import(&endpoint, &file).await {
                Ok(result) => {
                    let (kind, title, message) = toast_for(&result);
                    toast.show(kind, title, message);
                    on_imported.run(result);
                }
                Err(e) => toast.api_error("Import gagal", &e),
            }
            set_busy.set(false);
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Secondary
            disabled=Signal::derive(move || busy.get())
            on_click=move |_| {
                if let Some(input) = input_ref.get() {
                    input.click();
                }
            }
        >
            {icon("upload")}
            {move || if busy.get() { "Mengunggah...".to_string() } else { label.clone() }}
        </Button>
        <input
            node_ref=input_ref
            type="file"
            accept=ACCEPTED_TYPES
            class="hidden"
            on:change=on_change
        />
    }
}

/// Inline alert listing per-row errors of the last import.
#[component]
pub fn ImportReport(
    #[prop(into)] result: Signal<Option<ImportResult>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            result
                .get()
                .filter(|r| matches!(r.outcome(), ImportOutcome::Partial | ImportOutcome::Failed))
                .map(|r| {
                    let intent = if r.outcome() == ImportOutcome::Failed {
                        MessageBarIntent::Error
                    } else {
                        MessageBarIntent::Warning
                    };
                    let summary = r.summary();
                    let error_lines = r.error_lines();
                    view! {
                        <div class="import-report">
                            <MessageBar intent=intent>
                                <MessageBarBody>
                                    <MessageBarTitle>{summary}</MessageBarTitle>
                                    <ul class="import-report__errors">
                                        {error_lines
                                            .into_iter()
                                            .map(|line| view! { <li>{line}</li> })
                                            .collect_view()}
                                    </ul>
                                </MessageBarBody>
                                <MessageBarActions>
                                    <Button
                                        appearance=ButtonAppearance::Transparent
                                        size=ButtonSize::Small
                                        on_click=move |_| on_close.run(())
                                    >
                                        "Tutup"
                                    </Button>
                                </MessageBarActions>
                            </MessageBar>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ImportResult {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_import_endpoint() {
        assert_eq!(import_endpoint("/produk"), "/produk/import");
        assert_eq!(import_endpoint("/pesanan/"), "/pesanan/import");
    }

    #[test]
    fn test_partial_import_is_a_warning() {
        let result = parse(
            r#"{"success_count": 8, "failed_count": 2,
                "errors": [{"row": 3, "message": "SKU tidak dikenal"}, "Baris 7: jumlah kosong"]}"#,
        );
        let (kind, title, message) = toast_for(&result);
        assert_eq!(kind, ToastKind::Warning);
        assert_eq!(title, "Import sebagian");
        assert_eq!(message, "8 baris berhasil, 2 baris gagal");
    }

    #[test]
    fn test_full_failure_and_success() {
        let failed = parse(r#"{"success_count": 0, "failed_count": 1, "errors": ["format salah"]}"#);
        assert_eq!(toast_for(&failed).0, ToastKind::Error);

        let ok = parse(r#"{"success_count": 5, "failed_count": 0}"#);
        assert_eq!(toast_for(&ok).0, ToastKind::Success);

        let empty = parse("{}");
        assert_eq!(toast_for(&empty).0, ToastKind::Info);
    }
}
