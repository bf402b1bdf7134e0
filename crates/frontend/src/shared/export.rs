/// Excel export: fetch the file produced by the backend and hand it to the browser.
///
/// Export endpoints are always requested as a blob; the body is never parsed.
use crate::shared::api_utils::{fetch_blob, ApiError, ApiRequest, BlobPayload};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// `GET <endpoint>` (optionally with a query) and download the result.
///
/// `fallback_name` is used when the response carries no `Content-Disposition`.
pub async fn export_file<Q: Serialize>(
    endpoint: &str,
    query: Option<&Q>,
    fallback_name: &str,
) -> Result<String, ApiError> {
    let mut request = ApiRequest::export(endpoint);
    if let Some(q) = query {
        request = request.query(q)?;
    }
    let payload = fetch_blob(request).await?;
    let filename = payload
        .filename
        .clone()
        .unwrap_or_else(|| fallback_name.to_string());
    download_payload(&payload, &filename).map_err(ApiError::Unexpected)?;
    log::info!("exported {} ({} bytes)", filename, payload.bytes.len());
    Ok(filename)
}

/// `<entity>_<yyyy-mm-dd>.xlsx`
pub fn default_export_name(entity: &str, today: chrono::NaiveDate) -> String {
    format!(
        "{}_{}.xlsx",
        entity.trim_start_matches('/').replace('-', "_"),
        today.format("%Y-%m-%d")
    )
}

fn download_payload(payload: &BlobPayload, filename: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(payload.bytes.as_slice()));

    let properties = BlobPropertyBag::new();
    properties.set_type(&payload.content_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    download_blob(&blob, filename)
}

/// Clicks a temporary anchor pointing at an object URL of `blob`.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_name() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
        assert_eq!(
            default_export_name("/jasa-pengiriman", day),
            "jasa_pengiriman_2024-05-07.xlsx"
        );
        assert_eq!(default_export_name("pesanan", day), "pesanan_2024-05-07.xlsx");
    }
}
