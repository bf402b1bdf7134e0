//! Request factory for the fulfillment REST API.
//!
//! Every screen describes its call as an [`ApiRequest`] (method, endpoint, optional
//! query string, optional body, expected response kind) and hands it to one of
//! [`fetch_json`], [`fetch_blob`] or [`send`]. Failures come back as [`ApiError`]
//! with the three categories the UI distinguishes for toast text.

use crate::shared::config::AppConfig;
use contracts::shared::api_error_body::extract_error_message;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request was issued but no response arrived.
    #[error("Tidak dapat terhubung ke server: {0}")]
    Network(String),
    /// Anything that failed on the client side.
    #[error("Terjadi kesalahan tak terduga: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Builds a server error from the status and raw body text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_error_message(body).unwrap_or_else(|| match status {
            401 => "Sesi berakhir, silakan login kembali".to_string(),
            403 => "Anda tidak memiliki akses untuk aksi ini".to_string(),
            404 => "Data tidak ditemukan".to_string(),
            _ => format!("HTTP {}", status),
        });
        ApiError::Server { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }

    /// Heading of the toast shown for this error.
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Server { .. } if self.is_unauthorized() => "Sesi berakhir",
            ApiError::Server { status, .. } if *status >= 500 => "Server error",
            ApiError::Server { .. } => "Permintaan ditolak",
            ApiError::Network(_) => "Koneksi gagal",
            ApiError::Unexpected(_) => "Kesalahan aplikasi",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Unexpected(format!("format data tidak valid: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

/// What the caller expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Json,
    /// Opaque file download (Excel export). Never parsed.
    Blob,
    Empty,
}

pub enum RequestBody {
    None,
    Json(String),
    Multipart(web_sys::FormData),
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestBody::None => f.write_str("None"),
            RequestBody::Json(s) => write!(f, "Json({} bytes)", s.len()),
            RequestBody::Multipart(_) => f.write_str("Multipart"),
        }
    }
}

#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: String,
    pub query: Option<String>,
    pub body: RequestBody,
    pub response: ResponseKind,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: None,
            body: RequestBody::None,
            response: ResponseKind::Json,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Post, endpoint)
    }

    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Patch, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Delete, endpoint).expect_empty()
    }

    /// GET of a file download.
    pub fn export(endpoint: impl Into<String>) -> Self {
        Self::get(endpoint).expect_blob()
    }

    /// Encodes `params` as the query string. Unset optional fields are omitted.
    pub fn query<Q: Serialize>(mut self, params: &Q) -> Result<Self, ApiError> {
        let qs = serde_qs::to_string(params)
            .map_err(|e| ApiError::Unexpected(format!("query tidak valid: {}", e)))?;
        self.query = if qs.is_empty() { None } else { Some(qs) };
        Ok(self)
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = RequestBody::Json(serde_json::to_string(body)?);
        Ok(self)
    }

    pub fn multipart(mut self, form: web_sys::FormData) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn expect_blob(mut self) -> Self {
        self.response = ResponseKind::Blob;
        self
    }

    pub fn expect_empty(mut self) -> Self {
        self.response = ResponseKind::Empty;
        self
    }

    /// Endpoint plus query string, relative to the API base.
    pub fn path(&self) -> String {
        match self.query.as_deref() {
            Some(q) if !q.is_empty() => format!("{}?{}", self.endpoint, q),
            _ => self.endpoint.clone(),
        }
    }

    fn builder(&self, url: &str) -> RequestBuilder {
        let builder = match self.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        let accept = match self.response {
            ResponseKind::Blob => "application/octet-stream, application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ResponseKind::Json | ResponseKind::Empty => "application/json",
        };
        // Session cookies are set by the auth service on the API domain
        builder
            .credentials(RequestCredentials::Include)
            .header("Accept", accept)
    }
}

/// Raw file returned by an export endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobPayload {
    pub bytes: Vec<u8>,
    pub content_type: String,
    /// Name suggested by `Content-Disposition`, if any.
    pub filename: Option<String>,
}

async fn dispatch(request: ApiRequest) -> Result<Response, ApiError> {
    let url = AppConfig::load().url(&request.path());
    let builder = request.builder(&url);

    let prepared = match request.body {
        RequestBody::None => builder.build(),
        RequestBody::Json(body) => builder.header("Content-Type", "application/json").body(body),
        // The browser sets the multipart boundary itself
        RequestBody::Multipart(form) => builder.body(form),
    }
    .map_err(|e| ApiError::Unexpected(e.to_string()))?;

    let response = prepared.send().await.map_err(|e| {
        log::warn!("{:?} {} failed: {}", request.method, url, e);
        ApiError::Network(e.to_string())
    })?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("{:?} {} -> HTTP {}", request.method, url, status);
        return Err(ApiError::from_response(status, &body));
    }
    Ok(response)
}

/// Sends a request and decodes its JSON body.
pub async fn fetch_json<T: DeserializeOwned>(request: ApiRequest) -> Result<T, ApiError> {
    debug_assert_eq!(request.response, ResponseKind::Json);
    let response = dispatch(request).await?;
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

/// Sends a request whose body is a file. The bytes are never interpreted.
pub async fn fetch_blob(request: ApiRequest) -> Result<BlobPayload, ApiError> {
    debug_assert_eq!(request.response, ResponseKind::Blob);
    let response = dispatch(request).await?;
    let headers = response.headers();
    let content_type = headers
        .get("content-type")
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let filename = headers
        .get("content-disposition")
        .and_then(|v| filename_from_disposition(&v));
    let bytes = response
        .binary()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(BlobPayload {
        bytes,
        content_type,
        filename,
    })
}

/// Sends a request and ignores any response body.
pub async fn send(request: ApiRequest) -> Result<(), ApiError> {
    dispatch(request).await.map(|_| ())
}

/// Sends a request whose success does not depend on the body; the body text is
/// returned for best-effort reading and is empty when it cannot be read.
pub async fn fetch_text(request: ApiRequest) -> Result<String, ApiError> {
    let response = dispatch(request).await?;
    Ok(response.text().await.unwrap_or_default())
}

/// `attachment; filename="pesanan.xlsx"` → `pesanan.xlsx`
pub fn filename_from_disposition(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::order_status::OrderStatus;
    use contracts::shared::list_params::{OrderFilter, SearchQuery};

    #[test]
    fn test_server_error_message_from_body() {
        let err = ApiError::from_response(422, r#"{"error": "Stok tidak cukup"}"#);
        assert_eq!(err.to_string(), "Stok tidak cukup");
        assert_eq!(err.title(), "Permintaan ditolak");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_server_error_fallbacks() {
        assert_eq!(ApiError::from_response(500, "").to_string(), "HTTP 500");
        assert_eq!(ApiError::from_response(500, "").title(), "Server error");
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert_eq!(ApiError::from_response(401, "").title(), "Sesi berakhir");
        assert_eq!(
            ApiError::from_response(404, "").to_string(),
            "Data tidak ditemukan"
        );
    }

    #[test]
    fn test_categories_have_distinct_titles() {
        let network = ApiError::Network("Failed to fetch".into());
        let unexpected = ApiError::Unexpected("boom".into());
        assert_ne!(network.title(), unexpected.title());
        assert!(network.to_string().contains("Failed to fetch"));
        assert_eq!(network.status(), None);
    }

    #[test]
    fn test_query_encoding_skips_unset_fields() {
        let filter = OrderFilter {
            status: Some(OrderStatus::Printed),
            brand_id: Some(4),
            ..Default::default()
        };
        let req = ApiRequest::get("/pesanan/filter").query(&filter).unwrap();
        assert_eq!(req.path(), "/pesanan/filter?status=printed&brand_id=4");
    }

    #[test]
    fn test_empty_query_leaves_path_untouched() {
        let req = ApiRequest::get("/pesanan/filter")
            .query(&OrderFilter::default())
            .unwrap();
        assert_eq!(req.query, None);
        assert_eq!(req.path(), "/pesanan/filter");
    }

    #[test]
    fn test_search_query_is_escaped() {
        let req = ApiRequest::get("/pesanan/search")
            .query(&SearchQuery::new("INV/01 budi"))
            .unwrap();
        let path = req.path();
        assert!(path.starts_with("/pesanan/search?q=INV"));
        assert!(!path.contains(' '));
    }

    #[test]
    fn test_export_requests_expect_blob() {
        assert_eq!(
            ApiRequest::export("/pesanan/export-filter").response,
            ResponseKind::Blob
        );
        assert_eq!(ApiRequest::delete("/brand/1").response, ResponseKind::Empty);
        assert_eq!(ApiRequest::get("/brand").response, ResponseKind::Json);
    }

    #[test]
    fn test_json_body_is_serialized() {
        let req = ApiRequest::patch("/pesanan/3/status")
            .json(&serde_json::json!({"status": "packed"}))
            .unwrap();
        match req.body {
            RequestBody::Json(s) => assert_eq!(s, r#"{"status":"packed"}"#),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_filename_from_disposition() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="pesanan_2024.xlsx""#).as_deref(),
            Some("pesanan_2024.xlsx")
        );
        assert_eq!(filename_from_disposition("inline"), None);
    }
}
