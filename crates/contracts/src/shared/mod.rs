pub mod api_error_body;
pub mod bulk;
pub mod import_result;
pub mod list_params;
pub mod validation;
