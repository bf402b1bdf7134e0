pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud;
pub mod date_utils;
pub mod debounce;
pub mod export;
pub mod icons;
pub mod import;
pub mod list_controller;
pub mod list_utils;
pub mod modal;
pub mod pipeline;
pub mod query_cache;
pub mod selection_store;
pub mod toast;
