//! Wire contracts shared between the dashboard frontend and the fulfillment REST API.
//!
//! Field names follow the backend's JSON keys through `serde(rename)`; Rust names are English.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
