pub mod context;
pub mod cookies;
pub mod guard;
