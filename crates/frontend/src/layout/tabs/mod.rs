//! Tab management: the page wrapper, the key → screen registry and tab titles.

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{stage_tab_key, tab_label_for_key, HOME_TAB, ORDERS_TAB, USERS_TAB};
