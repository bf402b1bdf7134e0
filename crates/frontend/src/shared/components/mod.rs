pub mod date_range_picker;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod selection_bar;
pub mod stat_card;
pub mod table;
pub mod table_checkbox;
pub mod ui;

pub use date_range_picker::DateRangePicker;
pub use filter_panel::{FilterPanel, FilterTag};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use selection_bar::SelectionBar;
pub use stat_card::StatCard;
pub use table_checkbox::{HeaderCheckbox, TableCheckbox};
