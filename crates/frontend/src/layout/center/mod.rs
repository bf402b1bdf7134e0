mod center;
mod tab_bar;

pub use center::Center;
pub use tab_bar::TabBar;
