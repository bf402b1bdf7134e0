use serde::{Deserialize, Serialize};

/// Direction of a stock transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockMovement {
    Masuk,
    Keluar,
    Penyesuaian,
}

impl StockMovement {
    pub const ALL: [StockMovement; 3] = [
        StockMovement::Masuk,
        StockMovement::Keluar,
        StockMovement::Penyesuaian,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            StockMovement::Masuk => "masuk",
            StockMovement::Keluar => "keluar",
            StockMovement::Penyesuaian => "penyesuaian",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockMovement::Masuk => "Stok masuk",
            StockMovement::Keluar => "Stok keluar",
            StockMovement::Penyesuaian => "Penyesuaian",
        }
    }

    /// Adjustments may carry a negative quantity; in/out movements may not.
    pub fn allows_negative(&self) -> bool {
        matches!(self, StockMovement::Penyesuaian)
    }
}
