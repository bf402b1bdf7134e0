use serde::{Deserialize, Serialize};

/// Order lifecycle as exposed by `PATCH /pesanan/:id/status`.
///
/// Main flow: pending → printed → packed → shipped → completed.
/// `Cancelled` and `Returned` are side exits. Which transitions are legal is
/// decided by the backend; the client only suggests [`OrderStatus::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Printed,
    Packed,
    Shipped,
    Completed,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Printed,
        OrderStatus::Packed,
        OrderStatus::Shipped,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
        OrderStatus::Returned,
    ];

    /// Statuses of the main flow, in order. Used for the tabs of the orders screen.
    pub const MAIN_FLOW: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Printed,
        OrderStatus::Packed,
        OrderStatus::Shipped,
        OrderStatus::Completed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Printed => "printed",
            OrderStatus::Packed => "packed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Returned => "returned",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Menunggu",
            OrderStatus::Printed => "Dicetak",
            OrderStatus::Packed => "Dipacking",
            OrderStatus::Shipped => "Dikirim",
            OrderStatus::Completed => "Selesai",
            OrderStatus::Cancelled => "Dibatalkan",
            OrderStatus::Returned => "Retur",
        }
    }

    /// Next status in the main flow, `None` for terminal and side-exit statuses.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Printed),
            OrderStatus::Printed => Some(OrderStatus::Packed),
            OrderStatus::Packed => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::Returned => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::Returned
        )
    }

    /// Position in the main flow; side exits have none.
    pub fn flow_index(&self) -> Option<usize> {
        Self::MAIN_FLOW.iter().position(|s| s == self)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Fulfillment stages that consume a ready queue and take bulk actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Print,
    Pack,
    Ship,
    /// Reconciliation pass outside the print → pack → ship flow.
    Sweep,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 4] = [
        PipelineStage::Print,
        PipelineStage::Pack,
        PipelineStage::Ship,
        PipelineStage::Sweep,
    ];

    /// REST collection of the stage records.
    pub fn endpoint(&self) -> &'static str {
        match self {
            PipelineStage::Print => "/pencetakan",
            PipelineStage::Pack => "/packing",
            PipelineStage::Ship => "/pengiriman",
            PipelineStage::Sweep => "/proses",
        }
    }

    /// Server-computed list of orders eligible for this stage.
    pub fn ready_endpoint(&self) -> String {
        format!("{}/ready", self.endpoint())
    }

    pub fn export_endpoint(&self) -> String {
        format!("{}/export", self.endpoint())
    }

    /// Status an order must have to appear in the ready queue.
    /// Sweeping picks its candidates server-side from any non-terminal status.
    pub fn input_status(&self) -> Option<OrderStatus> {
        match self {
            PipelineStage::Print => Some(OrderStatus::Pending),
            PipelineStage::Pack => Some(OrderStatus::Printed),
            PipelineStage::Ship => Some(OrderStatus::Packed),
            PipelineStage::Sweep => None,
        }
    }

    /// Status reached after the bulk action succeeds.
    pub fn output_status(&self) -> Option<OrderStatus> {
        self.input_status().and_then(|s| s.next())
    }

    /// Whether the selection of this stage survives a page refresh.
    pub fn persists_selection(&self) -> bool {
        !matches!(self, PipelineStage::Sweep)
    }

    pub fn title(&self) -> &'static str {
        match self {
            PipelineStage::Print => "Pencetakan",
            PipelineStage::Pack => "Packing",
            PipelineStage::Ship => "Pengiriman",
            PipelineStage::Sweep => "Sweeping",
        }
    }

    /// Label of the bulk action button.
    pub fn action_label(&self) -> &'static str {
        match self {
            PipelineStage::Print => "Cetak",
            PipelineStage::Pack => "Packing",
            PipelineStage::Ship => "Kirim",
            PipelineStage::Sweep => "Sweep",
        }
    }

    /// Key used for the query cache and local storage.
    pub fn entity_key(&self) -> &'static str {
        self.endpoint().trim_start_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_flow_is_chained_by_next() {
        for pair in OrderStatus::MAIN_FLOW.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
        assert_eq!(OrderStatus::Completed.next(), None);
        assert_eq!(OrderStatus::Cancelled.next(), None);
    }

    #[test]
    fn test_code_roundtrip_and_serde_names() {
        for s in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_code(s.code()), Some(s));
        }
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipped).unwrap(),
            "\"shipped\""
        );
        assert_eq!(OrderStatus::from_code("lost"), None);
    }

    #[test]
    fn test_side_exits_have_no_flow_index() {
        assert_eq!(OrderStatus::Pending.flow_index(), Some(0));
        assert_eq!(OrderStatus::Returned.flow_index(), None);
        assert!(OrderStatus::Returned.is_terminal());
        assert!(!OrderStatus::Packed.is_terminal());
    }

    #[test]
    fn test_stage_statuses() {
        assert_eq!(PipelineStage::Print.input_status(), Some(OrderStatus::Pending));
        assert_eq!(PipelineStage::Print.output_status(), Some(OrderStatus::Printed));
        assert_eq!(PipelineStage::Ship.output_status(), Some(OrderStatus::Shipped));
        assert_eq!(PipelineStage::Sweep.input_status(), None);
        assert_eq!(PipelineStage::Sweep.output_status(), None);
    }

    #[test]
    fn test_stage_endpoints() {
        assert_eq!(PipelineStage::Pack.ready_endpoint(), "/packing/ready");
        assert_eq!(PipelineStage::Sweep.entity_key(), "proses");
        assert!(PipelineStage::Ship.persists_selection());
        assert!(!PipelineStage::Sweep.persists_selection());
    }
}
