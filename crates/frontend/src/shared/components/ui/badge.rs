use contracts::enums::order_status::OrderStatus;
use leptos::prelude::*;

fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Badge variant for an order status.
pub fn status_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "warning",
        OrderStatus::Printed | OrderStatus::Packed => "primary",
        OrderStatus::Shipped | OrderStatus::Completed => "success",
        OrderStatus::Cancelled | OrderStatus::Returned => "error",
    }
}

#[component]
pub fn OrderStatusBadge(#[prop(into)] status: Signal<OrderStatus>) -> impl IntoView {
    view! {
        <span class=move || {
            let s = status.get();
            format!("badge badge--status badge--status-{} {}", s.code(), variant_class(status_variant(s)))
        }>
            {move || status.get().label()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_exits_are_errors() {
        assert_eq!(status_variant(OrderStatus::Returned), "error");
        assert_eq!(status_variant(OrderStatus::Cancelled), "error");
        assert_eq!(status_variant(OrderStatus::Pending), "warning");
        assert_eq!(variant_class("unknown"), "badge--neutral");
    }
}
