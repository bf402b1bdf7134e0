use crate::shared::list_utils::{cmp_opt, cmp_text, sort_list, Sortable};
use contracts::domain::a009_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use std::cmp::Ordering;
use std::collections::HashMap;

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "no_pesanan" => cmp_text(&self.order_number, &other.order_number),
            "nama_pembeli" => cmp_opt(self.nama_pembeli.as_ref(), other.nama_pembeli.as_ref()),
            "nama_marketplace" => cmp_opt(
                self.nama_marketplace.as_ref(),
                other.nama_marketplace.as_ref(),
            ),
            "nama_brand" => cmp_opt(self.nama_brand.as_ref(), other.nama_brand.as_ref()),
            "no_resi" => cmp_opt(self.tracking_number.as_ref(), other.tracking_number.as_ref()),
            // Side exits sort after the main flow
            "status" => status_rank(self.status).cmp(&status_rank(other.status)),
            "total" => self.total().partial_cmp(&other.total()).unwrap_or(Ordering::Equal),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => Ordering::Equal,
        }
    }
}

fn status_rank(status: OrderStatus) -> usize {
    status
        .flow_index()
        .or_else(|| OrderStatus::ALL.iter().position(|s| *s == status))
        .unwrap_or(usize::MAX)
}

/// Tabs of the orders screen: every order, or one main-flow status.
pub fn tabs() -> Vec<Option<OrderStatus>> {
    std::iter::once(None)
        .chain(OrderStatus::MAIN_FLOW.iter().copied().map(Some))
        .collect()
}

pub fn tab_label(tab: Option<OrderStatus>) -> &'static str {
    tab.map(|s| s.label()).unwrap_or("Semua")
}

/// Rows of the active tab in display order.
pub fn visible_orders(
    rows: &[Order],
    tab: Option<OrderStatus>,
    sort_field: &str,
    ascending: bool,
) -> Vec<Order> {
    let mut visible: Vec<Order> = rows
        .iter()
        .filter(|o| tab.map_or(true, |status| o.status == status))
        .cloned()
        .collect();
    sort_list(&mut visible, sort_field, ascending);
    visible
}

pub fn count_by_status(rows: &[Order]) -> HashMap<OrderStatus, usize> {
    let mut counts = HashMap::new();
    for order in rows {
        *counts.entry(order.status).or_insert(0) += 1;
    }
    counts
}

/// Options of the status dropdown: every status, the suggested next one marked.
pub fn status_options(current: OrderStatus) -> Vec<(OrderStatus, String)> {
    let suggested = current.next();
    OrderStatus::ALL
        .iter()
        .map(|&status| {
            let label = if Some(status) == suggested {
                format!("{} (disarankan)", status.label())
            } else {
                status.label().to_string()
            };
            (status, label)
        })
        .collect()
}

/// Status picked in a row's dropdown, if it differs from the stored one.
pub fn requested_status(current: OrderStatus, picked: &str) -> Option<OrderStatus> {
    OrderStatus::from_code(picked).filter(|next| *next != current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(id: i64, number: &str, status: OrderStatus, hour: u32) -> Order {
        Order {
            id,
            order_number: number.into(),
            marketplace_id: None,
            nama_marketplace: None,
            customer_id: None,
            nama_pembeli: Some(format!("Pembeli {}", id)),
            brand_id: None,
            nama_brand: None,
            jasa_pengiriman_id: None,
            nama_jasa: None,
            tracking_number: None,
            status,
            items: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_tabs_start_with_all() {
        let tabs = tabs();
        assert_eq!(tabs.len(), 1 + OrderStatus::MAIN_FLOW.len());
        assert_eq!(tab_label(tabs[0]), "Semua");
        assert_eq!(tabs[1], Some(OrderStatus::Pending));
    }

    #[test]
    fn test_visible_orders_by_tab_newest_first() {
        let rows = vec![
            order(1, "INV-1", OrderStatus::Pending, 8),
            order(2, "INV-2", OrderStatus::Packed, 9),
            order(3, "INV-3", OrderStatus::Pending, 10),
        ];
        let pending = visible_orders(&rows, Some(OrderStatus::Pending), "created_at", false);
        assert_eq!(pending.iter().map(|o| o.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(visible_orders(&rows, None, "", true).len(), 3);
    }

    #[test]
    fn test_status_sort_follows_flow() {
        let rows = vec![
            order(1, "A", OrderStatus::Cancelled, 8),
            order(2, "B", OrderStatus::Shipped, 8),
            order(3, "C", OrderStatus::Pending, 8),
        ];
        let sorted = visible_orders(&rows, None, "status", true);
        assert_eq!(sorted.iter().map(|o| o.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_status_options_mark_next() {
        let options = status_options(OrderStatus::Printed);
        assert_eq!(options.len(), OrderStatus::ALL.len());
        let packed = options.iter().find(|(s, _)| *s == OrderStatus::Packed).unwrap();
        assert_eq!(packed.1, "Dipacking (disarankan)");
        assert!(status_options(OrderStatus::Completed)
            .iter()
            .all(|(_, label)| !label.contains("disarankan")));
    }

    #[test]
    fn test_requested_status_ignores_unchanged_and_unknown() {
        assert_eq!(
            requested_status(OrderStatus::Printed, "packed"),
            Some(OrderStatus::Packed)
        );
        assert_eq!(requested_status(OrderStatus::Printed, "printed"), None);
        assert_eq!(requested_status(OrderStatus::Printed, "hilang"), None);
        // A failed change leaves the row on its stored status
        assert_eq!(
            requested_status(OrderStatus::Printed, OrderStatus::Printed.code()),
            None
        );
    }

    #[test]
    fn test_count_by_status() {
        let rows = vec![
            order(1, "A", OrderStatus::Pending, 8),
            order(2, "B", OrderStatus::Pending, 8),
            order(3, "C", OrderStatus::Returned, 8),
        ];
        let counts = count_by_status(&rows);
        assert_eq!(counts[&OrderStatus::Pending], 2);
        assert_eq!(counts[&OrderStatus::Returned], 1);
        assert!(!counts.contains_key(&OrderStatus::Shipped));
    }
}
