//! Tab titles, one place for every tab key the shell knows.

use contracts::enums::order_status::PipelineStage;

pub const HOME_TAB: &str = "d100_overview";
pub const ORDERS_TAB: &str = "a009_order";
pub const USERS_TAB: &str = "sys_users";

/// Tab key of a pipeline stage screen.
pub fn stage_tab_key(stage: PipelineStage) -> &'static str {
    match stage {
        PipelineStage::Print => "a010_printing",
        PipelineStage::Pack => "a011_packing",
        PipelineStage::Ship => "a012_shipping",
        PipelineStage::Sweep => "a013_sweeping",
    }
}

/// Readable title of a tab. Unknown keys get a generic title.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d100_overview" => "Ringkasan",

        "a001_brand" => "Brand",
        "a002_cooperation" => "Kerjasama",
        "a003_product" => "Produk",
        "a004_warehouse" => "Gudang",
        "a005_marketplace" => "Marketplace",
        "a006_shipping_service" => "Jasa Pengiriman",
        "a007_customer" => "Pelanggan",
        "a008_stock_transaction" => "Transaksi Stok",

        "a009_order" => "Pesanan",
        "a010_printing" => PipelineStage::Print.title(),
        "a011_packing" => PipelineStage::Pack.title(),
        "a012_shipping" => PipelineStage::Ship.title(),
        "a013_sweeping" => PipelineStage::Sweep.title(),

        "sys_users" => "Pengguna",

        _ => "Halaman",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_has_a_titled_tab() {
        for stage in PipelineStage::ALL {
            assert_eq!(tab_label_for_key(stage_tab_key(stage)), stage.title());
        }
    }

    #[test]
    fn test_unknown_key_gets_generic_title() {
        assert_eq!(tab_label_for_key("nope"), "Halaman");
        assert_eq!(tab_label_for_key(ORDERS_TAB), "Pesanan");
    }
}
