use crate::shared::crud::{CellValue, Column};
use crate::shared::pipeline::StagePage;
use contracts::domain::a012_shipping::aggregate::ShippingRecord;
use contracts::enums::order_status::PipelineStage;
use leptos::prelude::*;

const COLUMNS: &[Column<ShippingRecord>] = &[
    Column {
        key: "waktu",
        label: "Waktu",
        value: |r| CellValue::Time(r.at),
        searchable: false,
    },
    Column {
        key: "no_pesanan",
        label: "No pesanan",
        value: |r| CellValue::text(&r.order_number),
        searchable: true,
    },
    Column {
        key: "no_resi",
        label: "No resi",
        value: |r| CellValue::opt_text(r.tracking_number.as_deref()),
        searchable: true,
    },
    Column {
        key: "nama_jasa",
        label: "Jasa pengiriman",
        value: |r| CellValue::opt_text(r.nama_jasa.as_deref()),
        searchable: true,
    },
    Column {
        key: "dikirim_oleh",
        label: "Dikirim oleh",
        value: |r| CellValue::text(&r.operator),
        searchable: true,
    },
];

#[component]
#[allow(non_snake_case)]
pub fn ShippingPage() -> impl IntoView {
    view! {
        <StagePage
            stage=PipelineStage::Ship
            subtitle="Serahkan pesanan yang sudah dipacking ke kurir"
            history_columns=COLUMNS
        />
    }
}
