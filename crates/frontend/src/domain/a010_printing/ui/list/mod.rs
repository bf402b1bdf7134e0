use crate::shared::crud::{CellValue, Column};
use crate::shared::pipeline::StagePage;
use contracts::domain::a010_printing::aggregate::PrintingRecord;
use contracts::enums::order_status::PipelineStage;
use leptos::prelude::*;

const COLUMNS: &[Column<PrintingRecord>] = &[
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
        key: "dicetak_oleh",
        label: "Dicetak oleh",
        value: |r| CellValue::text(&r.operator),
        searchable: true,
    },
];

#[component]
#[allow(non_snake_case)]
pub fn PrintingPage() -> impl IntoView {
    view! {
        <StagePage
            stage=PipelineStage::Print
            subtitle="Cetak label pesanan yang menunggu"
            history_columns=COLUMNS
        />
    }
}
