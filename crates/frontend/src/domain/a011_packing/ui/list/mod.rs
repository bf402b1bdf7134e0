use crate::shared::crud::{CellValue, Column};
use crate::shared::pipeline::StagePage;
use contracts::domain::a011_packing::aggregate::PackingRecord;
use contracts::enums::order_status::PipelineStage;
use leptos::prelude::*;

const COLUMNS: &[Column<PackingRecord>] = &[
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
        key: "dipacking_oleh",
        label: "Dipacking oleh",
        value: |r| CellValue::text(&r.operator),
        searchable: true,
    },
];

#[component]
#[allow(non_snake_case)]
pub fn PackingPage() -> impl IntoView {
    view! {
        <StagePage
            stage=PipelineStage::Pack
            subtitle="Pesanan yang labelnya sudah dicetak"
            history_columns=COLUMNS
        />
    }
}
