use crate::shared::crud::{CellValue, Column};
use crate::shared::pipeline::StagePage;
use contracts::domain::a013_sweeping::aggregate::SweepingRecord;
use contracts::enums::order_status::PipelineStage;
use leptos::prelude::*;

const COLUMNS: &[Column<SweepingRecord>] = &[
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
        key: "status_awal",
        label: "Status awal",
        value: |r| CellValue::text(r.status_before.label()),
        searchable: true,
    },
    Column {
        key: "status_akhir",
        label: "Status akhir",
        value: |r| CellValue::text(r.status_after.label()),
        searchable: true,
    },
    Column {
        key: "diproses_oleh",
        label: "Diproses oleh",
        value: |r| CellValue::text(&r.operator),
        searchable: true,
    },
    Column {
        key: "catatan",
        label: "Catatan",
        value: |r| CellValue::opt_text(r.note.as_deref()),
        searchable: false,
    },
];

/// Reconciliation pass; its selection is not kept across reloads.
#[component]
#[allow(non_snake_case)]
pub fn SweepingPage() -> impl IntoView {
    view! {
        <StagePage
            stage=PipelineStage::Sweep
            subtitle="Rekonsiliasi status pesanan di luar alur cetak, packing, kirim"
            history_columns=COLUMNS
        />
    }
}
