use crate::shared::config::page_size;
use crate::shared::crud::list::CrudListPage;
use crate::shared::crud::{
    checked, CellValue, Column, EntityDescriptor, FieldKind, FieldSpec, OptionSource,
};
use contracts::domain::a003_product::aggregate::ENDPOINT as PRODUCT_ENDPOINT;
use contracts::domain::a004_warehouse::aggregate::ENDPOINT as WAREHOUSE_ENDPOINT;
use contracts::domain::a008_stock_transaction::aggregate::{
    StockTransaction, StockTransactionDto, ENDPOINT,
};
use leptos::prelude::*;

const MOVEMENTS: &[(&str, &str)] = &[
    ("masuk", "Stok masuk"),
    ("keluar", "Stok keluar"),
    ("penyesuaian", "Penyesuaian"),
];

static DESCRIPTOR: EntityDescriptor<StockTransaction> = EntityDescriptor {
    title: "Transaksi Stok",
    singular: "Transaksi stok",
    endpoint: ENDPOINT,
    columns: &[
        Column {
            key: "tanggal",
            label: "Tanggal",
            value: |t| CellValue::Date(Some(t.date)),
            searchable: false,
        },
        Column {
            key: "nama_produk",
            label: "Produk",
            value: |t| CellValue::opt_text(t.nama_produk.as_deref()),
            searchable: true,
        },
        Column {
            key: "nama_gudang",
            label: "Gudang",
            value: |t| CellValue::opt_text(t.nama_gudang.as_deref()),
            searchable: true,
        },
        Column {
            key: "jenis",
            label: "Jenis",
            value: |t| CellValue::text(t.movement.label()),
            searchable: true,
        },
        Column {
            key: "jumlah",
            label: "Jumlah",
            value: |t| CellValue::Number(t.signed_quantity() as f64),
            searchable: false,
        },
        Column {
            key: "keterangan",
            label: "Keterangan",
            value: |t| CellValue::opt_text(t.note.as_deref()),
            searchable: true,
        },
    ],
    fields: &[
        FieldSpec::new(
            "produk_id",
            "Produk",
            FieldKind::Select(OptionSource::Endpoint {
                endpoint: PRODUCT_ENDPOINT,
                label_key: "nama_produk",
            }),
        ),
        FieldSpec::new(
            "gudang_id",
            "Gudang",
            FieldKind::Select(OptionSource::Endpoint {
                endpoint: WAREHOUSE_ENDPOINT,
                label_key: "nama_gudang",
            }),
        ),
        FieldSpec::new("jenis", "Jenis", FieldKind::Select(OptionSource::Fixed(MOVEMENTS))),
        FieldSpec::new("jumlah", "Jumlah", FieldKind::Integer),
        FieldSpec::new("tanggal", "Tanggal", FieldKind::Date),
        FieldSpec::new("keterangan", "Keterangan", FieldKind::Textarea),
    ],
    page_size: page_size::REFERENCE,
    default_sort: "tanggal",
    excel: false,
    validate: |body, _| checked::<StockTransactionDto, _>(body, StockTransactionDto::validate),
};

#[component]
#[allow(non_snake_case)]
pub fn StockTransactionList() -> impl IntoView {
    view! { <CrudListPage descriptor=&DESCRIPTOR /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::stock_movement::StockMovement;

    #[test]
    fn test_movement_options_match_codes() {
        let codes: Vec<&str> = MOVEMENTS.iter().map(|(c, _)| *c).collect();
        let expected: Vec<&str> = StockMovement::ALL.iter().map(|m| m.code()).collect();
        assert_eq!(codes, expected);
    }
}
