use crate::shared::config::page_size;
use crate::shared::crud::list::CrudListPage;
use crate::shared::crud::{checked, CellValue, Column, EntityDescriptor, FieldKind, FieldSpec};
use contracts::domain::a004_warehouse::aggregate::{Warehouse, WarehouseDto, ENDPOINT};
use leptos::prelude::*;

static DESCRIPTOR: EntityDescriptor<Warehouse> = EntityDescriptor {
    title: "Gudang",
    singular: "Gudang",
    endpoint: ENDPOINT,
    columns: &[
        Column {
            key: "nama_gudang",
            label: "Nama gudang",
            value: |w| CellValue::text(&w.name),
            searchable: true,
        },
        Column {
            key: "alamat",
            label: "Alamat",
            value: |w| CellValue::text(&w.address),
            searchable: true,
        },
    ],
    fields: &[
        FieldSpec::new("nama_gudang", "Nama gudang", FieldKind::Text),
        FieldSpec::new("alamat", "Alamat", FieldKind::Textarea),
    ],
    page_size: page_size::REFERENCE,
    default_sort: "nama_gudang",
    excel: false,
    validate: |body, _| checked::<WarehouseDto, _>(body, WarehouseDto::validate),
};

#[component]
#[allow(non_snake_case)]
pub fn WarehouseList() -> impl IntoView {
    view! { <CrudListPage descriptor=&DESCRIPTOR /> }
}
