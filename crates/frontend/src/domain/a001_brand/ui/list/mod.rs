use crate::shared::config::page_size;
use crate::shared::crud::list::CrudListPage;
use crate::shared::crud::{checked, CellValue, Column, EntityDescriptor, FieldKind, FieldSpec};
use contracts::domain::a001_brand::aggregate::{Brand, BrandDto, ENDPOINT};
use leptos::prelude::*;

static DESCRIPTOR: EntityDescriptor<Brand> = EntityDescriptor {
    title: "Brand",
    singular: "Brand",
    endpoint: ENDPOINT,
    columns: &[
        Column {
            key: "kode_brand",
            label: "Kode",
            value: |b| CellValue::text(&b.code),
            searchable: true,
        },
        Column {
            key: "nama_brand",
            label: "Nama brand",
            value: |b| CellValue::text(&b.name),
            searchable: true,
        },
        Column {
            key: "deskripsi",
            label: "Deskripsi",
            value: |b| CellValue::opt_text(b.description.as_deref()),
            searchable: false,
        },
    ],
    fields: &[
        FieldSpec::new("nama_brand", "Nama brand", FieldKind::Text),
        FieldSpec::new("kode_brand", "Kode brand", FieldKind::Text).placeholder("mis. KK01"),
        FieldSpec::new("deskripsi", "Deskripsi", FieldKind::Textarea),
    ],
    page_size: page_size::REFERENCE,
    default_sort: "nama_brand",
    excel: true,
    validate: |body, _| checked::<BrandDto, _>(body, BrandDto::validate),
};

#[component]
#[allow(non_snake_case)]
pub fn BrandList() -> impl IntoView {
    view! { <CrudListPage descriptor=&DESCRIPTOR /> }
}
