use crate::shared::config::page_size;
use crate::shared::crud::list::CrudListPage;
use crate::shared::crud::{checked, CellValue, Column, EntityDescriptor, FieldKind, FieldSpec};
use contracts::domain::a007_customer::aggregate::{Customer, CustomerDto, ENDPOINT};
use leptos::prelude::*;

static DESCRIPTOR: EntityDescriptor<Customer> = EntityDescriptor {
    title: "Pembeli",
    singular: "Pembeli",
    endpoint: ENDPOINT,
    columns: &[
        Column {
            key: "nama_pembeli",
            label: "Nama",
            value: |c| CellValue::text(&c.name),
            searchable: true,
        },
        Column {
            key: "no_hp",
            label: "No HP",
            value: |c| CellValue::text(&c.phone),
            searchable: true,
        },
        Column {
            key: "alamat",
            label: "Alamat",
            value: |c| CellValue::text(&c.address),
            searchable: true,
        },
    ],
    fields: &[
        FieldSpec::new("nama_pembeli", "Nama pembeli", FieldKind::Text),
        FieldSpec::new("no_hp", "No HP", FieldKind::Text).placeholder("08xxxxxxxxxx"),
        FieldSpec::new("alamat", "Alamat", FieldKind::Textarea),
    ],
    page_size: page_size::REFERENCE,
    default_sort: "nama_pembeli",
    excel: true,
    validate: |body, _| checked::<CustomerDto, _>(body, CustomerDto::validate),
};

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    view! { <CrudListPage descriptor=&DESCRIPTOR /> }
}
