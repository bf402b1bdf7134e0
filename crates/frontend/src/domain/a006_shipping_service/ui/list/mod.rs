use crate::shared::config::page_size;
use crate::shared::crud::list::CrudListPage;
use crate::shared::crud::{checked, CellValue, Column, EntityDescriptor, FieldKind, FieldSpec};
use contracts::domain::a006_shipping_service::aggregate::{
    ShippingService, ShippingServiceDto, ENDPOINT,
};
use leptos::prelude::*;

static DESCRIPTOR: EntityDescriptor<ShippingService> = EntityDescriptor {
    title: "Jasa Pengiriman",
    singular: "Jasa pengiriman",
    endpoint: ENDPOINT,
    columns: &[
        Column {
            key: "kode_jasa",
            label: "Kode",
            value: |s| CellValue::text(&s.code),
            searchable: true,
        },
        Column {
            key: "nama_jasa",
            label: "Nama jasa",
            value: |s| CellValue::text(&s.name),
            searchable: true,
        },
    ],
    fields: &[
        FieldSpec::new("nama_jasa", "Nama jasa", FieldKind::Text),
        FieldSpec::new("kode_jasa", "Kode jasa", FieldKind::Text).placeholder("mis. JNE"),
    ],
    page_size: page_size::REFERENCE,
    default_sort: "nama_jasa",
    excel: false,
    validate: |body, _| checked::<ShippingServiceDto, _>(body, ShippingServiceDto::validate),
};

#[component]
#[allow(non_snake_case)]
pub fn ShippingServiceList() -> impl IntoView {
    view! { <CrudListPage descriptor=&DESCRIPTOR /> }
}
