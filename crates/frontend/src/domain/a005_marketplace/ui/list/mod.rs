use crate::shared::config::page_size;
use crate::shared::crud::list::CrudListPage;
use crate::shared::crud::{checked, CellValue, Column, EntityDescriptor, FieldKind, FieldSpec};
use contracts::domain::a005_marketplace::aggregate::{Marketplace, MarketplaceDto, ENDPOINT};
use leptos::prelude::*;

static DESCRIPTOR: EntityDescriptor<Marketplace> = EntityDescriptor {
    title: "Marketplace",
    singular: "Marketplace",
    endpoint: ENDPOINT,
    columns: &[
        Column {
            key: "nama_marketplace",
            label: "Nama",
            value: |m| CellValue::text(&m.name),
            searchable: true,
        },
        Column {
            key: "url",
            label: "URL",
            value: |m| CellValue::opt_text(m.url.as_deref()),
            searchable: true,
        },
    ],
    fields: &[
        FieldSpec::new("nama_marketplace", "Nama marketplace", FieldKind::Text),
        FieldSpec::new("url", "URL", FieldKind::Text).placeholder("https://"),
    ],
    page_size: page_size::REFERENCE,
    default_sort: "nama_marketplace",
    excel: false,
    validate: |body, _| checked::<MarketplaceDto, _>(body, MarketplaceDto::validate),
};

#[component]
#[allow(non_snake_case)]
pub fn MarketplaceList() -> impl IntoView {
    view! { <CrudListPage descriptor=&DESCRIPTOR /> }
}
