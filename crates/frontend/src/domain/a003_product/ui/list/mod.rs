use crate::shared::config::page_size;
use crate::shared::crud::list::CrudListPage;
use crate::shared::crud::{
    checked, CellValue, Column, EntityDescriptor, FieldKind, FieldSpec, OptionSource,
};
use contracts::domain::a001_brand::aggregate::ENDPOINT as BRAND_ENDPOINT;
use contracts::domain::a003_product::aggregate::{Product, ProductDto, ENDPOINT};
use leptos::prelude::*;

fn stock_status(p: &Product) -> CellValue {
    CellValue::text(if p.is_low_stock() { "Menipis" } else { "Aman" })
}

static DESCRIPTOR: EntityDescriptor<Product> = EntityDescriptor {
    title: "Produk",
    singular: "Produk",
    endpoint: ENDPOINT,
    columns: &[
        Column {
            key: "sku",
            label: "SKU",
            value: |p| CellValue::text(&p.sku),
            searchable: true,
        },
        Column {
            key: "nama_produk",
            label: "Nama produk",
            value: |p| CellValue::text(&p.name),
            searchable: true,
        },
        Column {
            key: "nama_brand",
            label: "Brand",
            value: |p| CellValue::opt_text(p.nama_brand.as_deref()),
            searchable: true,
        },
        Column {
            key: "harga",
            label: "Harga",
            value: |p| CellValue::Money(p.price),
            searchable: false,
        },
        Column {
            key: "stok",
            label: "Stok",
            value: |p| CellValue::Number(p.stock as f64),
            searchable: false,
        },
        Column {
            key: "stok_minimum",
            label: "Stok min.",
            value: |p| CellValue::Number(p.min_stock as f64),
            searchable: false,
        },
        Column {
            key: "status_stok",
            label: "Status stok",
            value: stock_status,
            searchable: true,
        },
    ],
    fields: &[
        FieldSpec::new(
            "brand_id",
            "Brand",
            FieldKind::Select(OptionSource::Endpoint {
                endpoint: BRAND_ENDPOINT,
                label_key: "nama_brand",
            }),
        ),
        FieldSpec::new("sku", "SKU", FieldKind::Text),
        FieldSpec::new("nama_produk", "Nama produk", FieldKind::Text),
        FieldSpec::new("harga", "Harga (Rp)", FieldKind::Decimal).placeholder("mis. 125.000"),
        FieldSpec::new("stok_minimum", "Stok minimum", FieldKind::Integer).default_value("0"),
    ],
    page_size: page_size::REFERENCE,
    default_sort: "nama_produk",
    excel: true,
    validate: |body, _| checked::<ProductDto, _>(body, ProductDto::validate),
};

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    view! { <CrudListPage descriptor=&DESCRIPTOR /> }
}
