use crate::shared::config::page_size;
use crate::shared::date_utils::today;
use crate::shared::crud::list::CrudListPage;
use crate::shared::crud::{
    checked, CellValue, Column, EntityDescriptor, FieldKind, FieldSpec, OptionSource,
};
use contracts::domain::a001_brand::aggregate::ENDPOINT as BRAND_ENDPOINT;
use contracts::domain::a002_cooperation::aggregate::{Cooperation, CooperationDto, ENDPOINT};
use leptos::prelude::*;

static DESCRIPTOR: EntityDescriptor<Cooperation> = EntityDescriptor {
    title: "Kerjasama",
    singular: "Kerjasama",
    endpoint: ENDPOINT,
    columns: &[
        Column {
            key: "nama_klien",
            label: "Klien",
            value: |c| CellValue::text(&c.client_name),
            searchable: true,
        },
        Column {
            key: "nama_brand",
            label: "Brand",
            value: |c| CellValue::opt_text(c.nama_brand.as_deref()),
            searchable: true,
        },
        Column {
            key: "tanggal_mulai",
            label: "Mulai",
            value: |c| CellValue::Date(Some(c.start_date)),
            searchable: false,
        },
        Column {
            key: "tanggal_selesai",
            label: "Selesai",
            value: |c| CellValue::Date(c.end_date),
            searchable: false,
        },
        Column {
            key: "persentase_fee",
            label: "Fee",
            value: |c| CellValue::Percent(c.fee_percent),
            searchable: false,
        },
        Column {
            key: "aktif",
            label: "Aktif",
            value: |c| CellValue::Flag(c.active),
            searchable: false,
        },
        Column {
            key: "berjalan",
            label: "Berjalan",
            value: |c| CellValue::Flag(c.is_running(today())),
            searchable: false,
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
        FieldSpec::new("nama_klien", "Nama klien", FieldKind::Text),
        FieldSpec::new("tanggal_mulai", "Tanggal mulai", FieldKind::Date),
        FieldSpec::new("tanggal_selesai", "Tanggal selesai", FieldKind::Date),
        FieldSpec::new("persentase_fee", "Persentase fee (%)", FieldKind::Decimal).placeholder("0-100"),
        FieldSpec::new("aktif", "Aktif", FieldKind::Checkbox).default_value("true"),
        FieldSpec::new("catatan", "Catatan", FieldKind::Textarea),
    ],
    page_size: page_size::REFERENCE,
    default_sort: "tanggal_mulai",
    excel: false,
    validate: |body, _| checked::<CooperationDto, _>(body, CooperationDto::validate),
};

#[component]
#[allow(non_snake_case)]
pub fn CooperationList() -> impl IntoView {
    view! { <CrudListPage descriptor=&DESCRIPTOR /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn cooperation(active: bool, end_in_days: Option<i64>) -> Cooperation {
        let now = today();
        Cooperation {
            id: 1,
            brand_id: 2,
            nama_brand: Some("Hatam".into()),
            client_name: "PT Maju".into(),
            start_date: now - Duration::days(30),
            end_date: end_in_days.map(|d| now + Duration::days(d)),
            fee_percent: 10.0,
            active,
            note: None,
        }
    }

    fn running_cell(c: &Cooperation) -> CellValue {
        let column = DESCRIPTOR
            .columns
            .iter()
            .find(|col| col.key == "berjalan")
            .unwrap();
        (column.value)(c)
    }

    #[test]
    fn test_running_column_follows_contract_period() {
        assert_eq!(running_cell(&cooperation(true, None)), CellValue::Flag(true));
        assert_eq!(running_cell(&cooperation(true, Some(5))), CellValue::Flag(true));
        assert_eq!(running_cell(&cooperation(true, Some(-1))), CellValue::Flag(false));
        assert_eq!(running_cell(&cooperation(false, Some(5))), CellValue::Flag(false));
    }
}
