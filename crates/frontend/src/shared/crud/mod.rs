//! Metadata-driven list and form for the reference (master data) screens.
//!
//! Each entity declares an [`EntityDescriptor`]: its columns, its form fields and
//! how a submitted form becomes a validated write DTO. [`list::CrudListPage`]
//! renders any descriptor with search, sorting, pagination, bulk delete and
//! Excel import/export.

pub mod form;
pub mod list;

use crate::shared::components::table::{format_number_int, format_percent, format_rupiah};
use crate::shared::date_utils::{format_date, format_datetime, from_input_value, to_input_value};
use crate::shared::list_utils::{cmp_f64, cmp_opt, cmp_text, contains_any};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Typed value of a table cell: drives both display and sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Money(f64),
    Percent(f64),
    Date(Option<NaiveDate>),
    Time(DateTime<Utc>),
    Flag(bool),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        CellValue::Text(value.unwrap_or("—").to_string())
    }

    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number_int(*n),
            CellValue::Money(n) => format_rupiah(*n),
            CellValue::Percent(n) => format_percent(*n),
            CellValue::Date(d) => d.as_ref().map(format_date).unwrap_or_else(|| "—".into()),
            CellValue::Time(at) => format_datetime(at),
            CellValue::Flag(true) => "Ya".into(),
            CellValue::Flag(false) => "Tidak".into(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CellValue::Number(_) | CellValue::Money(_) | CellValue::Percent(_)
        )
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => cmp_text(a, b),
            (CellValue::Date(a), CellValue::Date(b)) => cmp_opt(a.as_ref(), b.as_ref()),
            (CellValue::Time(a), CellValue::Time(b)) => a.cmp(b),
            (CellValue::Flag(a), CellValue::Flag(b)) => b.cmp(a),
            (a, b) if a.is_numeric() && b.is_numeric() => cmp_f64(a.as_f64(), b.as_f64()),
            (a, b) => cmp_text(&a.display(), &b.display()),
        }
    }

    fn as_f64(&self) -> f64 {
        match self {
            CellValue::Number(n) | CellValue::Money(n) | CellValue::Percent(n) => *n,
            _ => 0.0,
        }
    }
}

pub struct Column<T> {
    /// Sort key; matches the wire name where there is one.
    pub key: &'static str,
    pub label: &'static str,
    pub value: fn(&T) -> CellValue,
    /// Included in the client-side search and highlighted.
    pub searchable: bool,
}

/// Where a select field gets its options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionSource {
    /// Rows of another reference endpoint: `id` as value, `label_key` as text.
    Endpoint {
        endpoint: &'static str,
        label_key: &'static str,
    },
    /// Fixed `(code, label)` pairs, sent as strings.
    Fixed(&'static [(&'static str, &'static str)]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Password,
    Textarea,
    Integer,
    Decimal,
    Date,
    Checkbox,
    Select(OptionSource),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Wire name in the write DTO.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    /// Raw value of a new record's field.
    pub default: &'static str,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            placeholder: "",
            default: "",
        }
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub const fn default_value(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }
}

/// Turns submitted form JSON into the JSON body of the write request.
///
/// The `bool` is `true` when creating.
pub type Validator = fn(Value, bool) -> Result<Value, String>;

pub struct EntityDescriptor<T: 'static> {
    /// Plural title of the screen and menu item.
    pub title: &'static str,
    /// Noun used in form titles and prompts ("Brand", "Produk").
    pub singular: &'static str,
    pub endpoint: &'static str,
    pub columns: &'static [Column<T>],
    pub fields: &'static [FieldSpec],
    pub page_size: usize,
    pub default_sort: &'static str,
    /// Backend offers `<endpoint>/import` and `<endpoint>/export`.
    pub excel: bool,
    pub validate: Validator,
}

impl<T> EntityDescriptor<T> {
    /// Cache and storage key: the endpoint without its leading slash.
    pub fn entity_key(&self) -> &'static str {
        self.endpoint.trim_start_matches('/')
    }

    pub fn item_endpoint(&self, id: contracts::domain::common::RecordId) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// Rows matching `query`, ordered by the column `sort_field`.
    pub fn visible_rows(&self, rows: &[T], query: &str, sort_field: &str, ascending: bool) -> Vec<T>
    where
        T: Clone,
    {
        visible_rows(self.columns, rows, query, sort_field, ascending)
    }
}

/// `query` occurs in one of the searchable columns of `row`.
pub fn matches_columns<T>(columns: &[Column<T>], row: &T, query: &str) -> bool {
    let values: Vec<String> = columns
        .iter()
        .filter(|c| c.searchable)
        .map(|c| (c.value)(row).display())
        .collect();
    let refs: Vec<&str> = values.iter().map(String::as_str).collect();
    contains_any(&refs, query)
}

/// Rows matching `query`, ordered by the column whose key is `sort_field`.
pub fn visible_rows<T: Clone>(
    columns: &[Column<T>],
    rows: &[T],
    query: &str,
    sort_field: &str,
    ascending: bool,
) -> Vec<T> {
    let mut visible: Vec<T> = rows
        .iter()
        .filter(|row| matches_columns(columns, row, query))
        .cloned()
        .collect();
    if let Some(column) = columns.iter().find(|c| c.key == sort_field) {
        visible.sort_by(|a, b| {
            let ord = (column.value)(a).compare(&(column.value)(b));
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }
    visible
}

/// Raw input text per field key, as held by the form while editing.
pub type FormValues = BTreeMap<&'static str, String>;

/// Initial form values: blank for a new record, taken from `row` when editing.
pub fn initial_values<R: Serialize>(fields: &[FieldSpec], row: Option<&R>) -> FormValues {
    let source = row
        .and_then(|r| serde_json::to_value(r).ok())
        .and_then(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_default();

    fields
        .iter()
        .map(|field| {
            let raw = match (field.kind, source.get(field.key)) {
                (FieldKind::Password, _) => String::new(),
                (_, None) if !field.default.is_empty() => field.default.to_string(),
                (FieldKind::Checkbox, None) => "false".into(),
                (FieldKind::Select(OptionSource::Fixed(options)), None) => options
                    .first()
                    .map(|(code, _)| code.to_string())
                    .unwrap_or_default(),
                (_, None) | (_, Some(Value::Null)) => String::new(),
                (_, Some(Value::String(s))) => s.clone(),
                (_, Some(Value::Bool(b))) => b.to_string(),
                (_, Some(other)) => other.to_string(),
            };
            (field.key, raw)
        })
        .collect()
}

/// Converts raw form input into the JSON object posted to the backend.
///
/// Blank optional inputs are omitted so the DTO's defaults apply.
pub fn form_payload(fields: &[FieldSpec], values: &FormValues) -> Result<Value, String> {
    let mut body = Map::new();
    for field in fields {
        let raw = values.get(field.key).map(|s| s.trim()).unwrap_or_default();
        let value = match field.kind {
            FieldKind::Checkbox => Some(Value::Bool(raw == "true")),
            _ if raw.is_empty() => None,
            FieldKind::Text | FieldKind::Textarea | FieldKind::Password => {
                Some(Value::String(raw.to_string()))
            }
            FieldKind::Integer => Some(Value::from(
                parse_integer(raw).ok_or_else(|| format!("{} harus berupa bilangan bulat", field.label))?,
            )),
            FieldKind::Decimal => {
                let n = parse_decimal(raw)
                    .ok_or_else(|| format!("{} harus berupa angka", field.label))?;
                Some(
                    serde_json::Number::from_f64(n)
                        .map(Value::Number)
                        .ok_or_else(|| format!("{} harus berupa angka", field.label))?,
                )
            }
            FieldKind::Date => {
                let date = from_input_value(raw)
                    .ok_or_else(|| format!("{} bukan tanggal yang valid", field.label))?;
                Some(Value::String(to_input_value(Some(date))))
            }
            FieldKind::Select(OptionSource::Endpoint { .. }) => Some(Value::from(
                raw.parse::<i64>()
                    .map_err(|_| format!("{} tidak valid", field.label))?,
            )),
            FieldKind::Select(OptionSource::Fixed(_)) => Some(Value::String(raw.to_string())),
        };
        if let Some(v) = value {
            body.insert(field.key.to_string(), v);
        }
    }
    Ok(Value::Object(body))
}

/// Accepts `1200` and `1.200`; a `.` is only valid as a thousands separator.
fn parse_integer(raw: &str) -> Option<i64> {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let mut groups = digits.split('.');
    let first = groups.next()?;
    let rest: Vec<&str> = groups.collect();
    if !rest.is_empty() && !((1..=3).contains(&first.len()) && rest.iter().all(|g| g.len() == 3)) {
        return None;
    }
    let joined: String = std::iter::once(first).chain(rest).collect();
    if joined.is_empty() || !joined.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    format!("{}{}", sign, joined).parse().ok()
}

/// Accepts `1.250.000`, `12,5` and `12.5`.
fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized = if raw.contains(',') {
        raw.replace('.', "").replace(',', ".")
    } else if raw.matches('.').count() > 1 {
        raw.replace('.', "")
    } else {
        raw.to_string()
    };
    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Deserializes `body` into the write DTO `D`, runs its rules and re-serializes it.
pub fn checked<D, C>(body: Value, check: C) -> Result<Value, String>
where
    D: DeserializeOwned + Serialize,
    C: FnOnce(&D) -> Result<(), String>,
{
    let dto: D = serde_json::from_value(body).map_err(|e| format!("Isian tidak valid: {}", e))?;
    check(&dto)?;
    serde_json::to_value(&dto).map_err(|e| e.to_string())
}

/// `(value, label)` pairs from rows of a reference endpoint.
pub fn options_from_rows(rows: &[Value], label_key: &str) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = rows
        .iter()
        .filter_map(|row| {
            let id = match row.get("id")? {
                Value::Number(n) => n.to_string(),
                Value::String(s) => s.clone(),
                _ => return None,
            };
            let label = row
                .get(label_key)
                .and_then(Value::as_str)
                .unwrap_or(id.as_str())
                .to_string();
            Some((id, label))
        })
        .collect();
    options.sort_by(|a, b| cmp_text(&a.1, &b.1));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_brand::aggregate::{Brand, BrandDto};
    use contracts::domain::a008_stock_transaction::aggregate::StockTransactionDto;
    use serde_json::json;

    const BRAND_FIELDS: &[FieldSpec] = &[
        FieldSpec::new("nama_brand", "Nama brand", FieldKind::Text),
        FieldSpec::new("kode_brand", "Kode brand", FieldKind::Text),
        FieldSpec::new("deskripsi", "Deskripsi", FieldKind::Textarea),
    ];

    const BRAND_COLUMNS: &[Column<Brand>] = &[
        Column {
            key: "kode_brand",
            label: "Kode",
            value: |b| CellValue::text(&b.code),
            searchable: true,
        },
        Column {
            key: "nama_brand",
            label: "Nama",
            value: |b| CellValue::text(&b.name),
            searchable: true,
        },
    ];

    fn brand_descriptor() -> EntityDescriptor<Brand> {
        EntityDescriptor {
            title: "Brand",
            singular: "Brand",
            endpoint: "/brand",
            columns: BRAND_COLUMNS,
            fields: BRAND_FIELDS,
            page_size: 10,
            default_sort: "nama_brand",
            excel: true,
            validate: |body, _| checked::<BrandDto, _>(body, BrandDto::validate),
        }
    }

    fn brand(id: i64, name: &str, code: &str) -> Brand {
        Brand {
            id,
            name: name.into(),
            code: code.into(),
            description: None,
        }
    }

    #[test]
    fn test_visible_rows_search_and_sort() {
        let d = brand_descriptor();
        let rows = vec![
            brand(1, "Zeta Print", "ZP"),
            brand(2, "alpha Kaos", "AK"),
            brand(3, "Beta Kaos", "BK"),
        ];
        let kaos = d.visible_rows(&rows, "kaos", "nama_brand", true);
        assert_eq!(kaos.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2, 3]);

        let all = d.visible_rows(&rows, "", "kode_brand", false);
        assert_eq!(all.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 3, 2]);
        assert_eq!(d.entity_key(), "brand");
        assert_eq!(d.item_endpoint(3), "/brand/3");
    }

    #[test]
    fn test_initial_values_from_row() {
        let values = initial_values(BRAND_FIELDS, Some(&brand(4, "Kopi", "KP")));
        assert_eq!(values["nama_brand"], "Kopi");
        assert_eq!(values["deskripsi"], "");

        let blank = initial_values::<Brand>(BRAND_FIELDS, None);
        assert!(blank.values().all(String::is_empty));
    }

    #[test]
    fn test_brand_form_is_validated() {
        let d = brand_descriptor();
        let mut values = initial_values::<Brand>(BRAND_FIELDS, None);
        values.insert("nama_brand", "Kopi Kita".into());
        values.insert("kode_brand", "KK 1".into());
        let body = form_payload(BRAND_FIELDS, &values).unwrap();
        assert_eq!(
            (d.validate)(body, true).unwrap_err(),
            "Kode brand tidak boleh mengandung spasi"
        );

        values.insert("kode_brand", "KK1".into());
        let body = (d.validate)(form_payload(BRAND_FIELDS, &values).unwrap(), true).unwrap();
        assert_eq!(body["kode_brand"], "KK1");
        assert!(body["deskripsi"].is_null());
    }

    #[test]
    fn test_payload_types() {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new(
                "produk_id",
                "Produk",
                FieldKind::Select(OptionSource::Endpoint {
                    endpoint: "/produk",
                    label_key: "nama_produk",
                }),
            ),
            FieldSpec::new(
                "jenis",
                "Jenis",
                FieldKind::Select(OptionSource::Fixed(&[("masuk", "Masuk"), ("keluar", "Keluar")])),
            ),
            FieldSpec::new("jumlah", "Jumlah", FieldKind::Integer),
            FieldSpec::new("tanggal", "Tanggal", FieldKind::Date),
            FieldSpec::new("harga", "Harga", FieldKind::Decimal),
        ];
        let mut values = initial_values::<Value>(FIELDS, None);
        assert_eq!(values["jenis"], "masuk");
        values.insert("produk_id", "7".into());
        values.insert("jumlah", "1.200".into());
        values.insert("tanggal", "2024-05-01".into());
        values.insert("harga", "12,5".into());

        let body = form_payload(FIELDS, &values).unwrap();
        assert_eq!(
            body,
            json!({"produk_id": 7, "jenis": "masuk", "jumlah": 1200,
                   "tanggal": "2024-05-01", "harga": 12.5})
        );

        let dto: StockTransactionDto = serde_json::from_value(body).unwrap();
        assert_eq!(dto.quantity, 1200);

        values.insert("jumlah", "banyak".into());
        assert_eq!(
            form_payload(FIELDS, &values).unwrap_err(),
            "Jumlah harus berupa bilangan bulat"
        );
    }

    #[test]
    fn test_integer_dots_are_thousands_separators_only() {
        assert_eq!(parse_integer("1200"), Some(1200));
        assert_eq!(parse_integer("1.200"), Some(1200));
        assert_eq!(parse_integer("12.345.678"), Some(12_345_678));
        assert_eq!(parse_integer("-1.500"), Some(-1500));
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer("12.34"), None);
        assert_eq!(parse_integer("1234.567"), None);
        assert_eq!(parse_integer(".500"), None);
        assert_eq!(parse_integer("1..000"), None);
        assert_eq!(parse_integer("+5"), None);

        const FIELDS: &[FieldSpec] = &[FieldSpec::new("stok", "Stok", FieldKind::Integer)];
        let mut values = initial_values::<Value>(FIELDS, None);
        values.insert("stok", "1.5".into());
        assert_eq!(
            form_payload(FIELDS, &values).unwrap_err(),
            "Stok harus berupa bilangan bulat"
        );
    }

    #[test]
    fn test_cell_values() {
        assert_eq!(CellValue::Money(1250000.0).display(), "Rp 1.250.000");
        assert_eq!(CellValue::Flag(true).display(), "Ya");
        assert_eq!(CellValue::Date(None).display(), "—");
        assert_eq!(
            CellValue::Number(2.0).compare(&CellValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::text("b").compare(&CellValue::text("A")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_options_from_rows() {
        let rows = vec![
            json!({"id": 2, "nama_brand": "Zeta"}),
            json!({"id": "1", "nama_brand": "alpha"}),
            json!({"nama_brand": "tanpa id"}),
        ];
        assert_eq!(
            options_from_rows(&rows, "nama_brand"),
            vec![("1".into(), "alpha".into()), ("2".into(), "Zeta".into())]
        );
    }
}
