/// List helpers shared by every table: search, sorting, highlighting, search box.
use crate::shared::config::SEARCH_DEBOUNCE_MS;
use crate::shared::debounce::Debounced;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that can be sorted by column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive text comparison.
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// `Some` sorts before `None`.
pub fn cmp_opt<T: PartialOrd>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    if field.is_empty() {
        return;
    }
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// `true` when any of `values` contains `filter`, ignoring case.
pub fn contains_any(values: &[&str], filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    needle.is_empty() || values.iter().any(|v| v.to_lowercase().contains(&needle))
}

/// Byte ranges of `text` matching `filter` case-insensitively, non-overlapping.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = filter.trim().chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let mut matched = 0;
        let mut j = i;
        while j < chars.len() && matched < needle.len() {
            let lower: Vec<char> = chars[j].1.to_lowercase().collect();
            if needle[matched..].starts_with(&lower) {
                matched += lower.len();
                j += 1;
            } else {
                break;
            }
        }
        if matched == needle.len() {
            let start = chars[i].0;
            let end = chars.get(j).map(|(b, _)| *b).unwrap_or(text.len());
            ranges.push((start, end));
            i = j;
        } else {
            i += 1;
        }
    }
    ranges
}

/// Wraps the parts of `text` matching `filter` in a highlight span.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for (start, end) in ranges {
        if start > last {
            parts.push(view! { <span>{text[last..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last = end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Text the search box must show after the applied search changed to `applied`.
///
/// `None` when the change is the box's own last report. Otherwise the applied
/// search was replaced from outside (a filter, a reset) and the box follows it.
pub fn external_search_change(applied: &str, last_reported: &str) -> Option<String> {
    if applied.trim() == last_reported.trim() {
        None
    } else {
        Some(applied.to_string())
    }
}

/// Search box that reports its text after a quiet period.
///
/// The clear button reports the empty string immediately. When `value` is
/// changed from outside, the box shows it and drops any pending report.
#[component]
pub fn SearchInput(
    /// Current applied search (for the active style)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Cari...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let last_reported = StoredValue::new(value.get_untracked());
    let report = Callback::new(move |text: String| {
        last_reported.set_value(text.clone());
        on_change.run(text);
    });
    let debounced = Debounced::new(SEARCH_DEBOUNCE_MS, report);

    Effect::new(move |_| {
        let applied = value.get();
        let next = last_reported
            .try_with_value(|last| external_search_change(&applied, last))
            .flatten();
        if let Some(next) = next {
            last_reported.set_value(next.clone());
            debounced.cancel();
            set_input_value.set(next);
        }
    });

    let is_active = move || !value.get().trim().is_empty();

    let clear = move |_| {
        set_input_value.set(String::new());
        debounced.immediate(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    set_input_value.set(text.clone());
                    debounced.call(text);
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Hapus pencarian">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        qty: Option<i64>,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_text(&self.name, &other.name),
                "qty" => cmp_opt(self.qty.as_ref(), other.qty.as_ref()),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "beta".into(), qty: None },
            Row { name: "Alpha".into(), qty: Some(3) },
            Row { name: "gamma".into(), qty: Some(1) },
        ]
    }

    #[test]
    fn test_sort_text_ignores_case() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let names: Vec<_> = items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_sort_descending_and_missing_values() {
        let mut items = rows();
        sort_list(&mut items, "qty", true);
        assert_eq!(items[0].qty, Some(1));
        assert_eq!(items[2].qty, None);
        sort_list(&mut items, "qty", false);
        assert_eq!(items[0].qty, None);
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any(&["Alpha", "x"], "ALP"));
        assert!(contains_any(&["Alpha"], "  "));
        assert!(!contains_any(&["Alpha", "beta"], "zzz"));
    }

    #[test]
    fn test_match_ranges_keep_original_offsets() {
        assert_eq!(match_ranges("Budi Budiman", "budi"), vec![(0, 4), (5, 9)]);
        assert_eq!(match_ranges("Ärger", "är"), vec![(0, 3)]);
        assert!(match_ranges("abc", "").is_empty());
        assert!(match_ranges("abc", "x").is_empty());
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("nama", "nama", true), " ▲");
        assert_eq!(get_sort_indicator("nama", "nama", false), " ▼");
        assert_eq!(get_sort_indicator("kode", "nama", true), " ⇅");
    }

    #[test]
    fn test_search_box_follows_outside_changes_only() {
        // A filter applied after a search clears the applied text
        assert_eq!(external_search_change("", "INV"), Some(String::new()));
        assert_eq!(external_search_change("budi", ""), Some("budi".into()));
        // The box's own report coming back is not an outside change
        assert_eq!(external_search_change("INV", "INV"), None);
        assert_eq!(external_search_change("inv", "inv  "), None);
        assert_eq!(external_search_change("", "   "), None);
    }
}
