use crate::shared::date_utils::{from_input_value, to_input_value, today};
use chrono::{Datelike, Months, NaiveDate};
use leptos::prelude::*;
use thaw::*;

/// First and last day of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = day.with_day(1).unwrap_or(day);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first);
    (first, last)
}

/// Bounds of the month before the one containing `day`.
pub fn previous_month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let (first, _) = month_bounds(day);
    month_bounds(first.pred_opt().unwrap_or(first))
}

/// Two native date inputs plus "this month" / "previous month" shortcuts.
#[component]
pub fn DateRangePicker(
    #[prop(into)] date_from: Signal<Option<NaiveDate>>,
    #[prop(into)] date_to: Signal<Option<NaiveDate>>,
    on_change: Callback<(Option<NaiveDate>, Option<NaiveDate>)>,
) -> impl IntoView {
    let set_range = move |(from, to): (NaiveDate, NaiveDate)| on_change.run((Some(from), Some(to)));

    view! {
        <div class="date-range-picker">
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || to_input_value(date_from.get())
                on:change=move |ev| {
                    on_change.run((from_input_value(&event_target_value(&ev)), date_to.get_untracked()))
                }
            />
            <span class="date-range-picker__sep">"–"</span>
            <input
                type="date"
                class="date-range-picker__input"
                prop:value=move || to_input_value(date_to.get())
                on:change=move |ev| {
                    on_change.run((date_from.get_untracked(), from_input_value(&event_target_value(&ev))))
                }
            />
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                on_click=move |_| set_range(month_bounds(today()))
            >
                "Bulan ini"
            </Button>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                on_click=move |_| {
                    let anchor = date_from.get_untracked().unwrap_or_else(today);
                    set_range(previous_month_bounds(anchor))
                }
            >
                "Bulan lalu"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(d(2024, 2, 14)), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(month_bounds(d(2023, 12, 31)), (d(2023, 12, 1), d(2023, 12, 31)));
    }

    #[test]
    fn test_previous_month_crosses_year() {
        assert_eq!(previous_month_bounds(d(2024, 1, 20)), (d(2023, 12, 1), d(2023, 12, 31)));
        assert_eq!(previous_month_bounds(d(2024, 3, 1)), (d(2024, 2, 1), d(2024, 2, 29)));
    }
}
