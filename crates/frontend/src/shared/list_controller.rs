//! State machine behind every list screen.
//!
//! One `RwSignal<ListState<F>>` per screen holds the fetch mode, the page, the
//! sort column and the bulk selection. All transitions are plain methods so they
//! can be tested without a browser; components only call them and re-render.

use contracts::domain::common::RecordId;
use contracts::shared::list_params::ListFilter;
use std::collections::BTreeSet;

/// Which collection the screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListMode<F> {
    All,
    Search(String),
    Filter(F),
    /// Server-computed ready queue of a pipeline stage.
    Ready,
}

impl<F> ListMode<F> {
    pub fn is_search(&self) -> bool {
        matches!(self, ListMode::Search(_))
    }

    pub fn is_filter(&self) -> bool {
        matches!(self, ListMode::Filter(_))
    }
}

/// How the current selection was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionScope {
    /// Individual rows toggled by hand.
    #[default]
    Rows,
    /// Every row of the visible page.
    Page,
    /// Every row of the current (searched/filtered) dataset.
    All,
}

/// Stable identity of a dataset: its length and an FNV-1a hash of its sorted ids.
///
/// Re-sorting the table keeps the identity; adding or removing a row changes it.
/// Stored in local storage, so it must not depend on the std hasher.
pub fn dataset_fingerprint(ids: &[RecordId]) -> String {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let sorted: BTreeSet<RecordId> = ids.iter().copied().collect();
    let mut hash = OFFSET;
    for id in &sorted {
        for byte in id.to_le_bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(PRIME);
        }
    }
    format!("{}:{:016x}", sorted.len(), hash)
}

/// `max(1, ceil(total / page_size))`
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<F> {
    base: ListMode<F>,
    mode: ListMode<F>,
    page: usize,
    page_size: usize,
    ids: Vec<RecordId>,
    fingerprint: Option<String>,
    selection: BTreeSet<RecordId>,
    scope: SelectionScope,
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl<F: ListFilter> ListState<F> {
    pub fn new(page_size: usize) -> Self {
        Self::with_base(ListMode::All, page_size)
    }

    /// Screen whose default collection is a ready queue instead of the full list.
    pub fn ready_queue(page_size: usize) -> Self {
        Self::with_base(ListMode::Ready, page_size)
    }

    fn with_base(base: ListMode<F>, page_size: usize) -> Self {
        Self {
            mode: base.clone(),
            base,
            page: 0,
            page_size: page_size.max(1),
            ids: Vec::new(),
            fingerprint: None,
            selection: BTreeSet::new(),
            scope: SelectionScope::Rows,
            sort_field: String::new(),
            sort_ascending: true,
        }
    }

    pub fn sorted_by(mut self, field: &str, ascending: bool) -> Self {
        self.sort_field = field.to_string();
        self.sort_ascending = ascending;
        self
    }

    // Mode

    pub fn mode(&self) -> &ListMode<F> {
        &self.mode
    }

    pub fn search_text(&self) -> &str {
        match &self.mode {
            ListMode::Search(q) => q,
            _ => "",
        }
    }

    pub fn filter(&self) -> Option<&F> {
        match &self.mode {
            ListMode::Filter(f) => Some(f),
            _ => None,
        }
    }

    /// Enters search mode, dropping any active filter. Blank text returns to the base mode.
    pub fn set_search(&mut self, text: &str) {
        let text = text.trim();
        let next = if text.is_empty() {
            self.base.clone()
        } else {
            ListMode::Search(text.to_string())
        };
        self.switch_mode(next);
    }

    pub fn clear_search(&mut self) {
        if self.mode.is_search() {
            self.switch_mode(self.base.clone());
        }
    }

    /// Enters filter mode, dropping any active search. An empty filter returns to the base mode.
    pub fn apply_filter(&mut self, filter: F) {
        let next = if filter.is_empty() {
            self.base.clone()
        } else {
            ListMode::Filter(filter)
        };
        self.switch_mode(next);
    }

    pub fn clear_filter(&mut self) {
        if self.mode.is_filter() {
            self.switch_mode(self.base.clone());
        }
    }

    fn switch_mode(&mut self, next: ListMode<F>) {
        if self.mode != next {
            self.mode = next;
            self.page = 0;
        }
    }

    // Dataset

    /// Replaces the current dataset by the ids of a freshly fetched collection.
    ///
    /// Returns `true` when the dataset identity changed, in which case the
    /// selection has been cleared.
    pub fn set_dataset(&mut self, ids: Vec<RecordId>) -> bool {
        let fingerprint = dataset_fingerprint(&ids);
        let changed = self.fingerprint.as_deref() != Some(fingerprint.as_str());
        self.ids = ids;
        self.fingerprint = Some(fingerprint);
        if changed {
            self.clear_selection();
        }
        self.page = self.page.min(self.page_count() - 1);
        changed
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    pub fn total(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    // Pagination

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total(), self.page_size)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Index range of the visible page within the dataset.
    pub fn page_range(&self) -> std::ops::Range<usize> {
        let start = (self.page * self.page_size).min(self.total());
        let end = (start + self.page_size).min(self.total());
        start..end
    }

    /// Visible slice of `items`, which must be ordered like the dataset.
    pub fn page_window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    // Selection

    pub fn scope(&self) -> SelectionScope {
        self.scope
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selection.contains(&id)
    }

    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.selection.iter().copied().collect()
    }

    pub fn toggle_row(&mut self, id: RecordId, checked: bool) {
        if checked {
            self.selection.insert(id);
        } else {
            self.selection.remove(&id);
        }
        self.scope = SelectionScope::Rows;
    }

    /// Adds every id of the visible page.
    pub fn select_page(&mut self) {
        let range = self.page_range();
        self.selection.extend(self.ids[range].iter().copied());
        self.scope = SelectionScope::Page;
    }

    /// Adds every id of the current dataset, across all pages.
    pub fn select_all(&mut self) {
        self.selection.extend(self.ids.iter().copied());
        self.scope = SelectionScope::All;
    }

    /// Every id of the visible page is selected (and the page is not empty).
    pub fn page_fully_selected(&self) -> bool {
        let page = &self.ids[self.page_range()];
        !page.is_empty() && page.iter().all(|id| self.selection.contains(id))
    }

    /// Some id of the visible page is selected.
    pub fn page_partially_selected(&self) -> bool {
        self.ids[self.page_range()]
            .iter()
            .any(|id| self.selection.contains(id))
    }

    /// Removes the ids of the visible page, keeping selections on other pages.
    pub fn deselect_page(&mut self) {
        let range = self.page_range();
        for id in &self.ids[range] {
            self.selection.remove(id);
        }
        self.scope = SelectionScope::Rows;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.scope = SelectionScope::Rows;
    }

    /// Restores a persisted selection, keeping only ids present in the dataset.
    pub fn restore_selection(&mut self, ids: &[RecordId]) {
        let present: BTreeSet<RecordId> = self.ids.iter().copied().collect();
        self.selection = ids.iter().copied().filter(|id| present.contains(id)).collect();
        self.scope = SelectionScope::Rows;
    }

    // Sorting

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::order_status::OrderStatus;
    use contracts::shared::list_params::{NoFilter, OrderFilter};

    fn ids(n: i64) -> Vec<RecordId> {
        (1..=n).collect()
    }

    fn status_filter(status: OrderStatus) -> OrderFilter {
        OrderFilter {
            status: Some(status),
            ..Default::default()
        }
    }

    #[test]
    fn test_page_count_is_at_least_one() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(95, 5), 19);
    }

    #[test]
    fn test_page_is_clamped() {
        let mut state = ListState::<NoFilter>::new(10);
        state.set_dataset(ids(25));
        state.set_page(7);
        assert_eq!(state.page(), 2);
        assert_eq!(state.page_range(), 20..25);

        state.set_dataset(ids(5));
        assert_eq!(state.page(), 0);
        state.prev_page();
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn test_page_window() {
        let mut state = ListState::<NoFilter>::new(5);
        let items: Vec<i64> = ids(12);
        state.set_dataset(items.clone());
        state.next_page();
        state.next_page();
        assert_eq!(state.page_window(&items), &[11, 12]);
        assert!(state.page_window::<i64>(&[]).is_empty());
    }

    #[test]
    fn test_search_and_filter_are_mutually_exclusive() {
        let mut state = ListState::<OrderFilter>::new(10);
        state.apply_filter(status_filter(OrderStatus::Packed));
        assert!(state.mode().is_filter());

        state.set_search("INV-001");
        assert_eq!(state.mode(), &ListMode::Search("INV-001".into()));
        assert!(state.filter().is_none());

        state.apply_filter(status_filter(OrderStatus::Shipped));
        assert!(state.mode().is_filter());
        assert_eq!(state.search_text(), "");
    }

    #[test]
    fn test_clearing_returns_to_base_mode() {
        let mut state = ListState::<OrderFilter>::new(10);
        state.set_search("budi");
        state.clear_filter();
        assert!(state.mode().is_search());
        state.clear_search();
        assert_eq!(state.mode(), &ListMode::All);

        let mut ready = ListState::<OrderFilter>::ready_queue(10);
        ready.set_search("x");
        ready.set_search("   ");
        assert_eq!(ready.mode(), &ListMode::Ready);
        ready.apply_filter(OrderFilter::default());
        assert_eq!(ready.mode(), &ListMode::Ready);
    }

    #[test]
    fn test_mode_change_resets_page() {
        let mut state = ListState::<OrderFilter>::new(10);
        state.set_dataset(ids(50));
        state.set_page(3);
        state.set_search("a");
        assert_eq!(state.page(), 0);

        state.set_page(2);
        state.set_search("a");
        assert_eq!(state.page(), 2, "same search keeps the page");

        state.apply_filter(status_filter(OrderStatus::Pending));
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn test_select_all_then_new_dataset_clears_selection() {
        let mut state = ListState::<NoFilter>::new(10);
        state.set_dataset(ids(30));
        state.select_all();
        assert_eq!(state.selection_count(), 30);
        assert_eq!(state.scope(), SelectionScope::All);

        let changed = state.set_dataset((100..110).collect());
        assert!(changed);
        assert!(!state.has_selection());
        assert_eq!(state.scope(), SelectionScope::Rows);
    }

    #[test]
    fn test_same_dataset_keeps_selection() {
        let mut state = ListState::<NoFilter>::new(10);
        state.set_dataset(ids(3));
        state.toggle_row(2, true);
        assert!(!state.set_dataset(ids(3)));
        assert!(state.is_selected(2));

        // Re-sorted rows are the same dataset
        assert!(!state.set_dataset(vec![3, 2, 1]));
        assert!(state.is_selected(2));
        assert_eq!(state.ids(), &[3, 2, 1]);
    }

    #[test]
    fn test_select_page_only_takes_visible_rows() {
        let mut state = ListState::<NoFilter>::new(10);
        state.set_dataset(ids(25));
        state.set_page(2);
        state.select_page();
        assert_eq!(state.selected_ids(), (21..=25).collect::<Vec<_>>());
        assert!(state.page_fully_selected());
        assert_eq!(state.scope(), SelectionScope::Page);

        state.toggle_row(21, false);
        assert_eq!(state.scope(), SelectionScope::Rows);
        assert!(!state.page_fully_selected());
        assert!(state.page_partially_selected());
    }

    #[test]
    fn test_deselect_page_keeps_other_pages() {
        let mut state = ListState::<NoFilter>::new(10);
        state.set_dataset(ids(25));
        state.select_all();
        state.set_page(1);
        state.deselect_page();
        assert_eq!(state.selection_count(), 15);
        assert!(!state.page_partially_selected());
        assert!(!state.is_selected(11));
        assert!(state.is_selected(21));
    }

    #[test]
    fn test_restore_selection_drops_unknown_ids() {
        let mut state = ListState::<NoFilter>::new(10);
        state.set_dataset(ids(5));
        state.restore_selection(&[2, 4, 99]);
        assert_eq!(state.selected_ids(), vec![2, 4]);
    }

    #[test]
    fn test_fingerprint_depends_on_content_not_order() {
        assert_eq!(dataset_fingerprint(&[1, 2, 3]), dataset_fingerprint(&[3, 1, 2]));
        assert_ne!(dataset_fingerprint(&[1, 2, 3]), dataset_fingerprint(&[1, 2, 4]));
        assert_ne!(dataset_fingerprint(&[1, 2]), dataset_fingerprint(&[1, 2, 3]));
        assert!(dataset_fingerprint(&[]).starts_with("0:"));
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = ListState::<NoFilter>::new(10).sorted_by("nama", true);
        state.toggle_sort("nama");
        assert!(!state.sort_ascending);
        state.toggle_sort("kode");
        assert_eq!(state.sort_field, "kode");
        assert!(state.sort_ascending);
    }
}
