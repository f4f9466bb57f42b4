//! Global Application State
//!
//! Reactive state management using Leptos signals. The visible rows are a
//! memo over (full list, page number, search term), so they are re-derived
//! only when one of those changes.

use astro_dashboard::model::{DerivedListRecord, ListRecord, SummaryRecord};
use astro_dashboard::view::{derive_list_view, next_page, previous_page, ViewMode};
use leptos::*;

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Summary counters, replaced wholesale on each successful fetch
    pub summary: RwSignal<SummaryRecord>,
    /// Full leaderboard as fetched
    pub total_list: RwSignal<Vec<ListRecord>>,
    /// Current page (1-based)
    pub page_number: RwSignal<usize>,
    /// Contents of the search box
    pub search_term: RwSignal<String>,
    /// Rows currently shown
    pub current_list: Memo<Vec<DerivedListRecord>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

impl GlobalState {
    /// Create the signals in the current reactive owner
    pub fn new() -> Self {
        let total_list = create_rw_signal(Vec::<ListRecord>::new());
        let page_number = create_rw_signal(1usize);
        let search_term = create_rw_signal(String::new());

        let current_list = create_memo(move |_| {
            let page = page_number.get();
            search_term.with(|term| total_list.with(|list| derive_list_view(list, page, term)))
        });

        Self {
            summary: create_rw_signal(SummaryRecord::default()),
            total_list,
            page_number,
            search_term,
            current_list,
            error: create_rw_signal(None),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.search_term.with(|term| ViewMode::for_search(term))
    }

    /// Prev/Next are hidden while a full address is being searched
    pub fn pagination_visible(&self) -> bool {
        self.mode() == ViewMode::Paginate
    }

    /// Go back one page; no-op while filtering
    pub fn go_to_previous_page(&self) {
        if !self.pagination_visible() {
            return;
        }
        if let Some(page) = previous_page(self.page_number.get_untracked()) {
            self.page_number.set(page);
        }
    }

    /// Advance one page unless the current page is short; no-op while filtering
    pub fn go_to_next_page(&self) {
        if !self.pagination_visible() {
            return;
        }
        let current_len = self.current_list.with_untracked(|rows| rows.len());
        if let Some(page) = next_page(self.page_number.get_untracked(), current_len) {
            self.page_number.set(page);
        }
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        if self.error.try_set(Some(message.to_string())).is_some() {
            return;
        }

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            // the page may be gone by now
            let _ = error_signal.try_set(None);
        })
        .forget();
    }
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    provide_context(GlobalState::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use astro_dashboard::model::assign_indices;
    use astro_dashboard::view::PAGE_SIZE;

    fn leaderboard(count: usize) -> Vec<ListRecord> {
        assign_indices(
            (0..count)
                .map(|i| ListRecord::new(format!("0x{:040x}", i), "1"))
                .collect(),
        )
    }

    #[test]
    fn test_paging_through_signals() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.total_list.set(leaderboard(120));

        assert_eq!(state.current_list.get().len(), PAGE_SIZE);

        state.go_to_previous_page();
        assert_eq!(state.page_number.get(), 1);

        state.go_to_next_page();
        state.go_to_next_page();
        assert_eq!(state.page_number.get(), 3);
        assert_eq!(state.current_list.get().len(), 20);

        state.go_to_next_page();
        assert_eq!(state.page_number.get(), 3);

        runtime.dispose();
    }

    #[test]
    fn test_search_switches_mode() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.total_list.set(leaderboard(10));

        state.search_term.set(format!("0x{:040}", 4));
        assert!(!state.pagination_visible());

        let rows = state.current_list.get();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.index, 5);

        runtime.dispose();
    }

    #[test]
    fn test_paging_ignored_while_filtering() {
        let runtime = create_runtime();
        let state = GlobalState::new();
        state.total_list.set(leaderboard(120));
        state.go_to_next_page();

        state.search_term.set(format!("0x{:040}", 4));
        state.go_to_next_page();
        assert_eq!(state.page_number.get(), 2);
        state.go_to_previous_page();
        assert_eq!(state.page_number.get(), 2);

        state.search_term.set(String::new());
        assert_eq!(state.current_list.get()[0].record.index, 51);

        runtime.dispose();
    }
}
