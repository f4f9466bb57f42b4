//! Dashboard View State
//!
//! Single owner of everything the dashboard displays. All changes go through
//! the entry points on [`DashboardState`]; the derived rows are memoized on
//! (list generation, page number, search term).

use std::sync::Arc;

use crate::error::DashboardError;
use crate::model::{DerivedListRecord, ListRecord, SummaryPatch, SummaryRecord};

use super::deriver::{derive_list_view, next_page, previous_page, ViewMode};

/// Last failure per endpoint, cleared by the next successful load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadErrors {
    pub summary: Option<String>,
    pub list: Option<String>,
}

impl LoadErrors {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.list.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    generation: u64,
    page_number: usize,
    search_term: String,
}

#[derive(Debug, Default)]
struct ViewMemo {
    key: Option<ViewKey>,
    rows: Vec<DerivedListRecord>,
    #[cfg(test)]
    recomputations: u64,
}

/// View state for one dashboard session
#[derive(Debug)]
pub struct DashboardState {
    summary: SummaryRecord,
    records: Arc<Vec<ListRecord>>,
    /// Bumped on every list replacement; identifies the list in the memo key
    generation: u64,
    page_number: usize,
    search_term: String,
    errors: LoadErrors,
    memo: ViewMemo,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            summary: SummaryRecord::default(),
            records: Arc::new(Vec::new()),
            generation: 0,
            page_number: 1,
            search_term: String::new(),
            errors: LoadErrors::default(),
            memo: ViewMemo::default(),
        }
    }

    pub fn summary(&self) -> &SummaryRecord {
        &self.summary
    }

    /// The full list as loaded
    pub fn records(&self) -> &Arc<Vec<ListRecord>> {
        &self.records
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn errors(&self) -> &LoadErrors {
        &self.errors
    }

    pub fn mode(&self) -> ViewMode {
        ViewMode::for_search(&self.search_term)
    }

    /// Prev/Next are only offered while paginating
    pub fn pagination_visible(&self) -> bool {
        self.mode() == ViewMode::Paginate
    }

    /// Replace the summary with the patch merged over the defaults
    pub fn set_summary(&mut self, patch: SummaryPatch) {
        self.summary = patch.into_record();
    }

    /// Replace the full list wholesale
    pub fn replace_list(&mut self, records: Vec<ListRecord>) {
        self.records = Arc::new(records);
        self.generation += 1;
    }

    /// Apply a summary fetch outcome; failures leave the current summary in place
    pub fn apply_summary(&mut self, result: Result<SummaryPatch, DashboardError>) {
        match result {
            Ok(patch) => {
                self.set_summary(patch);
                self.errors.summary = None;
            }
            Err(e) => self.errors.summary = Some(e.to_string()),
        }
    }

    /// Apply a list fetch outcome; failures leave the current list in place
    pub fn apply_list(&mut self, result: Result<Vec<ListRecord>, DashboardError>) {
        match result {
            Ok(records) => {
                self.replace_list(records);
                self.errors.list = None;
            }
            Err(e) => self.errors.list = Some(e.to_string()),
        }
    }

    /// Set the search term. The page number is kept, so clearing the
    /// search returns to the page that was showing before.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Go back one page. Returns whether the page changed.
    pub fn go_to_previous_page(&mut self) -> bool {
        if !self.pagination_visible() {
            return false;
        }
        match previous_page(self.page_number) {
            Some(page) => {
                self.page_number = page;
                true
            }
            None => false,
        }
    }

    /// Advance one page unless the current page is short. Returns whether
    /// the page changed.
    pub fn go_to_next_page(&mut self) -> bool {
        if !self.pagination_visible() {
            return false;
        }
        let current_len = self.current_view().len();
        match next_page(self.page_number, current_len) {
            Some(page) => {
                self.page_number = page;
                true
            }
            None => false,
        }
    }

    /// Rows for the current list, page and search term
    pub fn current_view(&mut self) -> &[DerivedListRecord] {
        let key = ViewKey {
            generation: self.generation,
            page_number: self.page_number,
            search_term: self.search_term.clone(),
        };

        if self.memo.key.as_ref() != Some(&key) {
            self.memo.rows = derive_list_view(&self.records, self.page_number, &self.search_term);
            #[cfg(test)]
            {
                self.memo.recomputations += 1;
            }
            tracing::trace!(
                page = self.page_number,
                mode = ?self.mode(),
                rows = self.memo.rows.len(),
                "Derived list view"
            );
            self.memo.key = Some(key);
        }

        &self.memo.rows
    }

    #[cfg(test)]
    fn recomputations(&self) -> u64 {
        self.memo.recomputations
    }
}
