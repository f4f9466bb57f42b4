//! List view derivation
//!
//! Pure functions turning the full leaderboard, a page number and a search
//! term into the rows that are actually displayed.

use serde::Serialize;

use crate::model::{DerivedListRecord, ListRecord};

/// Rows per page
pub const PAGE_SIZE: usize = 50;

/// Length of a full owner address (`0x` + 40 hex digits)
pub const ADDRESS_LENGTH: usize = 42;

const SHORT_PREFIX_CHARS: usize = 7;
const SHORT_SUFFIX_CHARS: usize = 4;

/// Which view the search term selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Fixed-size window over the full list
    Paginate,
    /// Exact, case-insensitive address matches
    Filter,
}

impl ViewMode {
    /// A search term that looks like a full address switches to filter mode
    pub fn for_search(search_term: &str) -> Self {
        if search_term.chars().count() == ADDRESS_LENGTH {
            ViewMode::Filter
        } else {
            ViewMode::Paginate
        }
    }
}

/// Derive the displayed rows for the given page and search term.
///
/// `page_number` is 1-based; 0 is treated as 1. Pages past the end yield
/// an empty result.
pub fn derive_list_view(
    records: &[ListRecord],
    page_number: usize,
    search_term: &str,
) -> Vec<DerivedListRecord> {
    match ViewMode::for_search(search_term) {
        ViewMode::Filter => {
            let needle = search_term.to_lowercase();
            records
                .iter()
                .filter(|r| r.owner_address.to_lowercase() == needle)
                .map(derive_record)
                .collect()
        }
        ViewMode::Paginate => page_slice(records, page_number)
            .iter()
            .map(derive_record)
            .collect(),
    }
}

/// The `[start, start + PAGE_SIZE)` window for a 1-based page, clipped to the list
pub fn page_slice(records: &[ListRecord], page_number: usize) -> &[ListRecord] {
    let start = page_number.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(records.len());
    &records[start..end]
}

/// Page shown after Prev, or `None` when already on the first page
pub fn previous_page(page_number: usize) -> Option<usize> {
    (page_number > 1).then(|| page_number - 1)
}

/// Page shown after Next, or `None` when the current page is short.
///
/// A short page is taken to be the last one, so a final page holding
/// exactly `PAGE_SIZE` rows still allows one more step onto an empty page.
pub fn next_page(page_number: usize, current_page_len: usize) -> Option<usize> {
    (current_page_len >= PAGE_SIZE).then(|| page_number.saturating_add(1))
}

/// First 7 characters, `...`, last 4 characters.
///
/// Shorter addresses degrade to whatever is available; this never panics.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let prefix: String = chars.iter().take(SHORT_PREFIX_CHARS).collect();
    let suffix: String = chars[chars.len().saturating_sub(SHORT_SUFFIX_CHARS)..]
        .iter()
        .collect();
    format!("{}...{}", prefix, suffix)
}

fn derive_record(record: &ListRecord) -> DerivedListRecord {
    DerivedListRecord {
        short_address: short_address(&record.owner_address),
        record: record.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::assign_indices;

    fn address(n: usize) -> String {
        format!("0x{:040x}", n)
    }

    fn leaderboard(count: usize) -> Vec<ListRecord> {
        assign_indices(
            (0..count)
                .map(|i| ListRecord::new(address(i), (count - i).to_string()))
                .collect(),
        )
    }

    fn indices(rows: &[DerivedListRecord]) -> Vec<usize> {
        rows.iter().map(|r| r.record.index).collect()
    }

    #[test]
    fn test_first_page() {
        for count in [0, 1, 49, 50, 51, 120] {
            let list = leaderboard(count);
            let rows = derive_list_view(&list, 1, "");

            assert_eq!(rows.len(), count.min(PAGE_SIZE));
            assert_eq!(indices(&rows), (1..=count.min(PAGE_SIZE)).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_pages_of_120() {
        let list = leaderboard(120);

        let page1 = derive_list_view(&list, 1, "");
        assert_eq!(indices(&page1), (1..=50).collect::<Vec<_>>());

        let page3 = derive_list_view(&list, 3, "");
        assert_eq!(indices(&page3), (101..=120).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let list = leaderboard(120);
        assert!(derive_list_view(&list, 4, "").is_empty());
        assert!(derive_list_view(&list, usize::MAX, "").is_empty());
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let list = leaderboard(10);
        assert_eq!(derive_list_view(&list, 0, "").len(), 10);
    }

    #[test]
    fn test_non_address_search_paginates() {
        let list = leaderboard(60);

        for term in ["0x", "0x0000", &address(3)[..41], &format!("{}0", address(3))] {
            assert_eq!(ViewMode::for_search(term), ViewMode::Paginate);
            assert_eq!(derive_list_view(&list, 1, term).len(), PAGE_SIZE);
        }
    }

    #[test]
    fn test_address_search_filters_case_insensitively() {
        let mut list = leaderboard(5);
        list[2].owner_address = format!("0xABCDEF{:034}", 12);

        let term = format!("0xabcdef{:034}", 12);
        assert_eq!(term.len(), ADDRESS_LENGTH);
        assert_eq!(ViewMode::for_search(&term), ViewMode::Filter);

        // page number is ignored in filter mode
        let rows = derive_list_view(&list, 7, &term);
        assert_eq!(indices(&rows), vec![3]);
        assert_eq!(rows[0].short_address, "0xABCDE...0012");
    }

    #[test]
    fn test_address_search_returns_every_match() {
        let mut list = leaderboard(4);
        list[0].owner_address = format!("0xabcdef{:034}", 1);
        list[3].owner_address = format!("0xABCDEF{:034}", 1);

        let rows = derive_list_view(&list, 1, &format!("0xAbCdEf{:034}", 1));
        assert_eq!(indices(&rows), vec![1, 4]);
    }

    #[test]
    fn test_address_search_without_match_is_empty() {
        let list = leaderboard(4);
        assert!(derive_list_view(&list, 1, &address(999)).is_empty());
    }

    #[test]
    fn test_page_steps() {
        assert_eq!(previous_page(1), None);
        assert_eq!(previous_page(3), Some(2));

        assert_eq!(next_page(3, 20), None);
        assert_eq!(next_page(1, PAGE_SIZE), Some(2));
    }

    #[test]
    fn test_short_address() {
        assert_eq!(short_address("0x1234567890abcdef1234"), "0x12345...1234");
        assert_eq!(short_address(&address(0xbeef)), "0x00000...beef");
    }

    #[test]
    fn test_short_address_degrades_on_short_input() {
        assert_eq!(short_address(""), "...");
        assert_eq!(short_address("0x1"), "0x1...0x1");
        assert_eq!(short_address("0x12345678"), "0x12345...5678");
    }
}
