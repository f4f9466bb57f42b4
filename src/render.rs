//! Terminal Rendering
//!
//! Renders the dashboard into plain text for the CLI.

use std::fmt::Write;

use crate::format::{format_number, format_point, summary_label};
use crate::model::{DerivedListRecord, SummaryRecord};
use crate::view::DashboardState;

pub const TITLE: &str = "$Astro Dashboard";
pub const NO_DATA: &str = "no data";

const LABEL_WIDTH: usize = 22;
const ADDRESS_WIDTH: usize = 16;
const POINT_WIDTH: usize = 18;

/// One line per summary counter, in display order
pub fn render_summary(summary: &SummaryRecord) -> String {
    let mut out = String::new();
    for (key, value) in summary.entries() {
        let _ = writeln!(
            out,
            "{:<width$} {}",
            summary_label(key),
            format_number(value),
            width = LABEL_WIDTH
        );
    }
    out
}

/// Numbered rows with the lower-cased short address and point, or `no data`
pub fn render_rows(rows: &[DerivedListRecord]) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_DATA);
    }

    let index_width = rows
        .iter()
        .map(|r| r.record.index.to_string().len())
        .max()
        .unwrap_or(1)
        + 1;

    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{:>iw$} {:<aw$} {:>pw$}",
            format!("{}.", row.record.index),
            row.short_address.to_lowercase(),
            format_point(&row.record.point),
            iw = index_width,
            aw = ADDRESS_WIDTH,
            pw = POINT_WIDTH,
        );
    }
    out
}

/// The Prev/Next bar, or nothing while a full address is being searched
pub fn render_pager(state: &DashboardState) -> String {
    if !state.pagination_visible() {
        return String::new();
    }
    format!("[Prev]  page {}  [Next]\n", state.page_number())
}

/// Full dashboard: title, summary, search line, rows, pager and any load warnings
pub fn render_dashboard(state: &mut DashboardState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));
    out.push_str(&render_summary(state.summary()));
    out.push('\n');

    if state.search_term().is_empty() {
        out.push_str("Search by address\n");
    } else {
        let _ = writeln!(out, "Search: {}", state.search_term());
    }
    let _ = writeln!(out, "{}", "-".repeat(LABEL_WIDTH + ADDRESS_WIDTH + 4));

    out.push_str(&render_rows(state.current_view()));
    out.push_str(&render_pager(state));

    let errors = state.errors();
    if let Some(e) = &errors.summary {
        let _ = writeln!(out, "warning: summary unavailable: {}", e);
    }
    if let Some(e) = &errors.list {
        let _ = writeln!(out, "warning: list unavailable: {}", e);
    }

    out
}
