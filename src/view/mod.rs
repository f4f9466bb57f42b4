//! List View
//!
//! Client-side shaping of the leaderboard: pagination, address search and
//! short-address derivation, plus the state container that owns the
//! current page and search term.
//!
//! ## View modes
//!
//! - **Paginate** (default): a window of [`PAGE_SIZE`] rows
//! - **Filter**: triggered by a search term of exactly [`ADDRESS_LENGTH`]
//!   characters; shows every row whose address matches case-insensitively

mod deriver;
mod state;

pub use deriver::{
    derive_list_view, next_page, page_slice, previous_page, short_address, ViewMode,
    ADDRESS_LENGTH, PAGE_SIZE,
};
pub use state::{DashboardState, LoadErrors};
