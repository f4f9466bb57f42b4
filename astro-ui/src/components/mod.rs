//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod address_list;
pub mod pager;
pub mod search_box;
pub mod summary_card;
pub mod toast;

pub use address_list::AddressList;
pub use pager::Pager;
pub use search_box::SearchBox;
pub use summary_card::SummaryGrid;
pub use toast::Toast;
