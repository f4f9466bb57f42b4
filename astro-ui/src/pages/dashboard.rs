//! Dashboard Page
//!
//! Summary cards on top, then the searchable, paginated leaderboard.

use leptos::*;

use crate::api;
use crate::components::{AddressList, Pager, SearchBox, SummaryGrid};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The two fetches are independent; each updates only its own signal.
    // `try_set` returns the value back when the page has been disposed.
    spawn_local(async move {
        match api::fetch_summary().await {
            Ok(patch) => {
                let _ = state.summary.try_set(patch.into_record());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch summary: {}", e).into());
                state.show_error("Summary unavailable");
            }
        }
    });

    spawn_local(async move {
        match api::fetch_list().await {
            Ok(records) => {
                let count = records.len();
                if state.total_list.try_set(records).is_none() {
                    web_sys::console::debug_1(&format!("Loaded {} addresses", count).into());
                }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch list: {}", e).into());
                state.show_error("Leaderboard unavailable");
            }
        }
    });

    view! {
        <h1 class="text-3xl font-bold mb-8">"$Astro Dashboard"</h1>

        <SummaryGrid />

        <div class="bg-white rounded-lg shadow p-4 sm:p-6">
            <SearchBox />
            <AddressList />
            <Pager />
        </div>
    }
}
