//! Summary Card Component
//!
//! One card per summary counter.

use astro_dashboard::format::{format_number, summary_label};
use leptos::*;

use crate::state::global::GlobalState;

/// Grid of summary cards
#[component]
pub fn SummaryGrid() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 mb-8">
            {move || {
                state.summary.get().entries().into_iter().map(|(key, value)| view! {
                    <SummaryCard label=summary_label(key) value=format_number(value) />
                }).collect_view()
            }}
        </div>
    }
}

/// A single counter
#[component]
fn SummaryCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-white p-4 rounded-lg shadow">
            <h2 class="text-lg font-semibold">{label}</h2>
            <p class="text-2xl font-bold">{value}</p>
        </div>
    }
}
