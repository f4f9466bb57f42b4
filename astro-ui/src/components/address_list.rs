//! Address List Component
//!
//! The visible leaderboard rows, or a placeholder when there are none.

use astro_dashboard::format::format_point;
use astro_dashboard::model::DerivedListRecord;
use leptos::*;

use crate::state::global::GlobalState;

/// Leaderboard rows for the current page or address search
#[component]
pub fn AddressList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let has_rows = move || state.current_list.with(|rows| !rows.is_empty());

    view! {
        <Show
            when=has_rows
            fallback=|| view! { <div>"no data"</div> }
        >
            <ul>
                <For
                    each=move || state.current_list.get()
                    key=|row| row.record.index
                    children=|row| view! { <AddressRow row=row /> }
                />
            </ul>
        </Show>
    }
}

#[component]
fn AddressRow(row: DerivedListRecord) -> impl IntoView {
    view! {
        <li class="flex flex-col sm:flex-row justify-between items-start sm:items-center py-2 border-b last:border-b-0">
            <div class="mb-1 sm:mb-0">
                <span class="font-semibold mr-2">{format!("{}.", row.record.index)}</span>
                <span class="text-gray-600">{row.short_address.to_lowercase()}</span>
            </div>
            <span class="font-bold">{format_point(&row.record.point)}</span>
        </li>
    }
}
