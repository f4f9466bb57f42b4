//! Search Box Component

use leptos::*;

use crate::state::global::GlobalState;

/// Address search input bound to the search term
#[component]
pub fn SearchBox() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="mb-4">
            <input
                type="text"
                placeholder="Search by address"
                class="w-full p-2 border border-gray-300 rounded"
                prop:value=move || state.search_term.get()
                on:input=move |ev| state.search_term.set(event_target_value(&ev))
            />
        </div>
    }
}
