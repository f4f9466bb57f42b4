//! Pager Component
//!
//! Prev/Next buttons, hidden while a full address is being searched.

use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn Pager() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Show when=move || state.pagination_visible()>
            <div class="flex justify-end space-x-4 mt-4">
                <PagerButton label="Prev" on_click=move || state.go_to_previous_page() />
                <PagerButton label="Next" on_click=move || state.go_to_next_page() />
            </div>
        </Show>
    }
}

#[component]
fn PagerButton(
    label: &'static str,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            class="px-4 py-2 bg-blue-400 text-white rounded hover:bg-blue-600 focus:outline-none"
            on:click=move |_| on_click()
        >
            {label}
        </button>
    }
}
