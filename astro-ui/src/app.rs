//! App Root Component
//!
//! Provides the dashboard state and renders the single dashboard page.

use leptos::*;

use crate::components::Toast;
use crate::pages::Dashboard;
use crate::state::global::provide_dashboard_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_dashboard_state();

    view! {
        <div class="min-h-screen bg-gray-100 text-gray-800">
            <div class="container mx-auto px-4 py-8">
                <Dashboard />
            </div>

            <Toast />
        </div>
    }
}
