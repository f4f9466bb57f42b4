//! $Astro Dashboard
//!
//! Summary counters and address leaderboard, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches the two dashboard endpoints over HTTP and does all
//! paging and address search in the browser, using the view derivation shared
//! with the `astro-dashboard` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
