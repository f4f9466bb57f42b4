//! State Management
//!
//! Reactive dashboard state.

pub mod global;

pub use global::{provide_dashboard_state, GlobalState};
