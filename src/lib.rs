//! # Astro Dashboard
//!
//! Client for the $Astro dashboard: aggregate summary counters and a
//! searchable, paginated leaderboard of owner addresses.
//!
//! ## Modules
//!
//! - [`model`]: wire types and response decoding
//! - [`view`]: list view derivation and the view state container
//! - [`format`]: labels and locale-style number formatting
//! - [`render`]: plain-text rendering for the terminal
//! - `client`: HTTP client for the two dashboard endpoints (feature `client`)
//! - `config`: TOML configuration with environment overrides (feature `client`)
//!
//! The `model`, `view` and `format` modules carry no native-only
//! dependencies and are shared with the WASM front end.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use astro_dashboard::client::{load_dashboard, ClientConfig, DashboardClient};
//! use astro_dashboard::view::DashboardState;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DashboardClient::new(ClientConfig::default())?;
//!
//!     let mut state = DashboardState::new();
//!     load_dashboard(&client).await.apply(&mut state);
//!
//!     state.go_to_next_page();
//!     for row in state.current_view() {
//!         println!("{}. {} {}", row.record.index, row.short_address, row.record.point);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod format;
pub mod model;
pub mod render;
pub mod view;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod config;

// Re-export top-level types for convenience
pub use error::{DashboardError, DashboardResult};

pub use model::{
    assign_indices, decode_list, decode_summary, DerivedListRecord, ListRecord, SummaryPatch,
    SummaryRecord,
};

pub use view::{
    derive_list_view, short_address, DashboardState, LoadErrors, ViewMode, ADDRESS_LENGTH,
    PAGE_SIZE,
};

#[cfg(feature = "client")]
pub use client::{load_dashboard, ClientConfig, DashboardClient, DashboardLoad, DashboardSource};

#[cfg(feature = "client")]
pub use config::{Config, ConfigError, EndpointsConfig, LoggingConfig};
