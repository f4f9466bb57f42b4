//! API Layer
//!
//! HTTP access to the dashboard endpoints.

pub mod client;

pub use client::*;
