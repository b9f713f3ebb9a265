//! API Clients
//!
//! HTTP access to the sentiment prediction service and to the public
//! geocoding and place-search services.

pub mod client;
pub mod places;

pub use client::{fetch_history, get_api_base, predict};
