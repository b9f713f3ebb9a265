//! DineSight
//!
//! Restaurant-review sentiment frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Review classification via a local sentiment prediction service
//! - Prediction history with client-side filtering
//! - Aggregate sentiment bar chart with animated redraw
//! - Restaurant search by city with a Leaflet map
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the prediction service over HTTP and
//! with OpenStreetMap's Nominatim/Overpass APIs for the restaurant search.
//! Registered demo accounts live in browser local storage.

use leptos::*;

mod anim;
mod api;
mod app;
mod auth;
mod components;
mod pages;
mod sentiment;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
