//! Inline Feedback Component
//!
//! Color-coded inline messages rendered inside the active panel. Every
//! failure surfaces through one of these; nothing escapes the UI boundary.

use leptos::*;

/// Inline error line
#[component]
pub fn ErrorText(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="text-red-400 font-medium">"⚠️ " {message}</p> }
}

/// Inline success line
#[component]
pub fn SuccessText(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="text-green-400 font-medium">"✓ " {message}</p> }
}
