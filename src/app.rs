//! App Root Component
//!
//! Provides the session context, renders the navigation bar and switches
//! the mutually-exclusive panels. The exhaustive match is what keeps
//! exactly one panel visible at a time.

use leptos::*;

use crate::api;
use crate::components::Nav;
use crate::pages::{
    AnalyzePage, CustomersPage, GraphPage, HistoryPage, LoginPage, RegisterPage, SearchPage,
};
use crate::state::panel::Panel;
use crate::state::session::{provide_session, Session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the session context to all components
    provide_session();
    let session = use_context::<Session>().expect("Session not provided");

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Navigation header
            <Nav />

            // Main content area: the single active panel
            <main class="flex-1 container mx-auto px-4 py-8">
                {move || match session.active_panel.get() {
                    Panel::Login => view! { <LoginPage /> }.into_view(),
                    Panel::Register => view! { <RegisterPage /> }.into_view(),
                    Panel::Analyze => view! { <AnalyzePage /> }.into_view(),
                    Panel::Graph => view! { <GraphPage /> }.into_view(),
                    Panel::History => view! { <HistoryPage /> }.into_view(),
                    Panel::Search => view! { <SearchPage /> }.into_view(),
                    Panel::Customers => view! { <CustomersPage /> }.into_view(),
                }}
            </main>

            <Footer />
        </div>
    }
}

/// Footer naming the prediction service in use
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4 text-sm text-gray-500">
            <div class="container mx-auto">
                {format!("Prediction service: {}", api::get_api_base())}
            </div>
        </footer>
    }
}
