//! Graph Page
//!
//! Aggregate sentiment over the full history (the admin "Analyse" view).
//! Refreshes the shared history cache on activation, then hands the counts
//! to the canvas chart.

use leptos::*;

use crate::api;
use crate::components::{ErrorText, Loading, SentimentChart};
use crate::state::panel::Panel;
use crate::state::session::Session;

/// Graph page component
#[component]
pub fn GraphPage() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");

    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    create_effect(move |_| {
        let epoch = session.begin_history_load();
        set_loading.set(true);
        spawn_local(async move {
            let fetched = api::fetch_history().await;
            if !session.history_load_is_current(epoch, Panel::Graph) {
                return;
            }
            match fetched {
                Ok(records) => {
                    session.history.set(records);
                    set_error.set(None);
                }
                Err(e) => {
                    session.history.set(Vec::new());
                    set_error.set(Some(format!("Failed to load analysis: {}", e)));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Sentiment Analysis"</h1>
                <p class="text-gray-400 mt-1">"How all reviews break down by label"</p>
            </div>

            {move || error.get().map(|msg| view! { <ErrorText message=msg /> })}

            <section class="bg-gray-800 rounded-xl p-6">
                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <SentimentChart /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}
