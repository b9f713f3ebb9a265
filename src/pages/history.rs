//! History Page
//!
//! The prediction log, fetched once per activation and filtered client-side.

use leptos::*;

use crate::api::{self, client::ReviewRecord};
use crate::components::{ErrorText, Loading};
use crate::sentiment::{filter_reviews, Sentiment, SentimentFilter};
use crate::state::panel::Panel;
use crate::state::session::Session;

/// History page component
#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");

    let (filter, set_filter) = create_signal(SentimentFilter::All);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (refreshed_at, set_refreshed_at) = create_signal(None::<String>);

    // One load per activation; a newer load or a panel switch supersedes it.
    create_effect(move |_| {
        let epoch = session.begin_history_load();
        set_loading.set(true);
        spawn_local(async move {
            let fetched = api::fetch_history().await;
            if !session.history_load_is_current(epoch, Panel::History) {
                return;
            }
            match fetched {
                Ok(records) => {
                    session.history.set(records);
                    set_error.set(None);
                    set_refreshed_at
                        .set(Some(chrono::Local::now().format("%H:%M:%S").to_string()));
                }
                Err(e) => {
                    // No stale rows behind a failure banner.
                    session.history.set(Vec::new());
                    set_error.set(Some(format!("Failed to load history: {}", e)));
                }
            }
            set_loading.set(false);
        });
    });

    let rows = create_memo(move |_| filter_reviews(&session.history.get(), filter.get()));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"History"</h1>
                    <p class="text-gray-400 mt-1">"Every review the model has scored"</p>
                </div>

                <div class="flex items-center space-x-3">
                    {move || refreshed_at.get().map(|at| view! {
                        <span class="text-sm text-gray-500">{format!("Refreshed at {}", at)}</span>
                    })}
                    <FilterSelect set_filter=set_filter />
                </div>
            </div>

            {move || error.get().map(|msg| view! { <ErrorText message=msg /> })}

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    let records = rows.get();
                    if records.is_empty() {
                        if error.get().is_none() {
                            view! { <p class="text-gray-400">"No reviews recorded yet."</p> }
                                .into_view()
                        } else {
                            view! {}.into_view()
                        }
                    } else {
                        view! { <HistoryTable records=records /> }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Sentiment filter dropdown; filtering never refetches.
#[component]
fn FilterSelect(set_filter: WriteSignal<SentimentFilter>) -> impl IntoView {
    view! {
        <select
            on:change=move |ev| {
                set_filter.set(SentimentFilter::from_value(&event_target_value(&ev)))
            }
            class="bg-gray-700 rounded-lg px-4 py-2
                   border border-gray-600 focus:border-primary-500 focus:outline-none"
        >
            <option value="All">"All"</option>
            <option value="Positive">"Positive"</option>
            <option value="Negative">"Negative"</option>
            <option value="Neutral">"Neutral"</option>
        </select>
    }
}

#[component]
fn HistoryTable(records: Vec<ReviewRecord>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden">
            <table class="w-full text-left">
                <thead class="bg-gray-700 text-gray-300 text-sm">
                    <tr>
                        <th class="px-4 py-3">"#"</th>
                        <th class="px-4 py-3">"Review"</th>
                        <th class="px-4 py-3">"Sentiment"</th>
                        <th class="px-4 py-3">"Confidence"</th>
                        <th class="px-4 py-3">"Time"</th>
                    </tr>
                </thead>
                <tbody>
                    {records.into_iter().enumerate().map(|(index, record)| {
                        let tone = Sentiment::from_label(&record.sentiment)
                            .map(|s| s.text_class())
                            .unwrap_or("text-gray-300");
                        view! {
                            <tr class="border-t border-gray-700">
                                <td class="px-4 py-3 text-gray-500">{index + 1}</td>
                                <td class="px-4 py-3">{record.review}</td>
                                <td class=format!("px-4 py-3 font-medium {}", tone)>
                                    {record.sentiment}
                                </td>
                                <td class="px-4 py-3">{format!("{:.2}", record.confidence)}</td>
                                <td class="px-4 py-3 text-gray-400">{record.timestamp}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
