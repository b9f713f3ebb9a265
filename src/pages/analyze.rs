//! Analyze Page
//!
//! Review entry and the per-review prediction result card.

use leptos::*;

use crate::api::{self, client::Prediction};
use crate::components::{ErrorText, InlineLoading};
use crate::sentiment::{ordered_probabilities, Sentiment};

/// Analyze page component
#[component]
pub fn AnalyzePage() -> impl IntoView {
    let (review, set_review) = create_signal(String::new());
    let (result, set_result) = create_signal(None::<Prediction>);
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);
    let (bars_armed, set_bars_armed) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = review.get();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::predict(&text).await {
                Ok(prediction) => {
                    set_result.set(Some(prediction));
                    // Bars render at zero width, then transition to their
                    // final share once the card is in the DOM.
                    set_bars_armed.set(false);
                    gloo_timers::callback::Timeout::new(100, move || set_bars_armed.set(true))
                        .forget();
                }
                Err(e) => {
                    set_result.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Analyze a Review"</h1>
                <p class="text-gray-400 mt-1">"Paste a restaurant review and see how it reads"</p>
            </div>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                <textarea
                    rows="4"
                    placeholder="The biryani was outstanding and the staff were lovely..."
                    prop:value=move || review.get()
                    on:input=move |ev| set_review.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />

                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors
                           flex items-center justify-center space-x-2"
                >
                    {move || if loading.get() {
                        view! {
                            <InlineLoading />
                            <span>"Analyzing..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Analyze Sentiment"</span> }.into_view()
                    }}
                </button>
            </form>

            {move || error.get().map(|msg| view! {
                <div class="bg-gray-800 rounded-xl p-6">
                    <ErrorText message=msg />
                </div>
            })}

            {move || result.get().map(|prediction| view! {
                <ResultCard prediction=prediction bars_armed=bars_armed />
            })}
        </div>
    }
}

/// Result card for one prediction
#[component]
fn ResultCard(prediction: Prediction, bars_armed: ReadSignal<bool>) -> impl IntoView {
    let sentiment = Sentiment::from_label(&prediction.sentiment).unwrap_or(Sentiment::Neutral);
    let bars = ordered_probabilities(&prediction.probabilities);

    view! {
        <div class="bg-gray-800 rounded-xl p-6 space-y-2">
            <h2 class=format!("text-2xl font-bold {}", sentiment.text_class())>
                {sentiment.headline()}
            </h2>

            <p class="text-lg">{format!("Confidence: {:.2}%", prediction.confidence)}</p>

            {(!prediction.message.is_empty()).then(|| view! {
                <p class="text-gray-300">{format!("💡 Message: {}", prediction.message)}</p>
            })}
            {(!prediction.timestamp.is_empty()).then(|| view! {
                <p class="text-gray-400 text-sm">{format!("🕒 Time: {}", prediction.timestamp)}</p>
            })}

            // Per-label probability bars, widths proportional to the scores
            <div class="pt-2 space-y-2">
                {bars.into_iter().map(|(label, probability)| {
                    let color = Sentiment::from_label(&label)
                        .map(|s| s.color())
                        .unwrap_or("#6b7280");
                    let width = probability.clamp(0.0, 100.0);
                    view! {
                        <div class="flex items-center space-x-3">
                            <span class="w-32 text-sm text-gray-300 shrink-0">
                                {format!("{}: {:.1}%", label, probability)}
                            </span>
                            <div class="flex-1 bg-gray-700 rounded h-5">
                                <div
                                    class="prob-bar h-5 rounded"
                                    style=move || format!(
                                        "background-color: {}; width: {}%",
                                        color,
                                        if bars_armed.get() { width } else { 0.0 },
                                    )
                                />
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
