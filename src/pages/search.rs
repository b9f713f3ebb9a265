//! Search Page
//!
//! Restaurant search by city: geocode, query nearby places, render result
//! cards with a staggered reveal and plot markers on a Leaflet map. The
//! card list and the map fail independently of each other.

use leptos::logging;
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::anim::AnimationHandle;
use crate::api::places::{self, Restaurant};
use crate::components::{ErrorText, InlineLoading, MapView};

/// Result cards rendered at most, however many places matched.
const MAX_CARDS: usize = 20;

/// Reveal delay per card during the stagger.
const REVEAL_MS_PER_CARD: f64 = 100.0;

/// Delay before the map renders, letting the cards land first.
const MAP_DELAY_MS: u32 = 600;

const MAP_CONTAINER_ID: &str = "map";

/// Search page component
#[component]
pub fn SearchPage() -> impl IntoView {
    let (city, set_city) = create_signal(String::new());
    let (name_filter, set_name_filter) = create_signal(String::new());
    let (results, set_results) = create_signal(Vec::<Restaurant>::new());
    let (revealed, set_revealed) = create_signal(0usize);
    let (searching, set_searching) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (map_error, set_map_error) = create_signal(None::<String>);

    let reveal_animation = AnimationHandle::new();
    // A search resolving after this panel instance is gone must not touch it.
    let alive = Rc::new(Cell::new(true));
    // Only one live map instance per container; the timer holding a pending
    // map render is dropped (cancelled) on teardown.
    let map_view = Rc::new(RefCell::new(None::<MapView>));
    let map_timer = Rc::new(RefCell::new(None::<gloo_timers::callback::Timeout>));

    let teardown_map = {
        let map_view = Rc::clone(&map_view);
        move || {
            if let Some(view) = map_view.borrow_mut().take() {
                view.remove();
            }
        }
    };

    let on_submit = {
        let alive = Rc::clone(&alive);
        let map_view = Rc::clone(&map_view);
        let map_timer = Rc::clone(&map_timer);
        let teardown_map = teardown_map.clone();
        let reveal_animation = reveal_animation.clone();

        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();

            let city_input = city.get().trim().to_string();
            let name_input = name_filter.get().trim().to_string();

            set_searching.set(true);
            set_error.set(None);
            set_map_error.set(None);
            set_results.set(Vec::new());
            set_revealed.set(0);

            let alive = Rc::clone(&alive);
            let map_view = Rc::clone(&map_view);
            let map_timer = Rc::clone(&map_timer);
            let teardown_map = teardown_map.clone();
            let reveal_animation = reveal_animation.clone();

            spawn_local(async move {
                let outcome = places::search_restaurants(&city_input, &name_input).await;
                if !alive.get() {
                    return;
                }

                match outcome {
                    Ok(restaurants) => {
                        let shown = restaurants.len().min(MAX_CARDS);
                        set_results.set(restaurants.clone());

                        // Staggered card reveal as one bounded run.
                        reveal_animation.start(shown as f64 * REVEAL_MS_PER_CARD, move |t| {
                            set_revealed.set((t * shown as f64).ceil() as usize);
                        });

                        // The map comes in after the cards. Its failure must
                        // not take the list down with it.
                        let timer =
                            gloo_timers::callback::Timeout::new(MAP_DELAY_MS, move || {
                                teardown_map();
                                match MapView::render(MAP_CONTAINER_ID, &restaurants) {
                                    Ok(view) => {
                                        *map_view.borrow_mut() = Some(view);
                                    }
                                    Err(e) => {
                                        logging::error!("map init failed: {:?}", e);
                                        set_map_error.set(Some(
                                            "Could not display the map for these results."
                                                .to_string(),
                                        ));
                                    }
                                }
                            });
                        // Replacing a pending timer drops and cancels it.
                        *map_timer.borrow_mut() = Some(timer);
                    }
                    Err(e) => {
                        teardown_map();
                        set_error.set(Some(e.to_string()));
                    }
                }
                set_searching.set(false);
            });
        }
    };

    on_cleanup(move || {
        alive.set(false);
        map_timer.borrow_mut().take();
        reveal_animation.cancel();
        teardown_map();
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Find Restaurants"</h1>
                <p class="text-gray-400 mt-1">"Search by city, narrow by name if you like"</p>
            </div>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 grid md:grid-cols-3 gap-4">
                <input
                    type="text"
                    placeholder="City (in India)"
                    prop:value=move || city.get()
                    on:input=move |ev| set_city.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <input
                    type="text"
                    placeholder="Restaurant name (optional)"
                    prop:value=move || name_filter.get()
                    on:input=move |ev| set_name_filter.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || searching.get()
                    class="bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors
                           flex items-center justify-center space-x-2"
                >
                    {move || if searching.get() {
                        view! {
                            <InlineLoading />
                            <span>"Searching..."</span>
                        }.into_view()
                    } else {
                        view! { <span>"Search"</span> }.into_view()
                    }}
                </button>
            </form>

            {move || error.get().map(|msg| view! { <ErrorText message=msg /> })}

            // Result cards, revealed a few at a time
            <div class="grid md:grid-cols-2 gap-4">
                {move || {
                    results
                        .get()
                        .into_iter()
                        .take(MAX_CARDS.min(revealed.get()))
                        .map(|restaurant| view! { <RestaurantCard restaurant=restaurant /> })
                        .collect_view()
                }}
            </div>

            {move || map_error.get().map(|msg| view! { <ErrorText message=msg /> })}

            // Leaflet owns everything inside this container
            {move || (!results.get().is_empty()).then(|| view! {
                <div id=MAP_CONTAINER_ID class="h-96 rounded-xl overflow-hidden"></div>
            })}
        </div>
    }
}

/// Result card for one restaurant
#[component]
fn RestaurantCard(restaurant: Restaurant) -> impl IntoView {
    let stars = "⭐".repeat(restaurant.rating.round() as usize);

    view! {
        <div class="restaurant-card bg-gray-800 rounded-xl p-4 border border-gray-700 space-y-1">
            <h3 class="text-lg font-semibold">{restaurant.name}</h3>
            <p class="text-gray-300 text-sm">"📍 " {restaurant.address}</p>
            <p class="text-gray-300 text-sm">"🍴 " {restaurant.food}</p>
            <p>{stars}</p>
            <p class="text-gray-400 text-sm">{format!("Rating: {:.1}/5", restaurant.rating)}</p>
        </div>
    }
}
