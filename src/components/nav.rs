//! Navigation Component
//!
//! Header bar with the animated brand banner and role-dependent panel
//! buttons. Customers see Home and Search; admins see Analyse, History and
//! Customer Info. The buttons stay hidden while logged out.

use leptos::*;

use crate::anim::AnimationHandle;
use crate::state::panel::Panel;
use crate::state::session::Session;

const BRAND: &str = "🍽️ Sentiment Analyzer on Restaurant Reviews";

/// Typewriter speed for the brand banner, per character.
const TYPE_MS_PER_CHAR: f64 = 80.0;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");

    let (typed, set_typed) = create_signal(0usize);
    let animation = AnimationHandle::new();
    let char_count = BRAND.chars().count();
    animation.start(char_count as f64 * TYPE_MS_PER_CHAR, move |t| {
        set_typed.set((t * char_count as f64).round() as usize);
    });
    on_cleanup(move || animation.cancel());

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand banner, typed out character by character
                    <span class="text-xl font-bold text-white whitespace-nowrap">
                        {move || BRAND.chars().take(typed.get()).collect::<String>()}
                    </span>

                    // Navigation buttons for the resolved role
                    {move || {
                        session.role.get().map(|role| view! {
                            <div class="flex items-center space-x-1">
                                {role
                                    .nav_panels()
                                    .iter()
                                    .map(|&panel| view! { <NavButton panel=panel /> })
                                    .collect_view()}
                                <LogoutButton />
                            </div>
                        })
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Navigation button for one panel
#[component]
fn NavButton(panel: Panel) -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");
    let is_active = create_memo(move |_| session.active_panel.get() == panel);

    view! {
        <button
            on:click=move |_| session.show(panel)
            class=move || {
                let base = "px-4 py-2 rounded-lg transition-colors";
                if is_active.get() {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            {panel.nav_label()}
        </button>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");

    view! {
        <button
            on:click=move |_| session.logout()
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
        >
            "Logout"
        </button>
    }
}
