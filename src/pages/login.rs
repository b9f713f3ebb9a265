//! Login Page
//!
//! Role-gated entry: the seeded admin pair or a registered customer record.

use leptos::*;

use crate::auth::{self, Role};
use crate::components::ErrorText;
use crate::state::panel::Panel;
use crate::state::session::Session;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");

    let (role, set_role) = create_signal(Role::Customer);
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let entered = username.get();
        match auth::login(role.get(), entered.trim(), &password.get()) {
            Ok(role) => {
                set_username.set(String::new());
                set_password.set(String::new());
                set_error.set(None);
                session.login(role);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-6 mt-12">
            <h1 class="text-2xl font-bold mb-6">"Login"</h1>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Login as"</label>
                    <select
                        on:change=move |ev| {
                            set_role.set(match event_target_value(&ev).as_str() {
                                "admin" => Role::Admin,
                                _ => Role::Customer,
                            })
                        }
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        <option value="customer">"Customer"</option>
                        <option value="admin">"Admin"</option>
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                {move || error.get().map(|msg| view! { <ErrorText message=msg /> })}

                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Login"
                </button>
            </form>

            <p class="text-sm text-gray-400 mt-4">
                "New here? "
                <button
                    on:click=move |_| session.show(Panel::Register)
                    class="text-primary-400 hover:underline"
                >
                    "Create an account"
                </button>
            </p>
        </div>
    }
}
