//! Register Page
//!
//! Customer account creation; records persist in browser storage.

use leptos::*;

use crate::auth::{self, UserRecord};
use crate::components::{ErrorText, SuccessText};
use crate::state::panel::Panel;
use crate::state::session::Session;

/// Register page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not provided");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (registered, set_registered) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let record = UserRecord {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            username: username.get().trim().to_string(),
            password: password.get(),
        };

        if let Some(problem) = validate_form(&record) {
            set_error.set(Some(problem.to_string()));
            return;
        }

        match auth::register(record) {
            Ok(()) => {
                set_error.set(None);
                set_registered.set(true);
                set_name.set(String::new());
                set_email.set(String::new());
                set_username.set(String::new());
                set_password.set(String::new());
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-6 mt-12">
            <h1 class="text-2xl font-bold mb-6">"Create an Account"</h1>

            <form on:submit=on_submit class="space-y-4">
                <RegisterField label="Name" kind="text" value=name set_value=set_name />
                <RegisterField label="Email" kind="email" value=email set_value=set_email />
                <RegisterField label="Username" kind="text" value=username set_value=set_username />
                <RegisterField label="Password" kind="password" value=password set_value=set_password />

                {move || error.get().map(|msg| view! { <ErrorText message=msg /> })}
                {move || {
                    registered.get().then(|| view! {
                        <SuccessText message="Registration successful! You can now log in." />
                    })
                }}

                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Register"
                </button>
            </form>

            <p class="text-sm text-gray-400 mt-4">
                "Already registered? "
                <button
                    on:click=move |_| session.show(Panel::Login)
                    class="text-primary-400 hover:underline"
                >
                    "Back to login"
                </button>
            </p>
        </div>
    }
}

#[component]
fn RegisterField(
    label: &'static str,
    kind: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

/// Field checks run before touching storage.
fn validate_form(record: &UserRecord) -> Option<&'static str> {
    if record.name.is_empty()
        || record.email.is_empty()
        || record.username.is_empty()
        || record.password.is_empty()
    {
        return Some("All fields are required");
    }
    if !record.email.contains('@') {
        return Some("Please enter a valid email address");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            username: "asha".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(validate_form(&record()), None);
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut r = record();
        r.username = String::new();
        assert_eq!(validate_form(&r), Some("All fields are required"));
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut r = record();
        r.email = "asha.example.com".to_string();
        assert_eq!(validate_form(&r), Some("Please enter a valid email address"));
    }
}
