//! Customer Info Page
//!
//! Admin view of the customer accounts registered in this browser.

use leptos::*;

use crate::auth;
use crate::components::ErrorText;

/// Customer info page component
#[component]
pub fn CustomersPage() -> impl IntoView {
    let loaded = auth::load_users();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Customer Info"</h1>
                <p class="text-gray-400 mt-1">"Accounts registered in this browser"</p>
            </div>

            {match loaded {
                Err(e) => view! { <ErrorText message=e.to_string() /> }.into_view(),
                Ok(users) if users.is_empty() => view! {
                    <p class="text-gray-400">"No customers registered yet."</p>
                }.into_view(),
                Ok(users) => view! {
                    <div class="bg-gray-800 rounded-xl overflow-hidden">
                        <table class="w-full text-left">
                            <thead class="bg-gray-700 text-gray-300 text-sm">
                                <tr>
                                    <th class="px-4 py-3">"Name"</th>
                                    <th class="px-4 py-3">"Email"</th>
                                    <th class="px-4 py-3">"Username"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {users.into_iter().map(|user| view! {
                                    <tr class="border-t border-gray-700">
                                        <td class="px-4 py-3">{user.name}</td>
                                        <td class="px-4 py-3 text-gray-300">{user.email}</td>
                                        <td class="px-4 py-3 text-gray-400">{user.username}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
