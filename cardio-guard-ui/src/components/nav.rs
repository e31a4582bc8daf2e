//! Navigation Component
//!
//! Header navigation bar with logo, page links and the account menu.

use leptos::*;
use leptos_router::*;

use cardio_guard::links;
use cardio_guard::router::Route as Page;

use crate::api;
use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    // Navigation runs on the next animation frame. Clearing the session in
    // a later frame keeps a gated page from redirecting to login first.
    let logout = move |_| {
        navigate(&Page::after_logout().path(), Default::default());
        request_animation_frame(move || {
            state.sign_out();
            state.show_success("You have been logged out");
        });
    };

    view! {
        <nav class="bg-white border-b border-rose-100 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"❤"</span>
                        <span class="text-xl font-bold text-rose-600">"Cardio Guard"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/about-us" label="About" />
                        <NavLink href="/predict" label="Check Risk" />
                        <NavLink href="/community" label="Community" />
                        <NavLink href="/feedback" label="Feedback" />
                        <NavLink href="/contact-us" label="Contact" />
                    </div>

                    // Account menu
                    {move || match state.user.get() {
                        Some(user) if state.is_authenticated() => {
                            let name = user.display_name();
                            let picture = user
                                .profile_picture
                                .as_deref()
                                .map(|p| links::profile_picture_url(&api::get_api_base(), p))
                                .unwrap_or_else(|| links::avatar_url(&name));
                            view! {
                                <div class="flex items-center space-x-3">
                                    <A href="/dashboard" class="flex items-center space-x-2">
                                        <img src=picture alt=name.clone() class="w-8 h-8 rounded-full object-cover" />
                                        <span class="text-sm font-medium">{name}</span>
                                    </A>
                                    <button
                                        on:click=logout.clone()
                                        class="px-3 py-1 rounded-lg text-sm text-rose-600 hover:bg-rose-50"
                                    >
                                        "Logout"
                                    </button>
                                </div>
                            }
                            .into_view()
                        }
                        _ => view! {
                            <A
                                href="/login-register"
                                class="px-4 py-2 rounded-lg bg-rose-600 text-white text-sm font-medium hover:bg-rose-700"
                            >
                                "Login"
                            </A>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-rose-600 hover:bg-rose-50 transition-colors"
            active_class="text-rose-600 bg-rose-50"
        >
            {label}
        </A>
    }
}
