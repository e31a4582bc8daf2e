//! Dashboard Page
//!
//! Profile details, picture upload and the user's own posts.

use leptos::*;

use cardio_guard::forms;
use cardio_guard::links;
use cardio_guard::model::ProfileUpdate;

use crate::api;
use crate::components::{FormError, MyPosts, SubmitButton};
use crate::state::global::GlobalState;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The cached profile may be stale if it was edited elsewhere
    if let Some(token) = state.bearer() {
        spawn_local(async move {
            match api::user_details(&token).await {
                Ok(user) => state.update_user(user),
                Err(e) => web_sys::console::warn_1(&format!("Profile refresh failed: {}", e).into()),
            }
        });
    }

    view! {
        <div class="max-w-5xl mx-auto py-10 px-4 space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-slate-800">"Dashboard"</h1>
                <p class="text-slate-500 mt-1">
                    {move || state.user.with(|u| {
                        u.as_ref()
                            .map(|u| format!("Welcome back, {}", u.display_name()))
                            .unwrap_or_default()
                    })}
                </p>
            </div>

            <div class="grid md:grid-cols-3 gap-8">
                <ProfilePicture />
                <div class="md:col-span-2">
                    <ProfileForm />
                </div>
            </div>

            <MyPosts />
        </div>
    }
}

#[component]
fn ProfilePicture() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (uploading, set_uploading) = create_signal(false);

    let picture = move || {
        state.user.with(|u| match u {
            Some(user) => match user.profile_picture.as_deref() {
                Some(p) => links::profile_picture_url(&api::get_api_base(), p),
                None => links::avatar_url(&user.display_name()),
            },
            None => links::avatar_url("?"),
        })
    };

    let on_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Some(token) = state.bearer() else {
            return;
        };

        set_uploading.set(true);
        spawn_local(async move {
            match api::edit_profile_picture(&token, file).await {
                Ok(user) => {
                    state.update_user(user);
                    state.show_success("Profile picture updated");
                }
                Err(e) => state.show_error(&e),
            }
            set_uploading.set(false);
        });
    };

    view! {
        <section class="bg-white rounded-xl shadow-sm p-6 text-center">
            <img src=picture alt="Profile" class="w-32 h-32 rounded-full object-cover mx-auto mb-4" />
            <label class="inline-block cursor-pointer px-4 py-2 rounded-lg bg-rose-50 text-rose-700 text-sm hover:bg-rose-100">
                {move || if uploading.get() { "Uploading..." } else { "Change picture" }}
                <input type="file" accept="image/*" class="hidden" on:change=on_change />
            </label>
        </section>
    }
}

#[component]
fn ProfileForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let current = state.user.get_untracked();
    let initial = |pick: fn(&cardio_guard::model::UserDetails) -> Option<String>| {
        current.as_ref().and_then(pick).unwrap_or_default()
    };

    let first_name = create_rw_signal(initial(|u| u.first_name.clone()));
    let last_name = create_rw_signal(initial(|u| u.last_name.clone()));
    let username = create_rw_signal(initial(|u| u.username.clone()));
    let phone = create_rw_signal(initial(|u| u.phone_number.clone()));
    let (busy, set_busy) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let filled = |s: RwSignal<String>| Some(s.get_untracked()).filter(|v| !v.trim().is_empty());
        let update = ProfileUpdate {
            first_name: filled(first_name),
            last_name: filled(last_name),
            username: filled(username),
            phone_number: filled(phone),
        };
        if update.is_empty() {
            set_error.set(Some(forms::FormError::MissingFields.to_string()));
            return;
        }
        let Some(token) = state.bearer() else {
            return;
        };

        set_busy.set(true);
        spawn_local(async move {
            match api::edit_user_details(&token, &update).await {
                Ok(user) => {
                    state.update_user(user);
                    state.show_success("Profile updated successfully");
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <section class="bg-white rounded-xl shadow-sm p-6">
            <h2 class="text-xl font-semibold text-slate-800 mb-4">"Profile"</h2>
            <p class="text-sm text-slate-500 mb-4">
                {move || state.user.with(|u| u.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
            </p>
            <form on:submit=on_submit class="space-y-4">
                <div class="grid grid-cols-2 gap-4">
                    <ProfileField label="First name" value=first_name />
                    <ProfileField label="Last name" value=last_name />
                    <ProfileField label="Username" value=username />
                    <ProfileField label="Phone number" value=phone />
                </div>
                <FormError message=error />
                <SubmitButton busy=busy label="Save changes" busy_label="Saving..." />
            </form>
        </section>
    }
}

#[component]
fn ProfileField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-slate-700 mb-1">{label}</span>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full border border-slate-300 rounded-lg px-4 py-2 focus:border-rose-500 focus:outline-none"
            />
        </label>
    }
}
