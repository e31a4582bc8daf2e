//! Feedback Page
//!
//! Name, email, message and a one to five star rating.

use leptos::*;

use cardio_guard::forms::FeedbackForm;

use crate::api;
use crate::components::{FormError, SubmitButton};
use crate::state::global::GlobalState;

#[component]
pub fn Feedback() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = create_rw_signal(FeedbackForm::default());
    let (busy, set_busy) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let payload = match form.with_untracked(|f| f.validate()) {
            Ok(p) => p,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let Some(token) = state.bearer() else {
            return;
        };

        set_busy.set(true);
        spawn_local(async move {
            match api::add_feedback(&token, &payload).await {
                Ok(message) => {
                    state.show_success(&message);
                    form.set(FeedbackForm::default());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto py-12 px-4">
            <h1 class="text-3xl font-bold text-slate-800 mb-2">"Share your feedback"</h1>
            <p class="text-slate-500 mb-8">"Tell us how Cardio Guard worked for you."</p>

            <form on:submit=on_submit class="bg-white rounded-xl shadow-md p-8 space-y-4">
                <input
                    type="text"
                    placeholder="Your name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    class="w-full border border-slate-300 rounded-lg px-4 py-2"
                />
                <input
                    type="email"
                    placeholder="Your email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    class="w-full border border-slate-300 rounded-lg px-4 py-2"
                />
                <textarea
                    rows="5"
                    placeholder="Your message"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    class="w-full border border-slate-300 rounded-lg px-4 py-2"
                />

                <div class="flex items-center gap-1">
                    <span class="text-sm text-slate-600 mr-2">"Rating"</span>
                    {(1..=5u8).map(|star| view! {
                        <button
                            type="button"
                            on:click=move |_| form.update(|f| f.rating = star)
                            class=move || if form.with(|f| f.rating >= star) {
                                "text-2xl text-amber-400"
                            } else {
                                "text-2xl text-slate-300 hover:text-amber-300"
                            }
                        >
                            "★"
                        </button>
                    }).collect_view()}
                </div>

                <FormError message=error />
                <SubmitButton busy=busy label="Submit feedback" busy_label="Submitting..." />
            </form>
        </div>
    }
}
