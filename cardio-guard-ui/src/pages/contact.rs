//! Contact Page

use leptos::*;

use cardio_guard::forms::ContactForm;

use crate::api;
use crate::components::{FormError, SubmitButton};
use crate::state::global::GlobalState;

#[component]
pub fn ContactUs() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = create_rw_signal(ContactForm::default());
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

        set_busy.set(true);
        spawn_local(async move {
            match api::send_contact(&payload).await {
                Ok(message) => {
                    state.show_success(&message);
                    form.set(ContactForm::default());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto py-12 px-4 grid md:grid-cols-2 gap-10">
            <div>
                <h1 class="text-3xl font-bold text-slate-800 mb-4">"Contact Us"</h1>
                <p class="text-slate-600 mb-6">
                    "Questions about your results or the service? Send us a message and \
                     our team will get back to you."
                </p>
                <ul class="space-y-2 text-sm text-slate-600">
                    <li>"✉ support@cardioguard.example"</li>
                    <li>"☎ +91 98765 43210"</li>
                </ul>
            </div>

            <form on:submit=on_submit class="bg-white rounded-xl shadow-md p-6 space-y-4">
                <input
                    type="text"
                    placeholder="Full name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    class="w-full border border-slate-300 rounded-lg px-4 py-2"
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    class="w-full border border-slate-300 rounded-lg px-4 py-2"
                />
                <input
                    type="text"
                    placeholder="Subject"
                    prop:value=move || form.with(|f| f.subject.clone())
                    on:input=move |ev| form.update(|f| f.subject = event_target_value(&ev))
                    class="w-full border border-slate-300 rounded-lg px-4 py-2"
                />
                <textarea
                    rows="5"
                    placeholder="Message"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    class="w-full border border-slate-300 rounded-lg px-4 py-2"
                />
                <FormError message=error />
                <SubmitButton busy=busy label="Send message" busy_label="Sending..." />
            </form>
        </div>
    }
}
