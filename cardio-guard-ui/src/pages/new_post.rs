//! New Post Page

use leptos::*;
use leptos_router::*;

use cardio_guard::forms;
use cardio_guard::model::PostDraft;

use crate::api;
use crate::components::{FormError, SubmitButton};
use crate::state::global::GlobalState;

#[component]
pub fn NewPost() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let draft = create_rw_signal(PostDraft::default());
    let image = create_rw_signal(None::<web_sys::File>);
    let (busy, set_busy) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_file = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        image.set(input.files().and_then(|files| files.get(0)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let post = draft.get_untracked();
        if post.title.trim().is_empty() || post.content.trim().is_empty() {
            set_error.set(Some(forms::FormError::MissingFields.to_string()));
            return;
        }
        let Some(token) = state.bearer() else {
            return;
        };

        set_busy.set(true);
        let file = image.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_post(&token, &post, file).await {
                Ok(message) => {
                    state.show_success(&message);
                    navigate("/community", Default::default());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto py-12 px-4">
            <A href="/community" class="text-sm text-rose-600 hover:underline">"‹ Back to community"</A>
            <h1 class="text-3xl font-bold text-slate-800 mt-4 mb-8">"Create a post"</h1>

            <form on:submit=on_submit class="bg-white rounded-xl shadow-md p-8 space-y-4">
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    class="w-full border border-slate-300 rounded-lg px-4 py-2"
                />
                <textarea
                    rows="8"
                    placeholder="What's on your mind?"
                    prop:value=move || draft.with(|d| d.content.clone())
                    on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                    class="w-full border border-slate-300 rounded-lg px-4 py-2"
                />
                <label class="block text-sm text-slate-600">
                    "Image (optional)"
                    <input type="file" accept="image/*" on:change=on_file class="block mt-1" />
                </label>
                {move || image.with(|f| f.as_ref().map(|f| f.name())).map(|name| view! {
                    <p class="text-xs text-slate-500">{format!("Selected: {}", name)}</p>
                })}
                <FormError message=error />
                <SubmitButton busy=busy label="Publish" busy_label="Publishing..." />
            </form>
        </div>
    }
}
