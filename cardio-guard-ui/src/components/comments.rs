//! Comment Thread Component
//!
//! Comments on a post with their replies. Every successful comment or
//! reply asks the parent to reload the post.

use leptos::*;

use cardio_guard::community::ReplyDrafts;
use cardio_guard::links;
use cardio_guard::model::{Comment, CommentId, PostId, Reply};

use crate::api;
use crate::state::global::GlobalState;

const BLANK_TEXT: &str = "Please write something first";

#[component]
pub fn CommentThread(
    post_id: PostId,
    comments: Vec<Comment>,
    #[prop(into)] on_change: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (comment, set_comment) = create_signal(String::new());
    let (posting, set_posting) = create_signal(false);
    let drafts = create_rw_signal(ReplyDrafts::default());

    let submit_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let content = comment.get_untracked().trim().to_string();
        if content.is_empty() {
            state.show_error(BLANK_TEXT);
            return;
        }
        let Some(token) = state.bearer() else {
            return;
        };

        set_posting.set(true);
        spawn_local(async move {
            match api::create_comment(&token, post_id, &content).await {
                Ok(()) => {
                    set_comment.set(String::new());
                    on_change.call(());
                }
                Err(e) => state.show_error(&e),
            }
            set_posting.set(false);
        });
    };

    let count = comments.len();

    view! {
        <section class="mt-8">
            <h3 class="text-lg font-semibold text-slate-800 mb-4">
                {format!("Comments ({})", count)}
            </h3>

            <form on:submit=submit_comment class="flex gap-2 mb-6">
                <input
                    type="text"
                    placeholder="Add a comment..."
                    prop:value=move || comment.get()
                    on:input=move |ev| set_comment.set(event_target_value(&ev))
                    class="flex-1 border border-slate-300 rounded-lg px-4 py-2 focus:border-rose-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || posting.get()
                    class="px-4 py-2 bg-rose-600 text-white rounded-lg disabled:opacity-50"
                >
                    "Post"
                </button>
            </form>

            <div class="space-y-4">
                {comments
                    .into_iter()
                    .map(|c| view! { <CommentItem comment=c drafts=drafts on_change=on_change /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CommentItem(
    comment: Comment,
    drafts: RwSignal<ReplyDrafts>,
    on_change: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let id: CommentId = comment.id;
    let open = create_memo(move |_| drafts.with(|d| d.is_open(id)));

    let submit_reply = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = drafts.with_untracked(|d| d.draft(id).trim().to_string());
        if text.is_empty() {
            state.show_error(BLANK_TEXT);
            return;
        }
        let Some(token) = state.bearer() else {
            return;
        };

        spawn_local(async move {
            match api::create_reply(&token, id, &text).await {
                Ok(()) => {
                    drafts.update(|d| {
                        d.take(id);
                    });
                    on_change.call(());
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    view! {
        <div class="bg-white rounded-lg shadow-sm p-4">
            <Author name=comment.user.clone() />
            <p class="text-slate-700 mt-2">{comment.content}</p>
            <button
                on:click=move |_| {
                    drafts.update(|d| {
                        d.toggle(id);
                    });
                }
                class="text-xs text-rose-600 hover:underline mt-2"
            >
                {move || if open.get() { "Cancel" } else { "Reply" }}
            </button>

            {move || open.get().then(|| view! {
                <form on:submit=submit_reply class="flex gap-2 mt-2">
                    <input
                        type="text"
                        placeholder="Write a reply..."
                        prop:value=move || drafts.with(|d| d.draft(id).to_string())
                        on:input=move |ev| drafts.update(|d| d.set(id, event_target_value(&ev)))
                        class="flex-1 border border-slate-300 rounded-lg px-3 py-1 text-sm"
                    />
                    <button type="submit" class="px-3 py-1 bg-rose-600 text-white rounded-lg text-sm">
                        "Send"
                    </button>
                </form>
            })}

            <div class="ml-8 mt-3 space-y-2">
                {comment
                    .replies
                    .into_iter()
                    .map(|reply| view! { <ReplyItem reply=reply /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ReplyItem(reply: Reply) -> impl IntoView {
    view! {
        <div class="border-l-2 border-rose-100 pl-3">
            <Author name=reply.user />
            <p class="text-sm text-slate-600 mt-1">{reply.content}</p>
        </div>
    }
}

#[component]
fn Author(name: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <img src=links::avatar_url(&name) alt="" class="w-6 h-6 rounded-full" />
            <span class="text-sm font-medium text-slate-800">{name}</span>
        </div>
    }
}
