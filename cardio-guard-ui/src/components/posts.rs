//! Post Components
//!
//! Cards for the community feed and the dashboard's "my posts" board,
//! which edits inline and asks before deleting.

use leptos::*;
use leptos_router::*;

use cardio_guard::community::{BoardMode, PostBoard};
use cardio_guard::forms;
use cardio_guard::links;
use cardio_guard::model::Post;

use crate::api;
use crate::components::loading::ListSkeleton;
use crate::state::global::GlobalState;

/// Feed card linking to the post's thread
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/community/posts/{}", post.id);
    let image = post
        .image
        .as_deref()
        .map(|image| links::post_image_url(&api::get_api_base(), image));
    let created = post.created_label();
    let author = post.user.clone().unwrap_or_else(|| "Anonymous".to_string());

    view! {
        <A href=href class="block bg-white rounded-xl shadow-sm hover:shadow-md transition-shadow overflow-hidden">
            {image.map(|src| view! {
                <img src=src alt="" class="w-full h-48 object-cover" />
            })}
            <div class="p-5">
                <h3 class="text-lg font-semibold text-slate-800 mb-2">{post.title}</h3>
                <p class="text-slate-600 text-sm line-clamp-3">{post.content}</p>
                <div class="flex justify-between text-xs text-slate-400 mt-4">
                    <span>{author}</span>
                    <span>{created}</span>
                </div>
            </div>
        </A>
    }
}

/// Search box bound to a board's query
#[component]
pub fn PostSearch(board: RwSignal<PostBoard>) -> impl IntoView {
    view! {
        <input
            type="search"
            placeholder="Search posts..."
            prop:value=move || board.with(|b| b.query().to_string())
            on:input=move |ev| board.update(|b| b.set_query(event_target_value(&ev)))
            class="w-full border border-slate-300 rounded-lg px-4 py-2 focus:border-rose-500 focus:outline-none"
        />
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Panel {
    List,
    Edit,
    Confirm,
}

/// The signed-in user's own posts
#[component]
pub fn MyPosts() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let board = create_rw_signal(PostBoard::default());
    let (loaded, set_loaded) = create_signal(false);
    let (saving, set_saving) = create_signal(false);

    // Only the panel kind, so typing in the edit form does not rebuild it
    let panel = create_memo(move |_| {
        board.with(|b| match b.mode() {
            BoardMode::Listing => Panel::List,
            BoardMode::Editing { .. } => Panel::Edit,
            BoardMode::ConfirmingDelete { .. } => Panel::Confirm,
        })
    });

    if let Some(token) = state.bearer() {
        spawn_local(async move {
            match api::list_my_posts(&token).await {
                Ok(posts) => board.update(|b| b.set_posts(posts)),
                Err(e) => state.show_error(&e),
            }
            set_loaded.set(true);
        });
    }

    let save_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some((id, draft)) =
            board.with_untracked(|b| b.pending_edit().map(|(id, d)| (id, d.clone())))
        else {
            return;
        };
        if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
            state.show_error(&forms::FormError::MissingFields.to_string());
            return;
        }
        let Some(token) = state.bearer() else {
            return;
        };

        set_saving.set(true);
        spawn_local(async move {
            match api::edit_post(&token, id, &draft).await {
                Ok(updated) => {
                    board.update(|b| b.apply_edit(updated));
                    state.show_success("Post updated successfully");
                }
                Err(e) => state.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    let confirm_delete = move |_| {
        let Some(id) = board.try_update(|b| b.confirm_delete()).flatten() else {
            return;
        };
        let Some(token) = state.bearer() else {
            return;
        };
        spawn_local(async move {
            match api::delete_post(&token, id).await {
                Ok(message) => {
                    board.update(|b| b.remove(id));
                    state.show_success(&message);
                }
                Err(e) => state.show_error(&e),
            }
        });
    };

    let draft_value = move |title: bool| {
        board.with(|b| match b.mode() {
            BoardMode::Editing { draft, .. } if title => draft.title.clone(),
            BoardMode::Editing { draft, .. } => draft.content.clone(),
            _ => String::new(),
        })
    };

    view! {
        <section class="bg-white rounded-xl shadow-sm p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold text-slate-800">"My Posts"</h2>
                <A href="/community/new-post" class="text-sm text-rose-600 hover:underline">"+ New post"</A>
            </div>

            {move || match panel.get() {
                Panel::Edit => view! {
                    <form on:submit=save_edit class="space-y-3">
                        <input
                            type="text"
                            prop:value=move || draft_value(true)
                            on:input=move |ev| board.update(|b| {
                                if let Some(draft) = b.draft_mut() {
                                    draft.title = event_target_value(&ev);
                                }
                            })
                            class="w-full border border-slate-300 rounded-lg px-4 py-2"
                        />
                        <textarea
                            rows="6"
                            prop:value=move || draft_value(false)
                            on:input=move |ev| board.update(|b| {
                                if let Some(draft) = b.draft_mut() {
                                    draft.content = event_target_value(&ev);
                                }
                            })
                            class="w-full border border-slate-300 rounded-lg px-4 py-2"
                        />
                        <div class="flex gap-2 justify-end">
                            <button
                                type="button"
                                on:click=move |_| board.update(|b| b.cancel_edit())
                                class="px-4 py-2 border border-slate-300 rounded-lg"
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                disabled=move || saving.get()
                                class="px-4 py-2 bg-rose-600 text-white rounded-lg disabled:opacity-50"
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                }
                .into_view(),
                other => view! {
                    {(other == Panel::Confirm).then(|| view! {
                        <div class="mb-4 p-4 rounded-lg border border-rose-200 bg-rose-50 flex items-center justify-between">
                            <span class="text-sm text-slate-700">"Delete this post? This cannot be undone."</span>
                            <div class="flex gap-2">
                                <button
                                    on:click=move |_| board.update(|b| b.cancel_delete())
                                    class="px-3 py-1 border border-slate-300 rounded-lg text-sm"
                                >
                                    "Cancel"
                                </button>
                                <button
                                    on:click=confirm_delete
                                    class="px-3 py-1 bg-rose-600 text-white rounded-lg text-sm"
                                >
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    })}
                    <div class="mb-4"><PostSearch board=board /></div>
                    <BoardList board=board loaded=loaded />
                }
                .into_view(),
            }}
        </section>
    }
}

#[component]
fn BoardList(board: RwSignal<PostBoard>, loaded: ReadSignal<bool>) -> impl IntoView {
    move || {
        if !loaded.get() {
            return view! { <ListSkeleton /> }.into_view();
        }
        let visible: Vec<Post> = board.with(|b| b.visible().into_iter().cloned().collect());
        if visible.is_empty() {
            return view! {
                <p class="text-sm text-slate-500">"You haven't posted anything yet."</p>
            }
            .into_view();
        }

        visible
            .into_iter()
            .map(|post| {
                let id = post.id;
                let created = post.created_label();
                view! {
                    <div class="flex items-start justify-between border-b border-slate-100 py-3">
                        <div>
                            <A href=format!("/community/posts/{}", id) class="font-medium text-slate-800 hover:text-rose-600">
                                {post.title}
                            </A>
                            <p class="text-xs text-slate-400">{created}</p>
                        </div>
                        <div class="flex gap-2 text-sm">
                            <button
                                on:click=move |_| { board.update(|b| { b.begin_edit(id); }); }
                                class="text-slate-600 hover:text-rose-600"
                            >
                                "Edit"
                            </button>
                            <button
                                on:click=move |_| { board.update(|b| { b.request_delete(id); }); }
                                class="text-rose-600 hover:text-rose-700"
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                }
            })
            .collect_view()
    }
}
