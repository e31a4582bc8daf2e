//! Community Page
//!
//! The shared feed of posts, filtered client-side by the search box.

use leptos::*;
use leptos_router::*;

use cardio_guard::community::PostBoard;
use cardio_guard::model::Post;

use crate::api;
use crate::components::{ListSkeleton, PostCard, PostSearch};
use crate::state::global::GlobalState;

#[component]
pub fn Posts() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let board = create_rw_signal(PostBoard::default());
    let (loaded, set_loaded) = create_signal(false);

    if let Some(token) = state.bearer() {
        spawn_local(async move {
            match api::list_posts(&token).await {
                Ok(posts) => board.update(|b| b.set_posts(posts)),
                Err(e) => state.show_error(&e),
            }
            set_loaded.set(true);
        });
    }

    view! {
        <div class="max-w-6xl mx-auto py-10 px-4">
            <div class="flex flex-col md:flex-row md:items-end md:justify-between gap-4 mb-8">
                <div>
                    <h1 class="text-3xl font-bold text-slate-800">"Community"</h1>
                    <p class="text-slate-500 mt-1">"Stories, questions and support from people like you."</p>
                </div>
                <A
                    href="/community/new-post"
                    class="px-4 py-2 rounded-lg bg-rose-600 text-white font-medium hover:bg-rose-700"
                >
                    "+ New Post"
                </A>
            </div>

            <div class="mb-6">
                <PostSearch board=board />
            </div>

            {move || {
                if !loaded.get() {
                    return view! { <ListSkeleton count=6 /> }.into_view();
                }
                let visible: Vec<Post> = board.with(|b| b.visible().into_iter().cloned().collect());
                if visible.is_empty() {
                    let message = if board.with(|b| b.posts().is_empty()) {
                        "No posts yet. Be the first to share!"
                    } else {
                        "No posts match your search."
                    };
                    return view! { <p class="text-slate-500 text-center py-12">{message}</p> }.into_view();
                }
                view! {
                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {visible.into_iter().map(|post| view! { <PostCard post=post /> }).collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}
