//! Post Detail Page
//!
//! A single post with its comment thread. The whole post is fetched
//! again after every comment or reply.

use leptos::*;
use leptos_router::*;

use cardio_guard::links;
use cardio_guard::model::{PostDetail, PostId};

use crate::api;
use crate::components::{CommentThread, Loading};
use crate::state::global::GlobalState;

#[component]
pub fn PostDetailPage(id: PostId) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let detail = create_rw_signal(None::<PostDetail>);
    let (failed, set_failed) = create_signal(None::<String>);

    let load = move || {
        let Some(token) = state.bearer() else {
            return;
        };
        spawn_local(async move {
            match api::get_post(&token, id).await {
                Ok(found) => detail.set(Some(found)),
                Err(e) => set_failed.set(Some(e)),
            }
        });
    };
    load();

    view! {
        <div class="max-w-3xl mx-auto py-10 px-4">
            <A href="/community" class="text-sm text-rose-600 hover:underline">"‹ Back to community"</A>

            {move || match (failed.get(), detail.get()) {
                (Some(message), _) => view! {
                    <p class="mt-8 text-rose-600">{message}</p>
                }
                .into_view(),
                (None, None) => view! { <Loading /> }.into_view(),
                (None, Some(PostDetail { post, comments })) => {
                    let image = post
                        .image
                        .as_deref()
                        .map(|image| links::post_image_url(&api::get_api_base(), image));
                    let created = post.created_label();
                    let author = post.user.clone().unwrap_or_else(|| "Anonymous".to_string());
                    view! {
                        <article class="mt-6 bg-white rounded-xl shadow-sm overflow-hidden">
                            {image.map(|src| view! {
                                <img src=src alt="" class="w-full max-h-96 object-cover" />
                            })}
                            <div class="p-6">
                                <h1 class="text-2xl font-bold text-slate-800">{post.title}</h1>
                                <p class="text-xs text-slate-400 mt-1">{format!("{} · {}", author, created)}</p>
                                <p class="text-slate-700 mt-4 whitespace-pre-line">{post.content}</p>
                            </div>
                        </article>
                        <CommentThread post_id=id comments=comments on_change=move |_: ()| load() />
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
