//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Block loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for post lists
#[component]
pub fn ListSkeleton(#[prop(default = 3)] count: usize) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-rose-100 rounded-lg h-20" />
            }).collect_view()}
        </div>
    }
}

/// Submit button that shows a spinner while `busy`
#[component]
pub fn SubmitButton(
    #[prop(into)] busy: Signal<bool>,
    label: &'static str,
    busy_label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || busy.get()
            class="w-full bg-rose-600 hover:bg-rose-700 disabled:bg-gray-400
                   disabled:cursor-not-allowed text-white rounded-lg py-3 font-semibold
                   transition-colors flex items-center justify-center space-x-2"
        >
            {move || if busy.get() {
                view! {
                    <div class="loading-spinner w-5 h-5" />
                    <span>{busy_label}</span>
                }.into_view()
            } else {
                view! { <span>{label}</span> }.into_view()
            }}
        </button>
    }
}
