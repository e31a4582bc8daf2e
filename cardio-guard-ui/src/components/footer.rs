//! Footer Component

use leptos::*;
use leptos_router::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="bg-white border-t border-rose-100 py-6 px-4 mt-12">
            <div class="container mx-auto flex flex-col md:flex-row items-center justify-between text-sm text-gray-500">
                <div class="flex items-center space-x-2">
                    <span class="text-rose-600">"❤"</span>
                    <span>{format!("© {} Cardio Guard", year)}</span>
                </div>
                <div class="flex items-center space-x-4 mt-2 md:mt-0">
                    <A href="/about-us" class="hover:text-rose-600">"About"</A>
                    <A href="/feedback" class="hover:text-rose-600">"Feedback"</A>
                    <A href="/contact-us" class="hover:text-rose-600">"Contact"</A>
                </div>
                <p class="mt-2 md:mt-0 text-xs">
                    "Predictions are informational and do not replace medical advice."
                </p>
            </div>
        </footer>
    }
}
