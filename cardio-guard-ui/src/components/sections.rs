//! Landing Sections
//!
//! Marketing blocks shared by the home and about pages.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="relative py-24 bg-gradient-to-b from-rose-100 to-rose-50 text-center">
            <div class="max-w-4xl mx-auto px-4">
                <div class="inline-flex items-center justify-center p-4 rounded-full bg-white shadow mb-8">
                    <span class="text-3xl animate-pulse">"💓"</span>
                </div>
                <h1 class="text-4xl md:text-6xl font-bold text-slate-800 mb-6">
                    "Revolutionizing "
                    <span class="text-rose-600">"Heart Health"</span>
                    " with AI"
                </h1>
                <p class="text-lg md:text-xl text-slate-600 mb-8 max-w-2xl mx-auto">
                    "Predict cardiovascular risk from a short questionnaire and find care \
                     close to you when it matters."
                </p>
                {move || {
                    let (href, label) = if state.is_authenticated() {
                        ("/predict", "Check Your Risk")
                    } else {
                        ("/login-register", "Get Started")
                    };
                    view! {
                        <A
                            href=href
                            class="inline-flex items-center gap-2 bg-rose-600 hover:bg-rose-700 text-white
                                   px-8 py-3 rounded-full text-lg font-semibold shadow-lg transition-colors"
                        >
                            {label}" →"
                        </A>
                    }
                }}
            </div>
        </section>
    }
}

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🩺",
        "Risk Prediction",
        "Answer thirteen clinical questions and get an instant assessment of your heart disease risk.",
    ),
    (
        "🏥",
        "Nearby Hospitals",
        "We use your location to list hospitals around you, with ratings and directions.",
    ),
    (
        "💬",
        "Community",
        "Share your experience, ask questions and support others on the same journey.",
    ),
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center text-slate-800 mb-12">"What Cardio Guard offers"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURES.iter().map(|(icon, title, body)| view! {
                        <div class="bg-white rounded-xl shadow-sm p-6 hover:shadow-md transition-shadow">
                            <div class="text-4xl mb-4">{*icon}</div>
                            <h3 class="text-xl font-semibold text-slate-800 mb-2">{*title}</h3>
                            <p class="text-slate-600">{*body}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="py-16 px-4 bg-rose-600 text-white text-center">
            <h2 class="text-3xl font-bold mb-4">"Join the Conversation"</h2>
            <p class="max-w-2xl mx-auto mb-8 text-rose-100">
                "Read stories from people managing their heart health, or start your own thread."
            </p>
            <A
                href="/community"
                class="inline-block bg-white text-rose-600 px-6 py-3 rounded-full font-semibold hover:bg-rose-50"
            >
                "Visit the Community"
            </A>
        </section>
    }
}
