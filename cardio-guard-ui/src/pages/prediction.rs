//! Prediction Page
//!
//! The questionnaire, then the result with hospitals near the user.

use leptos::*;

use cardio_guard::risk::Prediction as Outcome;

use crate::components::{HospitalRecommendations, PredictionForm};

#[component]
pub fn Prediction() -> impl IntoView {
    let result = create_rw_signal(None::<Outcome>);

    view! {
        <div class="max-w-3xl mx-auto py-10 px-4">
            {move || match result.get() {
                None => view! {
                    <PredictionForm on_result=move |p: Outcome| result.set(Some(p)) />
                }
                .into_view(),
                Some(prediction) => {
                    let level = prediction.level();
                    let accent = if level.is_elevated() { "text-rose-600" } else { "text-emerald-600" };
                    view! {
                        <section class="bg-white rounded-xl shadow-md p-8 text-center">
                            <h2 class=format!("text-2xl font-bold {}", accent)>{level.headline()}</h2>
                            <p class="text-slate-700 mt-4">{prediction.text}</p>
                            <button
                                on:click=move |_| result.set(None)
                                class="mt-6 px-4 py-2 border border-slate-300 rounded-lg hover:bg-slate-50"
                            >
                                "Take the assessment again"
                            </button>
                        </section>
                        <HospitalRecommendations level=level />
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
