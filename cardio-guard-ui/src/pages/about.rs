//! About Page
//!
//! Mission, headline numbers and the people behind the service.

use leptos::*;

const STATS: [(&str, &str); 4] = [
    ("50K+", "Lives Impacted"),
    ("92%", "Prediction Accuracy"),
    ("150+", "Medical Partners"),
    ("24/7", "Support Available"),
];

const TEAM: [(&str, &str, &str); 4] = [
    ("Dr. Rajesh Sharma", "Lead Cardiologist", "15+ years"),
    ("Dr. Priya Singh", "Research Head", "PhD in ML"),
    ("Arjun Mehta", "Full Stack Developer", "HealthTech Expert"),
    ("Ananya Reddy", "Patient Care Lead", "10+ years"),
];

#[component]
pub fn AboutUs() -> impl IntoView {
    view! {
        <div class="space-y-16 pb-16">
            <section class="py-20 px-4 text-center bg-gradient-to-b from-rose-100 to-rose-50">
                <div class="text-6xl mb-6 animate-pulse">"💓"</div>
                <h1 class="text-4xl md:text-5xl font-bold text-slate-800 mb-6">
                    "Protecting Hearts with Intelligent Care"
                </h1>
                <p class="text-lg text-slate-600 max-w-3xl mx-auto">
                    "Cardio Guard blends clinical experience with machine learning to give \
                     people an early, personal view of their heart health."
                </p>
            </section>

            <section class="max-w-6xl mx-auto px-4 grid md:grid-cols-2 gap-12 items-center">
                <div>
                    <h2 class="text-3xl font-bold text-slate-800 mb-4">"Our Mission"</h2>
                    <p class="text-slate-600 text-lg">
                        "Make early cardiac risk detection accessible to everyone, and point people \
                         to care nearby when their results call for it."
                    </p>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    {STATS.iter().map(|(number, label)| view! {
                        <div class="p-6 bg-white rounded-xl shadow-sm">
                            <div class="text-3xl font-bold text-rose-600 mb-1">{*number}</div>
                            <div class="text-xs text-slate-500 uppercase tracking-wider">{*label}</div>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl font-bold text-slate-800 text-center mb-10">"Meet Our Experts"</h2>
                <div class="grid sm:grid-cols-2 md:grid-cols-4 gap-6">
                    {TEAM.iter().map(|(name, role, experience)| view! {
                        <div class="bg-white rounded-xl shadow-sm p-6 text-center">
                            <img
                                src=cardio_guard::links::avatar_url(name)
                                alt=*name
                                class="w-20 h-20 rounded-full mx-auto mb-4"
                            />
                            <h3 class="font-semibold text-slate-800">{*name}</h3>
                            <p class="text-sm text-rose-600">{*role}</p>
                            <p class="text-xs text-slate-500 mt-1">{*experience}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
