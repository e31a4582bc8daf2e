//! Home Page

use leptos::*;

use crate::components::{CallToAction, Features, Hero};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div>
            <Hero />
            <Features />
            <CallToAction />
        </div>
    }
}
