//! App Root Component
//!
//! Routing, session gating and global providers.

use leptos::*;
use leptos_router::*;

use cardio_guard::router::Route as Page;

use crate::components::{Footer, Nav, Toast};
use crate::pages::{
    AboutUs, ContactUs, Dashboard, Feedback, Home, LoginRegister, NewPost, PostDetailPage,
    Posts, Prediction,
};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-rose-50 text-gray-800 flex flex-col">
                <Nav />

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/about-us" view=AboutUs />
                        <Route path="/predict" view=Prediction />
                        <Route
                            path="/login-register"
                            view=|| view! { <Gate page=Page::LoginRegister><LoginRegister /></Gate> }
                        />
                        <Route
                            path="/dashboard"
                            view=|| view! { <Gate page=Page::Dashboard><Dashboard /></Gate> }
                        />
                        <Route
                            path="/feedback"
                            view=|| view! { <Gate page=Page::Feedback><Feedback /></Gate> }
                        />
                        <Route
                            path="/contact-us"
                            view=|| view! { <Gate page=Page::ContactUs><ContactUs /></Gate> }
                        />
                        <Route
                            path="/community"
                            view=|| view! { <Gate page=Page::Community><Posts /></Gate> }
                        />
                        <Route
                            path="/community/new-post"
                            view=|| view! { <Gate page=Page::NewPost><NewPost /></Gate> }
                        />
                        <Route path="/community/posts/:id" view=GatedPostDetail />
                        <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Renders its children only when the session allows `page`, otherwise
/// redirects before any protected content is shown.
#[component]
fn Gate(page: Page, children: ChildrenFn) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || {
        let target = state.resolve(page);
        if target == page {
            children().into_view()
        } else {
            view! { <Redirect path=target.path() /> }.into_view()
        }
    }
}

#[component]
fn GatedPostDetail() -> impl IntoView {
    let params = use_params_map();
    let id = move || {
        params.with(|p| p.get("id").and_then(|id| id.parse().ok()))
    };

    move || match id() {
        Some(id) => view! {
            <Gate page=Page::PostDetail(id)><PostDetailPage id=id /></Gate>
        }
        .into_view(),
        None => view! { <Redirect path="/" /> }.into_view(),
    }
}
