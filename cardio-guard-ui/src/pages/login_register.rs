//! Login / Register Page
//!
//! Signing in stores the token and profile, then opens the dashboard.
//! Registering only creates the account; the user signs in afterwards.

use leptos::*;
use leptos_router::*;

use cardio_guard::model::{Credentials, Registration};

use crate::api;
use crate::components::{FormError, SubmitButton};
use crate::state::global::GlobalState;

#[component]
pub fn LoginRegister() -> impl IntoView {
    let (is_login, set_is_login) = create_signal(true);

    let tab_class = move |login: bool| {
        if is_login.get() == login {
            "flex-1 py-2 rounded-lg bg-rose-600 text-white font-medium"
        } else {
            "flex-1 py-2 rounded-lg text-slate-600 hover:bg-rose-50"
        }
    };

    view! {
        <div class="max-w-md mx-auto py-16 px-4">
            <div class="bg-white rounded-xl shadow-md p-8">
                <div class="flex gap-2 mb-8">
                    <button on:click=move |_| set_is_login.set(true) class=move || tab_class(true)>
                        "Login"
                    </button>
                    <button on:click=move |_| set_is_login.set(false) class=move || tab_class(false)>
                        "Register"
                    </button>
                </div>

                {move || if is_login.get() {
                    view! { <LoginForm /> }.into_view()
                } else {
                    view! { <RegisterForm on_registered=move |_: ()| set_is_login.set(true) /> }.into_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let credentials = match credentials.validate() {
            Ok(c) => c,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_busy.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let signed_in = async {
                let token = api::login(&credentials).await?;
                let user = api::user_details(&token).await?;
                Ok::<_, String>((token, user))
            };
            match signed_in.await {
                Ok((token, user)) => {
                    state.sign_in(token, user);
                    state.show_success("Login successful");
                    navigate("/dashboard", Default::default());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <TextField label="Email" kind="email" value=email set_value=set_email />
            <TextField label="Password" kind="password" value=password set_value=set_password />
            <FormError message=error />
            <SubmitButton busy=busy label="Login" busy_label="Signing in..." />
        </form>
    }
}

#[component]
fn RegisterForm(#[prop(into)] on_registered: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let registration = Registration {
            email: email.get_untracked(),
            password: password.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            phone_number: phone.get_untracked(),
        };
        let registration = match registration.validate() {
            Ok(r) => r,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        set_busy.set(true);
        spawn_local(async move {
            match api::register(&registration).await {
                Ok(message) => {
                    state.show_success(&message);
                    on_registered.call(());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid grid-cols-2 gap-3">
                <TextField label="First name" kind="text" value=first_name set_value=set_first_name />
                <TextField label="Last name" kind="text" value=last_name set_value=set_last_name />
            </div>
            <TextField label="Email" kind="email" value=email set_value=set_email />
            <TextField label="Phone number" kind="tel" value=phone set_value=set_phone />
            <TextField label="Password" kind="password" value=password set_value=set_password />
            <FormError message=error />
            <SubmitButton busy=busy label="Create account" busy_label="Creating account..." />
        </form>
    }
}

#[component]
fn TextField(
    label: &'static str,
    kind: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-slate-700 mb-1">{label}</span>
            <input
                type=kind
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full border border-slate-300 rounded-lg px-4 py-2 focus:border-rose-500 focus:outline-none"
            />
        </label>
    }
}
