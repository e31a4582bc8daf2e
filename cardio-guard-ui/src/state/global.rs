//! Global Application State
//!
//! Reactive state management using Leptos signals. The session service
//! from the core is created once here and provided to every page.

use leptos::*;

use cardio_guard::model::UserDetails;
use cardio_guard::router::Route as Page;
use cardio_guard::session::{MemoryStore, Session};

use super::storage::BrowserStore;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    session: StoredValue<Session<BrowserStore>>,
    /// Bearer token, mirrored from the session for reactivity
    pub token: RwSignal<Option<String>>,
    /// Cached profile of the signed-in user
    pub user: RwSignal<Option<UserDetails>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let session = Session::load(BrowserStore::open())
        .or_else(|e| {
            web_sys::console::warn_1(&format!("Could not read session: {}", e).into());
            Session::load(BrowserStore::Memory(MemoryStore::new()))
        })
        .expect("in-memory session always loads");

    let state = GlobalState {
        token: create_rw_signal(session.token().map(str::to_string)),
        user: create_rw_signal(session.user().cloned()),
        session: store_value(session),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// Where a visit to `page` lands with the current session
    pub fn resolve(&self, page: Page) -> Page {
        page.resolve(self.is_authenticated())
    }

    /// Token for an API call, without subscribing to changes
    pub fn bearer(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Persist a fresh login
    pub fn sign_in(&self, token: String, user: UserDetails) {
        let stored = self
            .session
            .try_update_value(|s| s.establish(token.clone(), user.clone()));
        if let Some(Err(e)) = stored {
            web_sys::console::warn_1(&format!("Session not persisted: {}", e).into());
        }
        self.token.set(Some(token));
        self.user.set(Some(user));
    }

    /// Replace the cached profile after an edit
    pub fn update_user(&self, user: UserDetails) {
        if let Some(Err(e)) = self.session.try_update_value(|s| s.update_user(user.clone())) {
            web_sys::console::warn_1(&format!("Profile not persisted: {}", e).into());
        }
        self.user.set(Some(user));
    }

    /// Forget token and profile
    pub fn sign_out(&self) {
        if let Some(Err(e)) = self.session.try_update_value(|s| s.clear()) {
            web_sys::console::warn_1(&format!("Session not cleared: {}", e).into());
        }
        self.token.set(None);
        self.user.set(None);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
