//! Session Service
//!
//! Owns the bearer token and cached user profile. Created once at start-up
//! from a [`SessionStore`] and handed to whatever needs it, instead of
//! every page reading storage on its own.
//!
//! ## Lifecycle
//!
//! 1. [`Session::load`] reads `token` and `user` from the store
//! 2. [`Session::establish`] persists both after login
//! 3. [`Session::update_user`] refreshes the cached profile after edits
//! 4. [`Session::clear`] removes both at logout
//!
//! The token is never validated locally; an expired token only shows up
//! when the next API call is rejected.

mod store;

pub use store::{MemoryStore, SessionStore, StoreError};

#[cfg(feature = "native")]
pub use store::FileStore;

use crate::model::UserDetails;
use crate::router::Route;

/// Storage key of the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key of the JSON-encoded user profile
pub const USER_KEY: &str = "user";

pub struct Session<S> {
    store: S,
    token: Option<String>,
    user: Option<UserDetails>,
}

impl<S: SessionStore> Session<S> {
    /// Read the persisted session, if any.
    ///
    /// A profile that no longer decodes is dropped rather than failing
    /// the load; the token alone is enough to stay signed in.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let token = store.get(TOKEN_KEY)?.filter(|t| !t.is_empty());
        let user = match store.get(USER_KEY)? {
            Some(raw) => match serde_json::from_str::<UserDetails>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable cached profile");
                    None
                }
            },
            None => None,
        };

        tracing::debug!(authenticated = token.is_some(), "Session loaded");

        Ok(Self { store, token, user })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserDetails> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Where a visit to `route` lands with this session
    pub fn resolve(&self, route: Route) -> Route {
        route.resolve(self.is_authenticated())
    }

    /// Persist a freshly issued token and the matching profile
    pub fn establish(&mut self, token: impl Into<String>, user: UserDetails) -> Result<(), StoreError> {
        let token = token.into();
        self.store.set(TOKEN_KEY, &token)?;
        self.store.set(USER_KEY, &serde_json::to_string(&user)?)?;
        self.token = Some(token);
        self.user = Some(user);

        tracing::info!("Session established");
        Ok(())
    }

    /// Replace the cached profile (after a profile or picture edit)
    pub fn update_user(&mut self, user: UserDetails) -> Result<(), StoreError> {
        self.store.set(USER_KEY, &serde_json::to_string(&user)?)?;
        self.user = Some(user);
        Ok(())
    }

    /// Forget token and profile
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)?;
        self.token = None;
        self.user = None;

        tracing::info!("Session cleared");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserDetails {
        UserDetails {
            id: Some(1),
            email: "ana@example.com".to_string(),
            first_name: Some("Ana".to_string()),
            last_name: Some("Silva".to_string()),
            username: Some("ana".to_string()),
            phone_number: None,
            profile_picture: Some("profile_pictures/default_male_image.png".to_string()),
        }
    }

    #[test]
    fn test_empty_store_is_anonymous() {
        let session = Session::load(MemoryStore::new()).unwrap();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_eq!(session.resolve(Route::Dashboard), Route::LoginRegister);
    }

    #[test]
    fn test_establish_persists_and_reloads() {
        let mut session = Session::load(MemoryStore::new()).unwrap();
        session.establish("tok-123", user()).unwrap();
        assert_eq!(session.resolve(Route::Dashboard), Route::Dashboard);

        let reloaded = Session::load(session.into_store()).unwrap();
        assert_eq!(reloaded.token(), Some("tok-123"));
        assert_eq!(reloaded.user().unwrap().email, "ana@example.com");
    }

    #[test]
    fn test_clear_removes_token_and_profile() {
        let mut session = Session::load(MemoryStore::new()).unwrap();
        session.establish("tok-123", user()).unwrap();
        session.clear().unwrap();

        assert!(session.store().is_empty());
        let reloaded = Session::load(session.into_store()).unwrap();
        assert!(!reloaded.is_authenticated());
        assert!(reloaded.user().is_none());
        assert_eq!(reloaded.resolve(Route::Community), Route::LoginRegister);
    }

    #[test]
    fn test_unreadable_profile_keeps_token() {
        let mut store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok").unwrap();
        store.set(USER_KEY, "{broken").unwrap();

        let session = Session::load(store).unwrap();
        assert_eq!(session.token(), Some("tok"));
        assert!(session.user().is_none());
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let mut store = MemoryStore::new();
        store.set(TOKEN_KEY, "").unwrap();
        let session = Session::load(store).unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_update_user() {
        let mut session = Session::load(MemoryStore::new()).unwrap();
        session.establish("tok", user()).unwrap();

        let mut edited = user();
        edited.first_name = Some("Ana Maria".to_string());
        session.update_user(edited).unwrap();

        let reloaded = Session::load(session.into_store()).unwrap();
        assert_eq!(reloaded.user().unwrap().display_name(), "Ana Maria Silva");
    }
}
