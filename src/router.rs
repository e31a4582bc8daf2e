//! Routes
//!
//! URL paths of the web client and the session rules attached to them.

use crate::model::PostId;

/// Every page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    LoginRegister,
    Dashboard,
    Feedback,
    ContactUs,
    AboutUs,
    Community,
    NewPost,
    PostDetail(PostId),
    Predict,
}

impl Route {
    /// Map a path to its page. Unknown paths land on [`Route::Home`].
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login-register"] => Route::LoginRegister,
            ["dashboard"] => Route::Dashboard,
            ["feedback"] => Route::Feedback,
            ["contact-us"] => Route::ContactUs,
            ["about-us"] => Route::AboutUs,
            ["community"] => Route::Community,
            ["community", "new-post"] => Route::NewPost,
            ["community", "posts", id] => id.parse().map(Route::PostDetail).unwrap_or(Route::Home),
            ["predict"] => Route::Predict,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::LoginRegister => "/login-register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Feedback => "/feedback".to_string(),
            Route::ContactUs => "/contact-us".to_string(),
            Route::AboutUs => "/about-us".to_string(),
            Route::Community => "/community".to_string(),
            Route::NewPost => "/community/new-post".to_string(),
            Route::PostDetail(id) => format!("/community/posts/{}", id),
            Route::Predict => "/predict".to_string(),
        }
    }

    /// Pages that must not render without a session token
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Feedback
                | Route::ContactUs
                | Route::Community
                | Route::NewPost
                | Route::PostDetail(_)
        )
    }

    /// Landing page after logout. Public, so leaving for it never
    /// bounces through the login page.
    pub fn after_logout() -> Route {
        Route::Home
    }

    /// Where a visit to this page actually lands, given whether a
    /// session token is present.
    pub fn resolve(self, has_session: bool) -> Route {
        match self {
            route if route.requires_session() && !has_session => Route::LoginRegister,
            Route::LoginRegister if has_session => Route::Home,
            route => route,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/login-register"), Route::LoginRegister);
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse("/community/new-post"), Route::NewPost);
        assert_eq!(Route::parse("/community/posts/42"), Route::PostDetail(42));
        assert_eq!(Route::parse("/predict?step=2"), Route::Predict);
    }

    #[test]
    fn test_unknown_paths_go_home() {
        assert_eq!(Route::parse("/nope"), Route::Home);
        assert_eq!(Route::parse("/community/posts/abc"), Route::Home);
        assert_eq!(Route::parse("/community/posts/1/extra"), Route::Home);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::LoginRegister,
            Route::Dashboard,
            Route::Feedback,
            Route::ContactUs,
            Route::AboutUs,
            Route::Community,
            Route::NewPost,
            Route::PostDetail(7),
            Route::Predict,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_gated_routes_redirect_without_session() {
        for route in [
            Route::Dashboard,
            Route::Feedback,
            Route::ContactUs,
            Route::Community,
            Route::NewPost,
            Route::PostDetail(1),
        ] {
            assert_eq!(route.resolve(false), Route::LoginRegister);
            assert_eq!(route.resolve(true), route);
        }
    }

    #[test]
    fn test_public_routes_and_login_redirect() {
        assert_eq!(Route::Home.resolve(false), Route::Home);
        assert_eq!(Route::Predict.resolve(false), Route::Predict);
        assert_eq!(Route::LoginRegister.resolve(false), Route::LoginRegister);
        assert_eq!(Route::LoginRegister.resolve(true), Route::Home);
    }

    #[test]
    fn test_logout_lands_on_public_page() {
        let landing = Route::after_logout();
        assert!(!landing.requires_session());
        assert_eq!(landing.resolve(false), landing);
        assert_eq!(landing.path(), "/");
    }
}
