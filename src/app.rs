//! Application Service
//!
//! Ties the API client to the session: every user action the pages and
//! the CLI perform goes through [`CardioGuard`], which picks the token
//! out of the session, validates input before anything is sent, and keeps
//! the cached profile in step with the server.

use crate::api::{Ack, CardioClient, ClientError, ClientResult, Registered};
use crate::assessment::AssessmentForm;
use crate::forms::{ContactForm, FeedbackForm, FormError};
use crate::model::{
    CommentId, Coordinates, Credentials, Hospital, Post, PostDetail, PostDraft, PostId,
    ProfileUpdate, Registration, Upload, UserDetails,
};
use crate::risk::Prediction;
use crate::router::Route;
use crate::session::{Session, SessionStore};

/// A prediction and, when a location was given, the hospital search that
/// followed it. The search result is kept separate so its failure never
/// hides the prediction.
#[derive(Debug)]
pub struct Assessment {
    pub prediction: Prediction,
    pub hospitals: Option<ClientResult<Vec<Hospital>>>,
}

pub struct CardioGuard<S> {
    client: CardioClient,
    session: Session<S>,
}

impl<S: SessionStore> CardioGuard<S> {
    pub fn new(client: CardioClient, session: Session<S>) -> Self {
        Self { client, session }
    }

    pub fn client(&self) -> &CardioClient {
        &self.client
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn into_session(self) -> Session<S> {
        self.session
    }

    /// Where a visit to `route` lands right now
    pub fn enter(&self, route: Route) -> Route {
        let target = self.session.resolve(route);
        if target != route {
            tracing::debug!(from = %route, to = %target, "Route redirected");
        }
        target
    }

    fn token(&self) -> ClientResult<String> {
        self.session
            .token()
            .map(str::to_string)
            .ok_or(ClientError::MissingSession)
    }

    // ============================================
    // Account
    // ============================================

    /// Sign in, fetch the profile, and persist both
    pub async fn login(&mut self, credentials: Credentials) -> ClientResult<UserDetails> {
        let credentials = credentials.validate()?;
        let token = self.client.login(&credentials).await?;
        let user = self.client.user_details(&token).await?;

        self.session.establish(token, user.clone())?;
        tracing::info!(email = %user.email, "Signed in");
        Ok(user)
    }

    /// Create an account. The user still signs in afterwards.
    pub async fn register(&self, registration: Registration) -> ClientResult<Registered> {
        let registration = registration.validate()?;
        let registered = self.client.register(&registration).await?;
        tracing::info!(email = %registration.email, "Account registered");
        Ok(registered)
    }

    /// Forget the session; the caller navigates to the returned route
    pub fn logout(&mut self) -> ClientResult<Route> {
        self.session.clear()?;
        Ok(Route::after_logout())
    }

    pub async fn refresh_profile(&mut self) -> ClientResult<UserDetails> {
        let token = self.token()?;
        let user = self.client.user_details(&token).await?;
        self.session.update_user(user.clone())?;
        Ok(user)
    }

    pub async fn edit_profile(&mut self, update: &ProfileUpdate) -> ClientResult<Ack> {
        let token = self.token()?;
        if update.is_empty() {
            return Err(FormError::MissingFields.into());
        }
        let (ack, user) = self.client.edit_user_details(&token, update).await?;
        self.session.update_user(user)?;
        Ok(ack)
    }

    pub async fn change_picture(&mut self, picture: Upload) -> ClientResult<Ack> {
        let token = self.token()?;
        let (ack, user) = self.client.edit_profile_picture(&token, picture).await?;
        self.session.update_user(user)?;
        Ok(ack)
    }

    // ============================================
    // Community
    // ============================================

    pub async fn posts(&self) -> ClientResult<Vec<Post>> {
        self.client.list_posts(&self.token()?).await
    }

    pub async fn my_posts(&self) -> ClientResult<Vec<Post>> {
        self.client.list_my_posts(&self.token()?).await
    }

    pub async fn post(&self, id: PostId) -> ClientResult<PostDetail> {
        self.client.get_post(&self.token()?, id).await
    }

    pub async fn create_post(&self, draft: &PostDraft, image: Option<Upload>) -> ClientResult<Ack> {
        let token = self.token()?;
        require_draft(draft)?;
        self.client.create_post(&token, draft, image).await
    }

    pub async fn edit_post(&self, id: PostId, draft: &PostDraft) -> ClientResult<Post> {
        let token = self.token()?;
        require_draft(draft)?;
        let (_, post) = self.client.edit_post(&token, id, draft).await?;
        Ok(post)
    }

    pub async fn delete_post(&self, id: PostId) -> ClientResult<Ack> {
        self.client.delete_post(&self.token()?, id).await
    }

    /// Comment on a post and return the refreshed thread
    pub async fn comment(&self, post: PostId, content: &str) -> ClientResult<PostDetail> {
        let token = self.token()?;
        let content = require_text(content)?;
        self.client.create_comment(&token, post, content).await?;
        self.client.get_post(&token, post).await
    }

    /// Reply to a comment on `post` and return the refreshed thread
    pub async fn reply(
        &self,
        post: PostId,
        comment: CommentId,
        content: &str,
    ) -> ClientResult<PostDetail> {
        let token = self.token()?;
        let content = require_text(content)?;
        self.client.create_reply(&token, comment, content).await?;
        self.client.get_post(&token, post).await
    }

    // ============================================
    // Assessment
    // ============================================

    /// Submit the questionnaire. Only the last step submits; the form
    /// itself is left untouched either way.
    pub async fn predict(&self, form: &AssessmentForm) -> ClientResult<Prediction> {
        let input = form.submit()?;
        let token = self.token()?;

        let warnings = input.range_warnings();
        if !warnings.is_empty() {
            tracing::debug!(count = warnings.len(), "Submitting values outside the usual ranges");
        }

        let prediction = self.client.predict(&token, &input).await?;
        tracing::info!(level = %prediction.level(), "Prediction received");
        Ok(prediction)
    }

    pub async fn hospitals(&self, at: Coordinates) -> ClientResult<Vec<Hospital>> {
        self.client.find_nearby_hospitals(&self.token()?, at).await
    }

    /// Predict, then look for hospitals near `near` if given
    pub async fn assess(
        &self,
        form: &AssessmentForm,
        near: Option<Coordinates>,
    ) -> ClientResult<Assessment> {
        let prediction = self.predict(form).await?;

        let hospitals = match near {
            Some(at) => {
                let found = self.hospitals(at).await;
                if let Err(e) = &found {
                    tracing::warn!(error = %e, "Hospital search failed after prediction");
                }
                Some(found)
            }
            None => None,
        };

        Ok(Assessment {
            prediction,
            hospitals,
        })
    }

    // ============================================
    // Feedback & contact
    // ============================================

    pub async fn feedback(&self, form: &FeedbackForm) -> ClientResult<Ack> {
        let token = self.token()?;
        let payload = form.validate()?;
        self.client.add_feedback(&token, &payload).await
    }

    /// Contact messages do not need a session
    pub async fn contact(&self, form: &ContactForm) -> ClientResult<Ack> {
        let payload = form.validate()?;
        self.client.send_contact(&payload).await
    }
}

fn require_text(content: &str) -> Result<&str, FormError> {
    let content = content.trim();
    if content.is_empty() {
        Err(FormError::MissingFields)
    } else {
        Ok(content)
    }
}

fn require_draft(draft: &PostDraft) -> Result<(), FormError> {
    require_text(&draft.title)?;
    require_text(&draft.content)?;
    Ok(())
}
