//! Authentication adapter: signup, login, session lifecycle and
//! availability checks

use chrono::Utc;
use common::{ApiError, ApiResult, Endpoint, HttpClient, RequestOptions, Session, UserSnapshot};
use tracing::{error, info, warn};

use crate::models::{AuthResponse, LoginRequest, SignupForm, SignupRequest};
use crate::validation;

/// Server messages meaning the username is taken
const USERNAME_TAKEN_MARKERS: [&str; 2] = ["이미 사용 중인 아이디", "username already in use"];

/// Server messages meaning the email is taken
const EMAIL_TAKEN_MARKERS: [&str; 2] = ["이미 사용 중인 이메일", "email already in use"];

/// Filler values for the half of a check that is not under test
const FILLER_USERNAME: &str = "testuser";
const FILLER_EMAIL: &str = "test@test.com";

/// Authentication adapter
#[derive(Debug, Clone)]
pub struct AuthAdapter {
    client: HttpClient,
}

impl AuthAdapter {
    /// Create a new auth adapter
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    fn session(&self) -> &Session {
        self.client.session()
    }

    /// Register a new account; a successful response opens a session
    pub async fn signup(&self, form: &SignupForm) -> ApiResult<AuthResponse> {
        let options = RequestOptions::post().json(&SignupRequest::from(form))?;
        let response = self.authenticate(Endpoint::Signup, options).await;

        if let Err(e) = &response {
            error!("Signup failed for {}: {}", form.username, e);
        }
        response
    }

    /// Log in with username and password
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AuthResponse> {
        let options = RequestOptions::post().json(&LoginRequest { username, password })?;
        let response = self.authenticate(Endpoint::Login, options).await;

        if let Err(e) = &response {
            error!("Login failed for {}: {}", username, e);
        }
        response
    }

    async fn authenticate(
        &self,
        endpoint: Endpoint,
        options: RequestOptions,
    ) -> ApiResult<AuthResponse> {
        let payload = self.client.call(endpoint, options).await?;
        let response: AuthResponse =
            serde_json::from_value(payload.into_json()).map_err(ApiError::Decode)?;

        if let Some(token) = response.session_token() {
            if !self.session().begin(token, response.user.as_ref()) {
                warn!("Session could not be stored after {}", endpoint.name());
            }
            info!("Session started via {}", endpoint.name());
        }

        Ok(response)
    }

    /// Forget the token and user snapshot
    pub fn logout(&self) -> bool {
        if !self.session().end() {
            warn!("Session store did not clear cleanly on logout");
        }
        info!("Logged out");
        true
    }

    /// Locally stored user snapshot
    pub fn current_user(&self) -> Option<UserSnapshot> {
        self.session().current_user()
    }

    /// Refresh the user snapshot from the server, falling back to the local copy
    pub async fn fetch_current_user(&self) -> Option<UserSnapshot> {
        let fetched = match self.client.call(Endpoint::CurrentUser, RequestOptions::get()).await {
            Ok(payload) => serde_json::from_value::<UserSnapshot>(payload.into_json())
                .map_err(ApiError::Decode),
            Err(e) => Err(e),
        };

        match fetched {
            Ok(user) => {
                self.session().set_current_user(&user);
                Some(user)
            }
            Err(e) => {
                error!("Failed to fetch current user: {}", e);
                self.current_user()
            }
        }
    }

    /// True when the server reports the username as taken
    pub async fn is_username_taken(&self, username: &str) -> bool {
        let check = SignupRequest::availability_check(username, FILLER_EMAIL);
        self.check_signup_conflict(&check, &USERNAME_TAKEN_MARKERS).await
    }

    /// True when the server reports the email as taken
    pub async fn is_email_taken(&self, email: &str) -> bool {
        let check = SignupRequest::availability_check(FILLER_USERNAME, email);
        self.check_signup_conflict(&check, &EMAIL_TAKEN_MARKERS).await
    }

    /// Send a throwaway signup and look for a conflict marker in the error.
    ///
    /// There is no existence endpoint on the backend. The check is not atomic
    /// with the real signup, and a check the server accepts creates an account.
    async fn check_signup_conflict(&self, check: &SignupRequest, markers: &[&str]) -> bool {
        let options = match RequestOptions::post().json(check) {
            Ok(options) => options,
            Err(e) => {
                error!("Failed to encode availability check: {}", e);
                return false;
            }
        };

        match self.client.call(Endpoint::Signup, options).await {
            Ok(_) => {
                warn!("Availability check for {} was accepted by the server", check.username);
                false
            }
            Err(ApiError::Status { message, .. }) => {
                let message = message.to_lowercase();
                markers
                    .iter()
                    .any(|marker| message.contains(&marker.to_lowercase()))
            }
            Err(e) => {
                warn!("Availability check failed: {}", e);
                false
            }
        }
    }

    /// Validate a signup form, including both availability checks
    pub async fn validate_signup(&self, form: &SignupForm) -> ApiResult<()> {
        validation::validate_required(form).map_err(ApiError::Validation)?;
        validation::validate_username(&form.username).map_err(ApiError::Validation)?;

        if self.is_username_taken(&form.username).await {
            return Err(ApiError::Validation("Username is already in use".to_string()));
        }

        validation::validate_password(&form.password, form.password_confirm.as_deref())
            .map_err(ApiError::Validation)?;
        validation::validate_email(&form.email).map_err(ApiError::Validation)?;

        if self.is_email_taken(&form.email).await {
            return Err(ApiError::Validation("Email is already in use".to_string()));
        }

        if let Some(birth_date) = form.birth_date.as_deref().filter(|date| !date.is_empty()) {
            validation::validate_birth_date(birth_date, Utc::now().date_naive())
                .map_err(ApiError::Validation)?;
        }

        Ok(())
    }
}
