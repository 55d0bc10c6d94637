//! Session context: auth token and current-user snapshot
//!
//! The session lives in a session-scoped `Store` and is injected into the
//! HTTP client and the auth adapter. Fresh `Session::new()` values share
//! nothing, which keeps tests isolated.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::storage::Store;

/// Session key of the bearer token
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Session key of the user snapshot
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Denormalized copy of the server's user record, for display only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Value>,
    /// Server fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserSnapshot {
    /// User id rendered as a string key (numbers and strings both accepted)
    pub fn id_key(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

/// Anonymous or authenticated view of the session
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Anonymous,
    Authenticated {
        token: String,
        user: Option<UserSnapshot>,
    },
}

/// Session context for one client instance
#[derive(Debug, Clone)]
pub struct Session {
    store: Store,
}

impl Session {
    /// Create a session backed by a fresh session-scoped store
    pub fn new() -> Self {
        Self::with_store(Store::session())
    }

    /// Create a session over an existing store
    pub fn with_store(store: Store) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Current bearer token
    pub fn auth_token(&self) -> Option<String> {
        self.store
            .get::<String>(AUTH_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// Last known user snapshot
    pub fn current_user(&self) -> Option<UserSnapshot> {
        self.store.get(CURRENT_USER_KEY)
    }

    /// Replace the user snapshot; `false` means it was not persisted
    pub fn set_current_user(&self, user: &UserSnapshot) -> bool {
        self.store.set(CURRENT_USER_KEY, user)
    }

    /// Anonymous → Authenticated
    pub fn begin(&self, token: &str, user: Option<&UserSnapshot>) -> bool {
        info!("Session authenticated");
        let stored_token = self.store.set(AUTH_TOKEN_KEY, token);
        let stored_user = match user {
            Some(user) => self.set_current_user(user),
            None => self.store.remove(CURRENT_USER_KEY),
        };

        if !(stored_token && stored_user) {
            warn!("Session state was only partially persisted");
        }
        stored_token && stored_user
    }

    /// Authenticated → Anonymous
    pub fn end(&self) -> bool {
        info!("Session cleared");
        let token_removed = self.store.remove(AUTH_TOKEN_KEY);
        let user_removed = self.store.remove(CURRENT_USER_KEY);
        token_removed && user_removed
    }

    /// Current auth state
    pub fn state(&self) -> AuthState {
        match self.auth_token() {
            Some(token) => AuthState::Authenticated {
                token,
                user: self.current_user(),
            },
            None => AuthState::Anonymous,
        }
    }

    /// `Authorization: Bearer <token>` when a token is present, otherwise empty
    pub fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.auth_token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => warn!("Auth token is not a valid header value: {}", e),
            }
        }
        headers
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> UserSnapshot {
        serde_json::from_value(json!({
            "id": 7,
            "username": "minji",
            "email": "minji@example.com",
            "name_ko": "민지"
        }))
        .unwrap()
    }

    #[test]
    fn anonymous_session_has_no_auth_headers() {
        let session = Session::new();
        assert!(session.auth_headers().is_empty());
        assert_eq!(session.state(), AuthState::Anonymous);
    }

    #[test]
    fn begin_and_end_move_between_states() {
        let session = Session::new();
        assert!(session.begin("tok-123", Some(&user())));

        assert_eq!(session.auth_token().as_deref(), Some("tok-123"));
        assert_eq!(
            session.auth_headers().get(AUTHORIZATION).unwrap(),
            "Bearer tok-123"
        );
        assert!(matches!(session.state(), AuthState::Authenticated { .. }));

        assert!(session.end());
        assert_eq!(session.auth_token(), None);
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn snapshot_keeps_unknown_fields_and_id_key() {
        let session = Session::new();
        session.set_current_user(&user());

        let restored = session.current_user().unwrap();
        assert_eq!(restored.id_key().as_deref(), Some("7"));
        assert_eq!(restored.extra.get("name_ko"), Some(&json!("민지")));
    }

    #[test]
    fn sessions_are_isolated() {
        let first = Session::new();
        let second = Session::new();
        first.begin("only-first", None);
        assert_eq!(second.auth_token(), None);
    }
}
