use crate::config::{get_token, get_user_id};
use crate::error::{TaskHubError, TaskHubResult};

/// Authenticated session context threaded through the API client.
///
/// The backend identifies the caller by an opaque bearer token; the acting
/// user's id is kept alongside it so callers can tell "editing myself" apart
/// from "editing someone else" without another storage lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user_id: Option<i64>,
}

impl Session {
    /// A session with no credentials, for pre-auth calls (login, register).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(token: String, user_id: Option<i64>) -> Self {
        Self {
            token: Some(token),
            user_id,
        }
    }

    /// Build a session from persisted configuration (env var wins).
    pub fn from_config() -> Self {
        Self {
            token: get_token().ok(),
            user_id: get_user_id(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The bearer token, or `TokenMissing` when the session is anonymous.
    pub fn require_token(&self) -> TaskHubResult<&str> {
        self.token.as_deref().ok_or(TaskHubError::TokenMissing)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether `id` refers to the user this session belongs to.
    pub fn is_self(&self, id: i64) -> bool {
        self.user_id == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session_has_no_token() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(matches!(
            session.require_token(),
            Err(TaskHubError::TokenMissing)
        ));
    }

    #[test]
    fn test_authenticated_session() {
        let session = Session::new("tok".to_string(), Some(3));
        assert!(session.is_authenticated());
        assert_eq!(session.require_token().unwrap(), "tok");
        assert_eq!(session.user_id(), Some(3));
    }

    #[test]
    fn test_is_self() {
        let session = Session::new("tok".to_string(), Some(3));
        assert!(session.is_self(3));
        assert!(!session.is_self(4));

        let anon = Session::anonymous();
        assert!(!anon.is_self(3));
    }
}
