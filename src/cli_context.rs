use crate::client::ApiClient;
use crate::config::{get_api_url, load_config, save_config};
use crate::error::{TaskHubError, TaskHubResult};
use crate::session::Session;
use std::sync::Arc;

/// Central context for CLI operations, wiring persisted configuration into a
/// session and an API client.
pub struct CliContext {
    session: Session,
    api_url: String,
    client: Option<Arc<ApiClient>>,
}

impl CliContext {
    /// Load context from saved configuration
    pub fn load() -> Self {
        Self {
            session: Session::from_config(),
            api_url: get_api_url(),
            client: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get or create a client carrying whatever session is loaded (possibly
    /// anonymous); enough for login, register, and the public listings.
    pub fn client(&mut self) -> Arc<ApiClient> {
        if let Some(client) = &self.client {
            return client.clone();
        }

        let client = Arc::new(ApiClient::new(self.api_url.clone(), self.session.clone()));
        self.client = Some(client.clone());
        client
    }

    /// Get or create a client for protected endpoints (requires a token).
    pub fn authed_client(&mut self) -> TaskHubResult<Arc<ApiClient>> {
        if !self.session.is_authenticated() {
            return Err(TaskHubError::TokenMissing);
        }

        Ok(self.client())
    }

    pub fn has_token(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Persist a freshly authenticated session and switch to it.
    pub fn persist_session(&mut self, token: String, user_id: i64) -> TaskHubResult<()> {
        let mut config = load_config();
        config.token = Some(token.clone());
        config.user_id = Some(user_id);
        save_config(&config).map_err(|e| TaskHubError::ConfigError(e.to_string()))?;

        self.session = Session::new(token, Some(user_id));
        self.client = None;
        Ok(())
    }

    /// Drop the persisted session (logout).
    pub fn clear_session(&mut self) -> TaskHubResult<()> {
        let mut config = load_config();
        config.token = None;
        config.user_id = None;
        save_config(&config).map_err(|e| TaskHubError::ConfigError(e.to_string()))?;

        self.session = Session::anonymous();
        self.client = None;
        Ok(())
    }
}

/// Builder for contexts with explicit credentials, mainly for tests.
pub struct CliContextBuilder {
    token: Option<String>,
    user_id: Option<i64>,
    api_url: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            token: None,
            user_id: None,
            api_url: None,
        }
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = Some(api_url);
        self
    }

    pub fn build(self) -> CliContext {
        let session = match self.token {
            Some(token) => Session::new(token, self.user_id),
            None => Session::anonymous(),
        };

        CliContext {
            session,
            api_url: self.api_url.unwrap_or_else(get_api_url),
            client: None,
        }
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_token() {
        let mut context = CliContextBuilder::new()
            .with_token("test-token".to_string())
            .with_user_id(9)
            .with_api_url("http://localhost:1/api".to_string())
            .build();

        assert!(context.has_token());
        assert!(context.session().is_self(9));
        assert!(context.authed_client().is_ok());
    }

    #[test]
    fn test_authed_client_without_token() {
        let mut context = CliContextBuilder::new()
            .with_api_url("http://localhost:1/api".to_string())
            .build();

        assert!(!context.has_token());
        assert!(matches!(
            context.authed_client(),
            Err(TaskHubError::TokenMissing)
        ));
    }

    #[test]
    fn test_client_is_cached() {
        let mut context = CliContextBuilder::new()
            .with_token("test-token".to_string())
            .with_api_url("http://localhost:1/api".to_string())
            .build();

        let a = context.client();
        let b = context.client();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
