use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskHubError {
    #[error("Not logged in. Please run 'taskhub auth login' to configure.")]
    TokenMissing,

    #[error("Invalid credentials. Please try again.")]
    Unauthorized,

    #[error("Access denied. Only ADMIN role can log in here.")]
    AccessDenied,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl TaskHubError {
    /// Map a non-2xx HTTP status and its response body to the typed taxonomy.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => TaskHubError::Unauthorized,
            403 => TaskHubError::AccessDenied,
            400 | 422 => TaskHubError::Validation(message),
            _ => TaskHubError::Api { status, message },
        }
    }
}

pub type TaskHubResult<T> = Result<T, TaskHubError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> TaskHubResult<T>;
    fn with_context<F>(self, f: F) -> TaskHubResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> TaskHubResult<T> {
        self.map_err(|e| TaskHubError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> TaskHubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TaskHubError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> TaskHubResult<T> {
        self.ok_or_else(|| TaskHubError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> TaskHubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| TaskHubError::Unknown(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_unauthorized() {
        let err = TaskHubError::from_status(401, "bad token".to_string());
        assert!(matches!(err, TaskHubError::Unauthorized));
    }

    #[test]
    fn test_from_status_forbidden() {
        let err = TaskHubError::from_status(403, String::new());
        assert!(matches!(err, TaskHubError::AccessDenied));
    }

    #[test]
    fn test_from_status_validation() {
        for status in [400, 422] {
            let err = TaskHubError::from_status(status, "email taken".to_string());
            match err {
                TaskHubError::Validation(msg) => assert_eq!(msg, "email taken"),
                _ => panic!("Expected TaskHubError::Validation"),
            }
        }
    }

    #[test]
    fn test_from_status_other() {
        let err = TaskHubError::from_status(500, "boom".to_string());
        match err {
            TaskHubError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            _ => panic!("Expected TaskHubError::Api"),
        }
    }

    #[test]
    fn test_error_context_on_result() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));

        let hub_result = result.context("Failed to read config file");
        assert!(hub_result.is_err());

        match hub_result {
            Err(TaskHubError::Unknown(msg)) => {
                assert!(msg.contains("Failed to read config file"));
                assert!(msg.contains("file not found"));
            }
            _ => panic!("Expected TaskHubError::Unknown"),
        }
    }

    #[test]
    fn test_error_context_on_option() {
        let option: Option<String> = None;
        let result = option.context("Token not found");

        assert!(result.is_err());
        match result {
            Err(TaskHubError::Unknown(msg)) => assert_eq!(msg, "Token not found"),
            _ => panic!("Expected TaskHubError::Unknown"),
        }
    }

    #[test]
    fn test_error_context_with_closure() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let hub_result =
            result.with_context(|| format!("Failed to access file at path: {}", "/tmp/test.txt"));

        assert!(hub_result.is_err());
        match hub_result {
            Err(TaskHubError::Unknown(msg)) => {
                assert!(msg.contains("Failed to access file at path: /tmp/test.txt"));
                assert!(msg.contains("access denied"));
            }
            _ => panic!("Expected TaskHubError::Unknown"),
        }
    }
}
