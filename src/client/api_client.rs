use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::path::Path;

use crate::error::{TaskHubError, TaskHubResult};
use crate::models::*;
use crate::session::Session;

/// REST client for the TaskHub backend. One method per endpoint; the bearer
/// token comes from the session the client was constructed with.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: String, session: Session) -> Self {
        let http = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token; errors when the session is anonymous.
    fn authed(&self, request: RequestBuilder) -> TaskHubResult<RequestBuilder> {
        Ok(request.bearer_auth(self.session.require_token()?))
    }

    /// Attach the bearer token when the session has one. The backend serves
    /// these listings to anonymous callers too.
    fn maybe_authed(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check<T: DeserializeOwned>(response: reqwest::Response) -> TaskHubResult<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(TaskHubError::from_status(status.as_u16(), message))
        }
    }

    pub async fn teams(&self) -> TaskHubResult<Vec<Team>> {
        let request = self.maybe_authed(self.http.get(self.url("/teams")));
        Self::check(request.send().await?).await
    }

    pub async fn users(&self) -> TaskHubResult<Vec<User>> {
        let request = self.maybe_authed(self.http.get(self.url("/users")));
        Self::check(request.send().await?).await
    }

    pub async fn tasks(&self) -> TaskHubResult<Vec<Task>> {
        let request = self.maybe_authed(self.http.get(self.url("/tasks")));
        Self::check(request.send().await?).await
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> TaskHubResult<User> {
        let body = json!({
            "username": username,
            "email": email,
            "password": password,
            "role": "USER" // hardcoded role
        });

        let request = self.http.post(self.url("/auth/register")).json(&body);
        Self::check(request.send().await?).await
    }

    /// Two-step login: POST the credentials, then fetch the full current-user
    /// record with the fresh token. Persisting the token is the caller's job.
    pub async fn login(&self, email: &str, password: &str) -> TaskHubResult<LoginOutcome> {
        let body = json!({ "email": email, "password": password });

        let response = self.http.post(self.url("/auth/login")).json(&body).send().await?;
        let login: LoginResponse = Self::check(response).await?;

        let user_response = self
            .http
            .get(self.url("/users/me"))
            .bearer_auth(&login.token)
            .send()
            .await?;
        let current_user: User = Self::check(user_response).await?;

        Ok(LoginOutcome {
            token: login.token,
            login_data: login.extra,
            current_user,
        })
    }

    pub async fn current_user(&self) -> TaskHubResult<User> {
        let request = self.authed(self.http.get(self.url("/users/me")))?;
        Self::check(request.send().await?).await
    }

    pub async fn notifications(&self) -> TaskHubResult<Vec<Notification>> {
        let request = self.authed(self.http.get(self.url("/notifications")))?;
        Self::check(request.send().await?).await
    }

    pub async fn notifications_by_user(&self, user_id: i64) -> TaskHubResult<Vec<Notification>> {
        let url = self.url(&format!("/notifications/user/{}", user_id));
        let request = self.authed(self.http.get(url))?;
        Self::check(request.send().await?).await
    }

    pub async fn personal_tasks(&self, user_id: i64) -> TaskHubResult<Vec<Task>> {
        let url = self.url(&format!("/tasks/users/{}/personal", user_id));
        let request = self.authed(self.http.get(url))?;
        Self::check(request.send().await?).await
    }

    pub async fn create_personal_task(
        &self,
        user_id: i64,
        task_name: &str,
    ) -> TaskHubResult<Task> {
        let url = self.url(&format!("/tasks/users/{}/personal", user_id));
        let body = json!({ "taskName": task_name });

        let request = self.authed(self.http.post(url).json(&body))?;
        Self::check(request.send().await?).await
    }

    pub async fn task_by_id(&self, id: i64) -> TaskHubResult<Task> {
        let request = self.authed(self.http.get(self.url(&format!("/tasks/{}", id))))?;
        Self::check(request.send().await?).await
    }

    pub async fn tasks_by_user(&self, user_id: i64) -> TaskHubResult<Vec<Task>> {
        let url = self.url(&format!("/tasks/user/{}", user_id));
        let request = self.authed(self.http.get(url))?;
        Self::check(request.send().await?).await
    }

    pub async fn update_task(&self, task: &Task) -> TaskHubResult<Task> {
        let url = self.url(&format!("/tasks/{}", task.id));
        let request = self.authed(self.http.put(url).json(task))?;
        Self::check(request.send().await?).await
    }

    /// Status goes as a query parameter; the backend expects no body here.
    pub async fn update_task_status(&self, task_id: i64, status: &str) -> TaskHubResult<Task> {
        let url = self.url(&format!("/tasks/{}/status", task_id));
        let request = self.authed(self.http.put(url).query(&[("status", status)]))?;
        Self::check(request.send().await?).await
    }

    pub async fn update_current_user(
        &self,
        payload: &UpdateUserPayload,
        image: Option<&Path>,
    ) -> TaskHubResult<User> {
        let form = Self::user_form(payload, image).await?;
        let request = self.authed(self.http.put(self.url("/users/me")).multipart(form))?;
        Self::check(request.send().await?).await
    }

    pub async fn update_user_by_id(
        &self,
        id: i64,
        payload: &UpdateUserPayload,
        image: Option<&Path>,
    ) -> TaskHubResult<User> {
        let form = Self::user_form(payload, image).await?;
        let url = self.url(&format!("/users/{}", id));
        let request = self.authed(self.http.put(url).multipart(form))?;
        Self::check(request.send().await?).await
    }

    /// Multipart body for user updates: the JSON payload under "user", plus
    /// the raw image bytes under "image" when a file was selected.
    async fn user_form(
        payload: &UpdateUserPayload,
        image: Option<&Path>,
    ) -> TaskHubResult<Form> {
        let user_json = serde_json::to_string(payload)?;
        let user_part = Part::text(user_json).mime_str("application/json")?;

        let mut form = Form::new().part("user", user_part);

        if let Some(path) = image {
            let contents = tokio::fs::read(path).await?;
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("avatar")
                .to_string();

            let image_part = Part::bytes(contents)
                .file_name(file_name)
                .mime_str(mime_type_for_image(path))?;
            form = form.part("image", image_part);
        }

        Ok(form)
    }
}

/// Get MIME type for an image file.
fn mime_type_for_image(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(
            "http://localhost:9999/api/".to_string(),
            Session::anonymous(),
        )
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let client = client();
        assert_eq!(client.url("/teams"), "http://localhost:9999/api/teams");
        assert_eq!(
            client.url("/tasks/3/status"),
            "http://localhost:9999/api/tasks/3/status"
        );
    }

    #[test]
    fn test_endpoint_paths() {
        let client = client();
        assert_eq!(
            client.url(&format!("/notifications/user/{}", 8)),
            "http://localhost:9999/api/notifications/user/8"
        );
        assert_eq!(
            client.url(&format!("/tasks/users/{}/personal", 8)),
            "http://localhost:9999/api/tasks/users/8/personal"
        );
        assert_eq!(
            client.url(&format!("/tasks/user/{}", 8)),
            "http://localhost:9999/api/tasks/user/8"
        );
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(mime_type_for_image(Path::new("a.png")), "image/png");
        assert_eq!(mime_type_for_image(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_type_for_image(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(
            mime_type_for_image(Path::new("a.bin")),
            "application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_protected_call_without_token_fails_locally() {
        let client = client();
        let result = client.current_user().await;
        assert!(matches!(result, Err(TaskHubError::TokenMissing)));
    }

    #[tokio::test]
    async fn test_user_form_without_image_has_single_part() {
        let payload = UpdateUserPayload {
            team_id: Some(None),
            ..Default::default()
        };

        // Form offers no inspection API; building without error is the check.
        let form = ApiClient::user_form(&payload, None).await;
        assert!(form.is_ok());
    }
}
