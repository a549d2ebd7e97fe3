use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "USER" => Some(UserRole::User),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Partial user projection sent on update. Absent fields are left untouched
/// by the backend; `team_id` distinguishes "leave unchanged" (outer `None`)
/// from the explicit "no team" null (`Some(None)`).
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Raw login response: the token plus whatever else the backend returns.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of the two-step login flow: token, the non-token remainder of the
/// login response, and the full current-user record fetched with the token.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub login_data: Map<String, Value>,
    pub current_user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"USER\"");

        let role: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert!(role.is_admin());
    }

    #[test]
    fn test_user_deserializes_camel_case() {
        let json = r#"{
            "id": 4,
            "username": "mara",
            "email": "mara@example.com",
            "role": "USER",
            "teamId": 2,
            "teamName": "Alpha",
            "avatarUrl": "/avatars/orbit.png"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 4);
        assert_eq!(user.team_id, Some(2));
        assert_eq!(user.team_name.as_deref(), Some("Alpha"));
        assert_eq!(user.avatar_url.as_deref(), Some("/avatars/orbit.png"));
    }

    #[test]
    fn test_user_tolerates_missing_optionals() {
        let json = r#"{"id": 1, "username": "t", "email": "t@x.io", "role": "ADMIN"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.team_id.is_none());
        assert!(user.team_name.is_none());
        assert!(user.avatar_url.is_none());
    }

    #[test]
    fn test_payload_omits_absent_fields() {
        let payload = UpdateUserPayload {
            username: Some("mara".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "mara" }));
    }

    #[test]
    fn test_payload_no_team_is_explicit_null() {
        let payload = UpdateUserPayload {
            team_id: Some(None),
            ..Default::default()
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"teamId":null}"#);
    }

    #[test]
    fn test_payload_team_id_value() {
        let payload = UpdateUserPayload {
            team_id: Some(Some(5)),
            ..Default::default()
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"teamId":5}"#);
    }

    #[test]
    fn test_login_response_splits_token_from_rest() {
        let json = r#"{"token": "jwt", "expiresIn": 3600, "tokenType": "Bearer"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.token, "jwt");
        assert_eq!(response.extra.get("expiresIn").unwrap(), 3600);
        assert!(response.extra.get("token").is_none());
    }
}
