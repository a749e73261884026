use serde::{Deserialize, Serialize};

use super::{Role, User};

/// Credentials posted to `auth/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plain-text password, sent over TLS only.
    pub password: String,
}

/// The client-held record of who is signed in.
///
/// A session is always replaced as a whole value; nothing edits it in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Session {
    /// Email of the signed-in account.
    pub email: Option<String>,
    /// Role of the signed-in account.
    pub role: Option<Role>,
    /// Bearer token for authenticated calls.
    pub token: Option<String>,
}

impl Session {
    /// Build a session from the `users/me` profile and the bearer token it was fetched with.
    #[must_use]
    pub fn from_profile(user: &User, token: impl Into<String>) -> Self {
        Self {
            email: Some(user.email.clone()),
            role: user.role,
            token: Some(token.into()),
        }
    }

    /// The bearer token, if it is present and non-blank.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.trim().is_empty())
    }

    /// Whether this session can authorize requests.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Whether the session belongs to an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// Token returned by `auth/login`.
///
/// Depending on the server build the body is the raw token text, a quoted JSON
/// string, or an object with a `token` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse(pub Option<String>);

impl TokenResponse {
    /// Interpret a login response body.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Self(None);
        }
        let token = match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(serde_json::Value::String(token)) => Some(token),
            Ok(serde_json::Value::Object(map)) => map
                .get("token")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
            Ok(_) => None,
            Err(_) => Some(trimmed.to_string()),
        };
        Self(token.filter(|token| !token.is_empty()))
    }

    /// The token, if the body carried one.
    #[must_use]
    pub fn into_token(self) -> Option<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_from_plain_text() {
        assert_eq!(
            TokenResponse::parse("eyJhbGciOiJIUzI1NiJ9.e30.sig\n").into_token(),
            Some("eyJhbGciOiJIUzI1NiJ9.e30.sig".to_string())
        );
    }

    #[test]
    fn token_from_json_string_and_object() {
        assert_eq!(
            TokenResponse::parse(r#""abc""#).into_token(),
            Some("abc".to_string())
        );
        assert_eq!(
            TokenResponse::parse(r#"{"token":"xyz"}"#).into_token(),
            Some("xyz".to_string())
        );
    }

    #[test]
    fn token_missing() {
        assert_eq!(TokenResponse::parse("").into_token(), None);
        assert_eq!(TokenResponse::parse("{}").into_token(), None);
        assert_eq!(TokenResponse::parse("null").into_token(), None);
        assert_eq!(TokenResponse::parse(r#""""#).into_token(), None);
    }

    #[test]
    fn blank_token_is_not_authenticated() {
        let session = Session {
            token: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!session.is_authenticated());
        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn session_from_profile() {
        let user = User {
            email: "admin@example.com".to_string(),
            role: Some(Role::Admin),
            ..Default::default()
        };
        let session = Session::from_profile(&user, "tok");

        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert_eq!(session.email.as_deref(), Some("admin@example.com"));
    }

    #[test]
    fn session_tolerates_partial_json() {
        let session: Session = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
        assert_eq!(session.token(), Some("t"));
        assert!(session.role.is_none());
    }
}
