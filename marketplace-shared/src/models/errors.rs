use serde::{Deserialize, Serialize};

/// Error body produced by the marketplace API.
///
/// Handlers answer either with this JSON object or with a bare text message,
/// so every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ErrorResponse {
    /// HTTP status echoed by the server.
    pub status: Option<u16>,
    /// Short error class, e.g. `Not Found`.
    pub error: Option<String>,
    /// Human readable message.
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Creates an error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Extract the most useful message from a raw error body.
    ///
    /// Prefers `message`, then `error`, then the raw text itself. Returns
    /// `None` for an empty body so the caller can fall back to the status line.
    #[must_use]
    pub fn message_from_body(body: &str) -> Option<String> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return None;
        }
        match serde_json::from_str::<serde_json::Value>(trimmed) {
            Ok(serde_json::Value::Object(map)) => {
                let parsed: Self =
                    serde_json::from_value(serde_json::Value::Object(map)).unwrap_or_default();
                parsed
                    .message
                    .filter(|message| !message.is_empty())
                    .or_else(|| parsed.error.filter(|error| !error.is_empty()))
                    .or_else(|| Some(trimmed.to_string()))
            }
            Ok(serde_json::Value::String(text)) if !text.is_empty() => Some(text),
            _ => Some(trimmed.to_string()),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.error, &self.message) {
            (Some(error), Some(message)) => write!(f, "{error}: {message}"),
            (None, Some(message)) => f.write_str(message),
            (Some(error), None) => f.write_str(error),
            (None, None) => f.write_str("unknown error"),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_wins() {
        let body = r#"{"timestamp":"2025-01-01T00:00:00","status":404,"error":"Not Found","message":"Loja não encontrada"}"#;
        assert_eq!(
            ErrorResponse::message_from_body(body).as_deref(),
            Some("Loja não encontrada")
        );
    }

    #[test]
    fn error_field_is_second_choice() {
        let body = r#"{"status":400,"error":"Validation Error","messages":{"name":"required"}}"#;
        assert_eq!(
            ErrorResponse::message_from_body(body).as_deref(),
            Some("Validation Error")
        );
    }

    #[test]
    fn plain_text_body_is_kept() {
        assert_eq!(
            ErrorResponse::message_from_body("Acesso negado: not owner\n").as_deref(),
            Some("Acesso negado: not owner")
        );
    }

    #[test]
    fn object_without_known_fields_is_kept_verbatim() {
        assert_eq!(
            ErrorResponse::message_from_body(r#"{"detail":"x"}"#).as_deref(),
            Some(r#"{"detail":"x"}"#)
        );
    }

    #[test]
    fn empty_body_has_no_message() {
        assert!(ErrorResponse::message_from_body("  ").is_none());
    }

    #[test]
    fn display_combines_fields() {
        let full = ErrorResponse {
            status: Some(404),
            error: Some("Not Found".to_string()),
            message: Some("missing".to_string()),
        };
        assert_eq!(full.to_string(), "Not Found: missing");
        assert_eq!(ErrorResponse::new("boom").to_string(), "boom");
        assert_eq!(ErrorResponse::default().to_string(), "unknown error");
    }
}
