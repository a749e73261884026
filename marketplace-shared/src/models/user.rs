use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;

use super::{Id, null_as_default};

/// Account roles known to the marketplace API.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Manages every user and store.
    Admin,
    /// Manages their own profile and stores.
    #[default]
    User,
}

impl Role {
    /// Return the wire spelling used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            _ => Err("unknown user role"),
        }
    }
}

/// A registered account as returned by `users` and `users/me`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Server-assigned identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: Id,
    /// Login email.
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Given name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Family name.
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    /// National identity number.
    #[serde(deserialize_with = "null_as_default")]
    pub cpf: String,
    /// Phone, when given.
    pub phone: Option<String>,
    /// Account role.
    pub role: Option<Role>,
}

impl User {
    /// Given name followed by last name, skipping blanks.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Body of `auth/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Login email.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// National identity number.
    pub cpf: String,
    /// Phone, may be empty.
    pub phone: String,
    /// Requested role.
    pub role: Role,
}

/// Body of `PUT users/me` and `PUT users/{id}`.
///
/// The password is only serialized when a new one was typed in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// Given name.
    pub name: String,
    /// Family name.
    pub last_name: String,
    /// Phone.
    pub phone: String,
    /// National identity number.
    pub cpf: String,
    /// New role; only admins may send one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// New password, omitted to keep the current one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn role_roundtrip() {
        for (text, role) in [("ADMIN", Role::Admin), ("USER", Role::User)] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(Role::from_str(text).unwrap(), role);
        }
        assert_eq!(Role::from_str(" admin ").unwrap(), Role::Admin);
    }

    #[test]
    fn role_invalid() {
        assert!(Role::from_str("guest").is_err());
    }

    #[test]
    fn role_iterates_every_variant() {
        assert_eq!(Role::iter().collect::<Vec<_>>(), vec![Role::Admin, Role::User]);
    }

    #[test]
    fn user_deserializes_camel_case_with_missing_fields() {
        let json = r#"{"id":7,"email":"ana@example.com","name":"Ana","lastName":"Lima","role":"ADMIN"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.last_name, "Lima");
        assert_eq!(user.role, Some(Role::Admin));
        assert!(user.phone.is_none());
        assert!(user.cpf.is_empty());
        assert_eq!(user.full_name(), "Ana Lima");
    }

    #[test]
    fn user_with_null_columns() {
        let json = r#"{"id":8,"email":"bia@example.com","name":null,"lastName":null,"cpf":null,"phone":null,"role":"USER"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert!(user.name.is_empty());
        assert!(user.cpf.is_empty());
        assert_eq!(user.full_name(), "");
        assert_eq!(user.role, Some(Role::User));
    }

    #[test]
    fn user_update_omits_empty_password() {
        let update = UserUpdate {
            name: "Ana".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();

        assert!(json.get("password").is_none());
        assert!(json.get("role").is_none());
        assert_eq!(json["lastName"], "");
    }

    #[test]
    fn register_request_defaults_to_user_role() {
        let json = serde_json::to_value(RegisterRequest::default()).unwrap();
        assert_eq!(json["role"], "USER");
    }
}
