//! Persistence of the signed-in [`Session`].
//!
//! The browser build keeps the session in local storage; native code and
//! tests use [`MemorySessionStore`]. Both store the session as JSON under
//! [`SESSION_STORAGE_KEY`] so the formats never drift apart.

use std::sync::{Mutex, PoisonError};

use thiserror::Error;
use tracing::warn;

use crate::models::Session;

/// Local storage key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "app_auth_v1";

/// Failure to persist a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStoreError {
    /// The session could not be encoded.
    #[error("failed to serialize session: {0}")]
    Serialize(String),
    /// The backing storage refused the write.
    #[error("failed to write session storage: {0}")]
    Write(String),
}

/// Where the current session lives between page loads.
pub trait SessionStore {
    /// The stored session. Missing, unreadable and corrupt values all load as `None`.
    fn load(&self) -> Option<Session>;

    /// Replace the stored session.
    ///
    /// # Errors
    /// Returns an error when the session cannot be encoded or written.
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Forget the stored session.
    fn clear(&self);
}

/// Encode a session the way every store writes it.
///
/// # Errors
/// Returns [`SessionStoreError::Serialize`] if encoding fails.
pub fn encode_session(session: &Session) -> Result<String, SessionStoreError> {
    serde_json::to_string(session).map_err(|err| SessionStoreError::Serialize(err.to_string()))
}

/// Decode a stored session, treating garbage as no session.
#[must_use]
pub fn decode_session(raw: &str) -> Option<Session> {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) => Some(session),
        Err(err) => {
            warn!(error = %err, "discarding unreadable stored session");
            None
        }
    }
}

/// In-memory store for native code and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: Mutex<Option<String>>,
}

impl MemorySessionStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `session`.
    #[must_use]
    pub fn with_session(session: &Session) -> Self {
        Self {
            raw: Mutex::new(encode_session(session).ok()),
        }
    }

    /// A store holding an arbitrary raw value, as if written by something else.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// Raw stored value.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.raw().as_deref().and_then(decode_session)
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let encoded = encode_session(session)?;
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = Some(encoded);
        Ok(())
    }

    fn clear(&self) {
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
