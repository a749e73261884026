use gloo_storage::{LocalStorage, Storage};
use shared::models::Session;
use shared::session::{
    SESSION_STORAGE_KEY, SessionStore, SessionStoreError, decode_session, encode_session,
};

/// Session persistence in the browser's local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = LocalStorage::raw()
            .get_item(SESSION_STORAGE_KEY)
            .ok()
            .flatten()?;
        decode_session(&raw)
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let encoded = encode_session(session)?;
        LocalStorage::raw()
            .set_item(SESSION_STORAGE_KEY, &encoded)
            .map_err(|err| SessionStoreError::Write(format!("{err:?}")))
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_STORAGE_KEY);
    }
}
