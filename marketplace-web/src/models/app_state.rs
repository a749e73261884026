use shared::models::Session;
use yewdux::Store;

#[derive(Default, Clone, PartialEq, Debug, Store)]
pub struct AppState {
    /// Set once the stored session has been read at startup.
    pub restored: bool,
    pub session: Option<Session>,
}

impl AppState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            restored: true,
            session: Some(session),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            restored: true,
            session: None,
        }
    }
}
