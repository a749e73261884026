//! Role gating for routes.

use crate::models::{Role, Session, Store};

/// Outcome of checking a session against a route's requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The session may open the route.
    Granted,
    /// Nobody is signed in.
    RedirectToLogin,
    /// Signed in with the wrong role.
    Forbidden,
}

impl Access {
    /// Text shown in place of a view the session may not open.
    pub const FORBIDDEN_MESSAGE: &'static str = "403 - Access denied";

    /// Decide whether `session` may open a route that requires `required`.
    #[must_use]
    pub fn check(session: Option<&Session>, required: Option<Role>) -> Self {
        let Some(session) = session.filter(|session| session.is_authenticated()) else {
            return Self::RedirectToLogin;
        };
        match required {
            Some(role) if session.role != Some(role) => Self::Forbidden,
            _ => Self::Granted,
        }
    }

    /// Whether the route may be rendered.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Where a freshly signed in user is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// `/admin`.
    AdminDashboard,
    /// `/dashboard`.
    UserDashboard,
}

impl Landing {
    /// Landing view for a role; anything but admin lands on the user dashboard.
    #[must_use]
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Admin) => Self::AdminDashboard,
            _ => Self::UserDashboard,
        }
    }

    /// Route path of the landing view.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::AdminDashboard => "/admin",
            Self::UserDashboard => "/dashboard",
        }
    }
}

/// Admins edit every store; owners edit their own.
#[must_use]
pub fn can_edit_store(session: Option<&Session>, store: &Store) -> bool {
    let Some(session) = session.filter(|session| session.is_authenticated()) else {
        return false;
    };
    if session.is_admin() {
        return true;
    }
    match (session.email.as_deref(), store.owner_email.as_deref()) {
        (Some(email), Some(owner)) => email.eq_ignore_ascii_case(owner),
        _ => false,
    }
}
