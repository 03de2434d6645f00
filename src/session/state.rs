//! Module `session::state`
//!
//! The portal's login state: anonymous, or authenticated as one user.

use crate::session::SessionUser;
use crate::user::UserRecord;

/// Login state of the single console session.
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(SessionUser),
}

impl SessionState {
    /// Returns whether a user is logged in.
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// Returns the logged-in user, if any.
    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            SessionState::Authenticated(session) => Some(session.user()),
            SessionState::Anonymous => None,
        }
    }

    /// Returns the username of the logged-in user, if any.
    pub fn username(&self) -> Option<&str> {
        self.user().map(|u| u.username.as_str())
    }

    /// Resets to anonymous, returning the session that was active.
    pub fn logout(&mut self) -> Option<SessionUser> {
        match std::mem::take(self) {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Anonymous => None,
        }
    }
}
