//! Session management
//!
//! The authenticated user is cached in the store so a restarted console
//! picks up where it left off. The cache is written on login and removed
//! on logout.

pub mod state;

pub use state::SessionState;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::storage::KeyValueStore;
use crate::user::UserRecord;

/// The currently authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionUser {
    user: UserRecord,
}

impl SessionUser {
    /// Caches `user` under `key` and returns the new session.
    pub fn establish(
        store: &mut dyn KeyValueStore,
        key: &str,
        user: UserRecord,
    ) -> Result<Self, StoreError> {
        let session = Self { user };
        let blob = serde_json::to_string(&session).map_err(StoreError::Encode)?;
        store.set(key, &blob)?;
        debug!("Session cached for {}", session.user.username);
        Ok(session)
    }

    /// Reads a cached session back.
    ///
    /// An unreadable cache, or one without a username, is treated as no
    /// session at all.
    pub fn restore(store: &dyn KeyValueStore, key: &str) -> Result<Option<Self>, StoreError> {
        let Some(blob) = store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<SessionUser>(&blob) {
            Ok(session) if session.user.username.is_empty() => {
                warn!("Ignoring session cache under {:?} with no username", key);
                Ok(None)
            }
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!("Ignoring unreadable session cache under {:?}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Removes the cached session.
    pub fn clear(store: &mut dyn KeyValueStore, key: &str) -> Result<(), StoreError> {
        store.remove(key)
    }

    pub fn user(&self) -> &UserRecord {
        &self.user
    }

    pub fn into_user(self) -> UserRecord {
        self.user
    }
}
