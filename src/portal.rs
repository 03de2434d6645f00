//! Portal core
//!
//! Owns the configuration, the store, the user directory and the session
//! state, and exposes the operations the console drives.

use log::info;

use crate::auth::{self, LoginRequest};
use crate::config::PortalConfig;
use crate::dashboard::DashboardView;
use crate::directory::Directory;
use crate::error::{PortalError, SessionError};
use crate::registrar::{self, RegisterRequest};
use crate::session::{SessionState, SessionUser};
use crate::storage::{self, KeyValueStore};
use crate::user::UserRecord;

pub struct Portal {
    config: PortalConfig,
    store: Box<dyn KeyValueStore>,
    directory: Directory,
    session: SessionState,
}

impl Portal {
    /// Opens the store named by the configuration and loads state from it.
    pub fn open(config: PortalConfig) -> Result<Self, PortalError> {
        let store = storage::open_store(&config.storage)?;
        Self::with_store(config, store)
    }

    /// Loads the directory and any cached session from `store`.
    pub fn with_store(
        config: PortalConfig,
        store: Box<dyn KeyValueStore>,
    ) -> Result<Self, PortalError> {
        let directory = Directory::load(store.as_ref(), &config.storage.users_key)?;

        let session = match SessionUser::restore(store.as_ref(), &config.storage.session_key)? {
            Some(session) => {
                info!("Restored session for {}", session.user().username);
                SessionState::Authenticated(session)
            }
            None => SessionState::Anonymous,
        };

        Ok(Self {
            config,
            store,
            directory,
            session,
        })
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Option<&UserRecord> {
        self.session.user()
    }

    /// Registers a new user. Does not log them in.
    pub fn register(&mut self, request: RegisterRequest) -> Result<UserRecord, PortalError> {
        registrar::register(
            &mut self.directory,
            self.store.as_mut(),
            &self.config,
            request,
        )
    }

    /// Validates a login and, on success, starts a session for the user.
    ///
    /// A failed attempt leaves any existing session untouched; a successful
    /// one replaces it.
    pub fn login(&mut self, request: &LoginRequest) -> Result<UserRecord, PortalError> {
        let user = auth::login(&self.directory, request)?.clone();

        let session = SessionUser::establish(
            self.store.as_mut(),
            &self.config.storage.session_key,
            user.clone(),
        )?;
        self.session = SessionState::Authenticated(session);

        info!("{} logged in as {}", user.username, user.role);
        Ok(user)
    }

    /// Ends the session, returning the user who was logged in.
    pub fn logout(&mut self) -> Result<UserRecord, PortalError> {
        if !self.session.is_logged_in() {
            return Err(SessionError::NotLoggedIn.into());
        }

        SessionUser::clear(self.store.as_mut(), &self.config.storage.session_key)?;
        let user = self
            .session
            .logout()
            .map(SessionUser::into_user)
            .ok_or(SessionError::NotLoggedIn)?;

        info!("{} logged out", user.username);
        Ok(user)
    }

    /// Dashboard of the logged-in user.
    pub fn dashboard(&self) -> Result<DashboardView<'_>, PortalError> {
        let user = self.current_user().ok_or(SessionError::NotLoggedIn)?;
        Ok(DashboardView::new(user))
    }

    /// Opens a feature from the logged-in user's dashboard.
    pub fn access_feature(&self, name: &str) -> Result<String, PortalError> {
        let view = self.dashboard()?;
        if !view.descriptor.has_feature(name) {
            return Err(SessionError::UnknownFeature(name.to_string()).into());
        }
        Ok(format!("Accessing: {}", name))
    }
}
