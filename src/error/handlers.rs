//! Error handlers
//!
//! Logs portal errors and maps them to console reply codes.

use crate::error::types::PortalError;
use crate::protocol::responses;
use log::{Level, log};

/// Log a portal error at the level its kind deserves.
pub fn handle_error(err: &PortalError) {
    let level = error_log_level(err);
    if level == Level::Error {
        log!(level, "Portal error: {}", err);
    } else {
        log!(level, "Rejected request: {}", err);
    }
}

/// Rejected user input stays at `info`; storage and lookup failures are errors.
pub fn error_log_level(err: &PortalError) -> Level {
    match err {
        PortalError::Store(_) | PortalError::Dashboard(_) => Level::Error,
        PortalError::Validation(_) | PortalError::Auth(_) | PortalError::Session(_) => Level::Info,
    }
}

/// Convert error to console reply code
pub fn error_to_reply_code(err: &PortalError) -> u16 {
    match err {
        PortalError::Validation(_) => responses::INVALID_INPUT,
        PortalError::Auth(_) => responses::AUTH_FAILED,
        PortalError::Session(_) => responses::NOT_LOGGED_IN,
        PortalError::Dashboard(_) => responses::INTERNAL_ERROR,
        PortalError::Store(_) => responses::STORAGE_FAILED,
    }
}
