//! Authentication system
//!
//! Handles login validation against the user directory.

pub mod validator;

pub use validator::{LoginRequest, login};
