pub mod auth;
pub mod config;
pub mod console;
pub mod dashboard;
pub mod directory;
pub mod error;
pub mod logging;
pub mod portal;
pub mod protocol;
pub mod registrar;
pub mod session;
pub mod storage;
pub mod user;

pub use portal::Portal;
