//! Interactive console
//!
//! Line-based front end over the portal: one command per line, one reply
//! per command.

pub mod handler;

pub use handler::run_console;
