//! Form parsing
//!
//! Turns `key=value;key=value` argument text into the flat field mapping
//! the registration form boundary expects.

use std::collections::HashMap;

/// Fields whose values are kept exactly as typed.
const VERBATIM_FIELDS: &[&str] = &["password", "confirmPassword"];

/// Parse `key=value` pairs separated by `;`.
///
/// Keys are trimmed, and so are values except for the password fields.
/// A chunk without `=` is a key with an empty value; blank chunks are
/// skipped. A later duplicate key wins.
pub fn parse_form(raw: &str) -> HashMap<String, String> {
    raw.split(';')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| match chunk.split_once('=') {
            Some((key, value)) => {
                let key = key.trim();
                let value = if VERBATIM_FIELDS.iter().any(|f| *f == key) {
                    value
                } else {
                    value.trim()
                };
                (key.to_string(), value.to_string())
            }
            None => (chunk.trim().to_string(), String::new()),
        })
        .collect()
}
