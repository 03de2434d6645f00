//! Key validation
//!
//! Store keys double as file names, so they are checked before use.

/// Validate that a key is usable as a single file name
pub fn is_safe_key(key: &str) -> bool {
    !key.is_empty()
        && !key.contains("..")
        && !key.contains(['/', '\\', '\0'])
        && !key.starts_with('.')
}
