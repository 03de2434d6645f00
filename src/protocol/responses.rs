//! Console replies
//!
//! Reply codes and formatting. Multi-line replies use `CODE-text` for every
//! line but the last, which is `CODE text`.

pub const OK: u16 = 200;
pub const REGISTERED: u16 = 201;
pub const HELP: u16 = 214;
pub const READY: u16 = 220;
pub const GOODBYE: u16 = 221;
pub const LOGIN_SUCCESS: u16 = 230;
pub const INVALID_INPUT: u16 = 400;
pub const AUTH_FAILED: u16 = 430;
pub const INTERNAL_ERROR: u16 = 500;
pub const NOT_LOGGED_IN: u16 = 530;
pub const STORAGE_FAILED: u16 = 550;

/// Format a single-line reply
pub fn format_response(code: u16, message: &str) -> String {
    format!("{} {}\n", code, message)
}

/// Format a multi-line reply
pub fn format_multiline<S: AsRef<str>>(code: u16, lines: &[S]) -> String {
    let Some((last, rest)) = lines.split_last() else {
        return format_response(code, "");
    };

    let mut out = String::new();
    for line in rest {
        out.push_str(&format!("{}-{}\n", code, line.as_ref()));
    }
    out.push_str(&format_response(code, last.as_ref()));
    out
}
