//! Module `commands`
//!
//! Defines the console commands, their outcome status, and the parser that
//! turns an input line into a `Command`.

use std::collections::HashMap;

use crate::auth::LoginRequest;
use crate::protocol::parser::parse_form;

/// A console command parsed from one input line.
#[derive(Debug, PartialEq)]
pub enum Command {
    QUIT,
    HELP,
    LOGOUT,
    WHOAMI,
    DASHBOARD,
    REGISTER(HashMap<String, String>), // field=value;field=value
    LOGIN(LoginRequest),               // username password... role
    FEATURE(String),                   // open a dashboard feature
    UNKNOWN,
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseConnection,
}

/// Struct encapsulating the full result of a command execution.
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

/// Parses a raw input line into the `Command` enum.
///
/// The text after the command word is trimmed, except for `REGISTER` and
/// keyed `LOGIN` forms, which get it untouched so password values keep
/// their spaces.
pub fn parse_command(raw: &str) -> Command {
    let line = raw.trim_start().trim_end_matches(['\r', '\n']);
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let cmd = cmd.to_ascii_uppercase();
    let arg = rest.trim();

    match cmd.as_str() {
        "QUIT" | "Q" | "EXIT" => Command::QUIT,
        "HELP" | "?" => Command::HELP,
        "LOGOUT" => Command::LOGOUT,
        "WHOAMI" => Command::WHOAMI,
        "DASHBOARD" => Command::DASHBOARD,
        "REGISTER" => Command::REGISTER(parse_form(rest)),
        "LOGIN" => parse_login(rest),
        "FEATURE" if !arg.is_empty() => Command::FEATURE(arg.to_string()),
        _ => Command::UNKNOWN,
    }
}

/// `LOGIN username=..;password=..;role=..` or `LOGIN <username> <password> <role>`.
///
/// In the positional form the first word is the username, the last word is
/// the role, and everything between is the password. Missing arguments are
/// empty strings so the authenticator can report them.
fn parse_login(rest: &str) -> Command {
    let arg = rest.trim();

    if arg.starts_with("username=") {
        let form = parse_form(rest);
        let field = |key: &str| form.get(key).map(String::as_str).unwrap_or("");
        return Command::LOGIN(LoginRequest::new(
            field("username"),
            field("password"),
            field("role"),
        ));
    }

    let (username, tail) = arg.split_once(char::is_whitespace).unwrap_or((arg, ""));
    let tail = tail.trim();
    let (password, role) = match tail.rsplit_once(char::is_whitespace) {
        Some((password, role)) => (password.trim_end(), role),
        None => (tail, ""),
    };
    Command::LOGIN(LoginRequest::new(username, password, role))
}
