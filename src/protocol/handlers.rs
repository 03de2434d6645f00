//! Command handlers for the portal console.
//!
//! Each handler runs one portal operation and turns its outcome, success
//! or error, into a reply. No error escapes a handler.

use crate::auth::LoginRequest;
use crate::dashboard::DashboardView;
use crate::error::PortalError;
use crate::error::handlers::{error_to_reply_code, handle_error};
use crate::portal::Portal;
use crate::protocol::responses::{self, format_multiline, format_response};
use crate::protocol::{Command, CommandResult, CommandStatus};
use crate::registrar::{PasswordStrength, RegisterRequest};
use log::info;
use std::collections::HashMap;

const HELP_LINES: &[&str] = &[
    "Commands:",
    "REGISTER fullName=..;email=..;username=..;password=..;confirmPassword=..;role=..;department=..;employeeId=..",
    "LOGIN <username> <password> <faculty|department_head|dean>",
    "LOGIN username=..;password=..;role=..",
    "DASHBOARD",
    "FEATURE <name>",
    "WHOAMI",
    "LOGOUT",
    "QUIT",
];

/// Dispatches a parsed command to its handler.
pub fn handle_command(portal: &mut Portal, command: &Command) -> CommandResult {
    match command {
        Command::QUIT => handle_cmd_quit(),
        Command::HELP => handle_cmd_help(),
        Command::REGISTER(form) => handle_cmd_register(portal, form),
        Command::LOGIN(request) => handle_cmd_login(portal, request),
        Command::LOGOUT => handle_cmd_logout(portal),
        Command::WHOAMI => handle_cmd_whoami(portal),
        Command::DASHBOARD => handle_cmd_dashboard(portal),
        Command::FEATURE(name) => handle_cmd_feature(portal, name),
        Command::UNKNOWN => handle_cmd_unknown(),
    }
}

/// Reply for a failed operation.
fn failure(err: PortalError) -> CommandResult {
    handle_error(&err);
    let message = err.to_string();
    CommandResult {
        message: Some(format_response(error_to_reply_code(&err), &message)),
        status: CommandStatus::Failure(message),
    }
}

fn success(message: String) -> CommandResult {
    CommandResult {
        status: CommandStatus::Success,
        message: Some(message),
    }
}

/// Handles the QUIT command: signals the console to stop.
fn handle_cmd_quit() -> CommandResult {
    CommandResult {
        status: CommandStatus::CloseConnection,
        message: Some(format_response(responses::GOODBYE, "Goodbye")),
    }
}

fn handle_cmd_help() -> CommandResult {
    success(format_multiline(responses::HELP, HELP_LINES))
}

/// Handles the REGISTER command: validates and stores a new user.
///
/// Registering does not log the new user in.
fn handle_cmd_register(portal: &mut Portal, form: &HashMap<String, String>) -> CommandResult {
    let request = match RegisterRequest::from_form(form) {
        Ok(request) => request,
        Err(e) => return failure(e.into()),
    };
    let strength = PasswordStrength::of(&request.password);

    match portal.register(request) {
        Ok(user) => {
            info!("Registration accepted for {}", user.username);
            success(format_response(
                responses::REGISTERED,
                &format!(
                    "Registration successful! Password strength: {}. Please log in as {}.",
                    strength, user.username
                ),
            ))
        }
        Err(e) => failure(e),
    }
}

/// Handles the LOGIN command: authenticates and shows the dashboard.
fn handle_cmd_login(portal: &mut Portal, request: &LoginRequest) -> CommandResult {
    match portal.login(request) {
        Ok(user) => success(format_multiline(
            responses::LOGIN_SUCCESS,
            &DashboardView::new(&user).lines(),
        )),
        Err(e) => failure(e),
    }
}

fn handle_cmd_logout(portal: &mut Portal) -> CommandResult {
    match portal.logout() {
        Ok(user) => success(format_response(
            responses::OK,
            &format!("Logged out {}", user.username),
        )),
        Err(e) => failure(e),
    }
}

fn handle_cmd_whoami(portal: &Portal) -> CommandResult {
    match portal.current_user() {
        Some(user) => success(format_response(
            responses::OK,
            &format!("{} ({})", user.username, user.role),
        )),
        None => success(format_response(responses::OK, "anonymous")),
    }
}

fn handle_cmd_dashboard(portal: &Portal) -> CommandResult {
    match portal.dashboard() {
        Ok(view) => success(format_multiline(responses::OK, &view.lines())),
        Err(e) => failure(e),
    }
}

fn handle_cmd_feature(portal: &Portal, name: &str) -> CommandResult {
    match portal.access_feature(name) {
        Ok(message) => success(format_response(responses::OK, &message)),
        Err(e) => failure(e),
    }
}

fn handle_cmd_unknown() -> CommandResult {
    CommandResult {
        status: CommandStatus::Failure("Unknown command".into()),
        message: Some(format_response(
            responses::INTERNAL_ERROR,
            "Unknown command (try HELP)",
        )),
    }
}
