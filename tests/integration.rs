use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;
use tokio::io::BufReader;

use uniportal::Portal;
use uniportal::auth::LoginRequest;
use uniportal::config::{PortalConfig, StorageBackend};
use uniportal::console::run_console;
use uniportal::dashboard;
use uniportal::error::{AuthError, PortalError, ValidationError};
use uniportal::registrar::RegisterRequest;
use uniportal::user::Role;

// Helper to build a file-backed config rooted in a temp dir
fn file_config(dir: &TempDir) -> PortalConfig {
    let mut config = PortalConfig::default();
    config.storage.backend = StorageBackend::File;
    config.storage.data_dir = dir.path().join("data").to_string_lossy().into_owned();
    config
}

fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn registration(username: &str, employee_id: &str, role: &str, password: &str) -> RegisterRequest {
    RegisterRequest::from_form(&form(&[
        ("fullName", "Katherine Johnson"),
        ("email", "kjohnson@university.edu"),
        ("username", username),
        ("password", password),
        ("confirmPassword", password),
        ("role", role),
        ("department", "Physics"),
        ("employeeId", employee_id),
    ]))
    .unwrap()
}

// Run a scripted console session and return everything it wrote
async fn console(portal: &mut Portal, script: &str) -> String {
    let reader = BufReader::new(script.as_bytes());
    let mut out: Vec<u8> = Vec::new();
    run_console(portal, reader, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_seeded_logins() {
    let dir = TempDir::new().unwrap();
    let mut portal = Portal::open(file_config(&dir)).unwrap();

    let user = portal
        .login(&LoginRequest::new("faculty1", "faculty123", "faculty"))
        .unwrap();
    assert_eq!(user.role, Role::Faculty);

    let err = portal
        .login(&LoginRequest::new("faculty1", "wrongpass", "faculty"))
        .unwrap_err();
    assert!(matches!(err, PortalError::Auth(AuthError::WrongPassword(_))));

    let err = portal
        .login(&LoginRequest::new("faculty1", "faculty123", "dean"))
        .unwrap_err();
    assert!(matches!(err, PortalError::Auth(AuthError::RoleMismatch { .. })));
    let msg = err.to_string();
    assert!(msg.contains("faculty1") && msg.contains("dean"));
}

#[test]
fn test_registration_persists_across_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut portal = Portal::open(file_config(&dir)).unwrap();
        let record = portal
            .register(registration("kjohnson", "F1962", "faculty", "longenough1"))
            .unwrap();
        assert_eq!(record.department.as_deref(), Some("Physics"));
    }

    let users_file = dir.path().join("data").join("universityUsers.json");
    let blob = fs::read_to_string(&users_file).unwrap();
    assert!(blob.contains("\"kjohnson\""));
    assert!(blob.contains("\"faculty1\""));

    let mut portal = Portal::open(file_config(&dir)).unwrap();
    assert_eq!(portal.directory().len(), 4);
    let user = portal
        .login(&LoginRequest::new("kjohnson", "longenough1", "faculty"))
        .unwrap();
    assert_eq!(user.name, "Katherine Johnson");
}

#[test]
fn test_dean_registration_drops_department() {
    let dir = TempDir::new().unwrap();
    let mut portal = Portal::open(file_config(&dir)).unwrap();

    let record = portal
        .register(registration("newdean", "D1962", "dean", "longenough1"))
        .unwrap();
    assert_eq!(record.department, None);
}

#[test]
fn test_duplicates_rejected() {
    let dir = TempDir::new().unwrap();
    let mut portal = Portal::open(file_config(&dir)).unwrap();

    portal
        .register(registration("dup", "F5000", "faculty", "longenough1"))
        .unwrap();

    let err = portal
        .register(registration("dup", "F5001", "faculty", "longenough1"))
        .unwrap_err();
    assert!(matches!(
        err,
        PortalError::Validation(ValidationError::DuplicateUsername(_))
    ));

    let err = portal
        .register(registration("other", "F5000", "faculty", "longenough1"))
        .unwrap_err();
    assert!(matches!(
        err,
        PortalError::Validation(ValidationError::DuplicateEmployeeId(_))
    ));
}

#[test]
fn test_password_length_rule() {
    let dir = TempDir::new().unwrap();
    let mut portal = Portal::open(file_config(&dir)).unwrap();

    let err = portal
        .register(registration("shorty", "F6000", "faculty", "short1"))
        .unwrap_err();
    assert!(matches!(
        err,
        PortalError::Validation(ValidationError::WeakPassword { min_length: 8 })
    ));

    portal
        .register(registration("longer", "F6001", "faculty", "longenough1"))
        .unwrap();
}

#[test]
fn test_dean_dashboard_descriptor() {
    let d = dashboard::resolve("dean").unwrap();
    assert_eq!(d.title, "Dean Dashboard");
    assert_eq!(d.features.len(), 6);
}

#[test]
fn test_session_survives_reopen_until_logout() {
    let dir = TempDir::new().unwrap();

    {
        let mut portal = Portal::open(file_config(&dir)).unwrap();
        portal
            .login(&LoginRequest::new("dean1", "dean123", "dean"))
            .unwrap();
    }

    let mut portal = Portal::open(file_config(&dir)).unwrap();
    assert_eq!(portal.session().username(), Some("dean1"));
    portal.logout().unwrap();

    let portal = Portal::open(file_config(&dir)).unwrap();
    assert!(portal.current_user().is_none());
}

#[test]
fn test_corrupt_directory_fails_open() {
    let dir = TempDir::new().unwrap();
    let config = file_config(&dir);
    fs::create_dir_all(config.storage.data_dir_path()).unwrap();
    fs::write(
        config.storage.data_dir_path().join("universityUsers.json"),
        "{ definitely not json",
    )
    .unwrap();

    assert!(matches!(Portal::open(config), Err(PortalError::Store(_))));
}

#[tokio::test]
async fn test_console_session() {
    let mut config = PortalConfig::default();
    config.storage.backend = StorageBackend::Memory;
    let mut portal = Portal::open(config).unwrap();

    let out = console(
        &mut portal,
        "HELP\n\
         LOGIN faculty1 faculty123 dean\n\
         LOGIN faculty1 faculty123 faculty\n\
         FEATURE Submit Grades\n\
         LOGOUT\n\
         QUIT\n\
         WHOAMI\n",
    )
    .await;

    assert!(out.starts_with("220 University portal ready"));
    assert!(out.contains("214-Commands:\n"));
    assert!(out.contains("430 User faculty1 is not registered as dean\n"));
    assert!(out.contains("230-Faculty Dashboard [#3498db]\n"));
    assert!(out.contains("200 Accessing: Submit Grades\n"));
    assert!(out.contains("200 Logged out faculty1\n"));
    assert!(out.ends_with("221 Goodbye\n"));
    assert!(!out.contains("anonymous"));
}

#[tokio::test]
async fn test_console_resumes_session_and_stops_at_eof() {
    let dir = TempDir::new().unwrap();
    {
        let mut portal = Portal::open(file_config(&dir)).unwrap();
        portal
            .login(&LoginRequest::new("depthead1", "depthead123", "department_head"))
            .unwrap();
    }

    let mut portal = Portal::open(file_config(&dir)).unwrap();
    let out = console(&mut portal, "WHOAMI\n\nDASHBOARD\n").await;

    assert!(out.contains("200 Resumed session for depthead1 (department_head)\n"));
    assert!(out.contains("200 depthead1 (department_head)\n"));
    assert!(out.contains("200-Role: DEPARTMENT HEAD\n"));
}

#[tokio::test]
async fn test_console_rejects_long_lines() {
    let mut config = PortalConfig::default();
    config.storage.backend = StorageBackend::Memory;
    config.console.max_command_length = 16;
    let mut portal = Portal::open(config).unwrap();

    let out = console(&mut portal, "LOGIN faculty1 faculty123 faculty\nWHOAMI\n").await;
    assert!(out.contains("500 Command too long\n"));
    assert!(out.contains("200 anonymous\n"));
}

#[tokio::test]
async fn test_console_survives_invalid_utf8() {
    let mut config = PortalConfig::default();
    config.storage.backend = StorageBackend::Memory;
    let mut portal = Portal::open(config).unwrap();

    let script: &[u8] = b"WHOAMI\n\xff\xfe\nLOGIN faculty1 faculty123 faculty\n";
    let mut out: Vec<u8> = Vec::new();
    run_console(&mut portal, BufReader::new(script), &mut out)
        .await
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("200 anonymous\n"));
    assert!(out.contains("400 Input is not valid UTF-8\n"));
    assert!(out.contains("230-Faculty Dashboard [#3498db]\n"));
    assert_eq!(portal.current_user().map(|u| u.username.as_str()), Some("faculty1"));
}

#[tokio::test]
async fn test_console_login_with_spaced_password() {
    let mut config = PortalConfig::default();
    config.storage.backend = StorageBackend::Memory;
    let mut portal = Portal::open(config).unwrap();

    let out = console(
        &mut portal,
        "REGISTER fullName=Grace Hopper;email=hopper@navy.mil;username=spacey;\
         password=my secret pw;confirmPassword=my secret pw;role=dean;employeeId=D1906\n\
         LOGIN spacey my secret pw dean\n",
    )
    .await;

    assert!(out.contains("201 Registration successful!"));
    assert!(out.contains("230-Dean Dashboard [#9b59b6]\n"));
    assert!(!out.contains("500 Unknown command"));
}
