//! HttpExecutor against the mock device

use std::fs;

use charger_console::config::DeviceSettings;
use charger_console::device::{
    CommandExecutor, CommandOutput, HttpExecutor, RemoteAction, RemoteError,
};
use tempfile::TempDir;

use super::mock_device::MockDevice;

fn executor() -> HttpExecutor {
    HttpExecutor::new(&DeviceSettings {
        request_timeout_secs: Some(10),
        ..DeviceSettings::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_login_posts_credentials_and_trims_token() {
    let device = MockDevice::start().await;
    device.route("POST", "/api/login", 200, "abc.def.ghi\n");

    let output = executor()
        .execute(device.addr(), RemoteAction::login("admin", "s3cret"))
        .await
        .unwrap();

    assert_eq!(output, CommandOutput::Text("abc.def.ghi".into()));

    let request = device.last_request();
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("accept"), Some("text/plain"));
    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["name"], "admin");
    assert_eq!(body["password"], "s3cret");
}

#[tokio::test]
async fn test_invalid_password_sentinel_is_plain_text() {
    let device = MockDevice::start().await;
    device.route("POST", "/api/login", 200, "Invalid password");

    let output = executor()
        .execute(device.addr(), RemoteAction::login("admin", "wrong"))
        .await
        .unwrap();

    assert_eq!(output.text(), "Invalid password");
}

#[tokio::test]
async fn test_probe_sends_bearer_token() {
    let device = MockDevice::start().await;
    device.route("GET", "/api/testingAuth", 200, "ok");

    executor()
        .execute(device.addr(), RemoteAction::testing_auth("tok-1"))
        .await
        .unwrap();

    assert_eq!(
        device.last_request().header("authorization"),
        Some("Bearer tok-1")
    );
}

#[tokio::test]
async fn test_firmware_upload_streams_file_bytes() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("update.raucb");
    let payload: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&image, &payload).unwrap();

    let device = MockDevice::start().await;
    device.route("POST", "/api/firmware", 200, "accepted");

    let output = executor()
        .execute(device.addr(), RemoteAction::upload_firmware("tok", &image))
        .await
        .unwrap();

    assert_eq!(output.text(), "accepted");
    let request = device.last_request();
    assert_eq!(
        request.header("content-type"),
        Some("application/octet-stream")
    );
    assert_eq!(request.body, payload);
}

#[tokio::test]
async fn test_log_download_is_written_to_destination() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("logs").join("Vslog_test.rar");
    let archive = vec![0x52u8; 64 * 1024];

    let device = MockDevice::start().await;
    device.route("GET", "/api/logging/files", 200, archive.clone());

    let output = executor()
        .execute(device.addr(), RemoteAction::download_logs("tok", &dest))
        .await
        .unwrap();

    assert_eq!(
        output,
        CommandOutput::Written {
            path: dest.clone(),
            bytes: archive.len() as u64,
        }
    );
    assert_eq!(fs::read(&dest).unwrap(), archive);
    assert_eq!(
        device.last_request().header("accept"),
        Some("application/octet-stream")
    );
}

#[tokio::test]
async fn test_server_error_is_reported_as_status() {
    let device = MockDevice::start().await;
    device.route("PUT", "/api/system/reboot", 503, "busy");

    let err = executor()
        .execute(device.addr(), RemoteAction::reboot("tok"))
        .await
        .unwrap_err();

    assert_eq!(err, RemoteError::Status(503));
}

#[tokio::test]
async fn test_client_error_body_is_passed_through() {
    let device = MockDevice::start().await;
    device.route("GET", "/api/firmware", 401, "unauthorized");

    let output = executor()
        .execute(device.addr(), RemoteAction::firmware_version())
        .await
        .unwrap();

    assert_eq!(output.text(), "unauthorized");
}

#[tokio::test]
async fn test_credentials_body_is_json_string() {
    let device = MockDevice::start().await;
    device.route("PUT", "/api/users/credentials", 200, "updated");

    executor()
        .execute(device.addr(), RemoteAction::set_credentials("tok", "n3w"))
        .await
        .unwrap();

    assert_eq!(device.last_request().body_text(), "\"n3w\"");
}
