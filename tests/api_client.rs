mod common;

use chrono::Local;
use pinloader::api::{ApiBase, ApiClient, MediaType};
use pinloader::controller::{UiController, UiState};
use pinloader::downloader::download_to_file;
use pinloader::utils::{ControllerError, PinloaderError};
use tempfile::tempdir;

fn client_for(server: &str) -> ApiClient {
    ApiClient::new(ApiBase::new(format!("{}/api", server))).expect("Failed to build client")
}

#[tokio::test]
async fn test_extract_posts_url_and_parses_result() {
    let (server, request) = common::serve_once(
        200,
        br#"{"title":"Sunset","thumbnail":"https://i.pinimg.com/t.jpg","media_type":"image","links":[{"url":"https://i.pinimg.com/o.jpg","ext":"jpg","quality":"Original"}]}"#,
    )
    .await;

    let result = client_for(&server)
        .extract("https://pin.it/abc")
        .await
        .expect("Extraction should succeed");

    assert_eq!(result.title, "Sunset");
    assert_eq!(result.media_type, MediaType::Image);
    assert_eq!(result.links.len(), 1);

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /api/extract HTTP/1.1"));
    assert!(request.contains(r#"{"url":"https://pin.it/abc"}"#));
}

#[tokio::test]
async fn test_server_detail_is_shown_in_error_panel() {
    let (server, _request) = common::serve_once(400, br#"{"detail":"bad url"}"#).await;
    let api = client_for(&server);

    let mut controller = UiController::new();
    let submission = controller.begin("https://pin.it/abc").unwrap();
    let result = api.extract(&submission.url).await;
    controller.settle(submission.generation, result, Local::now());

    assert_eq!(controller.state(), &UiState::Error("bad url".to_string()));
    let panels = controller.panels();
    assert!(panels.error && !panels.loading && !panels.result);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let server = common::closed_port_url().await;

    let err = client_for(&server).extract("https://pin.it/abc").await.unwrap_err();

    assert_eq!(err, ControllerError::NetworkUnreachable);
    assert_eq!(
        err.to_string(),
        "Cannot reach the server. Make sure the backend service is running."
    );
}

#[tokio::test]
async fn test_non_json_success_is_malformed() {
    let (server, _request) = common::serve_once(200, b"<html>maintenance</html>").await;

    let err = client_for(&server).extract("https://pin.it/abc").await.unwrap_err();

    assert_eq!(err, ControllerError::MalformedResponse);
}

#[tokio::test]
async fn test_download_writes_body_to_disk() {
    let (server, request) = common::serve_once(200, b"fake image bytes").await;
    let dir = tempdir().expect("Failed to create temp dir");
    let dest = dir.path().join("nested").join("Sunset.jpg");

    let href = format!("{}/api/download?url=x&filename=Sunset.jpg", server);
    let written = download_to_file(&reqwest::Client::new(), &href, &dest)
        .await
        .expect("Download should succeed");

    assert_eq!(written, 16);
    assert_eq!(std::fs::read(&dest).unwrap(), b"fake image bytes");
    assert!(request.await.unwrap().starts_with("GET /api/download?url=x"));
}

#[tokio::test]
async fn test_rejected_download_leaves_no_file() {
    let (server, _request) = common::serve_once(502, br#"{"detail":"Upstream refused"}"#).await;
    let dir = tempdir().expect("Failed to create temp dir");
    let dest = dir.path().join("Sunset.jpg");

    let href = format!("{}/api/download?url=x", server);
    let err = download_to_file(&reqwest::Client::new(), &href, &dest)
        .await
        .unwrap_err();

    assert!(matches!(err, PinloaderError::DownloadError(ref d) if d == "Upstream refused"));
    assert!(!dest.exists());
}

#[tokio::test]
async fn test_download_never_overwrites_existing_file() {
    let (server, _request) = common::serve_once(200, b"second copy").await;
    let dir = tempdir().expect("Failed to create temp dir");
    let dest = dir.path().join("Sunset.jpg");
    std::fs::write(&dest, b"first copy").unwrap();

    let href = format!("{}/api/download?url=x", server);
    let err = download_to_file(&reqwest::Client::new(), &href, &dest)
        .await
        .unwrap_err();

    assert!(matches!(err, PinloaderError::IoError(_)));
    assert_eq!(std::fs::read(&dest).unwrap(), b"first copy");
}
