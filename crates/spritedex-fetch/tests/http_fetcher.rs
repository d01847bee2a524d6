//! Integration tests for `HttpFetcher` against a local axum server.

use std::net::SocketAddr;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use spritedex_core::{AssetFetcherPort, SpriteError};
use spritedex_fetch::{FetcherConfig, HttpFetcher};
use url::Url;

const SPRITE_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-sprite-body";

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/sprites/larvitar.png", get(|| async { SPRITE_BYTES }))
        .route(
            "/sprites/missing.png",
            get(|| async { (StatusCode::NOT_FOUND, "no such sprite") }),
        )
        .route("/sprites/empty.png", get(|| async { StatusCode::NO_CONTENT }))
        .route(
            "/sprites/broken.png",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn url(addr: SocketAddr, path: &str) -> Url {
    Url::parse(&format!("http://{addr}{path}")).unwrap()
}

#[tokio::test]
async fn fetch_returns_body_on_200() {
    let addr = spawn_server().await;
    let fetcher = HttpFetcher::new(FetcherConfig::new()).unwrap();

    let bytes = fetcher
        .fetch(&url(addr, "/sprites/larvitar.png"))
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), SPRITE_BYTES);
}

#[tokio::test]
async fn fetch_rejects_404_with_status() {
    let addr = spawn_server().await;
    let fetcher = HttpFetcher::new(FetcherConfig::new()).unwrap();

    let err = fetcher
        .fetch(&url(addr, "/sprites/missing.png"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SpriteError::DownloadFailed {
            status_code: Some(404),
            ..
        }
    ));
    assert!(!err.is_recoverable());
}

#[tokio::test]
async fn fetch_rejects_non_200_success_codes() {
    let addr = spawn_server().await;
    let fetcher = HttpFetcher::new(FetcherConfig::new()).unwrap();

    let err = fetcher
        .fetch(&url(addr, "/sprites/empty.png"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SpriteError::DownloadFailed {
            status_code: Some(204),
            ..
        }
    ));
}

#[tokio::test]
async fn fetch_reports_server_errors_as_recoverable() {
    let addr = spawn_server().await;
    let fetcher = HttpFetcher::new(FetcherConfig::new()).unwrap();

    let err = fetcher
        .fetch(&url(addr, "/sprites/broken.png"))
        .await
        .unwrap_err();
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn fetch_reports_transport_fault_without_status() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = HttpFetcher::new(FetcherConfig::new()).unwrap();
    let err = fetcher
        .fetch(&url(addr, "/sprites/larvitar.png"))
        .await
        .unwrap_err();
    assert!(err.is_transport());
}
