//! End-to-end homepage tests against a canned HTTP backend.
//!
//! Each test starts a one-shot server on a local port, mounts the homepage
//! against it through `HttpProjectSource`, and checks the rendered document.

use std::net::SocketAddr;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use ssteel_site::api::HttpProjectSource;
use ssteel_site::home::{self, HomeState};
use ssteel_site::render_home_page;
use ssteel_site::theme::Theme;

const PLACEHOLDER_TITLES: [&str; 4] = [
    "Office Complex",
    "Industrial Plant",
    "Bridge Project",
    "Residential Complex",
];

/// Serve exactly one response, report the request line.
async fn serve_once(status: &'static str, body: String) -> (SocketAddr, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let request = String::from_utf8_lossy(&request);
        let _ = tx.send(request.lines().next().unwrap_or_default().to_string());

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
    });

    (addr, rx)
}

fn projects_json(n: usize) -> String {
    let projects: Vec<_> = (1..=n)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Project {i}"),
                "category": "commercial",
                "main_image": format!("/uploads/project-{i}.jpg"),
                "status": "completed",
            })
        })
        .collect();
    serde_json::Value::Array(projects).to_string()
}

async fn settle(api_base: &str) -> HomeState {
    settle_within(api_base, Duration::from_secs(5)).await
}

async fn settle_within(api_base: &str, timeout: Duration) -> HomeState {
    let source = HttpProjectSource::new(api_base, Some(timeout)).unwrap();
    let mut page = home::mount(source);
    let state = page.settled().await.unwrap();
    page.unmount().await;
    state
}

fn assert_placeholders(html: &str) {
    let positions: Vec<_> = PLACEHOLDER_TITLES
        .iter()
        .map(|title| html.find(title).unwrap_or_else(|| panic!("missing {title}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(html.matches("class=\"project-card").count(), 4);
}

#[tokio::test]
async fn nine_projects_render_first_eight() {
    let (addr, request) = serve_once("200 OK", projects_json(9)).await;

    let state = settle(&format!("http://{addr}/")).await;
    let html = render_home_page(&state, &Theme::steel());

    let request_line = request.await.unwrap();
    assert_eq!(request_line, "GET /api/projects?featured=true HTTP/1.1");

    assert_eq!(html.matches("class=\"project-card").count(), 8);
    for i in 1..=8 {
        assert!(html.contains(&format!("/uploads/project-{i}.jpg")));
    }
    assert!(!html.contains("Project 9"));
    assert!(!html.contains("class=\"spinner\""));
}

#[tokio::test]
async fn server_error_shows_placeholders() {
    let (addr, _request) = serve_once("500 Internal Server Error", json!({"error": "boom"}).to_string()).await;

    let state = settle(&format!("http://{addr}")).await;
    assert_placeholders(&render_home_page(&state, &Theme::steel()));
}

#[tokio::test]
async fn malformed_body_shows_placeholders() {
    let (addr, _request) = serve_once("200 OK", "<html>not json</html>".to_string()).await;

    let state = settle(&format!("http://{addr}")).await;
    assert_placeholders(&render_home_page(&state, &Theme::steel()));
}

#[tokio::test]
async fn refused_connection_shows_placeholders() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = settle(&format!("http://{addr}")).await;
    assert_placeholders(&render_home_page(&state, &Theme::steel()));
}

#[tokio::test]
async fn empty_list_shows_empty_panel() {
    let (addr, _request) = serve_once("200 OK", "[]".to_string()).await;

    let state = settle(&format!("http://{addr}")).await;
    assert_eq!(state, HomeState::Empty);

    let html = render_home_page(&state, &Theme::steel());
    assert!(html.contains("No projects available"));
    assert!(!html.contains("Office Complex"));
}

#[tokio::test]
async fn imageless_project_renders_title_tile() {
    let body = json!([{"id": "warehouse-3", "title": "Warehouse Three", "category": "industrial"}]);
    let (addr, _request) = serve_once("200 OK", body.to_string()).await;

    let state = settle(&format!("http://{addr}")).await;
    let html = render_home_page(&state, &Theme::steel());

    assert!(!html.contains("<img"));
    assert!(html.contains("Warehouse Three"));
    assert!(html.contains("data-project-id=\"warehouse-3\""));
}

#[tokio::test]
async fn null_category_still_renders_real_projects() {
    let body = json!([
        {"id": 1, "title": "Hangar", "category": null, "main_image": null, "image": "/uploads/hangar.jpg"},
        {"id": 2, "title": "Depot", "category": "industrial"}
    ]);
    let (addr, _request) = serve_once("200 OK", body.to_string()).await;

    let state = settle(&format!("http://{addr}")).await;
    let html = render_home_page(&state, &Theme::steel());

    assert_eq!(html.matches("class=\"project-card").count(), 2);
    assert!(html.contains("/uploads/hangar.jpg"));
    assert!(!html.contains("Office Complex"));
}

#[tokio::test]
async fn silent_server_times_out_to_placeholders() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (release, hold) = oneshot::channel::<()>();

    // Accept and keep the connection open without ever answering.
    tokio::spawn(async move {
        let (_stream, _) = listener.accept().await.unwrap();
        let _ = hold.await;
    });

    let state = settle_within(&format!("http://{addr}"), Duration::from_millis(50)).await;
    let _ = release.send(());

    assert_placeholders(&render_home_page(&state, &Theme::steel()));
}
