//! HTTP tests driving the router without a socket

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use circuit_plotter::{server, Plotter, PngConfig, RenderConfig};

fn app() -> Router {
    let plotter = Plotter::new(RenderConfig::new().with_png(PngConfig::new().with_system_fonts(false)));
    server::router(Arc::new(plotter))
}

fn form_post(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/plot")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, String, Vec<u8>) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, content_type, body)
}

#[tokio::test]
async fn test_index_serves_form() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, content_type, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains(r#"action="/plot""#));
    assert!(html.contains(r#"name="resistances""#));
    assert!(html.contains(r#"name="circuit_type""#));
}

#[tokio::test]
async fn test_plot_returns_png() {
    let (status, content_type, body) =
        send(form_post("resistances=10%2C20%2C30&circuit_type=series")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "image/png");
    assert_eq!(&body[..4], b"\x89PNG");
}

#[tokio::test]
async fn test_plot_invalid_number_is_plain_text() {
    let (status, content_type, body) =
        send(form_post("resistances=abc%2C10&circuit_type=series")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("invalid numeric value 'abc'"));
}

#[tokio::test]
async fn test_plot_empty_list() {
    let (status, _, body) = send(form_post("resistances=&circuit_type=parallel")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "Please enter at least one resistance value."
    );
}

#[tokio::test]
async fn test_plot_invalid_topology() {
    let (status, content_type, body) =
        send(form_post("resistances=10&circuit_type=short-circuit")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    assert!(String::from_utf8(body)
        .unwrap()
        .contains("Invalid circuit type 'short-circuit'"));
}

#[tokio::test]
async fn test_plot_all_zero_parallel_does_not_crash() {
    let (status, _, body) = send(form_post("resistances=0%2C0&circuit_type=parallel")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("every resistance is zero"));
}

#[tokio::test]
async fn test_plot_too_many_resistors_is_plain_text() {
    let body = format!(
        "resistances={}&circuit_type=series",
        vec!["1"; 101].join("%2C")
    );
    let request = Request::builder()
        .method("POST")
        .uri("/plot")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    let (status, content_type, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "Too many resistance values: 101 given, at most 100 can be drawn."
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_plots() {
    let app = app();
    let requests = (0..4).map(|_| {
        let app = app.clone();
        async move {
            app.oneshot(form_post("resistances=10%2C20&circuit_type=parallel"))
                .await
                .unwrap()
                .status()
        }
    });
    for status in spawn_all(requests).await {
        assert_eq!(status, StatusCode::OK);
    }
}

async fn spawn_all<F: std::future::Future<Output = StatusCode> + Send + 'static>(
    futures: impl Iterator<Item = F>,
) -> Vec<StatusCode> {
    let handles: Vec<_> = futures.map(tokio::spawn).collect();
    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }
    statuses
}

#[tokio::test]
async fn test_plot_missing_fields() {
    let (status, _, body) = send(form_post("")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "Please enter at least one resistance value."
    );
}

#[tokio::test]
async fn test_get_plot_not_allowed() {
    let request = Request::builder().uri("/plot").body(Body::empty()).unwrap();
    let (status, _, _) = send(request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
