mod common;

use std::collections::HashMap;

use image::{GenericImageView, ImageFormat};
use lambda_http::{Body, Request, RequestExt};
use media_processor::lambda::handle_event;
use serde_json::Value;

use common::{gradient_png, state, MemoryStore};

fn event(pairs: &[(&str, &str)]) -> Request {
    let params: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Request::new(Body::Empty).with_query_string_parameters(params)
}

fn text_json(body: &Body) -> Value {
    match body {
        Body::Text(text) => serde_json::from_str(text).unwrap(),
        other => panic!("expected text body, got {other:?}"),
    }
}

#[tokio::test]
async fn test_success_returns_binary_body() {
    let app = state(MemoryStore::default().with("icon.png", gradient_png(512, 512)));
    let response = handle_event(
        &app,
        event(&[
            ("image", "icon.png"),
            ("w", "100"),
            ("h", "100"),
            ("format", "webp"),
            ("q", "90"),
        ]),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "image/webp");

    let bytes = match response.body() {
        Body::Binary(bytes) => bytes.clone(),
        other => panic!("expected binary body, got {other:?}"),
    };
    let img = image::load_from_memory_with_format(&bytes, ImageFormat::WebP).unwrap();
    assert_eq!(img.dimensions(), (100, 100));
}

#[tokio::test]
async fn test_not_found() {
    let app = state(MemoryStore::default());
    let response = handle_event(&app, event(&[("image", "missing.png")]))
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    let body = text_json(response.body());
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Image not found.");
}

#[tokio::test]
async fn test_no_image_parameter() {
    let app = state(MemoryStore::default());
    let response = handle_event(&app, event(&[("w", "10")])).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(text_json(response.body())["message"], "No Image Was Provided.");
}

#[tokio::test]
async fn test_no_query() {
    let app = state(MemoryStore::default());
    let response = handle_event(&app, event(&[])).await.unwrap();

    assert_eq!(response.status(), 500);
    assert_eq!(text_json(response.body())["message"], "No query provided.");
}
