use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use class_builder::api::router;
use class_builder::config::AppConfig;
use class_builder::server::build_router;
use class_builder::state::AppState;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

fn app() -> Router {
    router(AppState::in_memory())
}

#[tokio::test]
async fn test_course_crud_over_http() {
    let app = app();

    let (status, created) = send(
        &app,
        "POST",
        "/api/courses",
        Some(json!({
            "name": "Algebra I",
            "description": "Intro to algebra",
            "startDate": "2024-01-08",
            "endDate": "2024-05-10"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created["createdAt"], created["updatedAt"]);
    assert_eq!(created["startDate"], "2024-01-08T00:00:00Z");

    let (status, fetched) = send(&app, "GET", &format!("/api/courses/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/courses/{}", id),
        Some(json!({
            "id": "ignored",
            "createdAt": "1999-01-01T00:00:00Z",
            "name": "Algebra I Honors",
            "startDate": "2024-01-08",
            "endDate": "2024-05-10"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);
    assert_eq!(updated["name"], "Algebra I Honors");
    // description was not resent, so it reverts to empty
    assert_eq!(updated["description"], "");

    let (status, listed) = send(&app, "GET", "/api/courses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([updated]));

    let (status, body) = send(&app, "DELETE", &format!("/api/courses/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", &format!("/api/courses/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "404 Not Found");

    let (_, listed) = send(&app, "GET", "/api/courses", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let app = app();

    let (status, _) = send(&app, "GET", "/api/courses/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/api/courses/nope", Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/courses/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&app, "GET", "/api/courses", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_malformed_bodies_are_bad_requests() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/courses", Some(json!({ "name": 42 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "400 Bad Request");

    let (status, _) = send(
        &app,
        "POST",
        "/api/courses",
        Some(json!({ "name": "Bad dates", "startDate": "someday" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, created) = send(&app, "POST", "/api/courses", Some(json!({ "name": "Fine" }))).await;
    let uri = format!("/api/courses/{}", created["id"].as_str().unwrap());
    let (status, _) = send(&app, "PUT", &uri, Some(json!({ "duration": "long", "name": [] }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched["name"], "Fine");
}

#[tokio::test]
async fn test_update_unknown_id_with_malformed_body_is_not_found() {
    let app = app();

    let status = send_raw(&app, "PUT", "/api/courses/nope", "{not json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, created) = send(&app, "POST", "/api/courses", Some(json!({ "name": "Fine" }))).await;
    let uri = format!("/api/courses/{}", created["id"].as_str().unwrap());
    let status = send_raw(&app, "PUT", &uri, "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_null_dates_decode_to_zero_value() {
    let app = app();

    let (status, created) = send(
        &app,
        "POST",
        "/api/courses",
        Some(json!({ "name": "x", "startDate": null, "endDate": "2024-05-10" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["startDate"], "1970-01-01T00:00:00Z");
    assert_eq!(created["endDate"], "2024-05-10T00:00:00Z");
}

#[tokio::test]
async fn test_nested_payloads_are_echoed() {
    let app = app();
    let zoom = json!({
        "meetingId": "123456",
        "joinUrl": "https://zoom.example/j/123456",
        "startTime": "2024-01-08T15:00:00Z",
        "duration": 60,
        "topic": "Week 1",
        "settings": {
            "hostVideo": true,
            "participantVideo": true,
            "joinBeforeHost": false,
            "muteUponEntry": true,
            "waitingRoom": true
        }
    });
    let lms = json!({
        "lmsId": "canvas-9",
        "courseCode": "MATH101",
        "section": "01",
        "term": "2024SP",
        "instructorId": "u-77"
    });

    let (status, created) = send(
        &app,
        "POST",
        "/api/courses",
        Some(json!({
            "name": "Geometry",
            "description": "",
            "startDate": "2024-01-08T00:00:00Z",
            "endDate": "2024-05-10T00:00:00Z",
            "zoomMeeting": zoom,
            "lmsInfo": lms
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["zoomMeeting"], zoom);
    assert_eq!(created["lmsInfo"], lms);
}

#[tokio::test]
async fn test_health_reports_course_count() {
    let app = app();
    send(&app, "POST", "/api/courses", Some(json!({ "name": "One" }))).await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "courses": 1 }));
}

#[tokio::test]
async fn test_full_router_without_static_dir() {
    let config = AppConfig {
        static_dir: None,
        ..AppConfig::default()
    };
    let app = build_router(&config, AppState::in_memory());

    let (status, listed) = send(&app, "GET", "/api/courses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));

    let (status, _) = send(&app, "GET", "/index.html", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
