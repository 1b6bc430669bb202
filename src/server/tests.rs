use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt; // for oneshot()

use super::*;
use crate::batch::BatchSettings;
use crate::test_support::MemoryKillboard;

const REPORT: &str = "http://kb.example/?a=kill_related&kll_id=9";

fn state(board: &Arc<MemoryKillboard>, settings: BatchSettings) -> AppState<MemoryKillboard> {
    AppState {
        killboard: Arc::clone(board),
        settings,
        default_password: Some("shared".to_string()),
    }
}

fn form_post(fields: &[(&str, &str)]) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_get_form() {
    let board = Arc::new(MemoryKillboard::new());
    let app = create_router(state(&board, BatchSettings::default()));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<form method="post" action="/">"#));
    assert!(board.posts().is_empty());
}

#[tokio::test]
async fn test_health() {
    let board = Arc::new(MemoryKillboard::new());
    let app = create_router(state(&board, BatchSettings::default()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_post_runs_batch_and_shows_success() {
    let board = Arc::new(MemoryKillboard::new());
    let app = create_router(state(&board, BatchSettings::default()));

    let response = app
        .oneshot(form_post(&[
            ("content", "http://kb.example/km/1\nPilotA"),
            ("password", "pw"),
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<p class="message">success</p>"#));
    assert_eq!(
        board.posts(),
        vec![(
            "http://kb.example/km/1".to_string(),
            "PilotA".to_string(),
            "pw".to_string()
        )]
    );
}

#[tokio::test]
async fn test_post_empty_password_uses_default() {
    let board = Arc::new(MemoryKillboard::new());
    let app = create_router(state(&board, BatchSettings::default()));

    app.oneshot(form_post(&[
        ("content", "http://kb.example/km/1\nPilotA"),
        ("password", ""),
    ]))
    .await
    .unwrap();

    assert_eq!(board.posts()[0].2, "shared");
}

#[tokio::test]
async fn test_post_shows_failures_and_keeps_flags() {
    let board = Arc::new(
        MemoryKillboard::new()
            .with_page(
                "http://kb.example/km/1",
                r#"<div id="kl-detail-left"><table><tr><td>PilotA</td></tr></table></div>"#,
            )
            .with_page(
                "http://kb.example/km/2",
                r#"<div id="kl-detail-left"><table></table></div>"#,
            )
            .with_post_response("http://kb.example/km/2", "<b>Error: wrong password</b>"),
    );
    let app = create_router(state(&board, BatchSettings::default()));

    let response = app
        .oneshot(form_post(&[
            ("content", "http://kb.example/km/1\nhttp://kb.example/km/2\nPilotA"),
            ("password", "bad"),
            ("check", "1"),
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(
        "PilotA already present on http://kb.example/km/1<br>wrong password when adding PilotA to KM http://kb.example/km/2"
    ));
    assert!(html.contains(r#"name="check" value="1" checked"#));
    assert!(!html.contains(r#"name="pods" value="1" checked"#));
}

#[tokio::test]
async fn test_post_timeout_prefills_remaining_work() {
    let board = Arc::new(
        MemoryKillboard::new()
            .with_post_hook(|_, _| std::thread::sleep(Duration::from_millis(20))),
    );
    let settings = BatchSettings {
        max_run_time: Duration::from_millis(5),
        ..Default::default()
    };
    let app = create_router(state(&board, settings));

    let response = app
        .oneshot(form_post(&[
            ("content", "http://kb.example/km/1\nhttp://kb.example/km/2\nPilotA"),
            ("password", "pw"),
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("success<br>Ran out of time, please resubmit"));
    assert!(html.contains(">http://kb.example/km/2\nPilotA</textarea>"));
    assert_eq!(board.posted_records(), vec!["http://kb.example/km/1"]);
}

#[tokio::test]
async fn test_post_batch_error_is_bad_gateway() {
    let board = Arc::new(MemoryKillboard::new().with_failing_page(REPORT));
    let app = create_router(state(&board, BatchSettings::default()));
    let content = format!("{}\nPilotA", REPORT);

    let response = app
        .oneshot(form_post(&[
            ("content", content.as_str()),
            ("password", "pw"),
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains("Error: failed to fetch"));
    // The submitted text is kept so it can be sent again
    assert!(html.contains("kll_id=9\nPilotA</textarea>"));
    assert!(board.posts().is_empty());
}
