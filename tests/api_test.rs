use axum::Router;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::time::Duration;
use tower::util::ServiceExt;
use vibecheck_api::build_app;
use vibecheck_api::content::{FORTUNES, JOKES};
use vibecheck_api::state::AppState;

fn app(cooldown_ms: u64) -> Router {
    build_app(AppState::new(cooldown_ms, true))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn smash_from(client: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/smash")
        .header("x-forwarded-for", client)
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn fortune_and_joke_come_from_their_pools() {
    let app = app(1000);

    let (status, body) = send(&app, get("/api/fortune")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(FORTUNES.contains(&body["fortune"].as_str().unwrap()));

    let (status, body) = send(&app, get("/api/joke")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(JOKES.contains(&body["joke"].as_str().unwrap()));
}

#[tokio::test]
async fn vibe_matches_mood_case_insensitively() {
    let (status, body) = send(&app(1000), get("/api/vibe?mood=Tired")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"mood": "tired", "emoji": "🥱", "message": "Hydrate. Stretch. Then commit."})
    );
}

#[tokio::test]
async fn unknown_or_missing_mood_is_still_ok() {
    let app = app(1000);

    let (status, body) = send(&app, get("/api/vibe")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"mood": "unknown", "emoji": "🤔", "message": "Try mood=happy, tired, or stressed."})
    );

    let (status, body) = send(&app, get("/api/vibe?mood=Bored")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mood"], "bored");
    assert_eq!(body["emoji"], "🤔");

    // duplicate keys fail to parse and count as no mood
    let (status, body) = send(&app, get("/api/vibe?mood=a&mood=b")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mood"], "unknown");
}

#[tokio::test]
async fn secret_requires_exact_code() {
    let app = app(1000);

    let (status, body) = send(&app, get("/api/secret?code=411L")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "🎉 Secret unlocked: +10 luck on your next merge!"})
    );

    for uri in ["/api/secret?code=411l", "/api/secret?code=", "/api/secret"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
        assert_eq!(body, json!({"message": "Nope 😄 Try code=411L"}));
    }
}

#[tokio::test]
async fn smash_within_cooldown_is_rejected_then_accepted() {
    let app = app(300);

    let (status, body) = send(&app, smash_from("A")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["smashes"], 1);
    assert_eq!(body["message"], "SMASH registered 💥");
    assert!(body["lastSmashAt"].as_str().unwrap().ends_with('Z'));

    let response = app.clone().oneshot(smash_from("A")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()[header::RETRY_AFTER], "1");
    let body: Value = serde_json::from_slice(
        &axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap(),
    )
    .unwrap();
    assert_eq!(body["smashes"], 1);
    assert_eq!(body["message"], "Too fast 💨 Wait a bit before smashing again.");
    let retry = body["retryAfterMs"].as_u64().unwrap();
    assert!(retry > 0 && retry <= 300);

    tokio::time::sleep(Duration::from_millis(350)).await;

    let (status, body) = send(&app, smash_from("A")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["smashes"], 2);
}

#[tokio::test]
async fn different_clients_do_not_share_a_cooldown() {
    let app = app(60_000);

    let (status, _) = send(&app, smash_from("A")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, smash_from("B, 10.0.0.1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["smashes"], 2);

    // same first forwarded entry, same bucket
    let (status, _) = send(&app, smash_from(" B ")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn peer_address_keys_clients_without_forwarded_header() {
    let app = app(60_000);

    let from = |addr: &str| {
        let mut request = post("/api/smash");
        request
            .extensions_mut()
            .insert(ConnectInfo(addr.parse::<SocketAddr>().unwrap()));
        request
    };

    let (status, _) = send(&app, from("10.0.0.1:4000")).await;
    assert_eq!(status, StatusCode::OK);
    // another port on the same host is the same client
    let (status, _) = send(&app, from("10.0.0.1:4001")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    let (status, body) = send(&app, from("10.0.0.2:4000")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["smashes"], 2);
}

#[tokio::test]
async fn untrusted_forwarded_header_cannot_dodge_cooldown() {
    let app = build_app(AppState::new(60_000, false));

    let (status, _) = send(&app, smash_from("A")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, smash_from("B")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn reset_zeroes_counter_and_cooldowns() {
    let app = app(60_000);
    send(&app, smash_from("A")).await;

    let (status, body) = send(&app, get("/api/smashes")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["smashes"], 1);
    assert!(body["lastSmashAt"].is_string());

    let (status, body) = send(&app, post("/api/smash/reset")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"smashes": 0, "message": "Smash counter reset ✅", "lastSmashAt": null})
    );

    let (_, body) = send(&app, get("/api/smashes")).await;
    assert_eq!(body, json!({"smashes": 0, "lastSmashAt": null}));

    // A was cooling down for a minute, reset lets it straight back in
    let (status, body) = send(&app, smash_from("A")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["smashes"], 1);
}

#[tokio::test]
async fn any_origin_is_allowed() {
    let request = Request::builder()
        .uri("/api/joke")
        .header(header::ORIGIN, "http://example.test")
        .body(Body::empty())
        .unwrap();

    let response = app(1000).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn health_and_metrics_are_exposed() {
    let app = app(1000);

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    send(&app, smash_from("metrics-client")).await;

    let response = app.clone().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(text.to_vec()).unwrap();
    assert!(text.contains("vibecheck_smashes_accepted_total"));
    assert!(text.contains("vibecheck_requests_total"));
}
