mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn follow_request_accept_and_unfollow_cycle() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    let pair = json!({ "follower_id": alice, "followed_id": bob });

    let (status, body) = app.call("POST", "/api/follow", Some(pair.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Follow request sent");

    let (status, body) = app.call("POST", "/api/follow", Some(pair.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "follows.already_related");

    let (_, body) = app
        .call("GET", &format!("/api/follow_status/{alice}/{bob}"), None)
        .await;
    assert_eq!(body, json!({ "status": "pending" }));

    let (_, body) = app
        .call("GET", &format!("/api/pending_follow_requests/{bob}"), None)
        .await;
    assert_eq!(body, json!([{ "follower_id": alice }]));

    let (status, _) = app
        .call("POST", &format!("/api/accept_follow/{alice}/{bob}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app
        .call("GET", &format!("/api/is_following/{alice}/{bob}"), None)
        .await;
    assert_eq!(body, json!({ "is_following": true }));

    let (_, body) = app.call("GET", &format!("/api/followers/{bob}"), None).await;
    assert_eq!(body, json!([{ "username": "alice" }]));
    let (_, body) = app.call("GET", &format!("/api/following/{alice}"), None).await;
    assert_eq!(body, json!([{ "username": "bob" }]));

    let (status, _) = app.call("POST", "/api/unfollow", Some(pair.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app
        .call("GET", &format!("/api/follow_status/{alice}/{bob}"), None)
        .await;
    assert_eq!(body, json!({ "status": "not_following" }));

    let (status, _) = app.call("POST", "/api/follow", Some(pair)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn follow_errors() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let (status, body) = app
        .call("POST", &format!("/api/accept_follow/{alice}/{bob}"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "follows.no_pending_request");

    let (status, body) = app
        .call(
            "POST",
            "/api/follow",
            Some(json!({ "follower_id": alice, "followed_id": alice })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "follows.self_follow");

    let (status, body) = app
        .call(
            "POST",
            "/api/follow",
            Some(json!({ "follower_id": alice, "followed_id": "nobody" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "users.not_found");

    let (status, body) = app
        .call("POST", "/api/follow", Some(json!({ "follower_id": alice })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "missing_required_fields");

    let (status, _) = app
        .call(
            "POST",
            "/api/unfollow",
            Some(json!({ "follower_id": bob, "followed_id": alice })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}
