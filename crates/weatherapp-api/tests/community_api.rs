//! Location comments and the chat room over HTTP.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app, send, sign_up};

#[tokio::test]
async fn comments_are_public_to_read_but_need_identity_to_write() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/comments/location/Jakarta", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/comments",
        None,
        Some(json!({"location_name": "Jakarta", "content": "hot"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/comments/user", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn comment_lifecycle() {
    let app = app();
    let alice = sign_up(&app, "alice").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/comments",
        Some(&alice),
        Some(json!({"location_name": "Jakarta", "content": " hot and humid "})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["content"], "hot and humid");
    assert!(body["data"]["updated_at"].is_null());
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/comments/{}", id),
        Some(&alice),
        Some(json!({"content": "raining now"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["content"], "raining now");
    assert!(body["data"]["updated_at"].is_string());

    let (_, body) = send(&app, Method::GET, "/api/comments/location/Jakarta", None, None).await;
    assert_eq!(body["data"][0]["content"], "raining now");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/comments/{}", id), Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/comments/location/Jakarta/count", None, None).await;
    assert_eq!(body["data"]["count"], 0);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/comments/{}", id), Some(&alice), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn only_the_author_may_change_a_comment() {
    let app = app();
    let alice = sign_up(&app, "alice").await;
    let bob = sign_up(&app, "bob").await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/comments",
        Some(&alice),
        Some(json!({"location_name": "Bandung", "content": "cool breeze"})),
    )
    .await;
    let uri = format!("/api/comments/{}", body["data"]["id"].as_i64().unwrap());

    let (status, _) = send(&app, Method::PUT, &uri, Some(&bob), Some(json!({"content": "mine"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/comments/location/Bandung", None, None).await;
    assert_eq!(body["data"][0]["content"], "cool breeze");
}

#[tokio::test]
async fn comment_listing_pages_newest_first() {
    let app = app();
    let alice = sign_up(&app, "alice").await;

    for text in ["first", "second", "third"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/comments",
            Some(&alice),
            Some(json!({"location_name": "Medan", "content": text})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, Method::GET, "/api/comments/location/Medan?limit=2", None, None).await;
    let texts: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["third", "second"]);

    let (_, body) = send(&app, Method::GET, "/api/comments/location/Medan?limit=2&offset=2", None, None).await;
    assert_eq!(body["data"][0]["content"], "first");

    let (_, body) = send(&app, Method::GET, "/api/comments/user", Some(&alice), None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (_, body) = send(&app, Method::GET, "/api/comments/location/Medan/count", None, None).await;
    assert_eq!(body["data"]["count"], 3);
}

#[tokio::test]
async fn blank_comment_is_rejected() {
    let app = app();
    let alice = sign_up(&app, "alice").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/comments",
        Some(&alice),
        Some(json!({"location_name": "Jakarta", "content": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Comment must be between 1 and 1000 characters");
}

#[tokio::test]
async fn chat_requires_identity() {
    let app = app();
    for (method, uri) in [
        (Method::GET, "/api/chat/messages"),
        (Method::GET, "/api/chat/messages/count"),
        (Method::GET, "/api/chat/messages/user"),
        (Method::DELETE, "/api/chat/messages/1"),
    ] {
        let (status, _) = send(&app, method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn chat_room_conversation() {
    let app = app();
    let alice = sign_up(&app, "alice").await;
    let bob = sign_up(&app, "bob").await;

    for (who, text) in [(&alice, "anyone near Bogor?"), (&bob, "yes, raining"), (&alice, "thanks")] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/chat/messages",
            Some(who),
            Some(json!({"message": text})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["message"], text);
    }

    // the newest page, shown oldest first
    let (_, body) = send(&app, Method::GET, "/api/chat/messages?limit=2", Some(&bob), None).await;
    let texts: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["message"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["yes, raining", "thanks"]);

    let (_, body) = send(&app, Method::GET, "/api/chat/messages/user", Some(&bob), None).await;
    let bob_message = body["data"][0]["id"].as_i64().unwrap();
    assert_eq!(body["data"][0]["username"], "bob");

    let uri = format!("/api/chat/messages/{}", bob_message);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/chat/messages/count", Some(&alice), None).await;
    assert_eq!(body["data"]["count"], 2);
}
