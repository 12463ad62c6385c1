use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::RawQuery,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use reqwest::Method;
use serde_json::json;
use traktcli::error::TraktError;
use traktcli::trakt::{self, RequestParams, TraktClient, auth};
use traktcli::types::{Credentials, DeviceCodeGrant, HistoryEntry, PaginationParams, SearchEntry};

/// Binds a mock API on an ephemeral port and serves it in the background.
async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn test_credentials() -> Credentials {
    Credentials {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        access_token: "access-token".to_string(),
    }
}

fn test_client(addr: SocketAddr) -> TraktClient {
    TraktClient::with_endpoint(format!("http://{addr}"), test_credentials()).unwrap()
}

fn test_grant(expires_in: u64) -> DeviceCodeGrant {
    DeviceCodeGrant {
        device_code: "device-code".to_string(),
        user_code: "A1B2C3".to_string(),
        verification_url: "https://trakt.tv/activate".to_string(),
        expires_in,
        interval: 1,
    }
}

#[tokio::test]
async fn test_history_returns_items_and_pagination_headers() {
    let app = Router::new().route(
        "/users/{user}/history",
        get(|| async {
            (
                [
                    ("x-pagination-page", "1"),
                    ("x-pagination-limit", "10"),
                    ("x-pagination-page-count", "5"),
                    ("x-pagination-item-count", "42"),
                ],
                Json(json!([{
                    "id": 1982347,
                    "watched_at": "2023-03-01T21:14:03.000Z",
                    "action": "watch",
                    "type": "movie",
                    "movie": {
                        "title": "Inception",
                        "year": 2010,
                        "ids": { "trakt": 16662, "slug": "inception-2010", "imdb": "tt1375666", "tmdb": 27205 }
                    }
                }])),
            )
        }),
    );
    let client = test_client(serve(app).await);

    let (items, pagination) =
        trakt::get_user_history(&client, "sam", PaginationParams { page: 1, limit: 10 })
            .await
            .unwrap();

    assert_eq!(items.len(), 1);
    assert!(matches!(items[0].entry, HistoryEntry::Movie { .. }));
    assert_eq!(pagination.page, "1");
    assert_eq!(pagination.page_count, "5");
    assert_eq!(pagination.item_count, "42");
}

#[tokio::test]
async fn test_settings_non_200_is_a_status_error() {
    let app = Router::new().route(
        "/users/settings",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = test_client(serve(app).await);

    let err = trakt::get_user_settings(&client).await.unwrap_err();
    match err {
        TraktError::Status { context, status } => {
            assert_eq!(context, "get user settings");
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_settings_malformed_body_is_a_decode_error() {
    let app = Router::new().route("/users/settings", get(|| async { "definitely not json" }));
    let client = test_client(serve(app).await);

    let err = trakt::get_user_settings(&client).await.unwrap_err();
    assert!(matches!(err, TraktError::Decode(_)));
}

#[tokio::test]
async fn test_search_decodes_one_scored_movie() {
    let app = Router::new().route(
        "/search/{kind}",
        get(|RawQuery(query): RawQuery| async move {
            let query = query.unwrap_or_default();
            // the operation always requests page size 10 with the query verbatim
            if !query.contains("limit=10") || !query.contains("query=inception") {
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!([])));
            }
            (
                StatusCode::OK,
                Json(json!([{
                    "type": "movie",
                    "score": 9.5,
                    "movie": {
                        "title": "Inception",
                        "year": 2010,
                        "ids": { "trakt": 16662, "slug": "inception-2010", "imdb": "tt1375666", "tmdb": 27205 }
                    }
                }])),
            )
        }),
    );
    let client = test_client(serve(app).await);

    let results = trakt::search(&client, "inception", "movie").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 9.5);
    match &results[0].entry {
        SearchEntry::Movie { movie } => assert_eq!(movie.title, "Inception"),
        SearchEntry::Show { .. } => panic!("expected a movie result"),
    }
}

#[tokio::test]
async fn test_unauthenticated_request_carries_no_credential_headers() {
    let app = Router::new().route(
        "/probe",
        get(|headers: HeaderMap| async move {
            if headers.contains_key("authorization") || headers.contains_key("trakt-api-key") {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::OK
            }
        }),
    );
    // credentials are loaded, but auth = false must not attach them
    let client = test_client(serve(app).await);

    let response = client
        .request(RequestParams {
            method: Method::GET,
            path: "/probe".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_authenticated_request_carries_api_key_and_bearer_token() {
    let app = Router::new().route(
        "/probe",
        get(|headers: HeaderMap| async move {
            let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
            let ok = header("authorization") == Some("Bearer access-token")
                && header("trakt-api-key") == Some("client-id")
                && header("trakt-api-version") == Some("2")
                && header("accept") == Some("application/json");
            if ok { StatusCode::OK } else { StatusCode::BAD_REQUEST }
        }),
    );
    let client = test_client(serve(app).await);

    let response = client
        .request(RequestParams {
            method: Method::GET,
            path: "/probe".into(),
            auth: true,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_access_token_fails_fast() {
    // endpoint is never contacted, the client refuses before sending
    let client = TraktClient::with_endpoint(
        "http://127.0.0.1:1",
        Credentials::unauthorized("client-id".into(), "client-secret".into()),
    )
    .unwrap();

    let err = client
        .request(RequestParams {
            method: Method::GET,
            path: "/users/settings".into(),
            auth: true,
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, TraktError::NotAuthenticated));
}

#[tokio::test]
async fn test_device_code_request_decodes_grant() {
    let app = Router::new().route(
        "/oauth/device/code",
        post(|| async {
            Json(json!({
                "device_code": "device-code",
                "user_code": "A1B2C3",
                "verification_url": "https://trakt.tv/activate",
                "expires_in": 600,
                "interval": 5
            }))
        }),
    );
    let client = test_client(serve(app).await);

    let grant = auth::request_device_code(&client, "client-id").await.unwrap();

    assert_eq!(grant.user_code, "A1B2C3");
    assert_eq!(grant.interval, 5);
    assert_eq!(grant.expires_in, 600);
}

#[tokio::test]
async fn test_pending_poll_is_not_an_error() {
    let app = Router::new().route(
        "/oauth/device/token",
        post(|| async { StatusCode::BAD_REQUEST }),
    );
    let client = test_client(serve(app).await);

    let token = auth::poll_device_token(&client, "device-code", "client-id", "client-secret")
        .await
        .unwrap();

    assert!(token.is_none());
}

#[tokio::test]
async fn test_wait_for_token_polls_until_authorized() {
    let polls = Arc::new(AtomicUsize::new(0));
    let handler_polls = Arc::clone(&polls);
    let app = Router::new().route(
        "/oauth/device/token",
        post(move || {
            let polls = Arc::clone(&handler_polls);
            async move {
                if polls.fetch_add(1, Ordering::SeqCst) == 0 {
                    // user has not approved the code yet
                    (StatusCode::BAD_REQUEST, Json(json!({})))
                } else {
                    (
                        StatusCode::OK,
                        Json(json!({
                            "access_token": "granted-token",
                            "token_type": "bearer",
                            "expires_in": 7776000,
                            "refresh_token": "refresh-token",
                            "scope": "public",
                            "created_at": 1600000000
                        })),
                    )
                }
            }
        }),
    );
    let client = test_client(serve(app).await);

    let token = auth::wait_for_token(&client, &test_grant(30), "client-id", "client-secret")
        .await
        .unwrap();

    assert_eq!(token.access_token, "granted-token");
    assert_eq!(polls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_wait_for_token_times_out_when_code_expires() {
    let app = Router::new().route(
        "/oauth/device/token",
        post(|| async { StatusCode::BAD_REQUEST }),
    );
    let client = test_client(serve(app).await);

    let err = auth::wait_for_token(&client, &test_grant(1), "client-id", "client-secret")
        .await
        .unwrap_err();

    assert!(matches!(err, TraktError::AuthTimeout));
}
