//! HTTP-level tests driving the full router with an in-memory store.

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use secrecy::Secret;
use serde_json::{Value, json};
use tower::util::ServiceExt;
use vidgate_adapters::{AuthConfig, CookieNames, InMemoryIdentityStore, TokenClassConfig};
use vidgate_service::VidgateService;

fn test_config(access_ttl_seconds: i64) -> AuthConfig {
    AuthConfig {
        access: TokenClassConfig {
            secret: Secret::from("test-access-secret".to_owned()),
            ttl_seconds: access_ttl_seconds,
        },
        refresh: TokenClassConfig {
            secret: Secret::from("test-refresh-secret".to_owned()),
            ttl_seconds: 864_000,
        },
        cookies: CookieNames {
            access: "accessToken".to_owned(),
            refresh: "refreshToken".to_owned(),
        },
    }
}

fn app() -> Router {
    VidgateService::new(InMemoryIdentityStore::new(), test_config(900)).into_router()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (Response<Body>, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (Response::from_parts(parts, Body::empty()), value)
}

async fn register_viewer(router: &Router) {
    let (response, _) = send(
        router,
        json_request(
            "POST",
            "/register",
            json!({
                "username": "viewer_one",
                "email": "viewer@example.com",
                "password": "secret123",
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Logs in and returns `(access_token, refresh_token)` from the body.
async fn login_viewer(router: &Router) -> (String, String) {
    let (response, body) = send(
        router,
        json_request(
            "POST",
            "/login",
            json!({ "username": "viewer_one", "password": "secret123" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    (
        body["accessToken"].as_str().unwrap().to_owned(),
        body["refreshToken"].as_str().unwrap().to_owned(),
    )
}

fn set_cookie_values(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_owned())
        .collect()
}

#[tokio::test]
async fn register_then_login_returns_tokens_and_cookies() {
    let router = app();
    register_viewer(&router).await;

    let (response, body) = send(
        &router,
        json_request(
            "POST",
            "/login",
            json!({ "email": "viewer@example.com", "password": "secret123" }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body["user"]["username"], "viewer_one");
    assert!(!body["accessToken"].as_str().unwrap().is_empty());
    assert!(!body["refreshToken"].as_str().unwrap().is_empty());

    let cookies = set_cookie_values(&response);
    assert_eq!(cookies.len(), 2);
    for cookie in &cookies {
        assert!(cookie.contains("HttpOnly"), "{cookie}");
        assert!(cookie.contains("Secure"), "{cookie}");
    }
    assert!(cookies.iter().any(|c| c.starts_with("accessToken=")));
    assert!(cookies.iter().any(|c| c.starts_with("refreshToken=")));
}

#[tokio::test]
async fn login_failures_do_not_reveal_which_check_failed() {
    let router = app();
    register_viewer(&router).await;

    let (wrong_password, wrong_password_body) = send(
        &router,
        json_request(
            "POST",
            "/login",
            json!({ "username": "viewer_one", "password": "not-the-password" }),
        ),
    )
    .await;
    let (unknown_user, unknown_user_body) = send(
        &router,
        json_request(
            "POST",
            "/login",
            json!({ "username": "nobody_here", "password": "not-the-password" }),
        ),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password_body, unknown_user_body);
}

#[tokio::test]
async fn gate_accepts_cookie_or_bearer_and_prefers_the_cookie() {
    let router = app();
    register_viewer(&router).await;
    let (access, _) = login_viewer(&router).await;

    // Cookie credential.
    let request = Request::builder()
        .uri("/current-user")
        .header(header::COOKIE, format!("accessToken={access}"))
        .body(Body::empty())
        .unwrap();
    let (response, body) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body["user"]["username"], "viewer_one");

    // Bearer header fallback.
    let request = Request::builder()
        .uri("/current-user")
        .header(header::AUTHORIZATION, format!("Bearer {access}"))
        .body(Body::empty())
        .unwrap();
    let (response, _) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    // A valid cookie wins over a garbage header.
    let request = Request::builder()
        .uri("/current-user")
        .header(header::COOKIE, format!("accessToken={access}"))
        .header(header::AUTHORIZATION, "Bearer garbage")
        .body(Body::empty())
        .unwrap();
    let (response, _) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    // No credential at all.
    let request = Request::builder()
        .uri("/current-user")
        .body(Body::empty())
        .unwrap();
    let (response, body) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn tampered_access_token_is_unauthorized() {
    let router = app();
    register_viewer(&router).await;
    let (access, _) = login_viewer(&router).await;

    // Flip one character in the signature segment.
    let mut tampered = access.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'a' { 'b' } else { 'a' });

    let request = Request::builder()
        .uri("/current-user")
        .header(header::COOKIE, format!("accessToken={tampered}"))
        .body(Body::empty())
        .unwrap();
    let (response, _) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_rotation_detects_reuse_and_logout_revokes() {
    let router = app();
    register_viewer(&router).await;
    let (_a1, r1) = login_viewer(&router).await;

    // refresh(R1) succeeds via cookie.
    let request = Request::builder()
        .method("POST")
        .uri("/refresh-token")
        .header(header::COOKIE, format!("refreshToken={r1}"))
        .body(Body::empty())
        .unwrap();
    let (response, body) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let r2 = body["refreshToken"].as_str().unwrap().to_owned();
    assert_ne!(r1, r2);

    // refresh(R1) again: superseded token, rejected before expiry.
    let (response, _) = send(
        &router,
        json_request("POST", "/refresh-token", json!({ "refreshToken": r1 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // refresh(R2) still works exactly once.
    let (response, body) = send(
        &router,
        json_request("POST", "/refresh-token", json!({ "refreshToken": r2 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let a3 = body["accessToken"].as_str().unwrap().to_owned();
    let r3 = body["refreshToken"].as_str().unwrap().to_owned();

    // logout, then refresh(R3) is rejected.
    let request = Request::builder()
        .method("POST")
        .uri("/logout")
        .header(header::COOKIE, format!("accessToken={a3}"))
        .body(Body::empty())
        .unwrap();
    let (response, _) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookie_values(&response);
    assert_eq!(cookies.len(), 2, "both cookies must be cleared");

    let (response, _) = send(
        &router,
        json_request("POST", "/refresh-token", json!({ "refreshToken": r3 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // The outstanding access token still passes the stateless check;
    // revocation of access tokens is not instantaneous.
    let request = Request::builder()
        .uri("/current-user")
        .header(header::COOKIE, format!("accessToken={a3}"))
        .body(Body::empty())
        .unwrap();
    let (response, _) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_refresh_token_is_unauthorized() {
    let router = app();
    let request = Request::builder()
        .method("POST")
        .uri("/refresh-token")
        .body(Body::empty())
        .unwrap();
    let (response, _) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_access_token_is_unauthorized() {
    // Issue access tokens that are already past the decode leeway.
    let router = VidgateService::new(InMemoryIdentityStore::new(), test_config(-300))
        .into_router();
    register_viewer(&router).await;
    let (access, _) = login_viewer(&router).await;

    let request = Request::builder()
        .uri("/current-user")
        .header(header::COOKIE, format!("accessToken={access}"))
        .body(Body::empty())
        .unwrap();
    let (response, _) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn change_password_requires_the_old_one() {
    let router = app();
    register_viewer(&router).await;
    let (access, _) = login_viewer(&router).await;

    let mut request = json_request(
        "POST",
        "/change-password",
        json!({ "oldPassword": "wrong-old-one", "newPassword": "brand-new-pass" }),
    );
    request.headers_mut().insert(
        header::COOKIE,
        format!("accessToken={access}").parse().unwrap(),
    );
    let (response, _) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut request = json_request(
        "POST",
        "/change-password",
        json!({ "oldPassword": "secret123", "newPassword": "brand-new-pass" }),
    );
    request.headers_mut().insert(
        header::COOKIE,
        format!("accessToken={access}").parse().unwrap(),
    );
    let (response, _) = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Old password no longer logs in; the new one does.
    let (response, _) = send(
        &router,
        json_request(
            "POST",
            "/login",
            json!({ "username": "viewer_one", "password": "secret123" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let (response, _) = send(
        &router,
        json_request(
            "POST",
            "/login",
            json!({ "username": "viewer_one", "password": "brand-new-pass" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let router = app();
    register_viewer(&router).await;

    let (response, body) = send(
        &router,
        json_request(
            "POST",
            "/register",
            json!({
                "username": "viewer_one",
                "email": "other@example.com",
                "password": "secret123",
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}
