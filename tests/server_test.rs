use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::Value;
use tower::ServiceExt;

use sporlweb::{
    config::Settings,
    server::{AppState, router},
};

// Nothing listens on the discard port; these routes never reach Spotify.
fn test_app() -> Router {
    let settings = Settings::for_api("http://127.0.0.1:9/v1", "http://127.0.0.1:9/token");
    router(AppState::in_memory(&settings).unwrap())
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Signs up and logs in, returning the `session=...` cookie pair.
async fn login_cookie(app: &Router, username: &str, password: &str) -> String {
    let body = format!("username={username}&password={password}");
    let res = app.clone().oneshot(post_form("/signup", &body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let res = app.clone().oneshot(post_form("/login", &body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/index");

    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(set_cookie.starts_with("session="));
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_public_pages() {
    let app = test_app();

    for uri in ["/", "/signup", "/login"] {
        let res = app.clone().oneshot(get(uri, None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "GET {uri}");
    }
}

#[tokio::test]
async fn test_health() {
    let app = test_app();

    let res = app.oneshot(get("/health", None)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let json: Value = serde_json::from_str(&body_text(res).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["sessions"], 0);
}

#[tokio::test]
async fn test_protected_pages_redirect_to_login() {
    let app = test_app();

    for uri in ["/index", "/recommend"] {
        let res = app.clone().oneshot(get(uri, None)).await.unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "GET {uri}");
        assert_eq!(location(&res), "/login");
    }

    let res = app
        .oneshot(get("/index", Some("session=not-a-session")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
}

#[tokio::test]
async fn test_signup_conflict_and_invalid_input() {
    let app = test_app();

    let res = app
        .clone()
        .oneshot(post_form("/signup", "username=alice&password=secret"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");

    let res = app
        .clone()
        .oneshot(post_form("/signup", "username=alice&password=other"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert!(body_text(res).await.contains("User already exists!"));

    let res = app
        .oneshot(post_form("/signup", "username=bob&password="))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = test_app();

    app.clone()
        .oneshot(post_form("/signup", "username=alice&password=secret"))
        .await
        .unwrap();

    let res = app
        .clone()
        .oneshot(post_form("/login", "username=alice&password=wrong"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().get(header::SET_COOKIE).is_none());
    assert!(body_text(res).await.contains("Invalid credentials!"));

    let res = app
        .oneshot(post_form("/login", "username=nobody&password=secret"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_lifecycle() {
    let app = test_app();
    let cookie = login_cookie(&app, "alice", "secret").await;

    let res = app
        .clone()
        .oneshot(get("/recommend", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;
    assert!(html.contains("alice"));
    assert!(html.contains("Select seed artists"));

    let res = app.clone().oneshot(get("/health", None)).await.unwrap();
    let json: Value = serde_json::from_str(&body_text(res).await).unwrap();
    assert_eq!(json["sessions"], 1);

    let res = app
        .clone()
        .oneshot(get("/logout", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    let res = app.oneshot(get("/recommend", Some(&cookie))).await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");
}

#[tokio::test]
async fn test_recommend_without_seeds_skips_spotify() {
    let app = test_app();
    let cookie = login_cookie(&app, "alice", "secret").await;

    let request = Request::builder()
        .method("POST")
        .uri("/recommend")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, &cookie)
        .body(Body::empty())
        .unwrap();

    let res = app.oneshot(request).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(!body_text(res).await.contains("Could not load recommendations."));
}
