use crate::helpers::TestApi;
use reqwest::StatusCode;

#[tokio::test]
async fn the_sign_in_form_is_served() {
    let api = TestApi::spawn().await;

    let response = api.get_sign_in().await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<form method="post" action="/auth/signin">"#));
}

#[tokio::test]
async fn signing_in_sets_a_session_cookie() {
    let api = TestApi::spawn().await;

    let response = api.post_sign_in("Alice").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");
    let cookie = response.headers()["set-cookie"].to_str().unwrap();
    assert!(cookie.starts_with("id="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn blank_names_are_rejected() {
    let api = TestApi::spawn().await;

    let response = api.post_sign_in("   ").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!response.headers().contains_key("set-cookie"));
    assert_eq!(api.get_home().await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn the_form_must_be_url_encoded() {
    let api = TestApi::spawn().await;

    let response = api
        .api_client
        .post(format!("{}/auth/signin", &api.api_address))
        .header("content-type", "application/json")
        .body(r#"{"name":"Alice"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn the_sign_in_page_is_gone_when_disabled() {
    let api = TestApi::spawn_with(|config| config.app.auth.dev_sign_in = false).await;

    assert_eq!(api.get_sign_in().await.status(), StatusCode::NOT_FOUND);
    assert_eq!(api.post_sign_in("Alice").await.status(), StatusCode::NOT_FOUND);
}
