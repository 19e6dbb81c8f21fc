use crate::helpers::TestApi;
use reqwest::StatusCode;

#[tokio::test]
async fn the_home_page_is_not_found_without_a_session() {
    let api = TestApi::spawn().await;

    let response = api.get_home().await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.unwrap();
    assert!(!body.contains("Hello"));
    assert!(!body.contains("Log Out"));
}

#[tokio::test]
async fn signed_in_users_are_greeted_by_name() {
    let api = TestApi::spawn().await;
    api.sign_in_as("Alice").await;

    let response = api.get_home().await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/html; charset=utf-8"
    );
    let body = response.text().await.unwrap();
    assert!(body.contains("<h1>Hello Alice</h1>"));
    assert!(body.contains(r#"<form method="post" action="/">"#));
    assert!(body.contains("Log Out"));
}

#[tokio::test]
async fn user_names_are_html_escaped() {
    let api = TestApi::spawn().await;
    api.sign_in_as("<b>Mallory</b>").await;

    let body = api.get_home().await.text().await.unwrap();

    assert!(body.contains("Hello &lt;b&gt;Mallory&lt;/b&gt;"));
    assert!(!body.contains("<b>Mallory</b>"));
}

#[tokio::test]
async fn a_forged_session_cookie_is_not_a_session() {
    let api = TestApi::spawn().await;

    let response = api
        .api_client
        .get(format!("{}/", &api.api_address))
        .header("cookie", "id=00000000-0000-4000-8000-000000000000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn expired_sessions_are_not_found() {
    let api = TestApi::spawn_with(|config| {
        config.app.session.ttl = std::time::Duration::from_secs(1);
    })
    .await;
    api.sign_in_as("Alice").await;
    assert_eq!(api.get_home().await.status(), StatusCode::OK);

    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;

    assert_eq!(api.get_home().await.status(), StatusCode::NOT_FOUND);
}
