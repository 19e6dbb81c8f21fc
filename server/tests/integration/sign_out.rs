use crate::helpers::TestApi;
use reqwest::StatusCode;

#[tokio::test]
async fn logging_out_ends_the_session() {
    let api = TestApi::spawn().await;
    api.sign_in_as("Alice").await;
    assert_eq!(api.get_home().await.status(), StatusCode::OK);

    let response = api.post_log_out().await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");
    let removal_cookie = response.headers()["set-cookie"].to_str().unwrap();
    assert!(removal_cookie.starts_with("id="));

    assert_eq!(api.get_home().await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn logging_out_without_a_session_is_not_an_error() {
    let api = TestApi::spawn().await;

    let response = api.post_log_out().await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(response.headers().contains_key("set-cookie"));
}

#[tokio::test]
async fn the_post_sign_out_location_is_configurable() {
    let api = TestApi::spawn_with(|config| {
        config.app.auth.after_sign_out = "/auth/signin".into();
    })
    .await;
    api.sign_in_as("Alice").await;

    let response = api.post_log_out().await;

    assert_eq!(response.headers()["location"], "/auth/signin");
}
