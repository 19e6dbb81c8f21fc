use crate::helpers::TestApi;
use reqwest::StatusCode;

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let api = TestApi::spawn().await;

    let response = api
        .api_client
        .get(format!("{}/does-not-exist", &api.api_address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unsupported_methods_list_the_allowed_ones() {
    let api = TestApi::spawn().await;

    let response = api
        .api_client
        .delete(format!("{}/", &api.api_address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()["allow"], "GET, HEAD, POST");
}

#[tokio::test]
async fn head_requests_are_served_by_the_get_handler() {
    let api = TestApi::spawn().await;

    let response = api
        .api_client
        .head(format!("{}/api/ping", &api.api_address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn every_response_carries_a_request_id() {
    let api = TestApi::spawn().await;

    let first = api.get_ping().await;
    let second = api.get_ping().await;

    let first = first.headers()["x-request-id"].to_str().unwrap().to_owned();
    let second = second.headers()["x-request-id"].to_str().unwrap().to_owned();
    assert_ne!(first, second);
}
