use restcall::pretty;
use serde_json::json;
use std::collections::HashMap;

#[tokio::test]
async fn pretty_get_returns_the_parsed_mapping() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/todos/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"title":"delectus aut autem"}"#)
        .create_async()
        .await;

    // The request banner goes to stdout; the returned value is unaffected.
    let result = pretty::pretty_get(&format!("{}/todos/1", server.url()))
        .await
        .unwrap();

    assert_eq!(result, json!({"id": 1, "title": "delectus aut autem"}));
}

#[tokio::test]
async fn pretty_get_sends_no_authorization_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/public")
        .match_header("authorization", mockito::Matcher::Missing)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    pretty::pretty_get(&format!("{}/public", server.url()))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn pretty_post_sends_bearer_token_and_form_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/items")
        .match_header("authorization", "Bearer secret")
        .match_body(mockito::Matcher::UrlEncoded("name".into(), "x".into()))
        .with_status(201)
        .with_body(r#"{"id":1}"#)
        .create_async()
        .await;

    let data = HashMap::from([("name".to_string(), "x".to_string())]);
    let result = pretty::pretty_post(&format!("{}/items", server.url()), "secret", &data)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result, json!({"id": 1}));
}

#[tokio::test]
async fn pretty_put_sends_bearer_token_and_form_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/items/1")
        .match_header("authorization", "Bearer secret")
        .match_body(mockito::Matcher::UrlEncoded("name".into(), "y".into()))
        .with_status(200)
        .with_body(r#"{"id":1,"name":"y"}"#)
        .create_async()
        .await;

    let data = HashMap::from([("name".to_string(), "y".to_string())]);
    let result = pretty::pretty_put(&format!("{}/items/1", server.url()), "secret", &data)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result, json!({"id": 1, "name": "y"}));
}

#[tokio::test]
async fn pretty_delete_sends_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/items/1")
        .match_header("authorization", "Bearer secret")
        .with_status(200)
        .with_body(r#"{"deleted":true}"#)
        .create_async()
        .await;

    let result = pretty::pretty_delete(&format!("{}/items/1", server.url()), "secret")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result, json!({"deleted": true}));
}

#[tokio::test]
async fn pretty_post_on_non_json_error_body_returns_empty_object() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/items")
        .with_status(500)
        .with_body("Internal Error")
        .create_async()
        .await;

    let data = HashMap::new();
    let result = pretty::pretty_post(&format!("{}/items", server.url()), "secret", &data)
        .await
        .unwrap();

    assert_eq!(result, json!({}));
}
