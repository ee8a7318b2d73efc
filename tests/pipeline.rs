//! End-to-end pipeline tests against a local mock server.

use dbheroes::executor::{perform, perform_raw};
use dbheroes::interceptor::AuthenticationInterceptor;
use dbheroes::request::{ApiRequest, HttpMethod};
use dbheroes::session::ApiSession;
use dbheroes::store::SessionStore;
use dbheroes::transport::ReqwestTransport;
use dbheroes::types::{Credentials, Hero};
use dbheroes::{ApiClient, ApiError};

use std::sync::Arc;

const HEROES_JSON: &str = r#"[
    {
        "id": "1234",
        "name": "Goku",
        "description": "El Saiyan criado en la Tierra",
        "photo": "https://cdn.example.com/goku.jpg",
        "favorite": true
    }
]"#;

#[tokio::test]
async fn login_stores_the_token_and_later_requests_carry_it() {
    let mut server = mockito::Server::new_async().await;

    let login_mock = server
        .mock("POST", "/api/auth/login")
        .match_header(
            "authorization",
            "Basic Z29rdUBjYXBzdWxlLmNvcnA6a2FtZWhhbWVoYQ==",
        )
        .with_status(200)
        .with_body("tok")
        .create_async()
        .await;

    let heroes_mock = server
        .mock("POST", "/api/heros/all")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(HEROES_JSON)
        .create_async()
        .await;

    let client = ApiClient::with_host(server.url()).unwrap();
    client
        .login(&Credentials::new("goku@capsule.corp", "kamehameha"))
        .await
        .unwrap();
    assert_eq!(client.store().get().as_deref(), Some(b"tok".as_slice()));

    let heroes = client.heroes(None).await.unwrap();
    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].name, "Goku");

    login_mock.assert_async().await;
    heroes_mock.assert_async().await;
}

#[tokio::test]
async fn requests_before_login_carry_no_authorization_header() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/heros/all")
        .match_header("authorization", mockito::Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = ApiClient::with_host(server.url()).unwrap();
    let heroes = client.heroes(None).await.unwrap();
    assert!(heroes.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_fails_with_network_regardless_of_body() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/api/heros/all")
        .with_status(404)
        .with_body(HEROES_JSON)
        .create_async()
        .await;

    let client = ApiClient::with_host(server.url()).unwrap();
    let err = client.heroes(None).await.unwrap_err();
    assert_eq!(err, ApiError::network("/api/heros/all"));
}

#[tokio::test]
async fn malformed_json_fails_with_unknown() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/api/heros/all")
        .with_status(200)
        .with_body("{not json")
        .create_async()
        .await;

    let client = ApiClient::with_host(server.url()).unwrap();
    let err = client.heroes(None).await.unwrap_err();
    assert_eq!(err, ApiError::unknown("/api/heros/all"));
}

#[tokio::test]
async fn raw_expectation_returns_the_body_bytes_exactly() {
    let body: &[u8] = &[0x74, 0x6f, 0x6b, 0x00, 0xff];
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let session = ApiSession::with_parts(Arc::new(ReqwestTransport::new().unwrap()), Vec::new());
    let descriptor = ApiRequest::builder("/api/auth/login")
        .host(server.url())
        .method(HttpMethod::Post)
        .build();
    let bytes = perform_raw(&session, &descriptor).await.unwrap();
    assert_eq!(&bytes[..], body);
}

#[tokio::test]
async fn stored_token_is_attached_by_the_authentication_interceptor() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/heros/all")
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let store = SessionStore::shared();
    store.store(&b"tok"[..]);
    let session = ApiSession::with_parts(
        Arc::new(ReqwestTransport::new().unwrap()),
        vec![Arc::new(AuthenticationInterceptor::new(Arc::clone(&store)))],
    );

    let descriptor = ApiRequest::builder("/api/heros/all")
        .host(server.url())
        .method(HttpMethod::Post)
        .build();
    let heroes: Vec<Hero> = perform(&session, &descriptor).await.unwrap();
    assert!(heroes.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn hero_lookup_filters_case_insensitively() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/api/heros/all")
        .with_status(200)
        .with_body(HEROES_JSON)
        .create_async()
        .await;

    let client = ApiClient::with_host(server.url()).unwrap();
    let hero = client.hero_by_name("gOkU").await.unwrap();
    assert_eq!(hero.map(|h| h.id), Some("1234".to_string()));
}

#[tokio::test]
async fn transformation_lookup_selects_by_id() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/api/heros/tranformations")
        .with_status(200)
        .with_body(
            r#"[
                {"id": "t1", "name": "1. Oozaru", "description": "Mono gigante",
                 "photo": "https://cdn.example.com/oozaru.jpg", "hero": {"id": "1234"}},
                {"id": "t2", "name": "2. Kaio-Ken", "description": "Técnica del Kaio",
                 "photo": "https://cdn.example.com/kaioken.jpg", "hero": {"id": "1234"}}
            ]"#,
        )
        .create_async()
        .await;

    let client = ApiClient::with_host(server.url()).unwrap();
    let transformation = client.transformation_by_id("1234", "t2").await.unwrap();
    assert_eq!(transformation.map(|t| t.name), Some("2. Kaio-Ken".to_string()));

    let missing = client.transformation_by_id("1234", "t9").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn transformations_request_sends_the_hero_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/heros/tranformations")
        .match_body(mockito::Matcher::Json(serde_json::json!({"id": "1234"})))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = ApiClient::with_host(server.url()).unwrap();
    client.transformations(Some("1234")).await.unwrap();
    mock.assert_async().await;
}
