//! Integration tests for the storefront REST client

use std::sync::Arc;

use api::{
    AccessoryUpdate, ApiClient, ApiError, AppConfig, Banner, BannerUpload, BlogDraft, Credentials,
    ImageFile, NewAccessory,
};
use serde_json::json;
use store::{MemoryTokenStore, TokenStore};
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(server: &MockServer) -> (ApiClient, MemoryTokenStore) {
    let tokens = MemoryTokenStore::new();
    let client = ApiClient::with_base_url(&server.uri(), Arc::new(tokens.clone())).unwrap();
    (client, tokens)
}

#[tokio::test]
async fn test_client_from_config() {
    let config = AppConfig::default().with_overrides(Some("http://localhost:5005/api/"), None, None);
    let client = ApiClient::new(&config, Arc::new(MemoryTokenStore::new())).unwrap();
    assert_eq!(client.base_url(), "http://localhost:5005/api");
}

#[tokio::test]
async fn test_client_requires_base_url() {
    let result = ApiClient::with_base_url("  ", Arc::new(MemoryTokenStore::new()));
    assert!(matches!(result, Err(ApiError::Configuration(_))));
}

#[tokio::test]
async fn test_list_accessories() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accessories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Strap", "category": "Straps", "price": 499, "quantity": 2,
             "images": "a.jpg,b.jpg", "colors": ["#000"]},
            {"id": 2, "name": "Box", "category": "Packaging", "price": "99", "quantity": "5"}
        ])))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let items = client.list_accessories().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].images, vec!["a.jpg", "b.jpg"]);
    assert_eq!(items[1].price, "99");
}

#[tokio::test]
async fn test_null_list_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    assert!(client.list_blogs().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_accessory_is_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accessories"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"category\""))
        .and(body_string_contains("Straps"))
        .and(body_string_contains("filename=\"front.jpg\""))
        .and(body_string_contains("filename=\"back.jpg\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let accessory = NewAccessory {
        name: "Strap".into(),
        description: "Genuine leather".into(),
        category: "Straps".into(),
        price: "499".into(),
        color: "#000".into(),
        quantity: "3".into(),
        images: vec![
            ImageFile::new("front.jpg", b"jpegdata".to_vec()).with_content_type("image/jpeg"),
            ImageFile::new("back.jpg", b"jpegdata".to_vec()),
        ],
    };
    client.create_accessory(accessory).await.unwrap();
}

#[tokio::test]
async fn test_invalid_accessory_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let result = client.create_accessory(NewAccessory::default()).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
}

#[tokio::test]
async fn test_update_accessory_sends_json() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/accessories/7"))
        .and(body_json(json!({
            "name": "Strap",
            "price": "450",
            "original_price": "600",
            "quantity": "4"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let update = AccessoryUpdate {
        name: "Strap".into(),
        price: "450".into(),
        original_price: "600".into(),
        quantity: "4".into(),
    };
    client.update_accessory("7", &update).await.unwrap();
}

#[tokio::test]
async fn test_update_failure_prefers_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/accessories/7"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Price must be positive"})),
        )
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let update = AccessoryUpdate {
        name: "Strap".into(),
        price: "-1".into(),
        original_price: String::new(),
        quantity: "4".into(),
    };
    let err = client.update_accessory("7", &update).await.unwrap_err();
    assert_eq!(
        err.user_message("Failed to update the accessory."),
        "Price must be positive"
    );
}

#[tokio::test]
async fn test_delete_failure_carries_status() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/accessories/3"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let err = client.delete_accessory("3").await.unwrap_err();
    match &err {
        ApiError::Status { status, message } => {
            assert_eq!(*status, 404);
            assert_eq!(message.as_deref(), Some("Not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message("Failed to delete the accessory."), "Not found");
}

#[tokio::test]
async fn test_delete_with_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/blogs/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    client.delete_blog("5").await.unwrap();
}

#[tokio::test]
async fn test_blog_create_and_update_use_base_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blogs"))
        .and(body_json(json!({"title": "Hello", "description": "<p>Hi</p>"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/blogs/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let draft = BlogDraft {
        title: "Hello".into(),
        description: "<p>Hi</p>".into(),
    };
    client.create_blog(&draft).await.unwrap();
    client.update_blog("1", &draft).await.unwrap();
}

#[tokio::test]
async fn test_get_banner() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/banner"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Custom merch",
            "description": "Design your own",
            "image": "http://cdn/banner.jpg"
        })))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let banner = client.get_banner().await.unwrap();
    assert!(banner.is_complete());
    assert_eq!(banner.description.as_deref(), Some("Design your own"));
}

#[tokio::test]
async fn test_missing_banner_is_incomplete() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/banner"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/banner"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let banner = client.get_banner().await.unwrap();
    assert!(!banner.is_complete());
    assert_eq!(banner, Banner::default());

    let banner = client.get_banner().await.unwrap();
    assert!(!banner.is_complete());
}

#[tokio::test]
async fn test_delete_review() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/reviews/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Review deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    client.delete_review("42").await.unwrap();
}

#[tokio::test]
async fn test_store_banner_returns_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/banner"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"image\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Banner stored"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let upload = BannerUpload {
        title: "Summer".into(),
        description: String::new(),
        image: Some(ImageFile::new("banner.png", vec![1, 2, 3]).with_content_type("image/png")),
    };
    let reply = client.store_banner(upload).await.unwrap();
    assert_eq!(reply.message.as_deref(), Some("Banner stored"));
}

#[tokio::test]
async fn test_login_stores_token_and_authenticates_later_calls() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "a@b.c", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-123",
            "message": "Login successful"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reviews"))
        .and(header("authorization", "Bearer jwt-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Asha", "rating": 5, "comment": "Great"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (client, tokens) = client_for(&server);
    let reply = client
        .login(&Credentials {
            email: "a@b.c".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();

    assert_eq!(reply.message.as_deref(), Some("Login successful"));
    assert_eq!(tokens.get().as_deref(), Some("jwt-123"));

    let reviews = client.list_reviews().await.unwrap();
    assert_eq!(reviews[0].author(), "Asha");
}

#[tokio::test]
async fn test_failed_login_keeps_no_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let (client, tokens) = client_for(&server);
    let err = client
        .login(&Credentials {
            email: "a@b.c".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.user_message("Login failed."), "Invalid credentials");
    assert!(tokens.get().is_none());
}

#[tokio::test]
async fn test_google_login_posts_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/google-auth"))
        .and(body_json(json!({"token": "google-id-token"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-g"})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, tokens) = client_for(&server);
    let reply = client.google_login("google-id-token").await.unwrap();
    assert!(reply.message.is_none());
    assert_eq!(tokens.get().as_deref(), Some("jwt-g"));

    client.logout();
    assert!(tokens.get().is_none());
}

#[tokio::test]
async fn test_no_auth_header_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accessories"))
        .respond_with(|req: &Request| {
            let authed = req.headers.contains_key("authorization");
            ResponseTemplate::new(if authed { 400 } else { 200 }).set_body_json(json!([]))
        })
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    assert!(client.list_accessories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accessories"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server);
    let err = client.list_accessories().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(
        err.user_message("Error fetching accessories"),
        "Error fetching accessories"
    );
}
