//! HTTP client tests against a wiremock backend.

use serde_json::json;
use warranty_core::{PurchasePlace, RegistrationDraft, WarrantyCode};
use warranty_widget::{HttpWarrantyClient, WarrantyBackend, WidgetError};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn code() -> WarrantyCode {
    WarrantyCode::parse("AAAC-BBBU-CCCK-DDDE").unwrap()
}

fn client_for(server: &MockServer) -> HttpWarrantyClient {
    HttpWarrantyClient::new(server.uri()).unwrap()
}

#[tokio::test]
async fn verify_posts_raw_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/warranty/verify"))
        .and(body_json(json!({ "warrantyCode": "AAACBBBUCCCKDDDE" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.verify_code(&code()).await.unwrap();
}

#[tokio::test]
async fn verify_rejection_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/warranty/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "Unknown code."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.verify_code(&code()).await.unwrap_err();
    match err {
        WidgetError::Rejected(message) => assert_eq!(message, "Unknown code."),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn verify_rejection_without_message_gets_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/warranty/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "error" })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.verify_code(&code()).await.unwrap_err();
    match err {
        WidgetError::Rejected(message) => assert_eq!(message, "The code is not valid."),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn register_posts_full_camel_case_payload() {
    let draft = RegistrationDraft {
        customer_name: "Jane Doe".into(),
        customer_phone: "010-1234-5678".into(),
        customer_email: "jane@example.com".into(),
        purchase_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 14),
        purchase_place: Some(PurchasePlace::OfficialStore),
        customer_address: "Apgujeong-ro 34-gil".into(),
        product_model: "10CAM Ukulele".into(),
        notes: "gift".into(),
        agree_terms: true,
    };
    let registration = draft.finish(code()).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/warranty/register"))
        .and(body_json(json!({
            "warrantyCode": "AAACBBBUCCCKDDDE",
            "customerName": "Jane Doe",
            "customerPhone": "010-1234-5678",
            "customerEmail": "jane@example.com",
            "purchaseDate": "2025-03-14",
            "purchasePlace": "official_store",
            "customerAddress": "Apgujeong-ro 34-gil",
            "productModel": "10CAM Ukulele",
            "notes": "gift",
            "agreeTerms": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.register(&registration).await.unwrap();
}

#[tokio::test]
async fn fetch_models_preserves_backend_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": ["10CAM Ukulele", "23TEN Ukulele", "5SOP Ukulele"]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let models = client.fetch_models().await.unwrap();
    assert_eq!(
        models,
        ["10CAM Ukulele", "23TEN Ukulele", "5SOP Ukulele"]
    );
}

#[tokio::test]
async fn fetch_models_error_status_is_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "sheet unavailable"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_models().await.unwrap_err();
    assert!(matches!(err, WidgetError::Rejected(_)));
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    // Nothing listens on port 9: the connection is refused immediately.
    let client = HttpWarrantyClient::new("http://127.0.0.1:9").unwrap();
    let err = client.verify_code(&code()).await.unwrap_err();
    assert!(matches!(err, WidgetError::Network(_)));
}
