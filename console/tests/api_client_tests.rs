//! API client tests against the in-process mock backend
//!
//! One HTTP call per operation, search parameter handling, status mapping.

mod common;

use common::MockBackend;
use shared::{Customer, CustomerPayload, Product, Transaction, TransactionType};
use warehouse_console::api::ApiClient;
use warehouse_console::ConsoleError;

#[tokio::test]
async fn test_empty_search_sends_no_parameter() {
    let backend = MockBackend::start().await;
    let api = backend.client();

    let all = api.list::<Product>("").await.unwrap();
    assert_eq!(all.len(), 2);
    let filtered = api.list::<Product>("chuột").await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "P2");
    api.list::<Product>("   ").await.unwrap();

    assert_eq!(
        backend.requests(),
        vec![
            "GET /products".to_string(),
            "GET /products?search=chuột".to_string(),
            "GET /products".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_create_returns_backend_id() {
    let backend = MockBackend::start().await;
    let api = backend.client();

    let payload = CustomerPayload {
        name: "Phạm Văn F".into(),
        phone: "0933444555".into(),
        address: "Cần Thơ".into(),
    };
    let created: Customer = api.create::<Customer>(&payload).await.unwrap();

    assert!(created.id.starts_with("KH"));
    assert_eq!(created.id.len(), 10);
    assert_eq!(created.name, payload.name);
    assert_eq!(backend.requests(), vec!["POST /customers".to_string()]);
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let backend = MockBackend::start().await;
    let api = backend.client();

    api.delete::<Customer>("C2").await.unwrap();
    assert_eq!(backend.collection("customers").len(), 1);
}

#[tokio::test]
async fn test_missing_record_maps_to_status() {
    let backend = MockBackend::start().await;
    let err = backend.client().delete::<Customer>("C404").await.unwrap_err();
    assert!(matches!(err, ConsoleError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let backend = MockBackend::start().await;
    backend.fail("GET /products");
    let err = backend.client().list::<Product>("").await.unwrap_err();
    match err {
        ConsoleError::Status { status, path, .. } => {
            assert_eq!(status, 500);
            assert_eq!(path, "/products");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_body_maps_to_decode() {
    let backend = MockBackend::start().await;
    backend.db.lock().unwrap().dashboard_stats = serde_json::json!({"unexpected": true});
    let err = backend.client().dashboard_stats().await.unwrap_err();
    assert!(matches!(err, ConsoleError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_http() {
    // Port 9 (discard) is not served by anything in the test environment
    let api = ApiClient::with_base_url("http://127.0.0.1:9");
    let err = api.list::<Product>("").await.unwrap_err();
    assert!(matches!(err, ConsoleError::Http(_)));
}

#[tokio::test]
async fn test_transactions_decode_camel_case_references() {
    let backend = MockBackend::start().await;
    let rows = backend.client().list::<Transaction>("").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, TransactionType::Import);
    assert_eq!(rows[0].product_id, "P1");
    assert_eq!(rows[0].counterparty(), Some("S1"));
    assert_eq!(rows[0].customer_id, None);
}

#[tokio::test]
async fn test_reports_and_orders() {
    let backend = MockBackend::start().await;
    let api = backend.client();

    let stats = api.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_products, 1250);
    assert_eq!(stats.top_selling_product, "Laptop Gaming ABC");

    let inventory = api.inventory_report().await.unwrap();
    assert_eq!(inventory.0[0].net_movement(), 50);

    let revenue = api.revenue_report().await.unwrap();
    assert_eq!(revenue.0.len(), 2);

    let orders = api.customer_orders("C1").await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].product_id, "P2");
    assert!(api.customer_orders("C2").await.unwrap().is_empty());
}
