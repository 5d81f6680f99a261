//! Import/export screen tests
//!
//! Lookup loading, canonical request bodies, reference checks, and the
//! disabled update path.

mod common;

use common::MockBackend;
use serde_json::json;
use shared::{FormError, TransactionType};
use warehouse_console::views::{TransactionView, ViewContext, ViewState};
use warehouse_console::ConsoleError;

async fn mounted(ctx: &ViewContext) -> TransactionView {
    let mut view = TransactionView::new(ctx);
    view.mount().await;
    view
}

#[tokio::test]
async fn test_mount_loads_lookups_and_list() {
    let backend = MockBackend::start().await;
    let view = mounted(&backend.ctx()).await;

    let mut requests = backend.requests();
    requests.sort();
    assert_eq!(
        requests,
        vec![
            "GET /customers",
            "GET /employees",
            "GET /products",
            "GET /suppliers",
            "GET /transactions",
        ]
    );

    let lookups = view.lookups().expect("lookups loaded");
    assert_eq!(lookups.products.len(), 2);
    assert_eq!(lookups.customers.len(), 2);
    assert_eq!(view.crud().rows().len(), 1);
    assert_eq!(view.lookup_error(), None);
}

#[tokio::test]
async fn test_export_to_customer_sends_canonical_body() {
    let backend = MockBackend::start().await;
    let mut view = mounted(&backend.ctx()).await;

    view.open_create();
    view.set_field("type", "export").unwrap();
    view.set_field("product_id", "P1").unwrap();
    view.set_field("quantity", "5").unwrap();
    view.set_field("price", "1000").unwrap();
    view.set_field("date", "2024-05-10").unwrap();
    view.set_field("employee_id", "E1").unwrap();
    // Left over from an earlier import selection
    view.set_field("supplier_id", "S1").unwrap();
    view.set_field("customer_id", "C1").unwrap();
    view.save().await.unwrap();

    let bodies = backend.bodies("POST /transactions");
    assert_eq!(
        bodies,
        vec![json!({
            "type": "export",
            "product_id": "P1",
            "quantity": 5,
            "price": 1000.0,
            "date": "2024-05-10",
            "employee_id": "E1",
            "supplier_id": null,
            "customer_id": "C1",
        })]
    );

    let rows = view.crud().rows();
    assert_eq!(rows.len(), 2);
    let created = rows.iter().find(|t| t.kind == TransactionType::Export).unwrap();
    assert!(created.id.starts_with("TX"));
    assert_eq!(created.counterparty(), Some("C1"));
}

#[tokio::test]
async fn test_import_without_supplier_rejected_locally() {
    let backend = MockBackend::start().await;
    let mut view = mounted(&backend.ctx()).await;
    backend.clear_requests();

    view.open_create();
    view.set_field("product_id", "P2").unwrap();
    view.set_field("quantity", "3").unwrap();
    view.set_field("employee_id", "E1").unwrap();
    view.set_field("customer_id", "C1").unwrap();

    let err = view.save().await.unwrap_err();
    assert!(matches!(err, ConsoleError::Form(FormError::Required { ref field }) if field == "supplier_id"));
    assert_eq!(view.crud().state().error(), Some("supplier_id là bắt buộc"));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_unknown_reference_rejected_locally() {
    let backend = MockBackend::start().await;
    let mut view = mounted(&backend.ctx()).await;
    backend.clear_requests();

    view.open_create();
    view.set_field("product_id", "P404").unwrap();
    view.set_field("quantity", "1").unwrap();
    view.set_field("employee_id", "E1").unwrap();
    view.set_field("supplier_id", "S1").unwrap();

    let err = view.save().await.unwrap_err();
    assert!(matches!(
        err,
        ConsoleError::Form(FormError::UnknownReference { ref field, .. }) if field == "product_id"
    ));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_zero_quantity_rejected() {
    let backend = MockBackend::start().await;
    let mut view = mounted(&backend.ctx()).await;

    view.open_create();
    view.set_field("product_id", "P1").unwrap();
    view.set_field("quantity", "0").unwrap();
    view.set_field("employee_id", "E1").unwrap();
    view.set_field("supplier_id", "S1").unwrap();

    assert!(matches!(
        view.save().await,
        Err(ConsoleError::Form(FormError::NotPositive { .. }))
    ));
}

#[tokio::test]
async fn test_counterparty_options_follow_type() {
    let backend = MockBackend::start().await;
    let mut view = mounted(&backend.ctx()).await;

    view.open_create();
    let labels = |view: &TransactionView| -> Vec<String> {
        view.options("counterparty")
            .into_iter()
            .map(|o| o.label)
            .collect()
    };
    assert_eq!(labels(&view), vec!["Công ty Phương Nam (S1)".to_string()]);

    view.set_field("type", "export").unwrap();
    assert_eq!(labels(&view).len(), 2);
    assert_eq!(view.options("product_id").len(), 2);
}

#[tokio::test]
async fn test_updates_disabled_by_default() {
    let backend = MockBackend::start().await;
    let mut view = mounted(&backend.ctx()).await;

    assert!(!view.crud().updates_enabled());
    assert!(matches!(
        view.open_edit("T1"),
        Err(ConsoleError::Unsupported { .. })
    ));
}

#[tokio::test]
async fn test_updates_enabled_by_configuration() {
    let backend = MockBackend::start().await;
    let mut ctx = backend.ctx();
    ctx.transaction_updates = true;
    let mut view = mounted(&ctx).await;

    view.open_edit("T1").unwrap();
    view.set_field("quantity", "12").unwrap();
    view.save().await.unwrap();

    let body = &backend.bodies("PUT /transactions")[0];
    assert_eq!(body["quantity"], json!(12));
    assert_eq!(body["supplier_id"], "S1");
    assert_eq!(body["customer_id"], json!(null));
    assert_eq!(view.crud().rows()[0].quantity, 12);
}

#[tokio::test]
async fn test_delete_transaction() {
    let backend = MockBackend::start().await;
    let mut view = mounted(&backend.ctx()).await;

    assert!(view.delete("T1", &mut |_: &str| true).await.unwrap());
    assert!(matches!(view.crud().state(), ViewState::Ready { rows } if rows.is_empty()));
}

#[tokio::test]
async fn test_lookup_failure_reported() {
    let backend = MockBackend::start().await;
    backend.fail("GET /suppliers");
    let view = mounted(&backend.ctx()).await;

    assert!(view.lookups().is_none());
    assert_eq!(
        view.lookup_error(),
        Some("Không thể tải dữ liệu phụ thuộc. Vui lòng thử lại sau.")
    );
    assert_eq!(view.crud().rows().len(), 1);
}
