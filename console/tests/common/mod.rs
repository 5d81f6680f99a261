//! In-process mock of the warehouse REST backend
//!
//! Collections live in memory as JSON. Every request is logged so tests can
//! assert on exactly what the console sent.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use shared::Language;
use uuid::Uuid;
use warehouse_console::api::ApiClient;
use warehouse_console::views::ViewContext;

/// Collection name and the id prefix the backend assigns
pub const COLLECTIONS: [(&str, &str); 5] = [
    ("products", "SP"),
    ("employees", "NV"),
    ("suppliers", "NCC"),
    ("customers", "KH"),
    ("transactions", "TX"),
];

#[derive(Default)]
pub struct MockDb {
    pub collections: HashMap<&'static str, Vec<Value>>,
    pub orders: HashMap<String, Vec<Value>>,
    pub inventory_report: Value,
    pub revenue_report: Value,
    pub dashboard_stats: Value,
    /// `"GET /products?search=abc"`, in arrival order
    pub requests: Vec<String>,
    /// Request bodies keyed like `requests`
    pub bodies: Vec<(String, Value)>,
    /// `"METHOD /collection"` keys answered with 500
    pub failing: HashSet<String>,
}

pub type Db = Arc<Mutex<MockDb>>;

fn new_id(prefix: &str) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}{}", prefix, hex[..8].to_uppercase())
}

fn fail(db: &Db, key: &str) -> Option<Response> {
    db.lock()
        .unwrap()
        .failing
        .contains(key)
        .then(|| (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response())
}

fn matches_search(record: &Value, term: &str) -> bool {
    let term = term.to_lowercase();
    record
        .as_object()
        .map(|fields| {
            fields
                .values()
                .filter_map(Value::as_str)
                .any(|v| v.to_lowercase().contains(&term))
        })
        .unwrap_or(false)
}

/// Transactions come back with camelCase reference keys
fn echo_transaction(body: Map<String, Value>) -> Map<String, Value> {
    body.into_iter()
        .map(|(key, value)| {
            let key = match key.as_str() {
                "product_id" => "productId".to_string(),
                "employee_id" => "employeeId".to_string(),
                "supplier_id" => "supplierId".to_string(),
                "customer_id" => "customerId".to_string(),
                _ => key,
            };
            (key, value)
        })
        .collect()
}

fn list(db: Db, name: &'static str, params: HashMap<String, String>) -> Response {
    let key = match params.get("search") {
        Some(term) => format!("GET /{}?search={}", name, term),
        None => format!("GET /{}", name),
    };
    db.lock().unwrap().requests.push(key);
    if let Some(response) = fail(&db, &format!("GET /{}", name)) {
        return response;
    }

    let guard = db.lock().unwrap();
    let rows: Vec<Value> = guard.collections[name]
        .iter()
        .filter(|record| match params.get("search") {
            Some(term) if !term.is_empty() => matches_search(record, term),
            _ => true,
        })
        .cloned()
        .collect();
    Json(rows).into_response()
}

fn create(db: Db, name: &'static str, prefix: &'static str, body: Value) -> Response {
    let key = format!("POST /{}", name);
    {
        let mut guard = db.lock().unwrap();
        guard.requests.push(key.clone());
        guard.bodies.push((key.clone(), body.clone()));
    }
    if let Some(response) = fail(&db, &key) {
        return response;
    }

    let Value::Object(mut fields) = body else {
        return (StatusCode::UNPROCESSABLE_ENTITY, "expected an object").into_response();
    };
    if name == "transactions" {
        fields = echo_transaction(fields);
    }
    if name == "employees" {
        fields.insert("revenue_contribution".into(), json!(0.0));
    }
    fields.insert("id".into(), json!(new_id(prefix)));

    let record = Value::Object(fields);
    db.lock()
        .unwrap()
        .collections
        .get_mut(name)
        .expect("collection")
        .push(record.clone());
    (StatusCode::CREATED, Json(record)).into_response()
}

fn update(db: Db, name: &'static str, id: String, body: Value) -> Response {
    let key = format!("PUT /{}", name);
    {
        let mut guard = db.lock().unwrap();
        guard.requests.push(format!("PUT /{}/{}", name, id));
        guard.bodies.push((key.clone(), body.clone()));
    }
    if let Some(response) = fail(&db, &key) {
        return response;
    }

    let mut guard = db.lock().unwrap();
    let rows = guard.collections.get_mut(name).expect("collection");
    let Some(record) = rows.iter_mut().find(|r| r["id"] == json!(id)) else {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found"}))).into_response();
    };
    if let (Some(target), Value::Object(fields)) = (record.as_object_mut(), body) {
        let fields = if name == "transactions" {
            echo_transaction(fields)
        } else {
            fields
        };
        target.extend(fields);
    }
    Json(record.clone()).into_response()
}

fn remove(db: Db, name: &'static str, id: String) -> Response {
    let key = format!("DELETE /{}", name);
    db.lock()
        .unwrap()
        .requests
        .push(format!("DELETE /{}/{}", name, id));
    if let Some(response) = fail(&db, &key) {
        return response;
    }

    let mut guard = db.lock().unwrap();
    let rows = guard.collections.get_mut(name).expect("collection");
    match rows.iter().position(|r| r["id"] == json!(id)) {
        Some(index) => {
            rows.remove(index);
            StatusCode::NO_CONTENT.into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found"}))).into_response(),
    }
}

fn collection_routes(router: Router<Db>, name: &'static str, prefix: &'static str) -> Router<Db> {
    router
        .route(
            &format!("/{}", name),
            get(
                move |State(db): State<Db>, Query(params): Query<HashMap<String, String>>| async move {
                    list(db, name, params)
                },
            )
            .post(move |State(db): State<Db>, Json(body): Json<Value>| async move {
                create(db, name, prefix, body)
            }),
        )
        .route(
            &format!("/{}/:id", name),
            axum::routing::put(
                move |State(db): State<Db>, Path(id): Path<String>, Json(body): Json<Value>| async move {
                    update(db, name, id, body)
                },
            )
            .delete(move |State(db): State<Db>, Path(id): Path<String>| async move {
                remove(db, name, id)
            }),
        )
}

fn report(db: Db, path: &str, pick: fn(&MockDb) -> Value) -> Response {
    db.lock().unwrap().requests.push(format!("GET {}", path));
    if let Some(response) = fail(&db, &format!("GET {}", path)) {
        return response;
    }
    let value = pick(&db.lock().unwrap());
    Json(value).into_response()
}

fn app(db: Db) -> Router {
    let mut router = Router::new();
    for (name, prefix) in COLLECTIONS {
        router = collection_routes(router, name, prefix);
    }
    router
        .route(
            "/customers/:id/orders",
            get(|State(db): State<Db>, Path(id): Path<String>| async move {
                db.lock()
                    .unwrap()
                    .requests
                    .push(format!("GET /customers/{}/orders", id));
                if let Some(response) = fail(&db, "GET /customers/orders") {
                    return response;
                }
                let orders = db.lock().unwrap().orders.get(&id).cloned().unwrap_or_default();
                Json(orders).into_response()
            }),
        )
        .route(
            "/inventory-report",
            get(|State(db): State<Db>| async move {
                report(db, "/inventory-report", |d| d.inventory_report.clone())
            }),
        )
        .route(
            "/revenue-report",
            get(|State(db): State<Db>| async move {
                report(db, "/revenue-report", |d| d.revenue_report.clone())
            }),
        )
        .route(
            "/dashboard-stats",
            get(|State(db): State<Db>| async move {
                report(db, "/dashboard-stats", |d| d.dashboard_stats.clone())
            }),
        )
        .with_state(db)
}

impl MockDb {
    /// Small data set in the backend's wire format
    pub fn seeded() -> Self {
        let mut collections = HashMap::new();
        collections.insert(
            "products",
            vec![
                json!({
                    "id": "P1", "name": "Laptop Gaming ABC", "category": "Laptop",
                    "XuatXu": "Trung Quốc", "NgaySX": "2023-01-15", "HanSD": "2028-01-15",
                    "stock": 50, "GiaNhap": 20000000.0, "price": 25000000.0
                }),
                json!({
                    "id": "P2", "name": "Chuột không dây", "category": "Phụ kiện",
                    "XuatXu": "Việt Nam", "NgaySX": null, "HanSD": null,
                    "stock": 200, "GiaNhap": 150000.0, "price": 250000.0
                }),
            ],
        );
        collections.insert(
            "employees",
            vec![json!({
                "id": "E1", "name": "Nguyễn Văn A", "gender": "Nam", "phone": "0901112222",
                "address": "123 Lê Lợi, TP.HCM", "position": "Quản lý kho",
                "revenue_contribution": 1250000.0
            })],
        );
        collections.insert(
            "suppliers",
            vec![json!({
                "id": "S1", "name": "Công ty Phương Nam", "contactPerson": "Nguyễn Bách",
                "phone": "0901234567", "email": "phuongnam@example.com",
                "address": "123 Đường ABC, TP.HCM"
            })],
        );
        collections.insert(
            "customers",
            vec![
                json!({"id": "C1", "name": "Nguyễn Thị D", "phone": "0912345678", "address": "Hà Nội"}),
                json!({"id": "C2", "name": "Trần Văn E", "phone": "0987654321", "address": "Đà Nẵng"}),
            ],
        );
        collections.insert(
            "transactions",
            vec![json!({
                "id": "T1", "type": "import", "productId": "P1", "quantity": 10,
                "price": 20000000.0, "date": "2024-05-01", "employeeId": "E1",
                "supplierId": "S1", "customerId": null
            })],
        );

        let mut orders = HashMap::new();
        orders.insert(
            "C1".to_string(),
            vec![json!({
                "id": "T9", "product_id": "P2", "quantity": 2,
                "totalAmount": 500000.0, "date": "2024-05-03"
            })],
        );

        Self {
            collections,
            orders,
            inventory_report: json!([
                {"warehouse_id": "W1", "product_id": "P1", "product_name": "Laptop Gaming ABC",
                 "current_stock": 50, "total_imports": 60, "total_exports": 10}
            ]),
            revenue_report: json!([
                {"month": "2024-04", "total_revenue": 12500000.0},
                {"month": "2024-05", "total_revenue": 1500000.5}
            ]),
            dashboard_stats: json!({
                "totalProducts": 1250, "newOrders": 8, "totalInventoryValue": 1500000000.0,
                "totalRevenueLastMonth": 12500000.0, "pendingTransactions": 3,
                "topSellingProduct": "Laptop Gaming ABC"
            }),
            ..Default::default()
        }
    }
}

pub struct MockBackend {
    pub base_url: String,
    pub db: Db,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self::start_with(MockDb::seeded()).await
    }

    pub async fn start_with(db: MockDb) -> Self {
        let db: Db = Arc::new(Mutex::new(db));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("local addr");
        let router = app(db.clone());
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock backend");
        });

        Self {
            base_url: format!("http://{}", addr),
            db,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::with_base_url(&self.base_url)
    }

    /// Vietnamese UI, 50 ms debounce, transaction updates disabled
    pub fn ctx(&self) -> ViewContext {
        ViewContext {
            api: self.client(),
            language: Language::Vietnamese,
            debounce: Duration::from_millis(50),
            transaction_updates: false,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.db.lock().unwrap().requests.clone()
    }

    pub fn clear_requests(&self) {
        let mut db = self.db.lock().unwrap();
        db.requests.clear();
        db.bodies.clear();
    }

    /// Bodies received for `"METHOD /collection"`
    pub fn bodies(&self, key: &str) -> Vec<Value> {
        self.db
            .lock()
            .unwrap()
            .bodies
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn fail(&self, key: &str) {
        self.db.lock().unwrap().failing.insert(key.to_string());
    }

    pub fn collection(&self, name: &str) -> Vec<Value> {
        self.db.lock().unwrap().collections[name].clone()
    }
}
