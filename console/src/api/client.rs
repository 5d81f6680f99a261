//! HTTP client for the warehouse REST backend


use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{CustomerOrder, DashboardStats, EntityForm, InventoryReport, RevenueReport};

use super::Resource;
use crate::config::ApiConfig;
use crate::error::{ConsoleError, ConsoleResult};

type PayloadOf<R> = <<R as Resource>::Form as EntityForm>::Payload;

/// Backend API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &ApiConfig) -> ConsoleResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========== Collections ==========

    /// `GET /<resource>`, with `?search=` only when the term is non-empty
    pub async fn list<R: Resource>(&self, search: &str) -> ConsoleResult<Vec<R>> {
        let search = search.trim();
        let mut request = self.request(Method::GET, R::PATH);
        if !search.is_empty() {
            request = request.query(&[("search", search)]);
        }
        self.send(Method::GET, R::PATH, request).await
    }

    /// `POST /<resource>`; returns the record with its backend-assigned id
    pub async fn create<R: Resource>(&self, payload: &PayloadOf<R>) -> ConsoleResult<R> {
        let request = self.request(Method::POST, R::PATH).json(payload);
        self.send(Method::POST, R::PATH, request).await
    }

    /// `PUT /<resource>/{id}`
    pub async fn update<R: Resource>(&self, id: &str, payload: &PayloadOf<R>) -> ConsoleResult<R> {
        let path = format!("{}/{}", R::PATH, id);
        let request = self.request(Method::PUT, &path).json(payload);
        self.send(Method::PUT, &path, request).await
    }

    /// `DELETE /<resource>/{id}`; any 2xx counts, `204 No Content` included
    pub async fn delete<R: Resource>(&self, id: &str) -> ConsoleResult<()> {
        let path = format!("{}/{}", R::PATH, id);
        let request = self.request(Method::DELETE, &path);
        let response = self.dispatch(Method::DELETE, &path, request).await?;
        Self::check_status(&path, response).await?;
        Ok(())
    }

    // ========== Customers ==========

    /// `GET /customers/{id}/orders`
    pub async fn customer_orders(&self, customer_id: &str) -> ConsoleResult<Vec<CustomerOrder>> {
        let path = format!("/customers/{}/orders", customer_id);
        self.get(&path).await
    }

    // ========== Reports ==========

    pub async fn inventory_report(&self) -> ConsoleResult<InventoryReport> {
        self.get("/inventory-report").await
    }

    pub async fn revenue_report(&self) -> ConsoleResult<RevenueReport> {
        self.get("/revenue-report").await
    }

    pub async fn dashboard_stats(&self) -> ConsoleResult<DashboardStats> {
        self.get("/dashboard-stats").await
    }

    // ========== Plumbing ==========

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url, path))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ConsoleResult<T> {
        let request = self.request(Method::GET, path);
        self.send(Method::GET, path, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> ConsoleResult<T> {
        let response = self.dispatch(method, path, request).await?;
        Self::handle_response(path, response).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> ConsoleResult<Response> {
        tracing::debug!(%method, path, "backend request");
        request.send().await.map_err(|e| {
            tracing::error!(%method, path, error = %e, "backend request failed");
            ConsoleError::Http(e)
        })
    }

    async fn check_status(path: &str, response: Response) -> ConsoleResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(path, status = status.as_u16(), %body, "backend returned an error");
        Err(ConsoleError::Status {
            path: path.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    /// Check the status, then decode the body
    async fn handle_response<T: DeserializeOwned>(path: &str, response: Response) -> ConsoleResult<T> {
        let response = Self::check_status(path, response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(path, error = %e, "undecodable backend response");
            ConsoleError::Decode {
                path: path.to_string(),
                message: e.to_string(),
            }
        })
    }
}
