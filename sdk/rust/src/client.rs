use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product as exchanged with the catalog API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(rename = "isNew")]
    pub is_new: bool,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("catalog returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    /// HTTP status of an API-level failure.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured reqwest client (proxies, timeouts).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    fn product_url(&self, id: &str) -> String {
        format!("{}/api/products/{}", self.base_url, id)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let resp = self.client.get(self.products_url()).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, ClientError> {
        let resp = self.client.get(self.product_url(id)).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn create_product(&self, product: &Product) -> Result<Product, ClientError> {
        let resp = self.client.post(self.products_url()).json(product).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// Replace the product stored under `id`; the server keeps `id` regardless of `product.id`.
    pub async fn update_product(&self, id: &str, product: &Product) -> Result<Product, ClientError> {
        let resp = self.client.put(self.product_url(id)).json(product).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ClientError> {
        let resp = self.client.delete(self.product_url(id)).send().await?;
        check(resp).await?;
        Ok(())
    }
}

async fn check(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await?;
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(ErrorBody { message: Some(m), .. }) | Ok(ErrorBody { error: Some(m), .. }) => m,
        _ => text,
    };
    Err(ClientError::Api { status, message })
}
