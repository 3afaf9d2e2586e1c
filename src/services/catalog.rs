use super::{endpoint, CatalogError};
use crate::model::Product;
use tracing::{debug, instrument, warn};

/// Reads the product listing from `GET {base_url}/api/products`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetches the listing. A body that is not a JSON list is an error.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = endpoint(&self.base_url, "/api/products");
        debug!(%url, "Fetching products");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(CatalogError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Rejected { status });
        }

        let products = response
            .json::<Vec<Product>>()
            .await
            .map_err(CatalogError::Decode)?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    /// The listing shown to shoppers: any fetch failure degrades to an empty list.
    pub async fn list_products(&self) -> Vec<Product> {
        match self.fetch_products().await {
            Ok(products) => products,
            Err(e) => {
                warn!(error = %e, "Error fetching products");
                Vec::new()
            }
        }
    }
}
