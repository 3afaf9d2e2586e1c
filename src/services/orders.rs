use super::{endpoint, OrderServiceError};
use crate::model::{OrderRequest, OrderResponse};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Accepts order submissions.
///
/// Checkout depends on this trait rather than on HTTP so it can be driven by fakes.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Submits the order once. Implementations must not retry.
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResponse, OrderServiceError>;
}

/// [`OrderService`] backed by `POST {base_url}/order`.
#[derive(Debug, Clone)]
pub struct HttpOrderService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpOrderService {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl OrderService for HttpOrderService {
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResponse, OrderServiceError> {
        let url = endpoint(&self.base_url, "/order");
        debug!(%url, ?request, "Submitting order");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(OrderServiceError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(OrderServiceError::Rejected { status });
        }

        response
            .json::<OrderResponse>()
            .await
            .map_err(OrderServiceError::Decode)
    }
}
