use crate::clients::{CartClient, CheckoutClient};
use crate::config::StorefrontConfig;
use crate::services::{CatalogClient, HttpOrderService, OrderService};
use crate::{cart_actor, checkout_actor};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors from starting or stopping a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(String),
}

/// One shopper's session: the cart, checkout and catalog, wired together.
///
/// `StorefrontSession` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the cart and checkout actors
/// - **Dependency Wiring**: Injecting the single cart client into checkout, so every
///   consumer works on the same cart
///
/// # Example
///
/// ```ignore
/// let session = StorefrontSession::new(&StorefrontConfig::from_env()?)?;
///
/// let products = session.catalog_client.list_products().await;
/// session.cart_client.add_product(&products[0]).await?;
/// let confirmation = session.checkout_client.checkout().await?;
///
/// session.shutdown().await?;
/// ```
pub struct StorefrontSession {
    /// Client for the session's cart
    pub cart_client: CartClient,

    /// Client for placing the cart as an order
    pub checkout_client: CheckoutClient,

    /// Product listing
    pub catalog_client: CatalogClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSession {
    /// Starts a session talking to the collaborators named in `config`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &StorefrontConfig) -> Result<Self, SessionError> {
        let http = reqwest::Client::builder().build()?;
        let orders = Arc::new(HttpOrderService::new(http.clone(), config.order_api_url.clone()));
        let catalog = CatalogClient::new(http, config.product_api_url.clone());
        Ok(Self::with_services(orders, catalog))
    }

    /// Starts a session with explicit collaborators.
    pub fn with_services(orders: Arc<dyn OrderService>, catalog_client: CatalogClient) -> Self {
        // 1. Cart actor: the one authoritative cart for this session
        let (cart_actor, cart_client) = cart_actor::new();
        let cart_handle = tokio::spawn(cart_actor.run());

        // 2. Checkout actor, orchestrating over the same cart
        let (checkout_actor, checkout_resource_client) = checkout_actor::new();
        let checkout_client = CheckoutClient::new(checkout_resource_client, cart_client.clone(), orders);
        let checkout_handle = tokio::spawn(checkout_actor.run());

        info!("Session started");
        Self {
            cart_client,
            checkout_client,
            catalog_client,
            handles: vec![cart_handle, checkout_handle],
        }
    }

    /// Gracefully shuts down the session.
    ///
    /// Drops the session's clients, which closes the actors' channels once no other
    /// clone is alive, then waits for every actor task to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(SessionError::ActorTaskFailed)` if any actor task panicked
    pub async fn shutdown(self) -> Result<(), SessionError> {
        info!("Shutting down session...");

        // Checkout holds a cart clone; dropping both closes both channels.
        drop(self.checkout_client);
        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SessionError::ActorTaskFailed(e.to_string()));
            }
        }

        info!("Session shutdown complete.");
        Ok(())
    }
}
