//! # Checkout Client
//!
//! Orchestrates a checkout: reads the cart, submits the order, and reconciles the
//! outcome into the cart and the checkout phase.

use crate::checkout_actor::{CheckoutAction, CheckoutError};
use crate::clients::actor_client::ActorClient;
use crate::clients::CartClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CheckoutPhase, OrderConfirmation, OrderRequest};
use crate::services::OrderService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument, warn, Instrument, Span};

/// Client for checking out the session's cart.
///
/// Each call to [`CheckoutClient::checkout`] is one independent attempt. Only one
/// attempt per session may be in flight; a second one is refused, not queued.
#[derive(Clone)]
pub struct CheckoutClient {
    inner: ResourceClient<CheckoutPhase>,
    cart: CartClient,
    orders: Arc<dyn OrderService>,
}

impl CheckoutClient {
    pub fn new(inner: ResourceClient<CheckoutPhase>, cart: CartClient, orders: Arc<dyn OrderService>) -> Self {
        Self { inner, cart, orders }
    }

    async fn transition(&self, action: CheckoutAction) -> Result<bool, CheckoutError> {
        self.inner.perform_action(action).await.map_err(Self::map_error)
    }

    /// Places an order for the current cart.
    ///
    /// On success the cart is emptied and the confirmation is returned and held in
    /// [`CheckoutPhase::Confirmed`] until dismissed. On any order-service failure the
    /// cart is left exactly as it was and [`CheckoutError::OrderFailed`] is returned.
    ///
    /// The attempt runs on its own task. Dropping the returned future does not
    /// cancel it: the request is still awaited and the phase still settles.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<OrderConfirmation, CheckoutError> {
        let client = self.clone();
        tokio::spawn(async move { client.attempt().await }.instrument(Span::current()))
            .await
            .map_err(|e| CheckoutError::ActorCommunicationError(e.to_string()))?
    }

    async fn attempt(&self) -> Result<OrderConfirmation, CheckoutError> {
        if !self.transition(CheckoutAction::Begin).await? {
            warn!("Checkout already in progress");
            return Err(CheckoutError::AlreadyInProgress);
        }

        let cart = match self.cart.snapshot().await {
            Ok(cart) => cart,
            Err(e) => {
                self.transition(CheckoutAction::Fail).await?;
                return Err(e.into());
            }
        };
        if cart.is_empty() {
            warn!("Checking out an empty cart");
        }

        let request = OrderRequest::from(&cart);
        info!(items = request.items.len(), "Placing order");

        match self.orders.submit_order(&request).await {
            Ok(response) => {
                let confirmation = response.order;
                info!(order_id = %confirmation.order_id, message = %response.message, "Order placed");
                self.transition(CheckoutAction::Confirm(confirmation.clone())).await?;
                // The order is placed whether or not the cart clears.
                if let Err(e) = self.cart.clear_cart().await {
                    error!(order_id = %confirmation.order_id, error = %e, "Order placed but cart not cleared");
                }
                Ok(confirmation)
            }
            Err(e) => {
                warn!(error = %e, "Error placing order");
                self.transition(CheckoutAction::Fail).await?;
                Err(CheckoutError::OrderFailed)
            }
        }
    }

    /// Closes the confirmation. Does nothing unless an order is confirmed.
    #[instrument(skip(self))]
    pub async fn dismiss_confirmation(&self) -> Result<(), CheckoutError> {
        self.transition(CheckoutAction::Dismiss).await?;
        Ok(())
    }
}

#[async_trait]
impl ActorClient<CheckoutPhase> for CheckoutClient {
    type Error = CheckoutError;

    fn inner(&self) -> &ResourceClient<CheckoutPhase> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CheckoutError::ActorCommunicationError(e.to_string())
    }
}
