//! # Cart Client
//!
//! The handle every UI surface (listing, cart page, cart panel) holds on the
//! session's cart. All clones address the same cart actor.

use crate::cart_actor::{CartAction, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CartEntry, CartState, Product};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
///
/// Mutations return the cart as it is after the mutation. Invalid arguments are
/// not errors: the cart comes back unchanged.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartState>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartState>) -> Self {
        Self { inner }
    }

    async fn apply(&self, action: CartAction) -> Result<CartState, CartError> {
        debug!("Sending request");
        self.inner
            .perform_action(action)
            .await
            .map(|result| result.state)
            .map_err(Self::map_error)
    }

    /// Adds `candidate`, merging into an existing entry with the same sku.
    #[instrument(skip(self, candidate), fields(sku = %candidate.sku, quantity = candidate.quantity))]
    pub async fn add_item(&self, candidate: CartEntry) -> Result<CartState, CartError> {
        self.apply(CartAction::AddItem(candidate)).await
    }

    /// Adds one unit of a catalog product.
    pub async fn add_product(&self, product: &Product) -> Result<CartState, CartError> {
        self.add_item(product.to_cart_entry()).await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, index: usize) -> Result<CartState, CartError> {
        self.apply(CartAction::RemoveItem(index)).await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(&self, index: usize, quantity: i64) -> Result<CartState, CartError> {
        self.apply(CartAction::UpdateQuantity { index, quantity }).await
    }

    /// The `+` stepper.
    pub async fn increment_quantity(&self, index: usize) -> Result<CartState, CartError> {
        self.apply(CartAction::StepQuantity { index, delta: 1 }).await
    }

    /// The `-` stepper. Stops at 1; use [`CartClient::remove_item`] to drop an entry.
    pub async fn decrement_quantity(&self, index: usize) -> Result<CartState, CartError> {
        self.apply(CartAction::StepQuantity { index, delta: -1 }).await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<CartState, CartError> {
        self.apply(CartAction::Clear).await
    }

    pub async fn total_item_count(&self) -> Result<u64, CartError> {
        Ok(self.snapshot().await?.total_item_count())
    }

    pub async fn total_price(&self) -> Result<Decimal, CartError> {
        Ok(self.snapshot().await?.total_price())
    }
}

#[async_trait]
impl ActorClient<CartState> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartState> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::ActorCommunicationError(e.to_string())
    }
}
