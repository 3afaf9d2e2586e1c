//! Error types for the HTTP collaborators.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from submitting an order.
///
/// These are detail for logs. Checkout folds all of them into
/// [`CheckoutError::OrderFailed`](crate::checkout_actor::CheckoutError::OrderFailed).
#[derive(Debug, Error)]
pub enum OrderServiceError {
    /// The request never got a response.
    #[error("Order service unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// The order service answered with a non-success status.
    #[error("Order service rejected the order with status {status}")]
    Rejected { status: StatusCode },

    /// A success response whose body is not an order confirmation.
    #[error("Unreadable order confirmation: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Errors from fetching the product listing.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Catalog responded with status {status}")]
    Rejected { status: StatusCode },

    /// The body was not a list of products.
    #[error("Unreadable product listing: {0}")]
    Decode(#[source] reqwest::Error),
}
