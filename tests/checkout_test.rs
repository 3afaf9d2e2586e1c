use async_trait::async_trait;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use rust_decimal_macros::dec;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use storefront_cart::checkout_actor::CheckoutError;
use storefront_cart::clients::{ActorClient, CheckoutClient};
use storefront_cart::{cart_actor, checkout_actor};
use storefront_cart::config::StorefrontConfig;
use storefront_cart::lifecycle::StorefrontSession;
use storefront_cart::model::{CartEntry, CheckoutPhase, OrderConfirmation, OrderRequest, OrderResponse};
use storefront_cart::services::{CatalogClient, OrderService, OrderServiceError};
use tokio::sync::Notify;

fn session_for(server_url: &str) -> StorefrontSession {
    let config = StorefrontConfig {
        product_api_url: server_url.to_string(),
        order_api_url: server_url.to_string(),
    };
    StorefrontSession::new(&config).unwrap()
}

async fn fill_cart(session: &StorefrontSession) {
    let cart = &session.cart_client;
    cart.add_item(CartEntry::new("1", "X", "S1", dec!(3.00), 2)).await.unwrap();
    cart.add_item(CartEntry::new("2", "Y", "S2", dec!(7.50), 1)).await.unwrap();
}

fn confirmation_body() -> serde_json::Value {
    json!({
        "message": "Order created successfully",
        "order": {
            "items": [
                { "name": "X", "sku": "S1", "quantity": "2" },
                { "name": "Y", "sku": "S2", "quantity": "1" }
            ],
            "orderId": "ord-7f3a",
            "timestamp": "2024-05-01T10:00:00.000Z",
            "status": "pending"
        }
    })
}

fn order_body(order_id: &str, items: serde_json::Value) -> serde_json::Value {
    json!({
        "message": "Order created successfully",
        "order": {
            "items": items,
            "orderId": order_id,
            "timestamp": "2024-05-01T10:00:00.000Z",
            "status": "pending"
        }
    })
}

/// Success: the body sent is the projection with string quantities, the cart ends
/// empty, and the confirmation equals the response body.
#[tokio::test]
async fn test_checkout_success_clears_cart() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/order")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "items": [
                { "name": "X", "sku": "S1", "quantity": "2" },
                { "name": "Y", "sku": "S2", "quantity": "1" }
            ]
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(confirmation_body().to_string())
        .create_async()
        .await;

    let session = session_for(&server.url());
    fill_cart(&session).await;

    let confirmation = session.checkout_client.checkout().await.unwrap();

    let expected: OrderResponse = serde_json::from_value(confirmation_body()).unwrap();
    assert_eq!(confirmation, expected.order);
    assert!(session.cart_client.snapshot().await.unwrap().is_empty());
    assert_eq!(
        session.checkout_client.snapshot().await.unwrap(),
        CheckoutPhase::Confirmed(expected.order)
    );

    session.checkout_client.dismiss_confirmation().await.unwrap();
    assert_eq!(session.checkout_client.snapshot().await.unwrap(), CheckoutPhase::Idle);

    mock.assert_async().await;
    session.shutdown().await.unwrap();
}

/// Non-2xx: uniform failure, cart identical to before, phase back to Idle.
#[tokio::test]
async fn test_checkout_rejected_leaves_cart_untouched() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/order")
        .with_status(400)
        .with_body(r#"{"error":"Invalid items"}"#)
        .expect(1)
        .create_async()
        .await;

    let session = session_for(&server.url());
    fill_cart(&session).await;
    let before = session.cart_client.snapshot().await.unwrap();

    let result = session.checkout_client.checkout().await;

    assert_eq!(result, Err(CheckoutError::OrderFailed));
    assert_eq!(session.cart_client.snapshot().await.unwrap(), before);
    assert_eq!(session.checkout_client.snapshot().await.unwrap(), CheckoutPhase::Idle);

    mock.assert_async().await;
    session.shutdown().await.unwrap();
}

/// A 2xx with a body that is not a confirmation is a failure too.
#[tokio::test]
async fn test_checkout_unreadable_confirmation_leaves_cart_untouched() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/order")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let session = session_for(&server.url());
    fill_cart(&session).await;
    let before = session.cart_client.snapshot().await.unwrap();

    assert_eq!(session.checkout_client.checkout().await, Err(CheckoutError::OrderFailed));
    assert_eq!(session.cart_client.snapshot().await.unwrap(), before);

    session.shutdown().await.unwrap();
}

/// Transport error: nothing listening on the order service port.
#[tokio::test]
async fn test_checkout_transport_error_leaves_cart_untouched() {
    let session = session_for("http://127.0.0.1:9");
    fill_cart(&session).await;
    let before = session.cart_client.snapshot().await.unwrap();

    assert_eq!(session.checkout_client.checkout().await, Err(CheckoutError::OrderFailed));
    assert_eq!(session.cart_client.snapshot().await.unwrap(), before);
    assert_eq!(session.checkout_client.snapshot().await.unwrap(), CheckoutPhase::Idle);

    session.shutdown().await.unwrap();
}

/// An empty cart is still submitted, as an empty item list.
#[tokio::test]
async fn test_checkout_empty_cart_submits_empty_items() {
    let mut server = Server::new_async().await;
    let body = json!({
        "message": "Order created successfully",
        "order": { "items": [], "orderId": "ord-0", "timestamp": "t", "status": "pending" }
    });
    let mock = server
        .mock("POST", "/order")
        .match_body(Matcher::Json(json!({ "items": [] })))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let session = session_for(&server.url());

    let confirmation = session.checkout_client.checkout().await.unwrap();
    assert_eq!(confirmation.order_id, "ord-0");

    mock.assert_async().await;
    session.shutdown().await.unwrap();
}

// --- Fakes at the OrderService seam ---

/// Holds every submission until released.
struct GatedOrderService {
    started: Notify,
    release: Notify,
    calls: AtomicUsize,
}

#[async_trait]
impl OrderService for GatedOrderService {
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderResponse, OrderServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.release.notified().await;
        Ok(OrderResponse {
            message: "ok".into(),
            order: OrderConfirmation {
                order_id: "ord-gated".into(),
                timestamp: "2024-01-01T00:00:00Z".into(),
                status: "pending".into(),
                items: request.items.clone(),
            },
        })
    }
}

struct RejectingOrderService;

#[async_trait]
impl OrderService for RejectingOrderService {
    async fn submit_order(&self, _request: &OrderRequest) -> Result<OrderResponse, OrderServiceError> {
        Err(OrderServiceError::Rejected {
            status: StatusCode::SERVICE_UNAVAILABLE,
        })
    }
}

fn unused_catalog() -> CatalogClient {
    CatalogClient::new(reqwest::Client::new(), "http://127.0.0.1:9")
}

/// A second checkout while the first is in flight is refused and sends nothing.
#[tokio::test]
async fn test_concurrent_checkout_is_rejected() {
    let orders = Arc::new(GatedOrderService {
        started: Notify::new(),
        release: Notify::new(),
        calls: AtomicUsize::new(0),
    });
    let session = StorefrontSession::with_services(orders.clone(), unused_catalog());
    fill_cart(&session).await;

    let first = tokio::spawn({
        let checkout = session.checkout_client.clone();
        async move { checkout.checkout().await }
    });
    orders.started.notified().await;
    assert!(session.checkout_client.snapshot().await.unwrap().is_submitting());

    let second = session.checkout_client.checkout().await;
    assert_eq!(second, Err(CheckoutError::AlreadyInProgress));

    orders.release.notify_one();
    let confirmation = first.await.unwrap().unwrap();
    assert_eq!(confirmation.order_id, "ord-gated");
    assert_eq!(confirmation.items.len(), 2);
    assert_eq!(orders.calls.load(Ordering::SeqCst), 1);
    assert!(session.cart_client.snapshot().await.unwrap().is_empty());

    session.shutdown().await.unwrap();
}

/// After a failure the next attempt is independent and can succeed.
#[tokio::test]
async fn test_failed_attempt_returns_to_idle() {
    let session = StorefrontSession::with_services(Arc::new(RejectingOrderService), unused_catalog());
    fill_cart(&session).await;
    let mut phases = session.checkout_client.subscribe();

    assert_eq!(session.checkout_client.checkout().await, Err(CheckoutError::OrderFailed));
    assert!(phases.has_changed().unwrap());
    assert_eq!(*phases.borrow_and_update(), CheckoutPhase::Idle);
    assert_eq!(session.cart_client.total_item_count().await.unwrap(), 3);

    assert_eq!(session.checkout_client.checkout().await, Err(CheckoutError::OrderFailed));
    assert_eq!(session.cart_client.total_price().await.unwrap(), dec!(13.50));

    session.shutdown().await.unwrap();
}

/// A second order placed straight from `Confirmed` replaces the first confirmation.
#[tokio::test]
async fn test_checkout_twice_without_dismiss() {
    let first_items = json!([
        { "name": "X", "sku": "S1", "quantity": "2" },
        { "name": "Y", "sku": "S2", "quantity": "1" }
    ]);
    let second_items = json!([{ "name": "Z", "sku": "S3", "quantity": "4" }]);

    let mut server = Server::new_async().await;
    let first_mock = server
        .mock("POST", "/order")
        .match_body(Matcher::Json(json!({ "items": first_items.clone() })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(order_body("ord-1", first_items).to_string())
        .expect(1)
        .create_async()
        .await;
    let second_mock = server
        .mock("POST", "/order")
        .match_body(Matcher::Json(json!({ "items": second_items.clone() })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(order_body("ord-2", second_items).to_string())
        .expect(1)
        .create_async()
        .await;

    let session = session_for(&server.url());
    fill_cart(&session).await;
    let first = session.checkout_client.checkout().await.unwrap();
    assert_eq!(first.order_id, "ord-1");

    session
        .cart_client
        .add_item(CartEntry::new("3", "Z", "S3", dec!(1.25), 4))
        .await
        .unwrap();
    let second = session.checkout_client.checkout().await.unwrap();

    assert_eq!(second.order_id, "ord-2");
    assert_eq!(second.items[0].quantity, "4");
    assert_eq!(
        session.checkout_client.snapshot().await.unwrap(),
        CheckoutPhase::Confirmed(second)
    );
    assert!(session.cart_client.snapshot().await.unwrap().is_empty());
    first_mock.assert_async().await;
    second_mock.assert_async().await;

    session.shutdown().await.unwrap();
}

/// A caller that gives up on a checkout does not strand the session in `Submitting`.
#[tokio::test]
async fn test_abandoned_checkout_still_settles() {
    let orders = Arc::new(GatedOrderService {
        started: Notify::new(),
        release: Notify::new(),
        calls: AtomicUsize::new(0),
    });
    let session = StorefrontSession::with_services(orders.clone(), unused_catalog());
    fill_cart(&session).await;
    let mut cart = session.cart_client.subscribe();

    let abandoned = tokio::time::timeout(Duration::from_millis(100), session.checkout_client.checkout()).await;
    assert!(abandoned.is_err());
    orders.started.notified().await;
    assert!(session.checkout_client.snapshot().await.unwrap().is_submitting());

    orders.release.notify_one();
    cart.wait_for(|state| state.is_empty()).await.unwrap();
    let settled = session.checkout_client.snapshot().await.unwrap();
    assert_eq!(settled.confirmation().map(|c| c.order_id.as_str()), Some("ord-gated"));

    fill_cart(&session).await;
    orders.release.notify_one();
    let retry = session.checkout_client.checkout().await;

    assert_eq!(retry.map(|c| c.items.len()), Ok(2));
    assert_eq!(orders.calls.load(Ordering::SeqCst), 2);

    session.shutdown().await.unwrap();
}

/// Once the order service accepts, the confirmation is returned even if the cart
/// can no longer be cleared.
#[tokio::test]
async fn test_confirmation_survives_cart_clear_failure() {
    let orders = Arc::new(GatedOrderService {
        started: Notify::new(),
        release: Notify::new(),
        calls: AtomicUsize::new(0),
    });
    let (cart_actor, cart) = cart_actor::new();
    let cart_task = tokio::spawn(cart_actor.run());
    let (phase_actor, phase) = checkout_actor::new();
    let phase_task = tokio::spawn(phase_actor.run());
    let checkout = CheckoutClient::new(phase, cart.clone(), orders.clone());

    cart.add_item(CartEntry::new("1", "X", "S1", dec!(3.00), 2)).await.unwrap();
    let pending = tokio::spawn({
        let checkout = checkout.clone();
        async move { checkout.checkout().await }
    });
    orders.started.notified().await;

    cart_task.abort();
    assert!(cart_task.await.unwrap_err().is_cancelled());
    orders.release.notify_one();

    let confirmation = pending.await.unwrap().unwrap();
    assert_eq!(confirmation.order_id, "ord-gated");
    assert_eq!(
        checkout.snapshot().await.unwrap(),
        CheckoutPhase::Confirmed(confirmation)
    );
    assert!(cart.clear_cart().await.is_err());

    drop(checkout);
    drop(cart);
    phase_task.await.unwrap();
}
