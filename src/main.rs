//! Demo: browse the catalog, fill the cart, and check out against the configured
//! collaborators.

use storefront_cart::clients::ActorClient;
use storefront_cart::config::StorefrontConfig;
use storefront_cart::lifecycle::{setup_tracing, StorefrontSession};
use storefront_cart::model::display_price;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    info!(?config, "Starting storefront session");
    let session = StorefrontSession::new(&config)?;

    let products = session.catalog_client.list_products().await;
    info!(count = products.len(), "Featured products");

    let Some(product) = products.first() else {
        warn!("Catalog is empty; nothing to order");
        session.shutdown().await?;
        return Ok(());
    };

    let span = tracing::info_span!("shopping");
    async {
        // Adding the same product twice merges into one entry.
        session.cart_client.add_product(product).await?;
        let cart = session.cart_client.add_product(product).await?;
        info!(
            entries = cart.len(),
            items = cart.total_item_count(),
            total = %display_price(cart.total_price()),
            "Cart ready"
        );
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    let outcome = session.checkout_client.checkout().instrument(span).await;
    match outcome {
        Ok(confirmation) => {
            info!(
                order_id = %confirmation.order_id,
                status = %confirmation.display_status(),
                placed_at = %confirmation.timestamp,
                "Order confirmed"
            );
            session.checkout_client.dismiss_confirmation().await?;
        }
        Err(e) => {
            let cart = session.cart_client.snapshot().await?;
            error!(error = %e, items = cart.total_item_count(), "Order placement failed; cart kept");
        }
    }

    session.shutdown().await?;
    info!("Session completed");
    Ok(())
}
