//! Storefront demo binary
//!
//! Walks a small shopping session through the store: load a catalog, browse
//! by category, fill the cart, and print the resulting state tree.

use rust_decimal::Decimal;
use storefront_state::slices::cart::CartAction;
use storefront_state::slices::category::CategoryAction;
use storefront_state::slices::product::ProductAction;
use storefront_state::slices::wishlist::WishListAction;
use storefront_state::store::create_store;
use storefront_state::types::Product;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn catalog() -> Vec<Product> {
    vec![
        Product {
            id: "tote-1".into(),
            name: "Canvas Tote".into(),
            price: Decimal::new(2999, 2),
            original_price: Some(Decimal::new(3999, 2)),
            description: "A sturdy everyday tote.".into(),
            image: "/images/tote.jpg".into(),
            category: "bags".into(),
            rating: 4.5,
            reviews: 120,
            in_stock: true,
            variants: None,
        },
        Product {
            id: "sneaker-1".into(),
            name: "Court Sneaker".into(),
            price: Decimal::new(7400, 2),
            original_price: None,
            description: "Low-top court sneaker.".into(),
            image: "/images/sneaker.jpg".into(),
            category: "shoes".into(),
            rating: 4.2,
            reviews: 310,
            in_stock: true,
            variants: None,
        },
    ]
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_state=debug,storefront_state_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Storefront State Demo ===\n");

    let store = create_store();
    let products = catalog();

    println!(">>> Loading catalog ({} products)", products.len());
    store
        .dispatch(ProductAction::SetProducts(products.clone()))
        .await;
    store
        .dispatch(CategoryAction::SetCategories(vec![
            "bags".into(),
            "shoes".into(),
        ]))
        .await;

    println!(">>> Browsing the shoes category");
    store.dispatch(CategoryAction::Select("shoes".into())).await;

    println!(">>> Saving the tote for later");
    store
        .dispatch(WishListAction::Toggle(products[0].clone()))
        .await;

    println!(">>> Adding two pairs of sneakers to the cart");
    store
        .dispatch(CartAction::Add {
            product: products[1].clone(),
            quantity: 2,
            selected_variants: None,
        })
        .await;

    let (subtotal, count) = store
        .select(|s| (s.cart.subtotal(), s.cart.item_count()))
        .await;
    println!("\nCart: {count} items, subtotal {subtotal}");

    let snapshot = store.select(Clone::clone).await;
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("\nState tree after {} dispatches:\n{json}", store.version()),
        Err(error) => eprintln!("failed to serialize state: {error}"),
    }
}
