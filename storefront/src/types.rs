//! Shared domain type declarations.
//!
//! Structural contracts for the storefront's domain entities, consumed by
//! every slice. All types are immutable value snapshots: `Clone` for the
//! functional architecture, `serde` for the wire shape the backend speaks
//! (camelCase fields, lowercase discriminants). Relationships are by string
//! identity, never by reference, so the state tree stays cycle-free.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// `price` is non-negative by convention; the type does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identity (string key).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Decimal,
    /// Pre-discount price, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Long-form description.
    pub description: String,
    /// Image reference (URL or asset key).
    pub image: String,
    /// Category label.
    pub category: String,
    /// Average rating.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Whether the product is currently purchasable.
    pub in_stock: bool,
    /// Variant axes (size, color), when the product has any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,
}

impl Product {
    /// Whether the product is currently discounted below its original price.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }
}

/// One variant axis of a product (e.g. "Size" offering S/M/L).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant identity.
    pub id: String,
    /// Axis display name.
    pub name: String,
    /// Axis discriminant.
    #[serde(rename = "type")]
    pub kind: VariantKind,
    /// Ordered option values for this axis.
    pub options: Vec<String>,
}

/// The fixed set of variant axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    /// Sizing axis.
    Size,
    /// Color axis.
    Color,
}

impl VariantKind {
    /// Wire-format discriminant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Color => "color",
        }
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cart line: a product snapshot plus a quantity and any chosen
/// variant options (axis name → option value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The product being purchased.
    pub product: Product,
    /// Quantity; expected positive.
    pub quantity: u32,
    /// Chosen variant options, when the product has variant axes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variants: Option<HashMap<String, String>>,
}

impl CartItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// An authenticated storefront user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User identity.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar reference, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Authorization role.
    pub role: Role,
}

/// The fixed set of user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular shopper.
    User,
    /// Store administrator.
    Admin,
    /// Platform administrator.
    Superadmin,
}

impl Role {
    /// Wire-format discriminant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Superadmin => "superadmin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identity.
    pub id: String,
    /// Owning user identity.
    pub user_id: String,
    /// Ordered cart lines at time of purchase.
    pub items: Vec<CartItem>,
    /// Total amount charged.
    pub total: Decimal,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Shipping destination.
    pub shipping_address: Address,
}

/// The fixed set of order fulfillment states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Received, not yet processed.
    Pending,
    /// Being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

impl OrderStatus {
    /// Wire-format discriminant.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shipping address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Address identity.
    pub id: String,
    /// Recipient name.
    pub name: String,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    pub zip: String,
    /// Country.
    pub country: String,
    /// Contact phone.
    pub phone: String,
    /// Whether this is the user's default address; absent means false.
    #[serde(default)]
    pub is_default: bool,
}

/// Aggregate store statistics for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    /// Lifetime revenue.
    pub total_revenue: Decimal,
    /// Lifetime order count.
    pub total_orders: u64,
    /// Registered user count.
    pub total_users: u64,
    /// Catalog size.
    pub total_products: u64,
    /// Most recent orders, newest first.
    pub recent_orders: Vec<Order>,
    /// Per-month sales figures.
    pub monthly_sales: Vec<MonthlySales>,
}

/// One (month, sales) data point for the dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    /// Month label (e.g. "Jan").
    pub month: String,
    /// Sales total for that month.
    pub sales: Decimal,
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)] // Test assertions
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_product() -> Product {
        Product {
            id: "p-1".into(),
            name: "Canvas Tote".into(),
            price: dec!(29.99),
            original_price: Some(dec!(39.99)),
            description: "A sturdy tote.".into(),
            image: "/images/tote.jpg".into(),
            category: "bags".into(),
            rating: 4.5,
            reviews: 120,
            in_stock: true,
            variants: Some(vec![ProductVariant {
                id: "v-1".into(),
                name: "Color".into(),
                kind: VariantKind::Color,
                options: vec!["black".into(), "natural".into()],
            }]),
        }
    }

    #[test]
    fn product_serializes_camel_case() {
        let json = serde_json::to_value(sample_product()).unwrap();
        assert_eq!(json["originalPrice"], "39.99");
        assert_eq!(json["inStock"], true);
        assert_eq!(json["variants"][0]["type"], "color");
    }

    #[test]
    fn product_round_trips() {
        let product = sample_product();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn discount_requires_higher_original_price() {
        let mut product = sample_product();
        assert!(product.has_discount());

        product.original_price = Some(dec!(29.99));
        assert!(!product.has_discount());

        product.original_price = None;
        assert!(!product.has_discount());
    }

    #[test]
    fn cart_item_line_total_scales_with_quantity() {
        let item = CartItem {
            product: sample_product(),
            quantity: 3,
            selected_variants: None,
        };
        assert_eq!(item.line_total(), dec!(89.97));
    }

    #[test]
    fn role_uses_lowercase_discriminants() {
        let role: Role = serde_json::from_str("\"superadmin\"").unwrap();
        assert_eq!(role, Role::Superadmin);
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn address_default_flag_defaults_to_false() {
        let json = r#"{
            "id": "a-1", "name": "Jo", "street": "1 Main St", "city": "Springfield",
            "state": "IL", "zip": "62701", "country": "US", "phone": "555-0100"
        }"#;
        let address: Address = serde_json::from_str(json).unwrap();
        assert!(!address.is_default);
    }

    #[test]
    fn order_status_display_matches_wire_format() {
        assert_eq!(OrderStatus::Shipped.to_string(), "shipped");
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }
}
