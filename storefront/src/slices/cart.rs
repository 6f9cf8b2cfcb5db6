//! Shopping cart slice.
//!
//! Holds the cart lines and a timestamp of the last mutation. Lines are
//! keyed by product identity plus the exact variant selection: adding the
//! same product with a different selection creates a separate line, while a
//! matching selection merges quantities into the existing line.

use std::collections::HashMap;
use std::marker::PhantomData;

use storefront_state_core::{
    Clock, DateTime, Deserialize, Effect, Reducer, Serialize, SmallVec, Utc, smallvec,
};

use crate::environment::AppEnvironment;
use crate::types::{CartItem, Product};

/// Cart slice state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Current cart lines, in insertion order.
    pub items: Vec<CartItem>,
    /// When the cart last changed, if it ever has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CartState {
    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> rust_decimal::Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total unit count across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// Cart actions.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add a product to the cart, merging into an existing line when the
    /// product and variant selection match.
    Add {
        /// Product to add.
        product: Product,
        /// Units to add; zero is a no-op.
        quantity: u32,
        /// Chosen variant options, when the product has variant axes.
        selected_variants: Option<HashMap<String, String>>,
    },
    /// Remove every line for a product, regardless of variant selection.
    Remove {
        /// Product identity to remove.
        product_id: String,
    },
    /// Set the quantity of every line for a product; zero removes them.
    SetQuantity {
        /// Product identity to update.
        product_id: String,
        /// New quantity.
        quantity: u32,
    },
    /// Empty the cart.
    Clear,
}

/// Cart reducer.
#[derive(Debug, Default)]
pub struct CartReducer<C: Clock> {
    _phantom: PhantomData<C>,
}

impl<C: Clock> Clone for CartReducer<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C: Clock> CartReducer<C> {
    /// Creates the reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C: Clock> Reducer for CartReducer<C> {
    type State = CartState;
    type Action = CartAction;
    type Environment = AppEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CartAction::Add {
                product,
                quantity,
                selected_variants,
            } => {
                if quantity == 0 {
                    return smallvec![Effect::None];
                }
                let existing = state.items.iter_mut().find(|item| {
                    item.product.id == product.id && item.selected_variants == selected_variants
                });
                match existing {
                    Some(item) => item.quantity += quantity,
                    None => state.items.push(CartItem {
                        product,
                        quantity,
                        selected_variants,
                    }),
                }
                state.updated_at = Some(environment.clock.now());
            }
            CartAction::Remove { product_id } => {
                state.items.retain(|item| item.product.id != product_id);
                state.updated_at = Some(environment.clock.now());
            }
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => {
                if quantity == 0 {
                    state.items.retain(|item| item.product.id != product_id);
                } else {
                    for item in &mut state.items {
                        if item.product.id == product_id {
                            item.quantity = quantity;
                        }
                    }
                }
                state.updated_at = Some(environment.clock.now());
            }
            CartAction::Clear => {
                state.items.clear();
                state.updated_at = Some(environment.clock.now());
            }
        }

        smallvec![Effect::None]
    }
}
