//! Wish list slice.
//!
//! A flat set of saved products, keyed by product identity.

use std::marker::PhantomData;

use storefront_state_core::{
    Clock, Deserialize, Effect, Reducer, Serialize, SmallVec, smallvec,
};

use crate::environment::AppEnvironment;
use crate::types::Product;

/// Wish list slice state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishListState {
    /// Saved products, in insertion order.
    pub items: Vec<Product>,
}

impl WishListState {
    /// Whether a product is currently saved.
    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|product| product.id == product_id)
    }
}

/// Wish list actions.
#[derive(Debug, Clone, PartialEq)]
pub enum WishListAction {
    /// Add the product if absent, remove it if present.
    Toggle(Product),
    /// Remove a product by identity.
    Remove {
        /// Product identity to remove.
        product_id: String,
    },
    /// Empty the wish list.
    Clear,
}

/// Wish list reducer.
#[derive(Debug, Default)]
pub struct WishListReducer<C: Clock> {
    _phantom: PhantomData<C>,
}

impl<C: Clock> Clone for WishListReducer<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C: Clock> WishListReducer<C> {
    /// Creates the reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C: Clock> Reducer for WishListReducer<C> {
    type State = WishListState;
    type Action = WishListAction;
    type Environment = AppEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            WishListAction::Toggle(product) => {
                if state.contains(&product.id) {
                    state.items.retain(|saved| saved.id != product.id);
                } else {
                    state.items.push(product);
                }
            }
            WishListAction::Remove { product_id } => {
                state.items.retain(|saved| saved.id != product_id);
            }
            WishListAction::Clear => state.items.clear(),
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
#[allow(clippy::panic)] // Test assertions
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use storefront_state_testing::reducer_test::assertions::assert_no_effects;
    use storefront_state_testing::{ReducerTest, test_clock};

    fn env() -> AppEnvironment<storefront_state_testing::FixedClock> {
        AppEnvironment::new(test_clock(), crate::config::StorefrontConfig::default())
    }

    fn product(id: &str) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            price: dec!(15),
            original_price: None,
            description: String::new(),
            image: String::new(),
            category: "misc".into(),
            rating: 0.0,
            reviews: 0,
            in_stock: true,
            variants: None,
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let reducer = WishListReducer::new();
        let mut state = WishListState::default();

        reducer.reduce(&mut state, WishListAction::Toggle(product("p-1")), &env());
        assert!(state.contains("p-1"));

        reducer.reduce(&mut state, WishListAction::Toggle(product("p-1")), &env());
        assert!(!state.contains("p-1"));
    }

    #[test]
    fn remove_is_a_no_op_for_unknown_products() {
        ReducerTest::new(WishListReducer::new())
            .with_env(env())
            .given_state(WishListState {
                items: vec![product("p-1")],
            })
            .when_action(WishListAction::Remove {
                product_id: "p-9".into(),
            })
            .then_state(|state| assert_eq!(state.items.len(), 1))
            .then_effects(|effects| assert_no_effects(effects))
            .run();
    }

    #[test]
    fn clear_empties_the_list() {
        let reducer = WishListReducer::new();
        let mut state = WishListState::default();

        reducer.reduce(&mut state, WishListAction::Toggle(product("p-1")), &env());
        reducer.reduce(&mut state, WishListAction::Toggle(product("p-2")), &env());
        reducer.reduce(&mut state, WishListAction::Clear, &env());

        assert!(state.items.is_empty());
    }
}
