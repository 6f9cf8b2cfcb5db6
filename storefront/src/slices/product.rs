//! Product catalog slice.
//!
//! The loaded catalog plus at most one product selected for detail view.
//! Selection is resolved against the catalog by identity: selecting an
//! unknown product clears it, and replacing the catalog re-resolves the
//! current selection against the new data.

use std::marker::PhantomData;

use storefront_state_core::{
    Clock, Deserialize, Effect, Reducer, Serialize, SmallVec, smallvec,
};

use crate::environment::AppEnvironment;
use crate::types::Product;

/// Product slice state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductState {
    /// Loaded catalog.
    pub products: Vec<Product>,
    /// Product selected for detail view, when one is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<Product>,
}

/// Product actions.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Replace the catalog, re-resolving the current selection by identity.
    SetProducts(Vec<Product>),
    /// Select a product by identity; unknown identities clear the selection.
    Select {
        /// Product identity to select.
        product_id: String,
    },
    /// Clear the detail selection.
    ClearSelection,
}

/// Product reducer.
#[derive(Debug, Default)]
pub struct ProductReducer<C: Clock> {
    _phantom: PhantomData<C>,
}

impl<C: Clock> Clone for ProductReducer<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C: Clock> ProductReducer<C> {
    /// Creates the reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C: Clock> Reducer for ProductReducer<C> {
    type State = ProductState;
    type Action = ProductAction;
    type Environment = AppEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ProductAction::SetProducts(products) => {
                state.selected = state.selected.take().and_then(|selected| {
                    products.iter().find(|p| p.id == selected.id).cloned()
                });
                state.products = products;
            }
            ProductAction::Select { product_id } => {
                state.selected = state.products.iter().find(|p| p.id == product_id).cloned();
            }
            ProductAction::ClearSelection => state.selected = None,
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
#[allow(clippy::panic)] // Test assertions
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use storefront_state_testing::test_clock;

    fn env() -> AppEnvironment<storefront_state_testing::FixedClock> {
        AppEnvironment::new(test_clock(), crate::config::StorefrontConfig::default())
    }

    fn product(id: &str, price: rust_decimal::Decimal) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            price,
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
    fn select_resolves_against_the_catalog() {
        let reducer = ProductReducer::new();
        let mut state = ProductState::default();

        reducer.reduce(
            &mut state,
            ProductAction::SetProducts(vec![product("p-1", dec!(10)), product("p-2", dec!(20))]),
            &env(),
        );
        reducer.reduce(
            &mut state,
            ProductAction::Select {
                product_id: "p-2".into(),
            },
            &env(),
        );

        assert_eq!(state.selected.as_ref().map(|p| p.id.as_str()), Some("p-2"));
    }

    #[test]
    fn selecting_an_unknown_product_clears_the_selection() {
        let reducer = ProductReducer::new();
        let mut state = ProductState::default();

        reducer.reduce(
            &mut state,
            ProductAction::SetProducts(vec![product("p-1", dec!(10))]),
            &env(),
        );
        reducer.reduce(
            &mut state,
            ProductAction::Select {
                product_id: "p-1".into(),
            },
            &env(),
        );
        reducer.reduce(
            &mut state,
            ProductAction::Select {
                product_id: "missing".into(),
            },
            &env(),
        );

        assert_eq!(state.selected, None);
    }

    #[test]
    fn replacing_the_catalog_re_resolves_the_selection() {
        let reducer = ProductReducer::new();
        let mut state = ProductState::default();

        reducer.reduce(
            &mut state,
            ProductAction::SetProducts(vec![product("p-1", dec!(10))]),
            &env(),
        );
        reducer.reduce(
            &mut state,
            ProductAction::Select {
                product_id: "p-1".into(),
            },
            &env(),
        );

        // Same identity, new price: selection follows the fresh snapshot.
        reducer.reduce(
            &mut state,
            ProductAction::SetProducts(vec![product("p-1", dec!(8))]),
            &env(),
        );
        assert_eq!(
            state.selected.as_ref().map(|p| p.price),
            Some(dec!(8))
        );

        // Identity gone: selection clears.
        reducer.reduce(
            &mut state,
            ProductAction::SetProducts(vec![product("p-2", dec!(30))]),
            &env(),
        );
        assert_eq!(state.selected, None);
    }

    #[test]
    fn clear_selection_resets_detail_view() {
        let reducer = ProductReducer::new();
        let mut state = ProductState::default();

        reducer.reduce(
            &mut state,
            ProductAction::SetProducts(vec![product("p-1", dec!(10))]),
            &env(),
        );
        reducer.reduce(
            &mut state,
            ProductAction::Select {
                product_id: "p-1".into(),
            },
            &env(),
        );
        reducer.reduce(&mut state, ProductAction::ClearSelection, &env());

        assert_eq!(state.selected, None);
    }
}
