//! Root state tree and reducer composition.
//!
//! [`AppState`] is the single source of truth; its shape is derived from the
//! slices wired into [`AppReducer`]. The root action is a sum of the slice
//! action types, and each slice is mounted with a state lens plus an action
//! prism so that a dispatched action reaches exactly one slice.

use storefront_state_core::composition::{ScopedReducer, scope_reducer};
use storefront_state_core::{Clock, Deserialize, Effect, Reducer, Serialize, SmallVec};

use crate::environment::AppEnvironment;
use crate::slices::cart::{CartAction, CartReducer, CartState};
use crate::slices::category::{CategoryAction, CategoryReducer, CategoryState};
use crate::slices::product::{ProductAction, ProductReducer, ProductState};
use crate::slices::wishlist::{WishListAction, WishListReducer, WishListState};

/// Root application state.
///
/// Serializes with exactly four top-level keys: `cart`, `wishList`,
/// `category`, and `product`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Shopping cart slice.
    pub cart: CartState,
    /// Wish list slice.
    pub wish_list: WishListState,
    /// Category filter slice.
    pub category: CategoryState,
    /// Product catalog slice.
    pub product: ProductState,
}

/// Root application action: one case per slice.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Cart slice actions.
    Cart(CartAction),
    /// Wish list slice actions.
    WishList(WishListAction),
    /// Category slice actions.
    Category(CategoryAction),
    /// Product slice actions.
    Product(ProductAction),
}

impl From<CartAction> for AppAction {
    fn from(action: CartAction) -> Self {
        Self::Cart(action)
    }
}

impl From<WishListAction> for AppAction {
    fn from(action: WishListAction) -> Self {
        Self::WishList(action)
    }
}

impl From<CategoryAction> for AppAction {
    fn from(action: CategoryAction) -> Self {
        Self::Category(action)
    }
}

impl From<ProductAction> for AppAction {
    fn from(action: ProductAction) -> Self {
        Self::Product(action)
    }
}

type Scoped<SubS, SubA, C, R> =
    ScopedReducer<AppState, SubS, AppAction, SubA, AppEnvironment<C>, R>;

/// Root reducer: the four slice reducers scoped onto [`AppState`].
pub struct AppReducer<C: Clock + 'static> {
    cart: Scoped<CartState, CartAction, C, CartReducer<C>>,
    wish_list: Scoped<WishListState, WishListAction, C, WishListReducer<C>>,
    category: Scoped<CategoryState, CategoryAction, C, CategoryReducer<C>>,
    product: Scoped<ProductState, ProductAction, C, ProductReducer<C>>,
}

impl<C: Clock + 'static> AppReducer<C> {
    /// Wires every slice reducer into the root state tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cart: scope_reducer(
                CartReducer::new(),
                |app: &AppState| &app.cart,
                |app: &mut AppState, cart| app.cart = cart,
                |action| match action {
                    AppAction::Cart(a) => Some(a),
                    _ => None,
                },
                AppAction::Cart,
            ),
            wish_list: scope_reducer(
                WishListReducer::new(),
                |app: &AppState| &app.wish_list,
                |app: &mut AppState, wish_list| app.wish_list = wish_list,
                |action| match action {
                    AppAction::WishList(a) => Some(a),
                    _ => None,
                },
                AppAction::WishList,
            ),
            category: scope_reducer(
                CategoryReducer::new(),
                |app: &AppState| &app.category,
                |app: &mut AppState, category| app.category = category,
                |action| match action {
                    AppAction::Category(a) => Some(a),
                    _ => None,
                },
                AppAction::Category,
            ),
            product: scope_reducer(
                ProductReducer::new(),
                |app: &AppState| &app.product,
                |app: &mut AppState, product| app.product = product,
                |action| match action {
                    AppAction::Product(a) => Some(a),
                    _ => None,
                },
                AppAction::Product,
            ),
        }
    }
}

impl<C: Clock + 'static> Default for AppReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + 'static> Clone for AppReducer<C> {
    fn clone(&self) -> Self {
        Self {
            cart: self.cart.clone(),
            wish_list: self.wish_list.clone(),
            category: self.category.clone(),
            product: self.product.clone(),
        }
    }
}

impl<C: Clock + 'static> Reducer for AppReducer<C> {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut effects = SmallVec::new();
        effects.extend(self.cart.reduce(state, action.clone(), env));
        effects.extend(self.wish_list.reduce(state, action.clone(), env));
        effects.extend(self.category.reduce(state, action.clone(), env));
        effects.extend(self.product.reduce(state, action, env));
        effects
    }
}
