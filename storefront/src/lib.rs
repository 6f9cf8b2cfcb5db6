//! Storefront state layer.
//!
//! A composable state container for an e-commerce storefront: four
//! independent slices (cart, wish list, category filter, product catalog)
//! composed into one root store, plus the pure decision and formatting
//! functions the UI layer calls into.
//!
//! # Quick Start
//!
//! ```
//! use storefront_state::slices::category::CategoryAction;
//! use storefront_state::store::create_store;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = create_store();
//!
//! store
//!     .dispatch(CategoryAction::SetCategories(vec!["bags".into(), "shoes".into()]))
//!     .await;
//! store.dispatch(CategoryAction::Select("shoes".into())).await;
//!
//! let selected = store.select(|state| state.category.selected.clone()).await;
//! assert_eq!(selected.as_deref(), Some("shoes"));
//! # }
//! ```

pub mod app;
pub mod config;
pub mod environment;
pub mod format;
pub mod guard;
pub mod slices;
pub mod store;
pub mod types;

pub use app::{AppAction, AppReducer, AppState};
pub use config::StorefrontConfig;
pub use environment::AppEnvironment;
pub use format::{BadgeVariant, DateStyle, DateValue, format_date, status_variant};
pub use guard::{RouteDecision, evaluate_route};
pub use store::{AppStore, StoreHandle, create_store};
