//! Typed store access.
//!
//! [`StoreHandle`] is the narrow interface the rest of the application is
//! expected to use: a typed `dispatch` that accepts any slice action, and a
//! typed `select` that projects a snapshot of [`AppState`]. Holding the raw
//! store is possible via [`StoreHandle::store`] but rarely needed.

use storefront_state_core::{Clock, SystemClock};
use storefront_state_runtime::EffectHandle;
use storefront_state_runtime::store::Store;
use tokio::sync::watch;

use crate::app::{AppAction, AppReducer, AppState};
use crate::config::StorefrontConfig;
use crate::environment::AppEnvironment;

/// The fully wired application store.
pub type AppStore<C> = Store<AppState, AppAction, AppEnvironment<C>, AppReducer<C>>;

/// Typed handle over the application store.
///
/// Cheap to clone; all clones share the same state.
pub struct StoreHandle<C>
where
    C: Clock + Clone + 'static,
{
    inner: AppStore<C>,
}

impl<C> StoreHandle<C>
where
    C: Clock + Clone + 'static,
{
    /// Creates a store with default state and the given environment.
    #[must_use]
    pub fn new(environment: AppEnvironment<C>) -> Self {
        Self {
            inner: Store::new(AppState::default(), AppReducer::new(), environment),
        }
    }

    /// Dispatches any slice action, lifted into the root action type.
    pub async fn dispatch(&self, action: impl Into<AppAction>) -> EffectHandle {
        self.inner.send(action.into()).await
    }

    /// Projects a value out of the current state snapshot.
    pub async fn select<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&AppState) -> T,
    {
        self.inner.state(f).await
    }

    /// Current state version; bumps once per applied dispatch.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.version()
    }

    /// Subscribes to state change notifications.
    #[must_use]
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.inner.changes()
    }

    /// The underlying store, for action subscriptions and advanced use.
    #[must_use]
    pub const fn store(&self) -> &AppStore<C> {
        &self.inner
    }
}

impl<C> Clone for StoreHandle<C>
where
    C: Clock + Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Creates a production store: system clock, configuration from the process
/// environment.
#[must_use]
pub fn create_store() -> StoreHandle<SystemClock> {
    let environment = AppEnvironment::new(SystemClock, StorefrontConfig::from_env());
    StoreHandle::new(environment)
}
