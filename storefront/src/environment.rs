//! Shared environment for all storefront reducers.

use storefront_state_core::Clock;

use crate::config::StorefrontConfig;

/// Dependencies injected into every slice reducer.
///
/// Generic over the clock so tests can pin time.
#[derive(Debug)]
pub struct AppEnvironment<C: Clock> {
    /// Time source for mutation timestamps.
    pub clock: C,
    /// Resolved configuration.
    pub config: StorefrontConfig,
}

impl<C: Clock> AppEnvironment<C> {
    /// Creates an environment from a clock and configuration.
    pub const fn new(clock: C, config: StorefrontConfig) -> Self {
        Self { clock, config }
    }
}

impl<C: Clock + Clone> Clone for AppEnvironment<C> {
    fn clone(&self) -> Self {
        Self {
            clock: self.clock.clone(),
            config: self.config.clone(),
        }
    }
}
