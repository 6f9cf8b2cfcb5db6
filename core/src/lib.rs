//! # Storefront State Core
//!
//! Core traits and types for the storefront state architecture.
//!
//! This crate provides the fundamental abstractions for a centralized,
//! reducer-based state container: the kind of state layer a storefront UI
//! reads through selectors and mutates through dispatched actions.
//!
//! ## Core Concepts
//!
//! - **State**: one partition ("slice") of application state, or the
//!   composed root state
//! - **Action**: all possible inputs to a reducer
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow: dispatch → reducer → new state → subscribers
//! - One writer path per store, many readers
//! - Explicit effects (no hidden I/O inside reducers)
//! - Dependency injection via the `Environment` associated type
//!
//! ## Example
//!
//! ```
//! use storefront_state_core::{Effect, Reducer, SmallVec, smallvec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct WishlistState {
//!     items: Vec<String>,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum WishlistAction {
//!     Toggle(String),
//! }
//!
//! struct WishlistReducer;
//!
//! impl Reducer for WishlistReducer {
//!     type State = WishlistState;
//!     type Action = WishlistAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Self::State,
//!         action: Self::Action,
//!         _env: &Self::Environment,
//!     ) -> SmallVec<[Effect<Self::Action>; 4]> {
//!         let WishlistAction::Toggle(id) = action;
//!         if let Some(pos) = state.items.iter().position(|i| *i == id) {
//!             state.items.remove(pos);
//!         } else {
//!             state.items.push(id);
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

/// Reducer composition utilities: combining and scoping reducers
pub mod composition;

/// Reducer module - the core trait for state-transition logic
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for state transitions
    ///
    /// A reducer owns one partition of application state. It is a pure
    /// function: given the current state and an action, it updates the state
    /// in place and returns descriptions of any side effects to run.
    ///
    /// # Type Parameters
    ///
    /// - `State`: the state partition this reducer operates on
    /// - `Action`: the action type this reducer processes
    /// - `Environment`: the injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This must be pure and deterministic: same state + action +
        /// environment always produces the same transition. Reducers must not
        /// perform I/O; they return [`Effect`] descriptions instead.
        ///
        /// # Arguments
        ///
        /// - `state`: mutable reference to current state
        /// - `action`: the action to process
        /// - `env`: reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effect descriptions to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution), composable and mappable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime. A pure slice reducer returns only [`Effect::None`].
    ///
    /// # Type Parameters
    ///
    /// - `Action`: the action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (for timeouts, debounce)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if `Some`, the action is fed back into
        /// the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }
    }

    impl<Action: 'static> Effect<Action> {
        /// Map the action type of this effect through a plain function
        ///
        /// Used when scoping a slice reducer into a parent store: effects
        /// produced against the slice action type are re-embedded into the
        /// parent action type. Takes a `fn` pointer (not a closure) so the
        /// mapping can recurse through `Parallel`/`Sequential` without
        /// reference counting.
        #[must_use]
        pub fn map<Parent: 'static>(self, embed: fn(Action) -> Parent) -> Effect<Parent> {
            match self {
                Effect::None => Effect::None,
                Effect::Parallel(effects) => {
                    Effect::Parallel(effects.into_iter().map(|e| e.map(embed)).collect())
                },
                Effect::Sequential(effects) => {
                    Effect::Sequential(effects.into_iter().map(|e| e.map(embed)).collect())
                },
                Effect::Delay { duration, action } => Effect::Delay {
                    duration,
                    action: Box::new(embed(*action)),
                },
                Effect::Future(fut) => {
                    Effect::Future(Box::pin(async move { fut.await.map(embed) }))
                },
            }
        }
    }
}

/// Environment module - dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the reducer's `Environment` parameter. Reducers never reach for
/// ambient globals; this keeps them deterministic and testable.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// Production code injects [`SystemClock`]; tests inject a fixed clock
    /// so transitions that stamp timestamps stay deterministic.
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

// Convenience re-exports at the crate root
pub use effect::Effect;
pub use environment::{Clock, SystemClock};
pub use reducer::Reducer;

#[cfg(test)]
#[allow(clippy::panic)] // Test assertions can panic
mod tests {
    use super::*;

    #[test]
    fn effect_map_preserves_shape() {
        let effect: Effect<u32> = Effect::Parallel(vec![
            Effect::None,
            Effect::Delay {
                duration: std::time::Duration::from_millis(5),
                action: Box::new(7),
            },
        ]);

        let mapped: Effect<String> = effect.map(|n| n.to_string());

        match mapped {
            Effect::Parallel(effects) => {
                assert_eq!(effects.len(), 2);
                assert!(matches!(effects[0], Effect::None));
                match &effects[1] {
                    Effect::Delay { action, .. } => assert_eq!(**action, "7"),
                    other => panic!("expected Delay, got {other:?}"),
                }
            },
            other => panic!("expected Parallel, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn effect_map_wraps_futures() {
        let effect: Effect<u32> = Effect::Future(Box::pin(async { Some(41) }));

        match effect.map(|n| n + 1) {
            Effect::Future(fut) => assert_eq!(fut.await, Some(42)),
            other => panic!("expected Future, got {other:?}"),
        }
    }

    #[test]
    fn system_clock_advances() {
        let clock = SystemClock;
        let before = clock.now();
        let after = clock.now();
        assert!(after >= before);
    }
}
