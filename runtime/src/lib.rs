//! # Storefront State Runtime
//!
//! Runtime implementation for the storefront state architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling for a composed application state.
//!
//! ## Core Components
//!
//! - **Store**: the runtime that owns state and executes effects
//! - **Effect Executor**: executes effect descriptions and feeds actions back
//! - **Subscriptions**: a state-version channel for change observers and an
//!   action broadcast for event streaming
//!
//! ## Concurrency Model
//!
//! The store is shared mutable state with exactly one writer path: dispatched
//! actions serialize at a write lock and each transition is fully applied
//! before any subscriber can observe it. Readers (selectors) take a read lock
//! and never see a partially-applied transition.
//!
//! ## Example
//!
//! ```ignore
//! use storefront_state_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Dispatch an action
//! store.send(Action::DoSomething).await;
//!
//! // Read state through a pure projection (selector)
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use storefront_state_core::{effect::Effect, reducer::Reducer};
use tokio::sync::{RwLock, broadcast, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Dispatch itself is infallible: the store lives for the process
    /// lifetime and misconfigured wiring is a compile-time error. Errors
    /// only arise when waiting on observers or effects.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Timeout waiting for a terminal action or effect completion
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed
        ///
        /// All store handles were dropped while an observer was still
        /// waiting.
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;

/// Handle for tracking effect completion
///
/// Returned by [`Store::send()`] so callers can wait for the effects of one
/// dispatch to finish. The reducer itself has already run by the time the
/// handle is returned; only asynchronous effects are still outstanding.
///
/// # Example
///
/// ```ignore
/// let mut handle = store.send(Action::Refresh).await;
/// handle.wait_with_timeout(Duration::from_secs(5)).await?;
/// // All effects from Action::Refresh are now complete
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };

        let tracking = EffectTracking {
            counter,
            notifier: tx,
        };

        (handle, tracking)
    }

    /// Create a handle that's already complete
    ///
    /// Useful for initialization in loops where you need a `last_handle`.
    #[must_use]
    pub fn completed() -> Self {
        let (tx, rx) = watch::channel(());
        let _ = tx.send(());

        Self {
            effects: Arc::new(AtomicUsize::new(0)),
            completion: rx,
        }
    }

    /// Wait for all effects of the originating dispatch to complete
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            let _ = self.completion.changed().await;
        }
    }

    /// Wait for all effects to complete, bounded by a timeout
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the timeout expires before all
    /// effects complete.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), StoreError> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| StoreError::Timeout)
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.effects.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Internal: effect tracking context passed through effect execution
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: watch::Sender<()>,
}

impl EffectTracking {
    /// Increment the effect counter (effect started)
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    /// Decrement the effect counter (effect completed)
    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            // Counter reached zero, notify waiters
            let _ = self.notifier.send(());
        }
    }
}

/// Internal: RAII guard that decrements the effect counter on drop
///
/// Ensures the counter is always decremented, even if the effect panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Store module - the runtime for a composed reducer
pub mod store {
    use super::{
        Arc, AtomicUsize, DecrementGuard, Duration, Effect, EffectHandle, EffectTracking,
        Ordering, Reducer, RwLock, StoreError, broadcast, watch,
    };

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (transition logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with action feedback)
    ///
    /// Construction is a one-time, process-wide initialization: create one
    /// store at startup and pass cloned handles to consumers. Clones share
    /// the same underlying state; there is no teardown, the store lives for
    /// the session (process) lifetime.
    ///
    /// # Type Parameters
    ///
    /// - `S`: state type
    /// - `A`: action type
    /// - `E`: environment type
    /// - `R`: reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        /// Action broadcast channel for observers.
        ///
        /// Every applied action is broadcast after its transition completes,
        /// so observers re-evaluating projections always read post-transition
        /// state.
        action_broadcast: broadcast::Sender<A>,
        /// Monotonic state version, bumped once per applied dispatch.
        state_version: Arc<watch::Sender<u64>>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Default action broadcast capacity is 16; increase with
        /// [`Store::with_broadcast_capacity`] if observers frequently lag.
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_broadcast_capacity(initial_state, reducer, environment, 16)
        }

        /// Create a new store with a custom action broadcast capacity
        ///
        /// Use this constructor when many slow observers are expected (e.g.
        /// several widgets subscribed to the same store).
        #[must_use]
        pub fn with_broadcast_capacity(
            initial_state: S,
            reducer: R,
            environment: E,
            capacity: usize,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(capacity);
            let (state_version, _) = watch::channel(0);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                action_broadcast,
                state_version: Arc::new(state_version),
            }
        }

        /// Dispatch an action to the store
        ///
        /// This is the single writer path:
        /// 1. Acquires the write lock on state
        /// 2. Runs the reducer with (state, action, environment)
        /// 3. Releases the lock, bumps the state version, broadcasts the action
        /// 4. Executes returned effects on spawned tasks
        ///
        /// Concurrent `send` calls serialize at the write lock; each
        /// transition is fully applied before the action is observable.
        /// `send` returns after starting effect execution, not completion -
        /// use the returned [`EffectHandle`] to wait for effects.
        ///
        /// # Panics
        ///
        /// If the reducer panics, the panic propagates. Reducers are pure
        /// functions and must not panic.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> EffectHandle
        where
            R: Clone,
            E: Clone,
        {
            tracing::debug!("Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let (handle, tracking) = EffectHandle::new();

            let effects = {
                let mut state = self.state.write().await;
                tracing::trace!("Acquired write lock on state");

                let start = std::time::Instant::now();
                let effects = self
                    .reducer
                    .reduce(&mut *state, action.clone(), &self.environment);
                metrics::histogram!("store.reducer.duration_seconds")
                    .record(start.elapsed().as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                effects
            };

            // Transition fully applied: observers notified only from here on
            self.state_version.send_modify(|v| *v += 1);
            let _ = self.action_broadcast.send(action);

            // Note: Precision loss acceptable for metrics (effect counts < 2^52)
            #[allow(clippy::cast_precision_loss)]
            metrics::histogram!("store.effects.count").record(effects.len() as f64);

            for effect in effects {
                self.execute_effect(effect, tracking.clone());
            }

            handle
        }

        /// Dispatch an action and wait for a matching result action
        ///
        /// Designed for request-response flows: subscribe to the action
        /// broadcast, dispatch the initial action, then wait for an action
        /// matching the predicate (typically produced by an effect).
        ///
        /// # Errors
        ///
        /// - [`StoreError::Timeout`]: no matching action within the timeout
        /// - [`StoreError::ChannelClosed`]: broadcast closed while waiting
        pub async fn send_and_wait_for<F>(
            &self,
            action: A,
            predicate: F,
            timeout: Duration,
        ) -> Result<A, StoreError>
        where
            R: Clone,
            E: Clone,
            F: Fn(&A) -> bool,
        {
            // Subscribe BEFORE sending to avoid a race with fast effects
            let mut rx = self.action_broadcast.subscribe();

            self.send(action).await;

            tokio::time::timeout(timeout, async {
                loop {
                    match rx.recv().await {
                        Ok(action) if predicate(&action) => return Ok(action),
                        Ok(_) => {},
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            // Slow consumer; if the terminal action was among
                            // the skipped ones, the timeout catches it
                            tracing::warn!(skipped, "Action observer lagged");
                        },
                        Err(broadcast::error::RecvError::Closed) => {
                            return Err(StoreError::ChannelClosed);
                        },
                    }
                }
            })
            .await
            .map_err(|_| StoreError::Timeout)?
        }

        /// Read current state through a pure projection (selector)
        ///
        /// The projection runs under a read lock and must be side-effect
        /// free; non-determinism here breaks re-render correctness for
        /// subscribers comparing projected values.
        ///
        /// ```ignore
        /// let item_count = store.state(|s| s.cart.items.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Current state version (number of applied dispatches)
        #[must_use]
        pub fn version(&self) -> u64 {
            *self.state_version.borrow()
        }

        /// Subscribe to state changes
        ///
        /// The receiver is notified once per applied dispatch, after the
        /// transition is complete. Subscribers re-run their projection on
        /// notification and re-render only if the projected value differs.
        #[must_use]
        pub fn changes(&self) -> watch::Receiver<u64> {
            self.state_version.subscribe()
        }

        /// Subscribe to all actions applied by this store
        ///
        /// Returns a receiver that gets a clone of every applied action,
        /// including actions fed back by effects. If the receiver lags it
        /// skips old actions and observes `RecvError::Lagged`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Execute an effect with completion tracking
        ///
        /// Effects run on spawned tasks; [`DecrementGuard`] keeps the
        /// counter correct even when an effect panics.
        ///
        /// # Effect Types
        ///
        /// - `None`: no-op
        /// - `Future`: async computation, feeds any resulting action back
        /// - `Delay`: waits, then dispatches the action
        /// - `Parallel`: executes effects concurrently
        /// - `Sequential`: executes effects in order, waiting for each
        #[allow(clippy::needless_pass_by_value)] // tracking is cloned per branch
        fn execute_effect(&self, effect: Effect<A>, tracking: EffectTracking)
        where
            R: Clone,
            E: Clone,
        {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Future(fut) => {
                    tracing::trace!("Executing Effect::Future");
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                    tracking.increment();

                    let tracking_clone = tracking.clone();
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _guard = DecrementGuard(tracking_clone);

                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action");
                            let _ = store.send(action).await;
                        }
                    });
                },
                Effect::Delay { duration, action } => {
                    tracing::trace!("Executing Effect::Delay (duration: {:?})", duration);
                    metrics::counter!("store.effects.executed", "type" => "delay").increment(1);
                    tracking.increment();

                    let tracking_clone = tracking.clone();
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _guard = DecrementGuard(tracking_clone);

                        tokio::time::sleep(duration).await;
                        let _ = store.send(*action).await;
                    });
                },
                Effect::Parallel(effects) => {
                    tracing::trace!("Executing Effect::Parallel with {} effects", effects.len());
                    metrics::counter!("store.effects.executed", "type" => "parallel").increment(1);

                    for effect in effects {
                        self.execute_effect(effect, tracking.clone());
                    }
                },
                Effect::Sequential(effects) => {
                    let effect_count = effects.len();
                    tracing::trace!("Executing Effect::Sequential with {} effects", effect_count);
                    metrics::counter!("store.effects.executed", "type" => "sequential").increment(1);
                    tracking.increment();

                    let tracking_clone = tracking.clone();
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _guard = DecrementGuard(tracking_clone);

                        for (idx, effect) in effects.into_iter().enumerate() {
                            tracing::trace!(
                                "Executing sequential effect {} of {}",
                                idx + 1,
                                effect_count
                            );

                            let (sub_tx, mut sub_rx) = watch::channel(());
                            let sub_tracking = EffectTracking {
                                counter: Arc::new(AtomicUsize::new(0)),
                                notifier: sub_tx,
                            };

                            store.execute_effect(effect, sub_tracking.clone());

                            // Wait for this effect before continuing
                            while sub_tracking.counter.load(Ordering::SeqCst) > 0 {
                                if sub_rx.changed().await.is_err() {
                                    break;
                                }
                            }
                        }
                        tracing::trace!("Effect::Sequential completed");
                    });
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                action_broadcast: self.action_broadcast.clone(),
                state_version: Arc::clone(&self.state_version),
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;
