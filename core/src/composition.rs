//! Reducer composition utilities
//!
//! This module provides the machinery that assembles a root store out of
//! independently-authored slice reducers:
//! - **`combine_reducers`**: run multiple reducers over the same state/action
//! - **`scope_reducer`**: focus a slice reducer onto one field of a larger
//!   state (state lens) and one case of a larger action (action prism)
//!
//! The root state shape is derived mechanically from the composition step:
//! there is no parallel hand-maintained declaration to drift out of sync,
//! and misrouted wiring is a compile error rather than a runtime fault.
//!
//! # Examples
//!
//! ## Scoping a slice reducer into a parent store
//!
//! ```
//! use storefront_state_core::{Effect, Reducer, SmallVec, smallvec};
//! use storefront_state_core::composition::scope_reducer;
//!
//! // Slice state and reducer
//! #[derive(Clone, Default)]
//! struct CategoryState {
//!     selected: Option<String>,
//! }
//!
//! #[derive(Clone)]
//! enum CategoryAction {
//!     Select(String),
//!     ClearSelection,
//! }
//!
//! #[derive(Clone)]
//! struct CategoryReducer;
//!
//! impl Reducer for CategoryReducer {
//!     type State = CategoryState;
//!     type Action = CategoryAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Self::State,
//!         action: Self::Action,
//!         _env: &Self::Environment,
//!     ) -> SmallVec<[Effect<Self::Action>; 4]> {
//!         match action {
//!             CategoryAction::Select(name) => state.selected = Some(name),
//!             CategoryAction::ClearSelection => state.selected = None,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! // Parent state and action
//! #[derive(Clone, Default)]
//! struct AppState {
//!     category: CategoryState,
//!     visits: u64,
//! }
//!
//! #[derive(Clone)]
//! enum AppAction {
//!     Category(CategoryAction),
//!     PageView,
//! }
//!
//! let scoped = scope_reducer(
//!     CategoryReducer,
//!     |app: &AppState| &app.category,
//!     |app: &mut AppState, category| app.category = category,
//!     |action| match action {
//!         AppAction::Category(a) => Some(a),
//!         AppAction::PageView => None,
//!     },
//!     AppAction::Category,
//! );
//!
//! let mut state = AppState::default();
//! scoped.reduce(
//!     &mut state,
//!     AppAction::Category(CategoryAction::Select("shoes".into())),
//!     &(),
//! );
//! assert_eq!(state.category.selected.as_deref(), Some("shoes"));
//!
//! // Actions outside the prism leave the slice untouched
//! let effects = scoped.reduce(&mut state, AppAction::PageView, &());
//! assert!(effects.is_empty());
//! assert_eq!(state.category.selected.as_deref(), Some("shoes"));
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and
/// concatenated. This is useful when a single slice's logic is split across
/// multiple implementations (e.g. the cart transition logic plus an audit
/// reducer observing the same actions).
///
/// # Type Parameters
///
/// - `S`: the state type
/// - `A`: the action type
/// - `E`: the environment type
///
/// # Examples
///
/// ```
/// use storefront_state_core::{Effect, Reducer, SmallVec, smallvec};
/// use storefront_state_core::composition::combine_reducers;
///
/// #[derive(Clone, Default)]
/// struct SessionState {
///     page_views: u64,
///     last_page: Option<String>,
/// }
///
/// #[derive(Clone)]
/// enum SessionAction {
///     PageView(String),
/// }
///
/// struct CountingReducer;
/// struct TrackingReducer;
///
/// impl Reducer for CountingReducer {
///     type State = SessionState;
///     type Action = SessionAction;
///     type Environment = ();
///
///     fn reduce(
///         &self,
///         state: &mut Self::State,
///         action: Self::Action,
///         _env: &Self::Environment,
///     ) -> SmallVec<[Effect<Self::Action>; 4]> {
///         let SessionAction::PageView(_) = action;
///         state.page_views += 1;
///         smallvec![Effect::None]
///     }
/// }
///
/// impl Reducer for TrackingReducer {
///     type State = SessionState;
///     type Action = SessionAction;
///     type Environment = ();
///
///     fn reduce(
///         &self,
///         state: &mut Self::State,
///         action: Self::Action,
///         _env: &Self::Environment,
///     ) -> SmallVec<[Effect<Self::Action>; 4]> {
///         let SessionAction::PageView(page) = action;
///         state.last_page = Some(page);
///         smallvec![Effect::None]
///     }
/// }
///
/// let combined = combine_reducers(vec![Box::new(CountingReducer), Box::new(TrackingReducer)]);
///
/// let mut state = SessionState::default();
/// combined.reduce(&mut state, SessionAction::PageView("/cart".into()), &());
/// assert_eq!(state.page_views, 1);
/// assert_eq!(state.last_page.as_deref(), Some("/cart"));
/// ```
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Scopes a slice reducer to operate inside a larger state and action space.
///
/// The state lens (`get_state`/`set_state`) focuses the slice's partition of
/// the parent state; the action prism (`extract_action`/`embed_action`)
/// selects the slice's case of the parent action. Parent actions outside the
/// prism are a no-op for this reducer, and effects produced by the slice are
/// re-embedded into the parent action type via [`Effect::map`].
///
/// All four wiring functions are plain `fn` pointers, so a scoped reducer is
/// `Clone`/`Copy` whenever the underlying reducer is.
///
/// # Type Parameters
///
/// - `S` / `SubS`: parent and slice state types
/// - `A` / `SubA`: parent and slice action types
/// - `E`: the environment type (shared by parent and slice)
pub fn scope_reducer<S, SubS, A, SubA, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    extract_action: fn(A) -> Option<SubA>,
    embed_action: fn(SubA) -> A,
) -> ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        extract_action,
        embed_action,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on one slice of a parent store.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    extract_action: fn(A) -> Option<SubA>,
    embed_action: fn(SubA) -> A,
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, SubA, E, R> Clone for ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            get_state: self.get_state,
            set_state: self.set_state,
            extract_action: self.extract_action,
            embed_action: self.embed_action,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S, SubS, A, SubA, E, R> Reducer for ScopedReducer<S, SubS, A, SubA, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    SubA: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        // Actions outside this slice's prism are a no-op
        let Some(sub_action) = (self.extract_action)(action) else {
            return SmallVec::new();
        };

        // Extract the sub-state, run the slice reducer, write back
        let mut sub_state = (self.get_state)(state).clone();
        let effects = self.reducer.reduce(&mut sub_state, sub_action, env);
        (self.set_state)(state, sub_state);

        // Re-embed slice effects into the parent action type
        effects
            .into_iter()
            .map(|effect| effect.map(self.embed_action))
            .collect()
    }
}
