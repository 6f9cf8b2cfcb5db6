//! Category filter slice.
//!
//! The list of known category labels plus at most one active selection.
//! Replacing the category list drops a selection that no longer exists.

use std::marker::PhantomData;

use storefront_state_core::{
    Clock, Deserialize, Effect, Reducer, Serialize, SmallVec, smallvec,
};

use crate::environment::AppEnvironment;

/// Category slice state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryState {
    /// Known category labels.
    pub categories: Vec<String>,
    /// Active filter, when one is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

/// Category actions.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryAction {
    /// Replace the category list, clearing any stale selection.
    SetCategories(Vec<String>),
    /// Select a category as the active filter.
    Select(String),
    /// Clear the active filter.
    ClearSelection,
}

/// Category reducer.
#[derive(Debug, Default)]
pub struct CategoryReducer<C: Clock> {
    _phantom: PhantomData<C>,
}

impl<C: Clock> Clone for CategoryReducer<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C: Clock> CategoryReducer<C> {
    /// Creates the reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C: Clock> Reducer for CategoryReducer<C> {
    type State = CategoryState;
    type Action = CategoryAction;
    type Environment = AppEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CategoryAction::SetCategories(categories) => {
                if let Some(selected) = &state.selected {
                    if !categories.contains(selected) {
                        state.selected = None;
                    }
                }
                state.categories = categories;
            }
            CategoryAction::Select(category) => state.selected = Some(category),
            CategoryAction::ClearSelection => state.selected = None,
        }

        smallvec![Effect::None]
    }
}
