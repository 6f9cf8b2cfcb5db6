//! State slices.
//!
//! Each slice owns one branch of the application state tree with its own
//! state, action, and reducer types. Slices never read each other's state;
//! the app-level reducer composes them.

pub mod cart;
pub mod category;
pub mod product;
pub mod wishlist;
