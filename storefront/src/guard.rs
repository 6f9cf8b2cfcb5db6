//! Role-based route guarding.
//!
//! A pure decision function: given the current user (if any) and the roles a
//! route allows, decide whether to render the route or redirect. Redirects
//! always replace the history entry so the guarded page never lands in the
//! back stack.

use crate::types::{Role, User};

/// Redirect target for unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";

/// Redirect target for authenticated but unauthorized visitors.
pub const ROOT_PATH: &str = "/";

/// Outcome of a route guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The route may render.
    Render,
    /// The visitor must be redirected.
    Redirect {
        /// Destination path.
        to: &'static str,
        /// Whether to replace the current history entry.
        replace: bool,
    },
}

/// Evaluates a role-restricted route.
///
/// No user redirects to the login page; a user whose role is not in
/// `allowed` redirects to the root. An empty `allowed` set admits no one.
#[must_use]
pub fn evaluate_route(user: Option<&User>, allowed: &[Role]) -> RouteDecision {
    let Some(user) = user else {
        return RouteDecision::Redirect {
            to: LOGIN_PATH,
            replace: true,
        };
    };

    if allowed.contains(&user.role) {
        RouteDecision::Render
    } else {
        RouteDecision::Redirect {
            to: ROOT_PATH,
            replace: true,
        }
    }
}
