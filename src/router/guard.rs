//! Navigation guard decision.
//!
//! INVARIANTS
//! ==========
//! - A protected route with no usable token is redirected to the login path.
//! - Every other combination is allowed unchanged.
//! - Evaluation is stateless; nothing carries over between navigations.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{RouteDef, RouteMeta, RouteTable};
use crate::config::LOGIN_PATH;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(String),
}

/// Decide whether navigation to a route with `meta` may proceed.
pub fn evaluate(meta: RouteMeta, token: Option<&str>) -> Decision {
    let has_token = token.is_some_and(|t| !t.is_empty());
    if meta.requires_auth && !has_token {
        return Decision::RedirectTo(LOGIN_PATH.to_owned());
    }
    Decision::Allow
}

/// Where a navigation ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landing<'a> {
    pub route: &'a RouteDef,
    /// The path originally requested, set only when the guard redirected.
    pub redirected_from: Option<String>,
}

impl Landing<'_> {
    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Resolve `path`, run the guard, and follow a redirect at most once.
pub fn navigate<'a>(table: &'a RouteTable, path: &str, token: Option<&str>) -> Landing<'a> {
    let target = table.resolve(path);
    match evaluate(target.meta, token) {
        Decision::Allow => Landing { route: target, redirected_from: None },
        Decision::RedirectTo(to) => {
            log::debug!("guard redirected {path} -> {to}");
            Landing { route: table.resolve(&to), redirected_from: Some(path.to_owned()) }
        }
    }
}
