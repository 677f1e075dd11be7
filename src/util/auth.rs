//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteGuard` sits inside the router and re-checks the current location
//! against the route table whenever the path or the session changes. The
//! redirect side effect stays a thin shell around `router::guard::navigate`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::router::guard::navigate as guard_navigate;
use crate::router::routes::RouteTable;
use crate::state::session::SessionStore;

/// Path the guard sends the user to from `path`, if any.
pub fn redirect_target(table: &RouteTable, path: &str, session: &SessionStore) -> Option<&'static str> {
    let landing = guard_navigate(table, path, session.token());
    if landing.was_redirected() { landing.route.path } else { None }
}

/// Re-run the guard whenever `path` or the session changes and navigate on
/// redirect.
///
/// The redirect replaces the history entry so "back" does not bounce the
/// user into the protected route again.
pub fn install_route_guard<P, F>(table: RouteTable, session: RwSignal<SessionStore>, path: P, navigate: F)
where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let current = path();
        if let Some(target) = session.with(|s| redirect_target(&table, &current, s)) {
            log::debug!("route guard redirecting {current} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Applies the route table's auth requirements to every navigation.
///
/// Must be rendered inside `<Router>`.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let table = expect_context::<RouteTable>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let location = use_location();

    install_route_guard(table, session, move || location.pathname.get(), use_navigate());
}
