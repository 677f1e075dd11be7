//! Static route configuration.
//!
//! Routes are never mutated at runtime. Any path that does not match a
//! declared route resolves to the not-found fallback.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::config::{HOME_PATH, LOGIN_PATH};

/// Per-route metadata consulted by the guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Home,
    Login,
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub name: RouteName,
    /// `None` marks the wildcard fallback.
    pub path: Option<&'static str>,
    pub meta: RouteMeta,
}

impl RouteDef {
    /// Path without its leading slash, as the router's static segments want
    /// it. Empty for `/` and for the fallback.
    pub fn segment(&self) -> &'static str {
        self.path.map_or("", |path| path.trim_start_matches('/'))
    }
}

pub const HOME: RouteDef = RouteDef {
    name: RouteName::Home,
    path: Some(HOME_PATH),
    meta: RouteMeta { requires_auth: true },
};

pub const LOGIN: RouteDef = RouteDef {
    name: RouteName::Login,
    path: Some(LOGIN_PATH),
    meta: RouteMeta { requires_auth: false },
};

pub const NOT_FOUND: RouteDef = RouteDef { name: RouteName::NotFound, path: None, meta: RouteMeta { requires_auth: false } };

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
    fallback: RouteDef,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self { routes: vec![HOME, LOGIN], fallback: NOT_FOUND }
    }
}

impl RouteTable {
    pub fn routes(&self) -> impl Iterator<Item = &RouteDef> {
        self.routes.iter().chain(std::iter::once(&self.fallback))
    }

    /// Match `path` against the declared routes, falling back to not-found.
    pub fn resolve(&self, path: &str) -> &RouteDef {
        let wanted = normalize_path(path);
        self.routes
            .iter()
            .find(|route| route.path == Some(wanted))
            .unwrap_or(&self.fallback)
    }

    pub fn by_name(&self, name: RouteName) -> &RouteDef {
        self.routes().find(|route| route.name == name).unwrap_or(&self.fallback)
    }
}

/// Strip query string and fragment, and drop a trailing slash except on `/`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.is_empty() {
        return HOME_PATH;
    }
    match path.trim_end_matches('/') {
        "" => HOME_PATH,
        trimmed => trimmed,
    }
}
