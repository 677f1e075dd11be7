use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn root_resolves_to_home() {
    assert_eq!(RouteTable::default().resolve("/").name, RouteName::Home);
}

#[test]
fn login_resolves_to_login() {
    assert_eq!(RouteTable::default().resolve("/login").name, RouteName::Login);
}

#[test]
fn unknown_path_resolves_to_not_found() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("/unknown-path").name, RouteName::NotFound);
    assert_eq!(table.resolve("/login/extra").name, RouteName::NotFound);
    assert_eq!(table.resolve("/a/b/c").name, RouteName::NotFound);
}

#[test]
fn query_and_fragment_are_ignored() {
    let table = RouteTable::default();
    assert_eq!(table.resolve("/login?next=/").name, RouteName::Login);
    assert_eq!(table.resolve("/#top").name, RouteName::Home);
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(RouteTable::default().resolve("/login/").name, RouteName::Login);
}

// =============================================================
// metadata
// =============================================================

#[test]
fn only_home_requires_auth() {
    let table = RouteTable::default();
    let protected: Vec<_> = table.routes().filter(|r| r.meta.requires_auth).map(|r| r.name).collect();
    assert_eq!(protected, vec![RouteName::Home]);
}

#[test]
fn fallback_defaults_to_public() {
    assert_eq!(NOT_FOUND.meta, RouteMeta::default());
}

#[test]
fn by_name_finds_fallback_too() {
    let table = RouteTable::default();
    assert_eq!(table.by_name(RouteName::NotFound), &NOT_FOUND);
    assert_eq!(table.by_name(RouteName::Login).path, Some("/login"));
}

// =============================================================
// normalize_path
// =============================================================

#[test]
fn normalize_path_handles_empty_and_root() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("//"), "/");
    assert_eq!(normalize_path("?x=1"), "/");
}

// =============================================================
// segment
// =============================================================

#[test]
fn segments_strip_leading_slash() {
    assert_eq!(HOME.segment(), "");
    assert_eq!(LOGIN.segment(), "login");
    assert_eq!(NOT_FOUND.segment(), "");
}

#[test]
fn declared_segments_resolve_back_to_their_route() {
    let table = RouteTable::default();
    for name in [RouteName::Home, RouteName::Login] {
        let route = table.by_name(name);
        assert_eq!(table.resolve(&format!("/{}", route.segment())).name, name);
    }
}
