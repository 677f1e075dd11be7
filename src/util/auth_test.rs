use std::sync::{Arc, Mutex};

use any_spawner::Executor;
use reactive_graph::owner::Owner;

use super::*;
use crate::state::storage::MemoryStorage;

fn session_with(token: Option<&str>) -> SessionStore {
    let mut session = SessionStore::load(Arc::new(MemoryStorage::new()));
    session.set_token(token.map(str::to_owned));
    session
}

// =============================================================
// redirect_target
// =============================================================

#[test]
fn redirects_unauthenticated_from_root() {
    let table = RouteTable::default();
    assert_eq!(redirect_target(&table, "/", &session_with(None)), Some("/login"));
}

#[test]
fn no_redirect_once_token_is_set() {
    let table = RouteTable::default();
    assert_eq!(redirect_target(&table, "/", &session_with(Some("tok1"))), None);
}

#[test]
fn no_redirect_for_public_routes() {
    let table = RouteTable::default();
    for path in ["/login", "/unknown-path"] {
        assert_eq!(redirect_target(&table, path, &session_with(None)), None, "path {path}");
    }
}

#[test]
fn redirect_follows_logout() {
    let table = RouteTable::default();
    let mut session = session_with(Some("tok1"));
    session.logout();
    assert_eq!(redirect_target(&table, "/", &session), Some("/login"));
}

// =============================================================
// install_route_guard
// =============================================================

type Calls = Arc<Mutex<Vec<(String, bool)>>>;

fn recorder() -> (Calls, impl Fn(&str, NavigateOptions) + Clone + 'static) {
    let calls: Calls = Arc::default();
    let sink = calls.clone();
    let navigate = move |to: &str, options: NavigateOptions| {
        if let Ok(mut calls) = sink.lock() {
            calls.push((to.to_owned(), options.replace));
        }
    };
    (calls, navigate)
}

fn recorded(calls: &Calls) -> Vec<(String, bool)> {
    calls.lock().map(|c| c.clone()).unwrap_or_default()
}

/// Let spawned effects run and settle.
async fn settle() {
    for _ in 0..3 {
        Executor::tick().await;
    }
}

/// Install the guard over fresh signals inside a local task set, then run
/// `body` against them. Effects spawn locally, so both must happen inside the
/// same `LocalSet`.
async fn with_guard<Fut>(
    token: Option<&str>,
    path: &str,
    body: impl FnOnce(RwSignal<SessionStore>, RwSignal<String>, Calls) -> Fut + 'static,
) where
    Fut: Future<Output = ()>,
{
    let _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    let session = session_with(token);
    let path = path.to_owned();
    tokio::task::LocalSet::new()
        .run_until(async move {
            let session = RwSignal::new(session);
            let path = RwSignal::new(path);
            let (calls, navigate) = recorder();
            install_route_guard(RouteTable::default(), session, move || path.get(), navigate);
            body(session, path, calls).await;
        })
        .await;
}

#[tokio::test]
async fn guard_redirects_logged_out_visit_to_root() {
    with_guard(None, "/", |_, _, calls| async move {
        settle().await;
        assert_eq!(recorded(&calls), vec![("/login".to_owned(), true)]);
    })
    .await;
}

#[tokio::test]
async fn guard_leaves_logged_in_visit_alone_until_logout() {
    with_guard(Some("tok1"), "/", |session, _, calls| async move {
        settle().await;
        assert!(recorded(&calls).is_empty());

        session.update(SessionStore::logout);
        settle().await;
        assert_eq!(recorded(&calls), vec![("/login".to_owned(), true)]);
    })
    .await;
}

#[tokio::test]
async fn guard_ignores_public_and_unknown_paths() {
    with_guard(None, "/login", |_, path, calls| async move {
        settle().await;
        path.set("/unknown-path".to_owned());
        settle().await;
        assert!(recorded(&calls).is_empty());
    })
    .await;
}

#[tokio::test]
async fn guard_rechecks_when_path_changes() {
    with_guard(None, "/login", |_, path, calls| async move {
        settle().await;
        path.set("/".to_owned());
        settle().await;
        assert_eq!(recorded(&calls), vec![("/login".to_owned(), true)]);
    })
    .await;
}
