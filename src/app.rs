//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{home::HomePage, login::LoginPage, not_found::NotFoundPage};
use crate::router::routes::{RouteName, RouteTable};
use crate::state::session::SessionStore;
use crate::state::storage::default_storage;
use crate::state::user::UserState;
use crate::util::auth::RouteGuard;

/// Root application component.
///
/// Reads the persisted session once, provides the shared contexts, and sets
/// up client-side routing from the route table. `RouteGuard` applies the
/// table's auth requirements on every navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let table = RouteTable::default();
    let session = RwSignal::new(SessionStore::load_with_key(default_storage(), &config.storage_key));
    let user = RwSignal::new(UserState::default());

    let home = table.by_name(RouteName::Home).segment();
    let login = table.by_name(RouteName::Login).segment();

    provide_context(config);
    provide_context(table);
    provide_context(session);
    provide_context(user);

    view! {
        <Title text="Gatekeeper"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment(login) view=LoginPage/>
                <Route path=StaticSegment(home) view=HomePage/>
            </Routes>
        </Router>
    }
}
