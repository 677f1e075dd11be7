//! Home page: the protected landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected by `RouteGuard`. Fetches the user profile when no cached copy
//! exists and owns the logout flow.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::UserInfo;
use crate::state::session::SessionStore;
use crate::state::user::UserState;

/// Nickname when set, otherwise the username.
pub fn display_name(user: &UserInfo) -> &str {
    let nickname = user.nickname.trim();
    if nickname.is_empty() { &user.username } else { nickname }
}

pub fn roles_label(roles: &[String]) -> String {
    if roles.is_empty() {
        return "no roles".to_owned();
    }
    roles.join(", ")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let user = expect_context::<RwSignal<UserState>>();
    let config = expect_context::<ClientConfig>();

    let error = RwSignal::new(String::new());
    let requested = RwSignal::new(false);

    let fetch_config = config.clone();
    Effect::new(move || {
        let Some(token) = session.with(|s| s.token().map(str::to_owned)) else {
            return;
        };
        if requested.get_untracked() || !user.with_untracked(UserState::needs_fetch) {
            return;
        }
        requested.set(true);
        user.update(|u| u.loading = true);

        #[cfg(feature = "csr")]
        {
            use crate::net::{api, transport::HttpTransport};

            let transport = HttpTransport::new(fetch_config.clone(), Some(token));
            leptos::task::spawn_local(async move {
                match api::get_user_info(&transport).await {
                    Ok(info) => user.set(UserState { user: Some(info), loading: false }),
                    Err(e) => {
                        log::warn!("user info fetch failed: {e}");
                        error.set(format!("Could not load profile: {e}"));
                        user.update(|u| u.loading = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, &fetch_config);
            user.update(|u| u.loading = false);
        }
    });

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::net::{api, transport::HttpTransport};

            let token = session.with_untracked(|s| s.token().map(str::to_owned));
            let transport = HttpTransport::new(config.clone(), token);
            leptos::task::spawn_local(async move {
                // Local session is cleared even when the server call fails.
                if let Err(e) = api::logout(&transport).await {
                    log::warn!("logout request failed: {e}");
                }
                session.update(SessionStore::logout);
                user.set(UserState::default());
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &config;
            session.update(SessionStore::logout);
            user.set(UserState::default());
        }
    };

    view! {
        <div class="home-page">
            <h1>"Home"</h1>
            <Show
                when=move || user.with(|u| u.user.is_some())
                fallback=move || {
                    view! {
                        <p class="home-page__status">
                            {move || if user.with(|u| u.loading) { "Loading profile...".to_owned() } else { error.get() }}
                        </p>
                    }
                }
            >
                <div class="profile-card">
                    <img
                        class="profile-card__avatar"
                        src=move || user.with(|u| u.user.as_ref().map(|i| i.avatar.clone()).unwrap_or_default())
                    />
                    <p class="profile-card__name">
                        {move || user.with(|u| u.user.as_ref().map(|i| display_name(i).to_owned()).unwrap_or_default())}
                    </p>
                    <p class="profile-card__roles">
                        {move || user.with(|u| u.user.as_ref().map(|i| roles_label(&i.roles)).unwrap_or_default())}
                    </p>
                </div>
            </Show>
            <button class="logout-button" on:click=on_logout>
                "Log out"
            </button>
        </div>
    }
}
