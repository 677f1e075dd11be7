//! Login page with username + password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::session::SessionStore;
use crate::state::user::UserState;

/// Trim the username and require both fields before hitting the network.
///
/// The password is passed through untrimmed.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let user = expect_context::<RwSignal<UserState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name, pass) = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            use crate::config::HOME_PATH;
            use crate::net::{api, transport::HttpTransport};
            use leptos_router::NavigateOptions;

            let transport = HttpTransport::new(config.clone(), None);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::login(&transport, &name, &pass).await {
                    Ok(result) => {
                        session.update(|s| s.set_token(Some(result.token)));
                        user.set(UserState { user: Some(result.user_info), loading: false });
                        password.set(String::new());
                        info.set(String::new());
                        navigate(HOME_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        info.set(format!("Sign in failed: {e}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, pass, session, user, &config, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
