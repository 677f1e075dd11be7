//! Fallback page for paths that match no route.

use leptos::prelude::*;

use crate::config::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a href=HOME_PATH>"Back to home"</a>
        </div>
    }
}
