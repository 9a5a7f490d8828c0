//! Top Bar Component
//!
//! Menu toggle for the sidebar plus decorative search, notifications and
//! profile controls.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let avatar_url = ctx.config(|c| c.avatar_url.clone());

    view! {
        <header class="top-bar">
            <button class="icon-btn menu-btn" title="Menu" on:click=move |_| ctx.open_sidebar()>
                "☰"
            </button>

            <div class="search-box">
                <input type="text" placeholder="Search Dark Whale..." />
                <span class="search-hint">"/"</span>
            </div>

            <button class="icon-btn notifications" title="Notifications">
                <span class="notification-dot"></span>
            </button>

            <div class="profile-menu">
                <img class="avatar" src=avatar_url alt="avatar" />
            </div>
        </header>
    }
}
