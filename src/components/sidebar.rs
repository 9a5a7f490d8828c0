//! Sidebar Component
//!
//! Section navigation. Slides in on narrow layouts.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Section;
use crate::store::{use_shell_store, ShellStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_shell_store();

    let sidebar_class = move || {
        if store.sidebar_open().get() { "sidebar open" } else { "sidebar" }
    };

    view! {
        <aside class=sidebar_class>
            <div class="sidebar-header">
                <div class="sidebar-brand">
                    <span class="brand-mark"></span>
                    <span class="brand-name">"Dark Whale SAAS"</span>
                </div>
                <button class="icon-btn sidebar-close" on:click=move |_| ctx.close_sidebar()>"✕"</button>
            </div>

            <nav class="sidebar-nav">
                {Section::ALL.into_iter().map(|section| {
                    let is_active = move || store.active().get() == section;
                    view! {
                        <button
                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                            on:click=move |_| ctx.navigate(section)
                        >
                            {section.label()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
