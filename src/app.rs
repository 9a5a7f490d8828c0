//! Dark Whale Frontend App
//!
//! Shell layout: sidebar, top bar, and the active section's view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AnalyticsView, ClientsView, ContentView, FinanceView, LoadingBlock, Sidebar, TopBar, WorkflowView,
};
use crate::config::DashboardConfig;
use crate::context::AppContext;
use crate::models::Section;
use crate::store::ShellState;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let store = Store::new(ShellState::new(Section::Analytics));
    provide_context(store);

    let ctx = AppContext::new(store, config);
    provide_context(ctx);

    ctx.begin_initial_load();
    on_cleanup(move || ctx.cancel_pending());

    // Each reveal mounts a fresh view with fresh local state
    let visible = Memo::new(move |_| ctx.visible_section());

    view! {
        <div class="app-layout">
            <Sidebar />

            <div class="main-column">
                <TopBar />

                <main class="main-content">
                    {move || match visible.get() {
                        None => view! { <LoadingBlock /> }.into_any(),
                        Some(Section::Analytics) => view! { <AnalyticsView /> }.into_any(),
                        Some(Section::Clients) => view! { <ClientsView /> }.into_any(),
                        Some(Section::Content) => view! { <ContentView /> }.into_any(),
                        Some(Section::Workflow) => view! { <WorkflowView /> }.into_any(),
                        Some(Section::Finance) => view! { <FinanceView /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
