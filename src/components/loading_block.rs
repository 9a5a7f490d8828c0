//! Loading Placeholder
//!
//! Shown while the shell's synthetic loading delay runs.

use leptos::prelude::*;

#[component]
pub fn LoadingBlock() -> impl IntoView {
    view! {
        <div class="loading-block" aria-busy="true">
            <span class="loading-dot"></span>
            <span class="loading-dot delay-1"></span>
            <span class="loading-dot delay-2"></span>
        </div>
    }
}
