//! Section Shell Component
//!
//! Title block shared by every view, optionally as a hero with the embedded
//! 3D scene behind the heading.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Opaque third-party scene viewer. Only a URL and a box are known.
#[component]
fn HeroScene(url: String) -> impl IntoView {
    view! { <spline-viewer class="hero-scene" url=url></spline-viewer> }
}

#[component]
pub fn SectionShell(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Render the heading over the hero scene
    #[prop(optional)]
    hero: bool,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let subtitle = subtitle.map(|s| view! { <p class="section-subtitle">{s}</p> });

    let header = if hero {
        let (url, height) = ctx.config(|c| (c.hero_scene_url.clone(), c.hero_height_px));
        view! {
            <div class="section-hero card" style=format!("height: {}px;", height)>
                <HeroScene url=url />
                <div class="section-hero-shade"></div>
                <div class="section-hero-caption">
                    <h2 class="section-title">{title}</h2>
                    {subtitle}
                </div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="section-header">
                <h2 class="section-title">{title}</h2>
                {subtitle}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="section-shell">
            {header}
            {children()}
        </div>
    }
}
