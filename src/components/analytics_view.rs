//! Analytics View
//!
//! KPI tiles, revenue line chart and client distribution donut. All figures
//! are fixed sample data.

use leptos::prelude::*;

use crate::charts::{donut_chart, line_chart};
use crate::components::SectionShell;
use crate::format::format_diff;
use crate::seed::{self, Kpi};

#[component]
fn KpiTile(kpi: &'static Kpi) -> impl IntoView {
    let badge_class = if kpi.is_positive() { "kpi-diff positive" } else { "kpi-diff negative" };
    view! {
        <div class="card kpi-tile">
            <div class="kpi-label">{kpi.label}</div>
            <div class="kpi-value">{kpi.value}</div>
            <div class=badge_class>{format_diff(kpi.diff)}</div>
        </div>
    }
}

#[component]
fn LineChartCard() -> impl IntoView {
    let chart = line_chart(seed::REVENUE_SAMPLES, seed::REVENUE_SCALE_MAX);

    view! {
        <div class="card chart-card">
            <div class="card-header">
                <div class="card-title">"Monthly revenue"</div>
                <div class="card-meta">"Last 12 months"</div>
            </div>
            <svg viewBox="0 0 100 100" preserveAspectRatio="none" class="line-chart">
                <defs>
                    <linearGradient id="lgrad" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0%" class="line-chart-stop-top" stop-opacity="0.6" />
                        <stop offset="100%" class="line-chart-stop-bottom" stop-opacity="0" />
                    </linearGradient>
                </defs>
                <polyline class="line-chart-stroke" fill="none" stroke-width="0.6" points=chart.polyline() />
                <polygon points=chart.area() fill="url(#lgrad)" opacity="0.35" />
            </svg>
        </div>
    }
}

#[component]
fn DonutChartCard() -> impl IntoView {
    let shares: Vec<f64> = seed::CLIENT_SHARES.iter().map(|(_, share)| *share).collect();
    let donut = donut_chart(&shares, seed::DONUT_RADIUS);
    let radius = donut.radius.to_string();
    let dasharray = donut.circumference.to_string();
    let percentages = donut.percentages();

    let arcs = donut.arcs.iter().enumerate().map(|(i, arc)| {
        view! {
            <circle
                cx="50" cy="50" r=radius.clone()
                class=format!("donut-arc arc-{}", i)
                stroke-width="12" fill="none"
                stroke-dasharray=dasharray.clone()
                stroke-dashoffset=arc.dash_offset.to_string()
                transform=arc.transform()
            />
        }
    }).collect_view();

    let legend = seed::CLIENT_SHARES.iter().zip(percentages).enumerate().map(|(i, ((label, _), pct))| {
        view! {
            <div class="legend-row">
                <span class=format!("legend-swatch arc-{}", i)></span>
                <span class="legend-label">{*label}</span>
                <span class="legend-value">{format!("{}%", pct)}</span>
            </div>
        }
    }).collect_view();

    view! {
        <div class="card chart-card">
            <div class="card-header">
                <div class="card-title">"Client distribution"</div>
                <div class="card-meta">"Active vs. inactive"</div>
            </div>
            <div class="donut-body">
                <svg viewBox="0 0 100 100" class="donut-chart">
                    <circle cx="50" cy="50" r=radius.clone() class="donut-track" stroke-width="12" fill="none" />
                    {arcs}
                    <text x="50" y="54" text-anchor="middle" class="donut-label">"100%"</text>
                </svg>
                <div class="legend">{legend}</div>
            </div>
        </div>
    }
}

#[component]
pub fn AnalyticsView() -> impl IntoView {
    view! {
        <SectionShell title="Analytics & Reporting" subtitle="KPIs and quick insights" hero=true>
            <div class="kpi-grid">
                {seed::KPIS.iter().map(|kpi| view! { <KpiTile kpi=kpi /> }).collect_view()}
            </div>
            <div class="chart-grid">
                <div class="chart-wide"><LineChartCard /></div>
                <DonutChartCard />
            </div>
        </SectionShell>
    }
}
