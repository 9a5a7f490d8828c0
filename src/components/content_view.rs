//! Content View
//!
//! Month grid of content items. Items are dragged between day cells to
//! reschedule them.

use leptos::prelude::*;
use leptos_dragdrop::{
    create_dnd_signals, make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop,
    DndSignals, DropOutcome,
};

use crate::calendar::ContentCalendar;
use crate::components::SectionShell;
use crate::context::use_app_context;
use crate::format::format_day_label;
use crate::models::ContentItem;
use crate::seed;

/// Drag carries the item id, targets are day numbers
type CalendarDnd = DndSignals<u32, u8>;

#[component]
fn ContentEntry(item: ContentItem, dnd: CalendarDnd) -> impl IntoView {
    let id = item.id;
    let is_dragging = move || dnd.is_dragging(|p| *p == id);

    view! {
        <div
            class=move || if is_dragging() { "content-entry dragging" } else { "content-entry" }
            draggable="true"
            on:dragstart=make_on_dragstart(dnd, id)
            on:dragend=make_on_dragend(dnd)
        >
            <div class="content-kind">{item.kind}</div>
            <div class="content-title">{item.title}</div>
            <span class=format!("content-status {}", item.status.css_class())>{item.status.as_str()}</span>
        </div>
    }
}

#[component]
fn DayCell(
    day: u8,
    #[prop(into)] month: String,
    calendar: RwSignal<ContentCalendar>,
    dnd: CalendarDnd,
) -> impl IntoView {
    let items = move || calendar.with(|c| c.on_day(day));

    let on_drop = move |id: u32, target: u8| {
        let outcome = calendar
            .try_update(|c| c.move_to_day(id, target))
            .unwrap_or(DropOutcome::Unchanged);
        match outcome {
            DropOutcome::Moved => log::info!("[DND] Content #{} moved to day {}", id, target),
            DropOutcome::Unchanged => log::debug!("[DND] Content #{} stays put", id),
        }
    };

    view! {
        <div
            class=move || if dnd.is_over(&day) { "day-cell drop-target" } else { "day-cell" }
            on:dragover=make_on_dragover(dnd, day)
            on:dragleave=make_on_dragleave(dnd)
            on:drop=make_on_drop(dnd, day, on_drop)
        >
            <div class="day-label">{format_day_label(day, &month)}</div>
            <For each=items key=|it| it.id let:item>
                <ContentEntry item=item dnd=dnd />
            </For>
        </div>
    }
}

#[component]
pub fn ContentView() -> impl IntoView {
    let ctx = use_app_context();
    let (days, month) = ctx.config(|c| (c.calendar_days, c.calendar_month.clone()));
    let calendar = RwSignal::new(ContentCalendar::new(seed::content_items(), days));
    let dnd: CalendarDnd = create_dnd_signals();

    view! {
        <SectionShell title="Content calendar" subtitle="Drag entries onto another day to reschedule">
            <div class="card">
                <div class="calendar-grid">
                    {(1..=days).map(|day| view! {
                        <DayCell day=day month=month.clone() calendar=calendar dnd=dnd />
                    }).collect_view()}
                </div>
            </div>
        </SectionShell>
    }
}
