//! Workflow View
//!
//! Four-column kanban board. Cards are dragged between columns.

use leptos::prelude::*;
use leptos_dragdrop::{
    create_dnd_signals, make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop,
    DndSignals, DropOutcome,
};

use crate::components::SectionShell;
use crate::kanban::{Board, CardPayload};
use crate::models::{Column, WorkflowCard};
use crate::seed;

type BoardDnd = DndSignals<CardPayload, Column>;

#[component]
fn KanbanCard(card: WorkflowCard, column: Column, dnd: BoardDnd) -> impl IntoView {
    let payload = CardPayload { card_id: card.id, from: column };
    let card_id = card.id;
    let is_dragging = move || dnd.is_dragging(|p| p.card_id == card_id);
    let priority_class = format!("priority-badge {}", card.priority.as_str().to_lowercase());

    view! {
        <div
            class=move || if is_dragging() { "kanban-card dragging" } else { "kanban-card" }
            draggable="true"
            on:dragstart=make_on_dragstart(dnd, payload)
            on:dragend=make_on_dragend(dnd)
        >
            <div class="kanban-card-title">{card.title}</div>
            <div class="kanban-card-meta">
                <span class="assignee">{card.assignee}</span>
                <span class=priority_class>{card.priority.as_str()}</span>
            </div>
        </div>
    }
}

#[component]
fn KanbanColumn(column: Column, board: RwSignal<Board>, dnd: BoardDnd) -> impl IntoView {
    let cards = move || board.with(|b| b.lane(column).to_vec());
    let count = move || board.with(|b| b.lane(column).len());

    let on_drop = move |payload: CardPayload, to: Column| {
        let outcome = board
            .try_update(|b| b.move_card(payload, to))
            .unwrap_or(DropOutcome::Unchanged);
        match outcome {
            DropOutcome::Moved => log::info!(
                "[DND] Card #{} moved {} -> {}",
                payload.card_id,
                payload.from.as_str(),
                to.as_str()
            ),
            DropOutcome::Unchanged => log::debug!("[DND] Card #{} stays in {}", payload.card_id, payload.from.as_str()),
        }
    };

    view! {
        <div
            class=move || if dnd.is_over(&column) { "kanban-column drop-target" } else { "kanban-column" }
            on:dragover=make_on_dragover(dnd, column)
            on:dragleave=make_on_dragleave(dnd)
            on:drop=make_on_drop(dnd, column, on_drop)
        >
            <div class="kanban-column-header">
                <span class="kanban-column-title">{column.as_str()}</span>
                <span class="kanban-column-count">{count}</span>
            </div>
            <div class="kanban-column-body">
                <For each=cards key=|c| c.id let:card>
                    <KanbanCard card=card column=column dnd=dnd />
                </For>
            </div>
        </div>
    }
}

#[component]
pub fn WorkflowView() -> impl IntoView {
    let board = RwSignal::new(Board::new(seed::workflow_cards()));
    let dnd: BoardDnd = create_dnd_signals();

    view! {
        <SectionShell title="Workflow" subtitle="Drag cards across the pipeline">
            <div class="kanban-board">
                {Column::ALL.into_iter().map(|column| view! {
                    <KanbanColumn column=column board=board dnd=dnd />
                }).collect_view()}
            </div>
        </SectionShell>
    }
}
