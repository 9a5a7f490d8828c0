//! Kanban Board
//!
//! Workflow cards grouped by column. A drag carries the card id and the
//! column it was picked up from.

use std::collections::BTreeMap;

use leptos_dragdrop::DropOutcome;
use serde::{Deserialize, Serialize};

use crate::models::{Column, WorkflowCard};

/// Interaction payload captured on drag start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPayload {
    pub card_id: u32,
    pub from: Column,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    lanes: BTreeMap<Column, Vec<WorkflowCard>>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            lanes: Column::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }
}

impl Board {
    pub fn new(seed: Vec<(Column, WorkflowCard)>) -> Self {
        let mut board = Board::default();
        for (column, card) in seed {
            board.lane_mut(column).push(card);
        }
        board
    }

    pub fn lane(&self, column: Column) -> &[WorkflowCard] {
        self.lanes.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    fn lane_mut(&mut self, column: Column) -> &mut Vec<WorkflowCard> {
        self.lanes.entry(column).or_default()
    }

    pub fn card_count(&self) -> usize {
        self.lanes.values().map(Vec::len).sum()
    }

    pub fn column_of(&self, card_id: u32) -> Option<Column> {
        self.lanes
            .iter()
            .find(|(_, cards)| cards.iter().any(|c| c.id == card_id))
            .map(|(column, _)| *column)
    }

    /// Move the dragged card to the end of `to`.
    ///
    /// Unchanged when dropped on its own column or when the payload no longer
    /// matches the board (card not in `payload.from`).
    pub fn move_card(&mut self, payload: CardPayload, to: Column) -> DropOutcome {
        if payload.from == to {
            return DropOutcome::Unchanged;
        }
        let source = self.lane_mut(payload.from);
        let Some(index) = source.iter().position(|c| c.id == payload.card_id) else {
            return DropOutcome::Unchanged;
        };
        let card = source.remove(index);
        self.lane_mut(to).push(card);
        DropOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn lane_ids(board: &Board, column: Column) -> Vec<u32> {
        board.lane(column).iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_new_board_has_all_columns() {
        let board = Board::new(seed::workflow_cards());
        assert_eq!(board.card_count(), 5);
        assert_eq!(lane_ids(&board, Column::ToDo), vec![1, 2]);
        assert_eq!(lane_ids(&board, Column::Completed), vec![5]);
        assert!(Board::default().lane(Column::InProgress).is_empty());
    }

    #[test]
    fn test_move_appends_to_target_column() {
        let mut board = Board::new(seed::workflow_cards());
        let outcome = board.move_card(CardPayload { card_id: 1, from: Column::ToDo }, Column::InProgress);
        assert_eq!(outcome, DropOutcome::Moved);
        assert_eq!(lane_ids(&board, Column::ToDo), vec![2]);
        assert_eq!(lane_ids(&board, Column::InProgress), vec![3, 1]);
        assert_eq!(board.column_of(1), Some(Column::InProgress));
    }

    #[test]
    fn test_move_to_own_column_is_noop() {
        let mut board = Board::new(seed::workflow_cards());
        let before = board.clone();
        let outcome = board.move_card(CardPayload { card_id: 1, from: Column::ToDo }, Column::ToDo);
        assert_eq!(outcome, DropOutcome::Unchanged);
        assert_eq!(board, before);
    }

    #[test]
    fn test_stale_payload_does_not_duplicate() {
        let mut board = Board::new(seed::workflow_cards());
        board.move_card(CardPayload { card_id: 4, from: Column::ReadyForReview }, Column::Completed);
        let before = board.clone();

        // Card 4 is no longer in Ready for Review
        let outcome = board.move_card(CardPayload { card_id: 4, from: Column::ReadyForReview }, Column::ToDo);
        assert_eq!(outcome, DropOutcome::Unchanged);
        assert_eq!(board, before);
        assert_eq!(board.move_card(CardPayload { card_id: 42, from: Column::ToDo }, Column::Completed), DropOutcome::Unchanged);
    }

    #[test]
    fn test_any_column_accepts_any_card() {
        let mut board = Board::new(seed::workflow_cards());
        let outcome = board.move_card(CardPayload { card_id: 5, from: Column::Completed }, Column::ToDo);
        assert_eq!(outcome, DropOutcome::Moved);
        assert_eq!(lane_ids(&board, Column::ToDo), vec![1, 2, 5]);
    }

    #[test]
    fn test_card_count_invariant_across_moves() {
        let mut board = Board::new(seed::workflow_cards());
        let moves = [
            (1, Column::InProgress),
            (3, Column::Completed),
            (1, Column::Completed),
            (5, Column::ToDo),
            (2, Column::ToDo),
            (4, Column::ToDo),
        ];
        for (card_id, to) in moves {
            if let Some(from) = board.column_of(card_id) {
                board.move_card(CardPayload { card_id, from }, to);
            }
            assert_eq!(board.card_count(), 5);
            for id in 1..=5 {
                let hits = Column::ALL.iter().filter(|&&c| board.lane(c).iter().any(|card| card.id == id)).count();
                assert_eq!(hits, 1, "card {} must be in exactly one column", id);
            }
        }
        assert_eq!(lane_ids(&board, Column::ToDo), vec![2, 5, 4]);
    }
}
