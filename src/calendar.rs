//! Content Calendar
//!
//! Content items laid out on a fixed grid of days. Drag-drop reschedules an
//! item by id; the item is appended to the end of its new day.

use leptos_dragdrop::DropOutcome;

use crate::models::ContentItem;

#[derive(Debug, Clone, PartialEq)]
pub struct ContentCalendar {
    items: Vec<ContentItem>,
    days: u8,
}

impl ContentCalendar {
    /// Items whose day lies outside `1..=days` are dropped from the seed
    pub fn new(seed: Vec<ContentItem>, days: u8) -> Self {
        let items = seed.into_iter().filter(|it| (1..=days).contains(&it.day)).collect();
        Self { items, days }
    }

    pub fn days(&self) -> u8 {
        self.days
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Items scheduled on `day`, in display order
    pub fn on_day(&self, day: u8) -> Vec<ContentItem> {
        self.items.iter().filter(|it| it.day == day).cloned().collect()
    }

    pub fn day_of(&self, id: u32) -> Option<u8> {
        self.items.iter().find(|it| it.id == id).map(|it| it.day)
    }

    /// Reschedule item `id` to the end of `day`.
    ///
    /// Unchanged when the item is unknown, already on `day`, or `day` is
    /// outside the grid.
    pub fn move_to_day(&mut self, id: u32, day: u8) -> DropOutcome {
        if !(1..=self.days).contains(&day) {
            return DropOutcome::Unchanged;
        }
        let Some(index) = self.items.iter().position(|it| it.id == id) else {
            return DropOutcome::Unchanged;
        };
        if self.items[index].day == day {
            return DropOutcome::Unchanged;
        }
        let mut item = self.items.remove(index);
        item.day = day;
        self.items.push(item);
        DropOutcome::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn calendar() -> ContentCalendar {
        ContentCalendar::new(seed::content_items(), 21)
    }

    fn day_ids(calendar: &ContentCalendar, day: u8) -> Vec<u32> {
        calendar.on_day(day).iter().map(|it| it.id).collect()
    }

    #[test]
    fn test_move_appends_to_target_day() {
        let mut cal = calendar();
        assert_eq!(cal.move_to_day(2, 12), DropOutcome::Moved);
        assert_eq!(day_ids(&cal, 12), vec![3, 2]);
        assert!(day_ids(&cal, 4).is_empty());
        assert_eq!(cal.day_of(2), Some(12));
    }

    #[test]
    fn test_move_to_same_day_is_noop() {
        let mut cal = calendar();
        cal.move_to_day(1, 12);
        let before = cal.clone();

        assert_eq!(cal.move_to_day(3, 12), DropOutcome::Unchanged);
        assert_eq!(cal, before);
        assert_eq!(day_ids(&cal, 12), vec![3, 1]);
    }

    #[test]
    fn test_invalid_drops_are_ignored() {
        let mut cal = calendar();
        let before = cal.clone();
        assert_eq!(cal.move_to_day(99, 5), DropOutcome::Unchanged);
        assert_eq!(cal.move_to_day(1, 0), DropOutcome::Unchanged);
        assert_eq!(cal.move_to_day(1, 22), DropOutcome::Unchanged);
        assert_eq!(cal, before);
    }

    #[test]
    fn test_item_count_invariant_across_moves() {
        let mut cal = calendar();
        let moves = [(1, 5), (2, 5), (1, 5), (3, 21), (4, 1), (2, 4), (1, 1)];
        for (id, day) in moves {
            cal.move_to_day(id, day);
            assert_eq!(cal.items().len(), 4);
            for id in 1..=4 {
                let placed: usize = (1..=cal.days()).map(|d| day_ids(&cal, d).iter().filter(|&&x| x == id).count()).sum();
                assert_eq!(placed, 1, "item {} must be on exactly one day", id);
            }
        }
    }

    #[test]
    fn test_seed_outside_grid_is_dropped() {
        let mut items = seed::content_items();
        items[0].day = 30;
        let cal = ContentCalendar::new(items, 21);
        assert_eq!(cal.items().len(), 3);
    }
}
