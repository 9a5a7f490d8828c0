//! Navigation Shell Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the shell
//! fields (active section, sidebar, loading flag).

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Section;

/// Identifies one scheduled loading reveal. Only the ticket of the most
/// recent navigation can end the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTicket {
    pub section: Section,
    generation: u64,
}

/// Navigation shell state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct ShellState {
    /// Section selected in the sidebar
    pub active: Section,
    /// Sidebar visibility on narrow layouts
    pub sidebar_open: bool,
    /// Placeholder shown instead of the active view
    pub loading: bool,
    /// Bumped on every loading start; stale tickets carry an older value
    pub generation: u64,
}

impl ShellState {
    pub fn new(initial: Section) -> Self {
        Self {
            active: initial,
            sidebar_open: false,
            loading: false,
            generation: 0,
        }
    }

    /// Enter the loading state for the active section
    pub fn begin_loading(&mut self) -> LoadingTicket {
        self.loading = true;
        self.generation += 1;
        LoadingTicket {
            section: self.active,
            generation: self.generation,
        }
    }

    /// Activate `section` and close the sidebar. Returns a ticket when the
    /// section actually changed.
    pub fn select(&mut self, section: Section) -> Option<LoadingTicket> {
        self.set_sidebar(false);
        if section == self.active {
            return None;
        }
        self.active = section;
        Some(self.begin_loading())
    }

    /// Reveal the view if `ticket` belongs to the latest navigation
    pub fn finish_loading(&mut self, ticket: LoadingTicket) -> bool {
        let current = self.loading && ticket.generation == self.generation && ticket.section == self.active;
        if current {
            self.loading = false;
        }
        current
    }

    pub fn set_sidebar(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    /// Section to render, `None` while loading
    pub fn visible_section(&self) -> Option<Section> {
        (!self.loading).then_some(self.active)
    }
}

/// Type alias for the store
pub type ShellStore = Store<ShellState>;

/// Get the shell store from context
pub fn use_shell_store() -> ShellStore {
    expect_context::<ShellStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_begin_loading(store: &ShellStore) -> Option<LoadingTicket> {
    store.try_update(|s| s.begin_loading())
}

pub fn store_select_section(store: &ShellStore, section: Section) -> Option<LoadingTicket> {
    store.try_update(|s| s.select(section)).flatten()
}

/// False when the ticket is stale or the store is gone
pub fn store_finish_loading(store: &ShellStore, ticket: LoadingTicket) -> bool {
    store.try_update(|s| s.finish_loading(ticket)).unwrap_or(false)
}

pub fn store_set_sidebar(store: &ShellStore, open: bool) {
    store.sidebar_open().set(open);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_starts_loading_and_closes_sidebar() {
        let mut shell = ShellState::new(Section::Analytics);
        shell.sidebar_open = true;

        let ticket = shell.select(Section::Clients).unwrap();
        assert_eq!(ticket.section, Section::Clients);
        assert!(shell.loading);
        assert!(!shell.sidebar_open);
        assert_eq!(shell.visible_section(), None);

        assert!(shell.finish_loading(ticket));
        assert_eq!(shell.visible_section(), Some(Section::Clients));
    }

    #[test]
    fn test_reselecting_active_section_only_closes_sidebar() {
        let mut shell = ShellState::new(Section::Finance);
        shell.sidebar_open = true;
        assert_eq!(shell.select(Section::Finance), None);
        assert!(!shell.sidebar_open);
        assert!(!shell.loading);
    }

    #[test]
    fn test_rapid_switch_reveals_only_final_section() {
        let mut shell = ShellState::new(Section::Analytics);
        let first = shell.select(Section::Clients).unwrap();
        let second = shell.select(Section::Content).unwrap();

        let reveals = [first, second].into_iter().filter(|&t| shell.finish_loading(t)).count();
        assert_eq!(reveals, 1);
        assert_eq!(shell.visible_section(), Some(Section::Content));
    }

    #[test]
    fn test_stale_ticket_for_same_section_is_rejected() {
        // A -> B -> A: the first A-bound timer must not cut the second load short
        let mut shell = ShellState::new(Section::Analytics);
        let to_workflow = shell.select(Section::Workflow).unwrap();
        shell.finish_loading(to_workflow);
        let first = shell.select(Section::Analytics).unwrap();
        let _other = shell.select(Section::Workflow).unwrap();
        let last = shell.select(Section::Analytics).unwrap();

        assert!(!shell.finish_loading(first));
        assert!(shell.loading);
        assert!(shell.finish_loading(last));
        assert!(!shell.finish_loading(last));
    }

    #[test]
    fn test_sidebar_toggle_keeps_view() {
        let mut shell = ShellState::new(Section::Content);
        shell.set_sidebar(true);
        assert!(shell.sidebar_open);
        assert_eq!(shell.visible_section(), Some(Section::Content));
        shell.set_sidebar(false);
        assert!(!shell.sidebar_open);
    }

    #[test]
    fn test_initial_mount_loading() {
        let mut shell = ShellState::new(Section::Analytics);
        assert_eq!(shell.visible_section(), Some(Section::Analytics));
        let ticket = shell.begin_loading();
        assert_eq!(shell.visible_section(), None);
        assert!(shell.finish_loading(ticket));
        assert_eq!(shell.visible_section(), Some(Section::Analytics));
    }
}
