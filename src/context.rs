//! Application Context
//!
//! Shared handles provided via Leptos Context API: configuration, the shell
//! store, and the pending loading timer.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::models::Section;
use crate::store::{
    store_begin_loading, store_finish_loading, store_select_section, store_set_sidebar, LoadingTicket,
    ShellStateStoreFields, ShellStore,
};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation shell state
    pub store: ShellStore,
    config: StoredValue<DashboardConfig>,
    /// Timer that will end the current loading state
    pending_reveal: StoredValue<Option<Timeout>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: ShellStore, config: DashboardConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            pending_reveal: StoredValue::new_local(None),
        }
    }

    /// Read configuration
    pub fn config<U>(&self, f: impl FnOnce(&DashboardConfig) -> U) -> U {
        self.config.with_value(f)
    }

    /// Run the loading placeholder for the initial section
    pub fn begin_initial_load(&self) {
        if let Some(ticket) = store_begin_loading(&self.store) {
            self.schedule_reveal(ticket);
        }
    }

    /// Switch section from the sidebar
    pub fn navigate(&self, section: Section) {
        match store_select_section(&self.store, section) {
            Some(ticket) => {
                log::debug!("[NAV] {:?} selected, loading", section);
                self.schedule_reveal(ticket);
            }
            None => log::debug!("[NAV] {:?} already active", section),
        }
    }

    pub fn open_sidebar(&self) {
        store_set_sidebar(&self.store, true);
    }

    pub fn close_sidebar(&self) {
        store_set_sidebar(&self.store, false);
    }

    /// Tracked: section to render, `None` while loading
    pub fn visible_section(&self) -> Option<Section> {
        if self.store.loading().get() {
            None
        } else {
            Some(self.store.active().get())
        }
    }

    /// Drop any scheduled reveal without firing it
    pub fn cancel_pending(&self) {
        self.pending_reveal.update_value(|slot| {
            if let Some(timer) = slot.take() {
                let _ = timer.cancel();
            }
        });
    }

    fn schedule_reveal(&self, ticket: LoadingTicket) {
        let delay = self.config(|c| c.loading_delay_ms);
        let store = self.store;
        let timer = Timeout::new(delay, move || {
            if store_finish_loading(&store, ticket) {
                log::debug!("[NAV] {:?} revealed", ticket.section);
            } else {
                log::debug!("[NAV] stale reveal for {:?} ignored", ticket.section);
            }
        });
        // Replacing the handle cancels the previous navigation's timer
        self.cancel_pending();
        self.pending_reveal.set_value(Some(timer));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
