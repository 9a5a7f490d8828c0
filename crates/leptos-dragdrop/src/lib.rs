//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos built around an explicit interaction payload.
//! The payload is captured on `dragstart` and consumed by at most one `drop`.
//! Reorder logic stays with the caller and receives plain `(payload, target)`
//! values, so it can be driven by direct function calls in tests.

use leptos::prelude::*;
use serde::Serialize;
use web_sys::DragEvent;

/// MIME type used when mirroring the payload into `DataTransfer`
pub const PAYLOAD_MIME: &str = "application/json";

/// Result of applying a drop to the caller's lists
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The item changed location
    Moved,
    /// Nothing changed (move-to-self, stale payload, invalid target)
    Unchanged,
}

/// Per-interaction state machine: `Idle -> Dragging(payload) -> Idle`
#[derive(Clone, Debug, PartialEq)]
pub enum DragSession<P> {
    Idle,
    Dragging(P),
}

impl<P> Default for DragSession<P> {
    fn default() -> Self {
        DragSession::Idle
    }
}

impl<P> DragSession<P> {
    /// Capture the payload. A previous unfinished drag is replaced.
    pub fn start(&mut self, payload: P) {
        *self = DragSession::Dragging(payload);
    }

    pub fn payload(&self) -> Option<&P> {
        match self {
            DragSession::Dragging(p) => Some(p),
            DragSession::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging(_))
    }

    /// Consume the payload and return to idle
    pub fn take(&mut self) -> Option<P> {
        match std::mem::take(self) {
            DragSession::Dragging(p) => Some(p),
            DragSession::Idle => None,
        }
    }

    /// Abandon the drag without producing a payload
    pub fn cancel(&mut self) {
        *self = DragSession::Idle;
    }
}

/// DnD state signals
///
/// `P` is the payload captured at drag start, `T` identifies a drop target.
pub struct DndSignals<P: Send + Sync + 'static, T: Send + Sync + 'static> {
    pub session: RwSignal<DragSession<P>>,
    /// Target currently hovered by a drag (for highlighting)
    pub over: RwSignal<Option<T>>,
}

impl<P: Send + Sync + 'static, T: Send + Sync + 'static> Clone for DndSignals<P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Send + Sync + 'static, T: Send + Sync + 'static> Copy for DndSignals<P, T> {}

impl<P, T> DndSignals<P, T>
where
    P: Send + Sync + 'static,
    T: PartialEq + Send + Sync + 'static,
{
    /// Tracked: is a drag hovering this target?
    pub fn is_over(&self, target: &T) -> bool {
        self.over.with(|over| over.as_ref() == Some(target))
    }

    /// Tracked: does the active drag carry a payload matching `pred`?
    pub fn is_dragging(&self, pred: impl Fn(&P) -> bool) -> bool {
        self.session.with(|s| s.payload().is_some_and(|p| pred(p)))
    }
}

pub fn create_dnd_signals<P, T>() -> DndSignals<P, T>
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    DndSignals {
        session: RwSignal::new(DragSession::Idle),
        over: RwSignal::new(None),
    }
}

/// End drag operation without dropping
pub fn end_drag<P, T>(dnd: &DndSignals<P, T>)
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.session.update(|s| s.cancel());
    dnd.over.set(None);
}

/// Create dragstart handler for a draggable element
pub fn make_on_dragstart<P, T>(dnd: DndSignals<P, T>, payload: P) -> impl Fn(DragEvent) + Clone + 'static
where
    P: Serialize + Clone + Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |ev: DragEvent| {
        // Some browsers refuse to start a drag with an empty DataTransfer
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            match serde_json::to_string(&payload) {
                Ok(json) => {
                    if dt.set_data(PAYLOAD_MIME, &json).is_err() {
                        log::debug!("[DND] DataTransfer rejected payload");
                    }
                }
                Err(e) => log::warn!("[DND] Payload not serializable: {}", e),
            }
        }
        dnd.session.update(|s| s.start(payload.clone()));
    }
}

/// Create dragover handler for a drop target. Accepts every payload.
pub fn make_on_dragover<P, T>(dnd: DndSignals<P, T>, target: T) -> impl Fn(DragEvent) + Clone + 'static
where
    P: Send + Sync + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        let already = dnd.over.with_untracked(|over| over.as_ref() == Some(&target));
        if !already {
            dnd.over.set(Some(target.clone()));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave<P, T>(dnd: DndSignals<P, T>) -> impl Fn(DragEvent) + Clone + 'static
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        dnd.over.set(None);
    }
}

/// Create drop handler. `on_drop` runs only when a payload is active.
pub fn make_on_drop<P, T, F>(dnd: DndSignals<P, T>, target: T, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    P: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    F: Fn(P, T) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let payload = dnd.session.try_update(|s| s.take()).flatten();
        dnd.over.set(None);
        match payload {
            Some(payload) => on_drop(payload, target.clone()),
            None => log::debug!("[DND] Drop without active payload ignored"),
        }
    }
}

/// Create dragend handler. Fires after drop, or alone when the drag was
/// released outside any target; either way no list is touched.
pub fn make_on_dragend<P, T>(dnd: DndSignals<P, T>) -> impl Fn(DragEvent) + Clone + 'static
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        if dnd.session.with_untracked(|s| s.is_dragging()) {
            log::debug!("[DND] Drag cancelled");
        }
        end_drag(&dnd);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_idle() {
        let session: DragSession<u32> = DragSession::default();
        assert!(!session.is_dragging());
        assert_eq!(session.payload(), None);
    }

    #[test]
    fn test_take_consumes_payload_once() {
        let mut session = DragSession::Idle;
        session.start(7u32);
        assert!(session.is_dragging());
        assert_eq!(session.payload(), Some(&7));

        assert_eq!(session.take(), Some(7));
        assert_eq!(session.take(), None);
        assert_eq!(session, DragSession::Idle);
    }

    #[test]
    fn test_cancel_discards_payload() {
        let mut session = DragSession::Idle;
        session.start((3u32, "To Do"));
        session.cancel();
        assert_eq!(session.take(), None);
    }

    #[test]
    fn test_restart_replaces_payload() {
        let mut session = DragSession::Idle;
        session.start(1u32);
        session.start(2u32);
        assert_eq!(session.take(), Some(2));
    }
}
