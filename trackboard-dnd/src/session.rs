//! Drag session: the per-gesture state machine a UI host drives.
//!
//! ```text
//! Idle --start--> Dragging --over--> Dragging --end/cancel--> Idle
//! ```
//!
//! The session is the single writer of its board. `over` applies card moves
//! live, `end` applies the final move (including column reordering) and
//! notifies listeners when the dragged subject ended up somewhere new.
//! `cancel` clears the drag without touching the board.

use crate::board::Board;
use crate::overlay::{select_overlay, DragState, Overlay};
use crate::reorder::{reduce_ids, MoveOutcome, MovePhase, SkipReason};
use crate::subject::{DragSubject, RoleDetection};
use crate::types::{ContainerId, Identifier, ItemId, Location, MoveRecord};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Receives a record for every committed move, e.g. to persist it remotely
pub trait MoveListener: Send + Sync {
    fn on_move(&self, record: &MoveRecord);
}

/// Listener that keeps every record it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    records: Arc<Mutex<Vec<MoveRecord>>>,
}

impl RecordingListener {
    /// Create an empty listener
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records received so far
    pub fn records(&self) -> Vec<MoveRecord> {
        self.lock().clone()
    }

    /// Drain the records received so far
    pub fn take(&self) -> Vec<MoveRecord> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of records received so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no records have arrived
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Recovers the list after a panic in another holder.
    fn lock(&self) -> MutexGuard<'_, Vec<MoveRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MoveListener for RecordingListener {
    fn on_move(&self, record: &MoveRecord) {
        self.lock().push(record.clone());
    }
}

/// Where the dragged subject was when the gesture started
#[derive(Debug, Clone)]
enum Origin {
    Item { id: ItemId, at: Location },
    Container { id: ContainerId, at: usize },
}

/// A board plus the state of the drag gesture in progress, if any
pub struct DragSession {
    board: Board,
    state: DragState,
    detection: RoleDetection,
    origin: Option<Origin>,
    listeners: Vec<Arc<dyn MoveListener>>,
}

impl std::fmt::Debug for DragSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragSession")
            .field("state", &self.state)
            .field("detection", &self.detection)
            .field("containers", &self.board.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl DragSession {
    /// Start an idle session over `board`, resolving roles by lookup
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: DragState::idle(),
            detection: RoleDetection::default(),
            origin: None,
            listeners: Vec::new(),
        }
    }

    /// Use a different role detection strategy
    pub fn with_detection(mut self, detection: RoleDetection) -> Self {
        self.detection = detection;
        self
    }

    /// Register a listener for committed moves
    pub fn subscribe(&mut self, listener: Arc<dyn MoveListener>) {
        self.listeners.push(listener);
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Hand the board back, ending the session
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Current drag state
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Role detection in use
    pub fn detection(&self) -> RoleDetection {
        self.detection
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Preview content for the current drag, if any
    pub fn overlay(&self) -> Option<Overlay> {
        select_overlay(&self.board, &self.state, self.detection)
    }

    /// Begin a drag. Ignored (returns `false`) while another drag is active.
    pub fn start(&mut self, active: impl Into<Identifier>) -> bool {
        let active = active.into();
        if let Some(current) = &self.state.active_id {
            tracing::debug!(%current, ignored = %active, "drag start while dragging");
            return false;
        }

        self.origin = match self.board.resolve(&active, self.detection) {
            Some(DragSubject::Item { id, .. }) => self
                .board
                .location_of(&id)
                .map(|at| Origin::Item { id, at }),
            Some(DragSubject::Container { id }) => self
                .board
                .container_index(&id)
                .map(|at| Origin::Container { id, at }),
            None => None,
        };
        tracing::trace!(%active, resolved = self.origin.is_some(), "drag started");
        self.state = DragState::dragging(active);
        true
    }

    /// Pointer moved over `target`; card moves are applied live.
    pub fn over(&mut self, target: Option<Identifier>) -> MoveOutcome {
        self.reduce(target, MovePhase::Preview)
    }

    /// Pointer released over `target`. Returns the committed move record if
    /// the dragged subject ended up somewhere other than where it started.
    pub fn end(&mut self, target: Option<Identifier>) -> Option<MoveRecord> {
        if !self.is_dragging() {
            tracing::debug!("drag end while idle");
            return None;
        }
        self.reduce(target, MovePhase::Commit);

        let record = self.origin.take().and_then(|origin| self.committed(origin));
        self.state = DragState::idle();
        tracing::trace!(committed = record.is_some(), "drag ended");

        if let Some(record) = &record {
            for listener in &self.listeners {
                listener.on_move(record);
            }
        }
        record
    }

    /// Abandon the drag. The board keeps whatever live moves were applied,
    /// and no record is emitted.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            tracing::trace!("drag cancelled");
        }
        self.origin = None;
        self.state = DragState::idle();
    }

    fn reduce(&mut self, target: Option<Identifier>, phase: MovePhase) -> MoveOutcome {
        let Some(active) = &self.state.active_id else {
            tracing::debug!(?phase, "drag event while idle");
            return MoveOutcome::skipped(SkipReason::NotDragging);
        };
        let reduction = reduce_ids(&self.board, active, target.as_ref(), self.detection, phase);
        if !reduction.outcome.is_skipped() {
            self.board = reduction.board;
        }
        reduction.outcome
    }

    fn committed(&self, origin: Origin) -> Option<MoveRecord> {
        match origin {
            Origin::Item { id, at } => {
                let now = self.board.location_of(&id)?;
                (now != at).then(|| MoveRecord::item_moved(id, at, now))
            }
            Origin::Container { id, at } => {
                let now = self.board.container_index(&id)?;
                (now != at).then(|| MoveRecord::container_moved(id, at, now))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Container, Item, MoveChange};

    fn session() -> DragSession {
        let board = Board::from_containers(vec![
            Container::new("container-1", "One")
                .with_item(Item::new("item-1a", "1a"))
                .with_item(Item::new("item-1b", "1b")),
            Container::new("container-2", "Two").with_item(Item::new("item-2a", "2a")),
        ])
        .unwrap();
        DragSession::new(board).with_detection(RoleDetection::Substring)
    }

    fn ids(session: &DragSession, container: &str) -> Vec<String> {
        session
            .board()
            .container(&container.into())
            .map(|c| c.item_ids().iter().map(|id| id.to_string()).collect())
            .unwrap_or_default()
    }

    #[test_log::test]
    fn test_live_move_then_commit_emits_record() {
        let mut session = session();
        let listener = Arc::new(RecordingListener::new());
        session.subscribe(listener.clone());

        assert!(session.start("item-1a"));
        session.over(Some("item-2a".into()));
        assert_eq!(ids(&session, "container-2"), vec!["item-1a", "item-2a"]);

        // released on itself after the live move: nothing more to do
        let record = session.end(Some("item-1a".into())).unwrap();
        assert!(!session.is_dragging());
        assert_eq!(
            record.change,
            MoveChange::ItemMoved {
                item: "item-1a".into(),
                from: Location::new("container-1", 0),
                to: Location::new("container-2", 0),
            }
        );
        assert_eq!(listener.len(), 1);
    }

    #[test]
    fn test_column_moves_on_end_only() {
        let mut session = session();
        session.start("container-1");
        let outcome = session.over(Some("container-2".into()));
        assert_eq!(outcome.skip_reason(), Some(SkipReason::ContainerPreview));
        assert_eq!(session.board().containers()[0].id(), &ContainerId::from("container-1"));

        let record = session.end(Some("container-2".into())).unwrap();
        assert_eq!(
            record.change,
            MoveChange::ContainerMoved {
                container: "container-1".into(),
                from: 0,
                to: 1,
            }
        );
    }

    #[test]
    fn test_cancel_clears_without_record() {
        let mut session = session();
        let listener = Arc::new(RecordingListener::new());
        session.subscribe(listener.clone());

        session.start("item-1b");
        session.cancel();
        assert!(!session.is_dragging());
        assert!(session.overlay().is_none());
        assert!(session.end(Some("item-2a".into())).is_none());
        assert!(listener.is_empty());
    }

    #[test]
    fn test_events_while_idle_are_ignored() {
        let mut session = session();
        let before = session.board().clone();
        let outcome = session.over(Some("item-2a".into()));
        assert_eq!(outcome.skip_reason(), Some(SkipReason::NotDragging));
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn test_second_start_is_ignored() {
        let mut session = session();
        assert!(session.start("item-1a"));
        assert!(!session.start("item-2a"));
        assert_eq!(session.state().active_id, Some("item-1a".into()));
    }

    #[test]
    fn test_round_trip_gesture_emits_nothing() {
        let mut session = session();
        session.start("item-1a");
        session.over(Some("container-2".into()));
        session.over(Some("item-1b".into()));
        assert_eq!(ids(&session, "container-1"), vec!["item-1a", "item-1b"]);
        assert!(session.end(None).is_none());
    }

    #[test]
    fn test_overlay_tracks_live_items() {
        let mut session = session();
        session.start("container-2");
        match session.overlay() {
            Some(Overlay::Container { items, .. }) => assert_eq!(items.len(), 1),
            other => panic!("unexpected overlay {other:?}"),
        }
        session.end(None);
        assert!(session.overlay().is_none());
    }

    #[test]
    fn test_recording_survives_poisoned_lock() {
        let listener = RecordingListener::new();
        listener.on_move(&MoveRecord::container_moved("container-a".into(), 0, 1));

        let shared = listener.clone();
        let poisoner = std::thread::spawn(move || {
            let _guard = shared.records.lock().unwrap();
            panic!("listener holder panicked");
        });
        assert!(poisoner.join().is_err());
        assert!(listener.records.is_poisoned());

        listener.on_move(&MoveRecord::container_moved("container-b".into(), 1, 0));
        assert_eq!(listener.len(), 2);
        assert_eq!(listener.records().len(), 2);
        assert_eq!(listener.take().len(), 2);
        assert!(listener.is_empty());
    }
}
