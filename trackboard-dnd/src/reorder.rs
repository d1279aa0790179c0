//! Move reducer: compute the next board for a drag-over or drop event.
//!
//! The reducer is a pure function of the current board and the dragged and
//! hovered subjects. It dispatches on the role pair:
//!
//! | active    | over      | effect                                          |
//! |-----------|-----------|-------------------------------------------------|
//! | container | container | array-move the column (commit only)             |
//! | item      | item      | same column: array-move; else insert at over    |
//! | item      | container | remove from source, append to the over column   |
//! | container | item      | no-op                                           |
//!
//! Indices are recomputed from the board passed in on every call, so a stream
//! of hover events always works against the latest snapshot. Anything that
//! does not resolve leaves the board unchanged and reports why through
//! [`MoveOutcome::Skipped`].

use crate::board::Board;
use crate::subject::{DragSubject, RoleDetection};
use crate::types::{ContainerId, Identifier, ItemId, Location};
use serde::{Deserialize, Serialize};

/// Which drag event triggered the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovePhase {
    /// Pointer moved over a new target; live feedback
    Preview,
    /// Pointer released; final position
    Commit,
}

/// A dragged subject and the subject currently under the pointer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub active: DragSubject,
    pub over: Option<DragSubject>,
}

impl Move {
    /// Create a new move
    pub fn new(active: DragSubject, over: Option<DragSubject>) -> Self {
        Self { active, over }
    }

    /// Move with a drop target
    pub fn onto(active: DragSubject, over: DragSubject) -> Self {
        Self {
            active,
            over: Some(over),
        }
    }
}

/// Why a reducer call left the board unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Nothing under the pointer
    NoTarget,
    /// Dragged onto itself
    SelfDrop,
    /// An id did not resolve on the current board
    Unresolved,
    /// Column reordering only happens on drop
    ContainerPreview,
    /// A column dropped onto a card
    UnsupportedPair,
    /// Drag event arrived while no drag was in progress
    NotDragging,
}

/// What a reducer call did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "case", rename_all = "snake_case")]
pub enum MoveOutcome {
    ContainersReordered {
        container: ContainerId,
        from: usize,
        to: usize,
    },
    ItemReordered {
        item: ItemId,
        container: ContainerId,
        from: usize,
        to: usize,
    },
    ItemTransferred {
        item: ItemId,
        from: Location,
        to: Location,
    },
    ItemAppended {
        item: ItemId,
        from: Location,
        to: Location,
    },
    Skipped {
        reason: SkipReason,
    },
}

impl MoveOutcome {
    pub(crate) fn skipped(reason: SkipReason) -> Self {
        Self::Skipped { reason }
    }

    /// Reason for a no-op, if this was one
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Skipped { reason } => Some(*reason),
            _ => None,
        }
    }

    /// Whether the board was left unchanged
    pub fn is_skipped(&self) -> bool {
        self.skip_reason().is_some()
    }
}

/// The next board plus a description of how it was reached
#[derive(Debug, Clone)]
pub struct Reduction {
    pub board: Board,
    pub outcome: MoveOutcome,
}

impl Reduction {
    fn unchanged(board: &Board, reason: SkipReason) -> Self {
        tracing::trace!(?reason, "move skipped");
        Self {
            board: board.clone(),
            outcome: MoveOutcome::skipped(reason),
        }
    }
}

/// Relocate one element from `from` to `to`, shifting everything between.
///
/// Not a swap: `[a, b, c]` moved `0 -> 2` becomes `[b, c, a]`. Out-of-range
/// indices leave the vector untouched.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let element = items.remove(from);
    items.insert(to, element);
}

/// Live feedback while dragging: card moves only.
pub fn preview_move(board: &Board, mv: &Move) -> Board {
    apply_move(board, mv, MovePhase::Preview).board
}

/// Final position on drop: card moves and column reordering.
pub fn commit_move(board: &Board, mv: &Move) -> Board {
    apply_move(board, mv, MovePhase::Commit).board
}

/// Reduce a move given raw host ids instead of typed subjects.
///
/// Degenerate gestures are checked on the raw ids first (missing target,
/// self-drop), then both ids are resolved with `detection`.
pub fn reduce_ids(
    board: &Board,
    active: &Identifier,
    over: Option<&Identifier>,
    detection: RoleDetection,
    phase: MovePhase,
) -> Reduction {
    let Some(over) = over else {
        return Reduction::unchanged(board, SkipReason::NoTarget);
    };
    if active == over {
        return Reduction::unchanged(board, SkipReason::SelfDrop);
    }
    let (Some(active), Some(over)) = (
        board.resolve(active, detection),
        board.resolve(over, detection),
    ) else {
        return Reduction::unchanged(board, SkipReason::Unresolved);
    };
    apply_move(board, &Move::onto(active, over), phase)
}

/// Shared reducer core behind [`preview_move`] and [`commit_move`].
pub fn apply_move(board: &Board, mv: &Move, phase: MovePhase) -> Reduction {
    let Some(over) = &mv.over else {
        return Reduction::unchanged(board, SkipReason::NoTarget);
    };
    if mv.active.identifier() == over.identifier() {
        return Reduction::unchanged(board, SkipReason::SelfDrop);
    }

    match (&mv.active, over) {
        (DragSubject::Container { id: active }, DragSubject::Container { id: over }) => {
            if phase == MovePhase::Preview {
                return Reduction::unchanged(board, SkipReason::ContainerPreview);
            }
            reorder_containers(board, active, over)
        }
        (DragSubject::Item { id: active, .. }, DragSubject::Item { id: over, .. }) => {
            move_item_onto_item(board, active, over)
        }
        (DragSubject::Item { id: active, .. }, DragSubject::Container { id: over }) => {
            append_item(board, active, over)
        }
        (DragSubject::Container { .. }, DragSubject::Item { .. }) => {
            Reduction::unchanged(board, SkipReason::UnsupportedPair)
        }
    }
}

fn reorder_containers(board: &Board, active: &ContainerId, over: &ContainerId) -> Reduction {
    let (Some(from), Some(to)) = (board.container_index(active), board.container_index(over))
    else {
        return Reduction::unchanged(board, SkipReason::Unresolved);
    };

    let mut next = board.clone();
    next.reorder_containers(from, to);
    tracing::debug!(container = %active, from, to, "reordered containers");

    Reduction {
        board: next,
        outcome: MoveOutcome::ContainersReordered {
            container: active.clone(),
            from,
            to,
        },
    }
}

fn move_item_onto_item(board: &Board, active: &ItemId, over: &ItemId) -> Reduction {
    let (Some(from), Some(target)) = (board.location_of(active), board.location_of(over)) else {
        return Reduction::unchanged(board, SkipReason::Unresolved);
    };
    let (Some(source_idx), Some(dest_idx)) = (
        board.container_index(&from.container),
        board.container_index(&target.container),
    ) else {
        return Reduction::unchanged(board, SkipReason::Unresolved);
    };

    let mut next = board.clone();

    if source_idx == dest_idx {
        next.reorder_within(source_idx, from.index, target.index);
        tracing::debug!(
            item = %active,
            container = %from.container,
            from = from.index,
            to = target.index,
            "reordered item within container"
        );
        return Reduction {
            board: next,
            outcome: MoveOutcome::ItemReordered {
                item: active.clone(),
                container: from.container,
                from: from.index,
                to: target.index,
            },
        };
    }

    let landed = next.transfer_item(source_idx, from.index, dest_idx, Some(target.index));
    let to = Location {
        container: target.container,
        index: landed,
    };
    tracing::debug!(
        item = %active,
        from = %from.container,
        to = %to.container,
        index = landed,
        "moved item across containers"
    );

    Reduction {
        board: next,
        outcome: MoveOutcome::ItemTransferred {
            item: active.clone(),
            from,
            to,
        },
    }
}

fn append_item(board: &Board, active: &ItemId, over: &ContainerId) -> Reduction {
    let Some(from) = board.location_of(active) else {
        return Reduction::unchanged(board, SkipReason::Unresolved);
    };
    let (Some(source_idx), Some(dest_idx)) = (
        board.container_index(&from.container),
        board.container_index(over),
    ) else {
        return Reduction::unchanged(board, SkipReason::Unresolved);
    };

    let mut next = board.clone();
    let landed = next.transfer_item(source_idx, from.index, dest_idx, None);
    let to = Location {
        container: over.clone(),
        index: landed,
    };
    tracing::debug!(
        item = %active,
        from = %from.container,
        to = %over,
        index = landed,
        "appended item to container"
    );

    Reduction {
        board: next,
        outcome: MoveOutcome::ItemAppended {
            item: active.clone(),
            from,
            to,
        },
    }
}
