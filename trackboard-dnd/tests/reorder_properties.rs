//! Property-based tests for the move reducer
//!
//! Boards are generated with role-tagged ids (`container-N`, `item-N-M`) so
//! both role detection strategies resolve them identically.

use proptest::prelude::*;
use proptest::sample::Index;
use trackboard_dnd::{
    apply_move, reduce_ids, Board, Container, DragSubject, EntryModel, Identifier, Item, Move,
    MovePhase, RoleDetection,
};

fn build_board(shape: &[usize]) -> Board {
    let containers = shape
        .iter()
        .enumerate()
        .map(|(c, &count)| {
            Container::new(format!("container-{c}"), format!("Column {c}")).with_items(
                (0..count)
                    .map(|i| Item::new(format!("item-{c}-{i}"), format!("Card {c}.{i}")))
                    .collect(),
            )
        })
        .collect();
    Board::from_entries(EntryModel::new(containers)).unwrap()
}

fn all_ids(board: &Board) -> Vec<Identifier> {
    let mut ids = Vec::new();
    for record in board.containers() {
        ids.push(record.id().as_identifier().clone());
        ids.extend(record.item_ids().iter().map(|id| id.as_identifier().clone()));
    }
    ids
}

fn sorted_item_ids(board: &Board) -> Vec<String> {
    let mut ids: Vec<String> = board
        .containers()
        .iter()
        .flat_map(|c| c.item_ids().iter().map(|id| id.to_string()))
        .collect();
    ids.sort();
    ids
}

fn board_shape() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..5, 1..5)
}

fn gestures() -> impl Strategy<Value = Vec<(Index, Index, bool)>> {
    prop::collection::vec((any::<Index>(), any::<Index>(), any::<bool>()), 0..24)
}

fn detection() -> impl Strategy<Value = RoleDetection> {
    prop_oneof![Just(RoleDetection::Lookup), Just(RoleDetection::Substring)]
}

proptest! {
    /// Property: no sequence of moves creates, duplicates or loses an item,
    /// and every item keeps a consistent owner.
    #[test]
    fn test_item_multiset_preserved(
        shape in board_shape(),
        moves in gestures(),
        detection in detection(),
    ) {
        let original = build_board(&shape);
        let expected = sorted_item_ids(&original);
        let mut board = original.clone();

        for (active, over, commit) in moves {
            let ids = all_ids(&board);
            let active = active.get(&ids).clone();
            let over = over.get(&ids).clone();
            let phase = if commit { MovePhase::Commit } else { MovePhase::Preview };
            board = reduce_ids(&board, &active, Some(&over), detection, phase).board;

            prop_assert_eq!(sorted_item_ids(&board), expected.clone());
            prop_assert_eq!(board.len(), original.len());
            for record in board.containers() {
                for (index, id) in record.item_ids().iter().enumerate() {
                    let location = board.location_of(id).unwrap();
                    prop_assert_eq!(&location.container, record.id());
                    prop_assert_eq!(location.index, index);
                }
            }
        }
    }

    /// Property: reordering columns keeps every column and its cards intact.
    #[test]
    fn test_container_move_keeps_contents(
        shape in board_shape(),
        from in any::<Index>(),
        to in any::<Index>(),
    ) {
        let board = build_board(&shape);
        let active = board.containers()[from.index(board.len())].id().clone();
        let over = board.containers()[to.index(board.len())].id().clone();

        let next = apply_move(
            &board,
            &Move::onto(DragSubject::Container { id: active }, DragSubject::Container { id: over }),
            MovePhase::Commit,
        )
        .board;

        prop_assert_eq!(next.len(), board.len());
        for record in board.containers() {
            let moved = next.container(record.id()).unwrap();
            prop_assert_eq!(moved.item_ids(), record.item_ids());
        }
    }

    /// Property: dropping anything onto itself changes nothing, in either phase.
    #[test]
    fn test_self_drop_is_identity(
        shape in board_shape(),
        pick in any::<Index>(),
        commit in any::<bool>(),
        detection in detection(),
    ) {
        let board = build_board(&shape);
        let ids = all_ids(&board);
        let id = pick.get(&ids);
        let phase = if commit { MovePhase::Commit } else { MovePhase::Preview };

        let reduction = reduce_ids(&board, id, Some(id), detection, phase);
        prop_assert_eq!(reduction.board, board);
    }

    /// Property: an id missing from the board makes the move a no-op.
    #[test]
    fn test_unknown_id_is_noop(
        shape in board_shape(),
        pick in any::<Index>(),
        ghost_is_active in any::<bool>(),
        detection in detection(),
    ) {
        let board = build_board(&shape);
        let ids = all_ids(&board);
        let known = pick.get(&ids).clone();
        let ghost = Identifier::from("item-ghost");
        let (active, over) = if ghost_is_active { (ghost, known) } else { (known, ghost) };

        let reduction = reduce_ids(&board, &active, Some(&over), detection, MovePhase::Commit);
        prop_assert_eq!(reduction.board, board);
        prop_assert!(reduction.outcome.is_skipped());
    }

    /// Property: reordering within a column keeps its size and leaves the
    /// other columns alone.
    #[test]
    fn test_same_container_reorder_is_local(
        shape in board_shape(),
        column in any::<Index>(),
        from in any::<Index>(),
        to in any::<Index>(),
    ) {
        let board = build_board(&shape);
        let record = &board.containers()[column.index(board.len())];
        prop_assume!(record.len() >= 2);

        let active = record.item_ids()[from.index(record.len())].clone();
        let over = record.item_ids()[to.index(record.len())].clone();
        prop_assume!(active != over);

        let mv = Move::onto(
            DragSubject::Item { id: active, container: record.id().clone() },
            DragSubject::Item { id: over, container: record.id().clone() },
        );
        let next = apply_move(&board, &mv, MovePhase::Preview).board;

        prop_assert_eq!(next.container(record.id()).unwrap().len(), record.len());
        for other in board.containers().iter().filter(|c| c.id() != record.id()) {
            prop_assert_eq!(next.container(other.id()).unwrap(), other);
        }
    }

    /// Property: moving a card to another column and back restores the board.
    #[test]
    fn test_cross_container_round_trip(
        shape in prop::collection::vec(1usize..5, 2..5),
        source in any::<Index>(),
        dest in any::<Index>(),
        i in any::<Index>(),
        j in any::<Index>(),
    ) {
        let board = build_board(&shape);
        let a = source.index(board.len());
        let b = dest.index(board.len());
        prop_assume!(a != b);

        let column_a = board.containers()[a].clone();
        let column_b = board.containers()[b].clone();
        let i = i.index(column_a.len());
        let j = j.index(column_b.len());
        let moving = column_a.item_ids()[i].clone();
        let target = column_b.item_ids()[j].clone();

        let there = apply_move(
            &board,
            &Move::onto(
                DragSubject::Item { id: moving.clone(), container: column_a.id().clone() },
                DragSubject::Item { id: target, container: column_b.id().clone() },
            ),
            MovePhase::Commit,
        )
        .board;
        prop_assert_eq!(there.location_of(&moving).unwrap().index, j);

        // back to index i: onto the card now at i, or append if i is the end
        let remaining = there.container(column_a.id()).unwrap();
        let back_target = match remaining.item_ids().get(i) {
            Some(id) => DragSubject::Item { id: id.clone(), container: column_a.id().clone() },
            None => DragSubject::Container { id: column_a.id().clone() },
        };
        let back = apply_move(
            &there,
            &Move::onto(
                DragSubject::Item { id: moving, container: column_b.id().clone() },
                back_target,
            ),
            MovePhase::Commit,
        )
        .board;

        prop_assert_eq!(back.to_entries(), board.to_entries());
    }
}
