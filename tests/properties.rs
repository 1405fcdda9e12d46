//! Property tests for the board topology and turn engine invariants.

use proptest::prelude::*;
use snakes_and_ladders::game::board::{JUMP_PAIRS, LAST_CELL};
use snakes_and_ladders::game::{BoardTopology, GameState, MoveOutcome};

proptest! {
    /// A single resolution step never chains into a second jump.
    #[test]
    fn resolve_jump_is_idempotent(cell in 1u8..=LAST_CELL) {
        let board = BoardTopology::standard();
        let once = board.resolve_jump(cell);
        prop_assert_eq!(board.resolve_jump(once), once);
    }

    /// Cells outside the jump table resolve to themselves.
    #[test]
    fn non_entries_are_fixed_points(cell in 1u8..=LAST_CELL) {
        let board = BoardTopology::standard();
        prop_assume!(!JUMP_PAIRS.iter().any(|&(entry, _)| entry == cell));
        prop_assert_eq!(board.resolve_jump(cell), cell);
    }

    /// Every cell maps to coordinates inside the 10x10 grid.
    #[test]
    fn coordinates_stay_on_the_grid(cell in 1u8..=LAST_CELL) {
        let (col, row) = BoardTopology::coordinates_of(cell).unwrap();
        prop_assert!(col < 10);
        prop_assert!(row < 10);
    }

    /// However the dice fall, every position stays within 1..=100 and the
    /// turn pointer stays within the roster.
    #[test]
    fn positions_and_turns_stay_in_domain(
        count in 2usize..=4,
        rolls in proptest::collection::vec(1u8..=6, 1..200),
    ) {
        let mut state = GameState::new();
        state.configure(count).unwrap();
        state.start().unwrap();

        for roll in rolls {
            if state.game_over() {
                break;
            }
            state.apply_roll(roll).unwrap();
            for player in state.players() {
                prop_assert!((1..=LAST_CELL).contains(&player.position));
            }
            prop_assert!(state.current_index() < count);
        }
    }

    /// A non-winning roll advances the turn by exactly one seat; a winning
    /// roll freezes it.
    #[test]
    fn turn_advances_by_one_unless_won(
        count in 2usize..=4,
        rolls in proptest::collection::vec(1u8..=6, 1..200),
    ) {
        let mut state = GameState::new();
        state.configure(count).unwrap();
        state.start().unwrap();

        for roll in rolls {
            if state.game_over() {
                break;
            }
            let before = state.current_index();
            let outcome = state.apply_roll(roll).unwrap();
            match outcome {
                MoveOutcome::Win { .. } => {
                    prop_assert!(state.game_over());
                    prop_assert_eq!(state.current_index(), before);
                }
                _ => prop_assert_eq!(state.current_index(), (before + 1) % count),
            }
        }
    }
}
