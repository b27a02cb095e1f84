use bingo_rs::balls::DrawnSet;
use bingo_rs::board::Board;
use bingo_rs::game::{reduce, DrawMode, GameAction, GameState};
use bingo_rs::patterns::{check_wins, WinPattern};
use proptest::prelude::*;
use std::sync::Arc;

fn any_cell() -> impl Strategy<Value = i32> {
    prop_oneof![1 => Just(-1), 4 => 1i32..=90]
}

prop_compose! {
    fn any_matrix()(rows in 1usize..=4, cols in 1usize..=6)
        (cells in prop::collection::vec(any_cell(), rows * cols), cols in Just(cols))
        -> Vec<Vec<i32>> {
        cells.chunks(cols).map(<[i32]>::to_vec).collect()
    }
}

fn any_draws() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..=120, 0..60)
}

fn started(matrix: &[Vec<i32>]) -> GameState {
    let board = Arc::new(Board::from_matrix(matrix).unwrap());
    reduce(&GameState::default(), GameAction::Start { board, mode: DrawMode::Manual }, &WinPattern::ALL)
}

fn apply_draws(state: &GameState, draws: &[i64]) -> GameState {
    draws.iter().fold(state.clone(), |s, &n| reduce(&s, GameAction::DrawOne(n), &WinPattern::ALL))
}

proptest! {
    #[test]
    fn drawing_twice_equals_drawing_once(matrix in any_matrix(), draws in any_draws(), n in -20i64..=120) {
        let s = apply_draws(&started(&matrix), &draws);
        let once = reduce(&s, GameAction::DrawOne(n), &WinPattern::ALL);
        let twice = reduce(&once, GameAction::DrawOne(n), &WinPattern::ALL);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn wins_only_grow(matrix in any_matrix(), draws in any_draws(), more in any_draws()) {
        let before = apply_draws(&started(&matrix), &draws);
        let after = apply_draws(&before, &more);
        for (pattern, sets) in before.wins().iter() {
            let later = after.wins().get(pattern).unwrap_or_default();
            for set in sets {
                prop_assert!(later.contains(set), "{pattern} lost {set:?}");
            }
        }
    }

    #[test]
    fn marks_never_land_on_empty_cells(matrix in any_matrix(), draws in any_draws()) {
        let s = apply_draws(&started(&matrix), &draws);
        let board = s.board().unwrap();
        let marked = board.marked_positions(s.drawn());
        for pos in &marked {
            prop_assert!(!board.value_at(*pos).unwrap().is_empty());
        }
        prop_assert!(s.wins().winning_positions().is_subset(&marked));
    }

    #[test]
    fn wins_depend_only_on_drawn_set(matrix in any_matrix(), draws in any_draws().prop_shuffle()) {
        let s = apply_draws(&started(&matrix), &draws);
        let expected = check_wins(s.board().unwrap(), s.drawn(), &WinPattern::ALL);
        prop_assert_eq!(s.wins(), &expected);
    }

    #[test]
    fn drawn_balls_stay_in_range(draws in any_draws()) {
        let s = apply_draws(&started(&[vec![1]]), &draws);
        prop_assert!(s.drawn().iter().all(|n| (1..=90).contains(&n)));
        let expected: DrawnSet = draws.iter().map(|&n| bingo_rs::balls::clamp_ball(n)).collect();
        prop_assert_eq!(s.drawn(), &expected);
    }
}
