use bingo_rs::balls::DrawnSet;
use bingo_rs::board::Board;
use bingo_rs::game::{reduce, DrawMode, GameAction, GameState};
use bingo_rs::patterns::{check_wins, WinPattern};
use std::sync::Arc;

const PATTERNS: [WinPattern; 3] = WinPattern::ALL;

fn board() -> Arc<Board> {
    Arc::new("1 2 3; 4 5 6; 7 8 9".parse().unwrap())
}

fn start(mode: DrawMode) -> GameState {
    reduce(&GameState::default(), GameAction::Start { board: board(), mode }, &PATTERNS)
}

fn draw_all(mut s: GameState, ns: &[i64]) -> GameState {
    for &n in ns {
        s = reduce(&s, GameAction::DrawOne(n), &PATTERNS);
    }
    s
}

#[test]
fn start_replaces_previous_session() {
    let s = draw_all(start(DrawMode::Manual), &[1, 2, 3]);
    let s = reduce(&s, GameAction::Fail("stale".into()), &PATTERNS);
    let other = Arc::new("10 20".parse::<Board>().unwrap());
    let s = reduce(&s, GameAction::Start { board: Arc::clone(&other), mode: DrawMode::auto() }, &PATTERNS);
    assert!(Arc::ptr_eq(s.board().unwrap(), &other));
    assert!(s.drawn().is_empty());
    assert_eq!(s.last_drawn(), None);
    assert!(s.is_running());
    assert_eq!(s.error(), None);
    assert!(s.wins().is_empty());
}

#[test]
fn out_of_range_draws_are_clamped() {
    let s = draw_all(start(DrawMode::Manual), &[150]);
    assert_eq!(s.last_drawn(), Some(90));
    assert!(s.drawn().contains(90));

    let s = draw_all(s, &[-5]);
    assert_eq!(s.last_drawn(), Some(1));
    assert_eq!(s.drawn().iter().collect::<Vec<_>>(), vec![1, 90]);
}

#[test]
fn redraw_keeps_set_but_updates_last() {
    let s = draw_all(start(DrawMode::Manual), &[4, 8, 4]);
    assert_eq!(s.drawn().len(), 2);
    assert_eq!(s.last_drawn(), Some(4));
}

#[test]
fn pause_only_touches_running_flag() {
    let s = draw_all(start(DrawMode::auto()), &[2, 5]);
    let paused = reduce(&s, GameAction::Pause, &PATTERNS);
    assert!(!paused.is_running());
    assert_eq!(paused.drawn(), s.drawn());
    assert_eq!(paused.last_drawn(), s.last_drawn());
    assert_eq!(paused.mode(), s.mode());
}

#[test]
fn resume_without_pause_reaffirms_mode() {
    let auto = start(DrawMode::auto());
    assert!(reduce(&auto, GameAction::Resume, &PATTERNS).is_running());

    let manual = start(DrawMode::Manual);
    assert!(!reduce(&manual, GameAction::Resume, &PATTERNS).is_running());
}

#[test]
fn reset_keeps_board_and_clears_draws() {
    let s = draw_all(start(DrawMode::auto()), &[1, 2, 3, 7, 9]);
    assert!(s.wins().has_win());
    let r = reduce(&s, GameAction::Reset, &PATTERNS);
    assert!(Arc::ptr_eq(r.board().unwrap(), s.board().unwrap()));
    assert!(r.drawn().is_empty());
    assert_eq!(r.last_drawn(), None);
    assert!(!r.is_running());
    assert_eq!(r.mode(), s.mode());
    assert_eq!(r.wins(), &check_wins(s.board().unwrap(), &DrawnSet::new(), &PATTERNS));
}

#[test]
fn wins_track_draws() {
    let s = draw_all(start(DrawMode::Manual), &[1, 3, 7]);
    assert!(!s.wins().contains(WinPattern::FourCorners));
    let s = draw_all(s, &[9]);
    assert!(s.wins().contains(WinPattern::FourCorners));
    assert!(!s.wins().contains(WinPattern::Row));
    let s = draw_all(s, &[2]);
    assert!(s.wins().contains(WinPattern::Row));
    let s = draw_all(s, &[4, 5, 6, 8]);
    assert!(s.wins().contains(WinPattern::FullHouse));
    assert_eq!(s.wins().get(WinPattern::Row).map(<[_]>::len), Some(3));
}

#[test]
fn patterns_are_supplied_per_call() {
    let s = draw_all(start(DrawMode::Manual), &[1, 2, 3]);
    let only_corners = reduce(&s, GameAction::DrawOne(4), &[WinPattern::FourCorners]);
    assert!(!only_corners.wins().has_win());
}

#[test]
fn fail_keeps_everything_else() {
    let s = draw_all(start(DrawMode::Manual), &[6]);
    let f = reduce(&s, GameAction::Fail("network down".into()), &PATTERNS);
    assert_eq!(f.error(), Some("network down"));
    assert_eq!(f.drawn(), s.drawn());
    assert_eq!(f.last_drawn(), Some(6));
}

#[test]
fn error_clears_on_next_successful_action() {
    let failed = reduce(&start(DrawMode::Manual), GameAction::Fail("boom".into()), &PATTERNS);
    assert_eq!(reduce(&failed, GameAction::DrawOne(3), &PATTERNS).error(), None);
    assert_eq!(reduce(&failed, GameAction::Reset, &PATTERNS).error(), None);
    assert_eq!(reduce(&failed, GameAction::Pause, &PATTERNS).error(), Some("boom"));
}

#[test]
fn draw_without_board_is_ignored() {
    let s = reduce(&GameState::default(), GameAction::DrawOne(7), &PATTERNS);
    assert_eq!(s, GameState::default());
}
