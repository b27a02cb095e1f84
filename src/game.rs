//! Session state and the pure reducer that advances it.

use crate::balls::{clamp_ball, DrawnSet};
use crate::board::Board;
use crate::patterns::{check_wins, WinCheck, WinPattern};
use std::sync::Arc;
use std::time::Duration;

/// How numbers are called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum DrawMode {
    /// Draws happen only on explicit request.
    #[default]
    Manual,
    /// A ball is drawn automatically every `interval`.
    Auto { interval: Duration },
}

impl DrawMode {
    pub const DEFAULT_AUTO_INTERVAL: Duration = Duration::from_millis(1200);

    pub const fn auto() -> Self {
        DrawMode::Auto { interval: Self::DEFAULT_AUTO_INTERVAL }
    }

    pub const fn auto_millis(ms: u64) -> Self {
        DrawMode::Auto { interval: Duration::from_millis(ms) }
    }

    pub const fn is_auto(self) -> bool {
        matches!(self, DrawMode::Auto { .. })
    }

    pub const fn interval(self) -> Option<Duration> {
        match self {
            DrawMode::Manual => None,
            DrawMode::Auto { interval } => Some(interval),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameAction {
    Start { board: Arc<Board>, mode: DrawMode },
    Pause,
    Resume,
    Reset,
    /// Request a specific number; clamped into the ball range.
    DrawOne(i64),
    Fail(String),
}

/// Everything a front end needs to render one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameState {
    pub(crate) board: Option<Arc<Board>>,
    pub(crate) drawn: DrawnSet,
    pub(crate) last_drawn: Option<u8>,
    pub(crate) mode: DrawMode,
    pub(crate) running: bool,
    pub(crate) wins: WinCheck,
    pub(crate) error: Option<String>,
}

impl GameState {
    /// Returns the active board, absent before the first start
    pub fn board(&self) -> Option<&Arc<Board>> {
        self.board.as_ref()
    }

    /// Returns the numbers called so far
    pub fn drawn(&self) -> &DrawnSet {
        &self.drawn
    }

    /// Returns the most recently called number
    pub fn last_drawn(&self) -> Option<u8> {
        self.last_drawn
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the patterns currently completed
    pub fn wins(&self) -> &WinCheck {
        &self.wins
    }

    /// Returns the user-facing error, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Compute the next session state. Pure and total: unknown or ill-timed
/// actions leave the state unchanged instead of failing.
///
/// ```
/// use bingo_rs::board::Board;
/// use bingo_rs::game::{reduce, DrawMode, GameAction, GameState};
/// use bingo_rs::patterns::WinPattern;
/// use std::sync::Arc;
///
/// let board = Arc::new("1 2 3; 4 5 6; 7 8 9".parse::<Board>().unwrap());
/// let patterns = [WinPattern::Row];
/// let mut s = reduce(&GameState::default(), GameAction::Start { board, mode: DrawMode::Manual }, &patterns);
/// for n in [3, 1, 2] {
///     s = reduce(&s, GameAction::DrawOne(n), &patterns);
/// }
/// assert!(s.wins().contains(WinPattern::Row));
/// assert_eq!(s.last_drawn(), Some(2));
/// ```
pub fn reduce(state: &GameState, action: GameAction, patterns: &[WinPattern]) -> GameState {
    match action {
        GameAction::Start { board, mode } => {
            let wins = check_wins(&board, &DrawnSet::new(), patterns);
            GameState {
                board: Some(board),
                drawn: DrawnSet::new(),
                last_drawn: None,
                mode,
                running: mode.is_auto(),
                wins,
                error: None,
            }
        }
        GameAction::Pause => GameState { running: false, ..state.clone() },
        // Follows the mode, not whatever ran before a pause.
        GameAction::Resume => GameState { running: state.mode.is_auto(), ..state.clone() },
        GameAction::Reset => {
            let wins = match &state.board {
                Some(board) => check_wins(board, &DrawnSet::new(), patterns),
                None => WinCheck::default(),
            };
            GameState {
                drawn: DrawnSet::new(),
                last_drawn: None,
                running: false,
                wins,
                error: None,
                ..state.clone()
            }
        }
        GameAction::DrawOne(requested) => {
            let Some(board) = &state.board else {
                return state.clone();
            };
            let n = clamp_ball(requested);
            let mut drawn = state.drawn.clone();
            drawn.insert(n);
            let wins = check_wins(board, &drawn, patterns);
            GameState { drawn, last_drawn: Some(n), wins, error: None, ..state.clone() }
        }
        GameAction::Fail(message) => GameState { error: Some(message), ..state.clone() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(mode: DrawMode) -> GameState {
        let board = Arc::new("1 2; 3 4".parse::<Board>().unwrap());
        reduce(&GameState::default(), GameAction::Start { board, mode }, &WinPattern::ALL)
    }

    #[test]
    fn default_state_has_no_board() {
        let s = GameState::default();
        assert!(s.board().is_none());
        assert!(!s.is_running());
        assert_eq!(s.mode(), DrawMode::Manual);
        assert!(s.wins().is_empty());
    }

    #[test]
    fn start_runs_only_in_auto_mode() {
        assert!(!started(DrawMode::Manual).is_running());
        assert!(started(DrawMode::auto()).is_running());
    }

    #[test]
    fn resume_follows_mode() {
        let manual = started(DrawMode::Manual);
        assert!(!reduce(&manual, GameAction::Resume, &[]).is_running());

        let auto = reduce(&started(DrawMode::auto()), GameAction::Pause, &[]);
        assert!(!auto.is_running());
        assert!(reduce(&auto, GameAction::Resume, &[]).is_running());
    }

    #[test]
    fn draw_without_board_is_noop() {
        let s = GameState::default();
        assert_eq!(reduce(&s, GameAction::DrawOne(5), &WinPattern::ALL), s);
    }

    #[test]
    fn fail_sets_error_and_draw_clears_it() {
        let s = reduce(&started(DrawMode::Manual), GameAction::Fail("offline".into()), &[]);
        assert_eq!(s.error(), Some("offline"));
        assert_eq!(s.drawn(), &DrawnSet::new());
        let s = reduce(&s, GameAction::DrawOne(1), &WinPattern::ALL);
        assert_eq!(s.error(), None);
    }

    #[test]
    fn reset_without_board_yields_empty_wins() {
        let s = GameState { error: Some("x".into()), ..GameState::default() };
        let s = reduce(&s, GameAction::Reset, &WinPattern::ALL);
        assert!(s.wins().is_empty());
        assert!(s.error().is_none());
        assert!(s.board().is_none());
    }

    #[test]
    fn auto_mode_carries_interval() {
        assert_eq!(DrawMode::auto().interval(), Some(Duration::from_millis(1200)));
        assert_eq!(DrawMode::auto_millis(300).interval(), Some(Duration::from_millis(300)));
        assert_eq!(DrawMode::Manual.interval(), None);
    }
}
