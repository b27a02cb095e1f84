use crate::cards::{CardDefinition, CardsPayload};
use crate::game::{DrawMode, GameState};
use crate::session::SessionController;
use std::time::{Duration, Instant};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    Start,
    Pause,
    Resume,
    Reset,
    DrawRandom,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub cards: CardsPayload,
    pub session: SessionController,
    // Card currently on the table (index into `cards`)
    pub card_index: usize,
    pub mode: DrawMode,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_card_index: usize,
    pub cfg_auto: bool,
    pub cfg_interval_ms: u64,
    help_open: bool,
    notice: Option<String>,
    notice_at: Option<Instant>,
}

impl AppState {
    const NOTICE_TTL: Duration = Duration::from_secs(3);
    pub const INTERVAL_STEP_MS: u64 = 100;

    pub fn new(cards: CardsPayload, session: SessionController) -> Self {
        let interval_ms = millis(session.config().auto_interval);
        Self {
            scene: Scene::Menu,
            cards,
            session,
            card_index: 0,
            mode: DrawMode::Manual,
            menu_index: 0,
            cfg_card_index: 0,
            cfg_auto: false,
            cfg_interval_ms: interval_ms,
            help_open: false,
            notice: None,
            notice_at: None,
        }
    }

    /// The card on the table.
    pub fn card(&self) -> Option<&CardDefinition> {
        self.cards.cards.get(self.card_index)
    }

    pub fn game(&self) -> GameState {
        self.session.state()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn set_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
        self.notice_at = Some(Instant::now());
    }

    fn clear_notice(&mut self) {
        self.notice = None;
        self.notice_at = None;
    }

    /// Start a session on the table card with the applied draw mode.
    /// Returns `false` if the card cannot be turned into a board.
    pub fn start_game(&mut self) -> bool {
        let Some(card) = self.cards.cards.get(self.card_index) else {
            return false;
        };
        match card.board() {
            Ok(board) => {
                self.session.start(board, self.mode);
                self.clear_notice();
                true
            }
            Err(err) => {
                warn!(card = card.id, %err, "card rejected");
                self.session.fail(err.to_string());
                false
            }
        }
    }

    fn has_board(&self) -> bool {
        self.session.state().board().is_some()
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    return self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Start => self.scene == Scene::Table && self.start_game(),
            InputAction::Pause => {
                if self.scene != Scene::Table || !self.has_board() {
                    return false;
                }
                self.session.pause();
                true
            }
            InputAction::Resume => {
                if self.scene != Scene::Table || !self.has_board() {
                    return false;
                }
                self.session.resume();
                true
            }
            InputAction::Reset => {
                if self.scene != Scene::Table || !self.has_board() {
                    return false;
                }
                self.session.reset();
                self.clear_notice();
                true
            }
            InputAction::DrawRandom => {
                if self.scene != Scene::Table || !self.has_board() {
                    return false;
                }
                match self.session.draw_random() {
                    Some(_) => {
                        self.clear_notice();
                        true
                    }
                    None => {
                        self.set_notice("All 90 balls have been drawn.");
                        false
                    }
                }
            }
        }
    }

    /// Per-frame housekeeping: expire stale notices.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.notice_at {
            if at.elapsed() >= Self::NOTICE_TTL {
                self.clear_notice();
            }
        }
    }
}

/// Whole milliseconds in `d`, saturating at `u64::MAX`.
pub(crate) fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    const TWO_CARDS: &str = r#"{"cards":[
        {"id":1,"name":"A","matrix":[[1,2],[3,4]],"prizes":[]},
        {"id":2,"name":"Broken","matrix":[[1,2],[3]],"prizes":[]}
    ]}"#;

    fn app() -> AppState {
        let cards = CardsPayload::from_json(TWO_CARDS).unwrap();
        let session = SessionController::new(SessionConfig::default().with_seed(5)).unwrap();
        AppState::new(cards, session)
    }

    #[tokio::test]
    async fn table_actions_ignored_in_menu() {
        let mut app = app();
        assert!(!app.handle_input(InputAction::DrawRandom));
        assert!(app.game().drawn().is_empty());
    }

    #[tokio::test]
    async fn broken_card_surfaces_error() {
        let mut app = app();
        app.card_index = 1;
        assert!(!app.start_game());
        assert!(app.game().error().is_some());
        assert!(app.game().board().is_none());
    }

    #[tokio::test]
    async fn huge_interval_saturates_menu_value() {
        let cards = CardsPayload::from_json(TWO_CARDS).unwrap();
        let config = SessionConfig::default().with_auto_interval(Duration::MAX);
        let app = AppState::new(cards, SessionController::new(config).unwrap());
        assert_eq!(app.cfg_interval_ms, u64::MAX);
        assert_eq!(millis(Duration::from_millis(1200)), 1200);
    }

    #[tokio::test]
    async fn exhausted_draw_sets_notice() {
        let mut app = app();
        app.handle_input(InputAction::MenuApply);
        for n in 1..=90 {
            app.session.draw(n);
        }
        assert!(!app.handle_input(InputAction::DrawRandom));
        assert!(app.notice().is_some());
    }
}
