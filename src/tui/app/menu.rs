use crate::config::SessionConfig;
use crate::game::DrawMode;

use super::state::millis;
use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Card,
    Mode,
    IntervalMs,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Card, MenuItem::Mode, MenuItem::IntervalMs];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Card => {
                let name = app
                    .cards
                    .cards
                    .get(app.cfg_card_index)
                    .map(|c| c.name.as_str())
                    .unwrap_or("--");
                format!("Card: {name} ({}/{})", app.cfg_card_index + 1, app.cards.len())
            }
            MenuItem::Mode => {
                format!("Draw Mode: {}", if app.cfg_auto { "Auto" } else { "Manual" })
            }
            MenuItem::IntervalMs => format!("Auto Interval (ms): {}", app.cfg_interval_ms),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Card => {
                if !app.cards.is_empty() {
                    app.cfg_card_index = (app.cfg_card_index + 1) % app.cards.len();
                }
            }
            MenuItem::Mode => app.cfg_auto = !app.cfg_auto,
            MenuItem::IntervalMs => {
                app.cfg_interval_ms = app.cfg_interval_ms.saturating_add(AppState::INTERVAL_STEP_MS);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Card => {
                let n = app.cards.len();
                if n > 0 {
                    app.cfg_card_index = (app.cfg_card_index + n - 1) % n;
                }
            }
            MenuItem::Mode => app.cfg_auto = !app.cfg_auto,
            MenuItem::IntervalMs => {
                let min = millis(SessionConfig::MIN_AUTO_INTERVAL);
                app.cfg_interval_ms =
                    app.cfg_interval_ms.saturating_sub(AppState::INTERVAL_STEP_MS).max(min);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        match self.scene {
            super::Scene::Menu => self.cancel_menu(),
            _ => self.open_menu(),
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_card_index = self.card_index;
        self.cfg_auto = self.mode.is_auto();
        if let Some(interval) = self.mode.interval() {
            self.cfg_interval_ms = millis(interval);
        }
        self.scene = super::Scene::Menu;
    }

    /// Apply the edited settings and start a fresh session on the chosen card.
    pub fn apply_menu(&mut self) -> bool {
        let min = millis(SessionConfig::MIN_AUTO_INTERVAL);
        if self.cfg_interval_ms < min {
            self.cfg_interval_ms = min;
        }
        self.card_index = self.cfg_card_index.min(self.cards.len().saturating_sub(1));
        self.mode =
            if self.cfg_auto { DrawMode::auto_millis(self.cfg_interval_ms) } else { DrawMode::Manual };
        self.scene = super::Scene::Table;
        self.start_game()
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
