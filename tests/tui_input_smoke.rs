use bingo_rs::cards::CardsPayload;
use bingo_rs::config::SessionConfig;
use bingo_rs::game::DrawMode;
use bingo_rs::session::SessionController;
use bingo_rs::tui::app::{AppState, InputAction, Scene};
use bingo_rs::tui::controller::handle_key;
use crossterm::event::KeyCode;

const DEMO: &str = include_str!("../assets/cards.json");

fn app() -> AppState {
    let cards = CardsPayload::from_json(DEMO).unwrap();
    let session = SessionController::new(SessionConfig::default().with_seed(3)).unwrap();
    AppState::new(cards, session)
}

fn setup_table_app() -> AppState {
    let mut app = app();
    app.apply_menu();
    app
}

#[tokio::test]
async fn menu_navigation_and_apply() {
    let mut app = app();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    assert!(app.handle_input(InputAction::MenuApply));
    assert!(matches!(app.scene, Scene::Table));
    assert!(app.game().board().is_some());
    assert_eq!(app.game().mode(), DrawMode::Manual);
}

#[tokio::test]
async fn menu_picks_card_and_auto_mode() {
    let mut app = app();
    let _ = app.handle_input(InputAction::MenuInc);
    let _ = app.handle_input(InputAction::MenuNext);
    let _ = app.handle_input(InputAction::MenuInc);
    let _ = app.handle_input(InputAction::MenuNext);
    let _ = app.handle_input(InputAction::MenuDec);
    assert!(app.handle_input(InputAction::MenuApply));
    assert_eq!(app.card().map(|c| c.id), Some(2));
    assert_eq!(app.game().mode(), DrawMode::auto_millis(1100));
    assert!(app.game().is_running());
    assert!(app.session.is_auto_drawing());
}

#[tokio::test]
async fn card_selection_wraps() {
    let mut app = app();
    let _ = app.handle_input(InputAction::MenuDec);
    assert_eq!(app.cfg_card_index, app.cards.len() - 1);
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_card_index, 0);
}

#[tokio::test]
async fn help_only_on_table() {
    let mut app = app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(!app.help_open());

    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert!(!app.help_open());
    assert!(matches!(app.scene, Scene::Menu));
}

#[tokio::test]
async fn table_keys_drive_session() {
    let mut app = setup_table_app();
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.game().drawn().len(), 2);

    assert!(!handle_key(&mut app, KeyCode::Char('x')));
    assert!(app.game().drawn().is_empty());
    assert!(app.game().board().is_some());

    assert!(handle_key(&mut app, KeyCode::Char('q')));
}

#[tokio::test]
async fn help_swallows_table_keys() {
    let mut app = setup_table_app();
    let _ = handle_key(&mut app, KeyCode::Char('?'));
    assert!(app.help_open());
    assert!(!handle_key(&mut app, KeyCode::Char('q')));
    let _ = handle_key(&mut app, KeyCode::Char(' '));
    assert!(app.game().drawn().is_empty());
    let _ = handle_key(&mut app, KeyCode::Esc);
    assert!(!app.help_open());
}

#[tokio::test]
async fn pause_and_resume_follow_mode() {
    let mut app = setup_table_app();
    let _ = app.handle_input(InputAction::ToggleMenu);
    let _ = app.handle_input(InputAction::MenuNext);
    let _ = app.handle_input(InputAction::MenuInc);
    assert!(app.handle_input(InputAction::MenuApply));
    assert!(app.game().is_running());

    assert!(app.handle_input(InputAction::Pause));
    assert!(!app.game().is_running());
    assert!(!app.session.is_auto_drawing());
    assert!(app.handle_input(InputAction::Resume));
    assert!(app.game().is_running());
    assert!(app.session.is_auto_drawing());
}
