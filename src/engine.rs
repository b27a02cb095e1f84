// Minimal session API boundary. Front ends (TUI, tests, scripted callers)
// drive a bingo session through this trait without depending on how the
// state is stored or how the timer is scheduled. Implemented for
// `SessionController`.

use crate::board::Board;
use crate::game::{DrawMode, GameState};
use std::sync::Arc;

pub trait BingoEngine {
    // Lifecycle
    fn start(&mut self, board: Arc<Board>, mode: DrawMode);
    fn pause(&mut self);
    fn resume(&mut self);
    fn reset(&mut self);

    // Draws
    fn draw(&mut self, number: i64);
    fn draw_random(&mut self) -> Option<u8>;
    fn fail(&mut self, message: String);

    // Queries
    fn snapshot(&self) -> GameState;
    fn auto_drawing(&self) -> bool;
}

impl BingoEngine for crate::session::SessionController {
    fn start(&mut self, board: Arc<Board>, mode: DrawMode) {
        self.start(board, mode);
    }
    fn pause(&mut self) {
        self.pause();
    }
    fn resume(&mut self) {
        self.resume();
    }
    fn reset(&mut self) {
        self.reset();
    }

    fn draw(&mut self, number: i64) {
        crate::session::SessionController::draw(self, number);
    }
    fn draw_random(&mut self) -> Option<u8> {
        crate::session::SessionController::draw_random(self)
    }
    fn fail(&mut self, message: String) {
        crate::session::SessionController::fail(self, message);
    }

    fn snapshot(&self) -> GameState {
        self.state()
    }
    fn auto_drawing(&self) -> bool {
        self.is_auto_drawing()
    }
}
