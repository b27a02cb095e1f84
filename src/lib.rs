//! bingo-rs: Bingo session engine
//!
//! Goals:
//! - Pure, total reducer for the start/pause/resume/reset/draw lifecycle
//! - Structural win patterns (row, four corners, full house) re-derived per check
//! - Timed auto-draw owned by a single session controller
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: check a card for wins
//! ```
//! use bingo_rs::balls::DrawnSet;
//! use bingo_rs::board::Board;
//! use bingo_rs::patterns::{check_wins, WinPattern};
//!
//! let board: Board = "1 2 3; 4 5 6; 7 8 9".parse().unwrap();
//! let drawn: DrawnSet = [1, 3, 7, 9].into_iter().collect();
//!
//! let wins = check_wins(&board, &drawn, &WinPattern::ALL);
//! assert!(wins.contains(WinPattern::FourCorners));
//! assert!(!wins.contains(WinPattern::Row));
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin bingo-rs -- --cards cards.json
//! ```

pub mod balls;
pub mod board;
pub mod cards;
pub mod config;
pub mod engine;
pub mod game;
pub mod patterns;
pub mod session;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
