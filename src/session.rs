//! Session controller: owns the game state and the auto-draw timer.
//!
//! All writes go through [`reduce`] inside the state channel's modify hook,
//! so manual draws and timer draws never interleave mid-update. At most one
//! timer task exists; starting a new one always cancels the previous.
//!
//! ```
//! use bingo_rs::board::Board;
//! use bingo_rs::config::SessionConfig;
//! use bingo_rs::game::DrawMode;
//! use bingo_rs::session::SessionController;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut session = SessionController::new(SessionConfig::default().with_seed(7)).unwrap();
//! let board: Board = "1 2 3; 4 5 6; 7 8 9".parse().unwrap();
//! session.start(board, DrawMode::Manual);
//! session.draw(5);
//! assert_eq!(session.state().last_drawn(), Some(5));
//! # }
//! ```

use crate::board::Board;
use crate::config::SessionConfig;
use crate::game::{reduce, DrawMode, GameAction, GameState};
use crate::patterns::WinPattern;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session controller requires a Tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

struct Shared {
    state: watch::Sender<GameState>,
    patterns: Vec<WinPattern>,
    rng: Mutex<ChaCha8Rng>,
}

impl Shared {
    fn apply(&self, action: GameAction) {
        self.state.send_modify(|s| *s = reduce(s, action, &self.patterns));
    }

    fn draw_random(&self) -> Option<u8> {
        let mut picked = None;
        self.state.send_if_modified(|s| {
            if s.board.is_none() {
                return false;
            }
            let n = {
                let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
                s.drawn.pick_undrawn(&mut *rng)
            };
            let Some(n) = n else {
                return false;
            };
            picked = Some(n);
            *s = reduce(s, GameAction::DrawOne(i64::from(n)), &self.patterns);
            true
        });
        picked
    }
}

/// Single owner of one bingo session.
pub struct SessionController {
    shared: Arc<Shared>,
    runtime: Handle,
    auto_task: Option<JoinHandle<()>>,
    config: SessionConfig,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &*self.shared.state.borrow())
            .field("auto_drawing", &self.is_auto_drawing())
            .field("config", &self.config)
            .finish()
    }
}

impl SessionController {
    /// Create a controller bound to the current Tokio runtime.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let runtime = Handle::try_current()?;
        Ok(Self::with_handle(config, runtime))
    }

    /// Create a controller whose timer runs on `runtime`.
    pub fn with_handle(config: SessionConfig, runtime: Handle) -> Self {
        let config = config.validated();
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let (state, _) = watch::channel(GameState::default());
        debug!(patterns = ?config.patterns, seed = ?config.seed, "session controller created");
        let shared = Arc::new(Shared { state, patterns: config.patterns.clone(), rng: Mutex::new(rng) });
        Self { shared, runtime, auto_task: None, config }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.shared.state.borrow().clone()
    }

    /// Receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.shared.state.subscribe()
    }

    pub fn patterns(&self) -> &[WinPattern] {
        &self.shared.patterns
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether an auto-draw timer task is alive.
    pub fn is_auto_drawing(&self) -> bool {
        self.auto_task.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn start(&mut self, board: impl Into<Arc<Board>>, mode: DrawMode) {
        self.stop_auto();
        let board = board.into();
        debug!(rows = board.rows(), cols = board.cols(), ?mode, "session start");
        self.shared.apply(GameAction::Start { board, mode });
        if let Some(interval) = mode.interval() {
            self.start_auto(interval);
        }
    }

    pub fn pause(&mut self) {
        self.stop_auto();
        self.shared.apply(GameAction::Pause);
        debug!("session paused");
    }

    pub fn resume(&mut self) {
        let mode = self.shared.state.borrow().mode;
        if let Some(interval) = mode.interval() {
            self.start_auto(interval);
        }
        self.shared.apply(GameAction::Resume);
        debug!(?mode, "session resumed");
    }

    pub fn reset(&mut self) {
        self.stop_auto();
        self.shared.apply(GameAction::Reset);
        debug!("session reset");
    }

    /// Call a specific number; clamped into the ball range.
    pub fn draw(&self, number: i64) {
        trace!(number, "manual draw");
        self.shared.apply(GameAction::DrawOne(number));
    }

    /// Call a random undrawn number. Returns `None` without touching the state
    /// once every ball is out, or before a board is loaded.
    pub fn draw_random(&self) -> Option<u8> {
        let picked = self.shared.draw_random();
        trace!(?picked, "random draw");
        picked
    }

    /// Surface a collaborator failure to the front end.
    pub fn fail(&self, message: impl Into<String>) {
        self.shared.apply(GameAction::Fail(message.into()));
    }

    fn start_auto(&mut self, interval: Duration) {
        // Never leave a second timer behind.
        self.stop_auto();
        let interval = interval.max(SessionConfig::MIN_AUTO_INTERVAL);
        let shared = Arc::clone(&self.shared);
        debug!(?interval, "auto draw started");
        self.auto_task = Some(self.runtime.spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                match shared.draw_random() {
                    Some(n) => trace!(number = n, "auto draw"),
                    None => trace!("auto draw skipped"),
                }
            }
        }));
    }

    fn stop_auto(&mut self) {
        if let Some(task) = self.auto_task.take() {
            task.abort();
            debug!("auto draw stopped");
        }
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.stop_auto();
    }
}
