use bingo_rs::cards::CardsPayload;
use bingo_rs::config::SessionConfig;
use bingo_rs::session::SessionController;
use bingo_rs::tui::{app::AppState, controller};
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_CARDS: &str = include_str!("../../assets/cards.json");

/// Terminal bingo: pick a card, call numbers by hand or on a timer.
#[derive(Parser, Debug)]
#[command(name = "bingo-rs")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Card payload (JSON). Defaults to the built-in demo cards.
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Seed for reproducible draw order
    #[arg(long)]
    seed: Option<u64>,

    /// Default auto-draw interval in milliseconds
    #[arg(long, default_value_t = 1200)]
    interval_ms: u64,

    /// Log file (the terminal is taken by the UI)
    #[arg(long, default_value = "bingo-rs.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let log_file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}

fn load_cards(path: Option<&PathBuf>) -> io::Result<CardsPayload> {
    let json = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => DEMO_CARDS.to_string(),
    };
    CardsPayload::from_json(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if !io::stdout().is_terminal() {
        println!(
            "bingo-rs TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            bingo_rs::VERSION
        );
        return Ok(());
    }
    init_logging(&cli.log_file)?;
    let cards = load_cards(cli.cards.as_ref())?;
    info!(cards = cards.len(), "card payload loaded");

    // The auto-draw timer runs on this runtime; the UI loop stays on the main thread.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()?;
    let mut config = SessionConfig::default().with_auto_interval(Duration::from_millis(cli.interval_ms));
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let session = SessionController::with_handle(config, runtime.handle().clone());
    let mut app = AppState::new(cards, session);

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    info!("bingo-rs exiting");
    res
}
