use crate::board::{Cell, Position};
use crate::game::{DrawMode, GameState};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::collections::{BTreeMap, BTreeSet};

use super::layout::{centered_rect, even_split, inner};

pub(super) fn draw_board(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let game = app.game();
    let header_height = 2 + 2;
    let status_height: u16 = 2 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Min(5),                // card + side panel
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    // Header
    let card_name = app.card().map(|c| c.name.as_str()).unwrap_or("--");
    let bet = app.card().and_then(|c| c.bet).map(|b| format!("  Bet: {b}")).unwrap_or_default();
    let header_lines = vec![
        Line::from(format!("Card: {card_name}{bet}")),
        Line::from(format!(
            "Mode: {}   {}   Drawn: {}/90",
            mode_label(game.mode()),
            if game.is_running() { "Running" } else { "Paused" },
            game.drawn().len()
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("bingo-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    draw_card(f, body[0], app, &game);
    draw_side_panel(f, body[1], &game);

    // Status bar
    let status_area = chunks[2];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));

    let mut left_info = if game.board().is_none() {
        vec![Line::from("No card loaded. Press M to choose one.")]
    } else {
        vec![Line::from("Space draw • S restart • P pause • R resume • X reset")]
    };
    if let Some(err) = game.error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(msg) = app.notice() {
        left_info.push(Line::from(Span::styled(msg.to_string(), Style::default().fg(Color::Yellow))));
    }
    let right_keys = vec![Line::from(""), Line::from("? help • M menu • Q quit")];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    }
}

fn draw_card(f: &mut Frame, area: Rect, app: &AppState, game: &GameState) {
    let block = Block::default().title("Card").borders(Borders::ALL);
    f.render_widget(block, area);
    let Some(board) = game.board() else {
        return;
    };
    let marked = board.marked_positions(game.drawn());
    let winning = game.wins().winning_positions();
    let prizes: BTreeMap<u8, String> = app
        .card()
        .map(|c| c.prize_table().into_iter().map(|(n, p)| (n, p.title.clone())).collect())
        .unwrap_or_default();

    let rows = even_split(inner(area), board.rows(), Direction::Vertical);
    for (r, row_area) in rows.into_iter().enumerate() {
        let slots = even_split(row_area, board.cols(), Direction::Horizontal);
        for (c, slot) in slots.into_iter().enumerate() {
            let pos = Position::new(r, c);
            let Ok(cell) = board.value_at(pos) else {
                continue;
            };
            render_cell(f, slot, cell, &CellMarks::of(pos, cell, game, &marked, &winning, &prizes));
        }
    }
}

struct CellMarks {
    marked: bool,
    winning: bool,
    last: bool,
    prize: bool,
}

impl CellMarks {
    fn of(
        pos: Position,
        cell: Cell,
        game: &GameState,
        marked: &BTreeSet<Position>,
        winning: &BTreeSet<Position>,
        prizes: &BTreeMap<u8, String>,
    ) -> Self {
        let n = cell.number();
        Self {
            marked: marked.contains(&pos),
            winning: winning.contains(&pos),
            last: n.is_some() && n == game.last_drawn(),
            prize: n.is_some_and(|n| prizes.contains_key(&n)),
        }
    }
}

fn render_cell(f: &mut Frame, area: Rect, cell: Cell, marks: &CellMarks) {
    let mut block = Block::default().borders(Borders::ALL);
    let border = if marks.winning {
        Some(Color::Yellow)
    } else if marks.last {
        Some(Color::Cyan)
    } else if marks.prize {
        Some(Color::Magenta)
    } else {
        None
    };
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let text = match cell {
        Cell::Empty => Span::styled("·", Style::default().add_modifier(Modifier::DIM)),
        Cell::Number(n) => {
            let label = if marks.prize { format!("{n}*") } else { n.to_string() };
            let style = if marks.marked {
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Span::styled(label, style)
        }
    };
    let inner_area = inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(Line::from(text)).alignment(Alignment::Center), inner_area);
}

fn draw_side_panel(f: &mut Frame, area: Rect, game: &GameState) {
    let block = Block::default().title("Draw").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let last = game.last_drawn().map(|n| n.to_string()).unwrap_or_else(|| "--".to_string());
    lines.push(Line::from(vec![
        Span::raw("Last: "),
        Span::styled(last, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Wins:", Style::default().add_modifier(Modifier::BOLD))));
    if game.wins().is_empty() {
        lines.push(Line::from(Span::styled("none yet", Style::default().add_modifier(Modifier::DIM))));
    }
    for (pattern, sets) in game.wins().iter() {
        let count = if sets.len() > 1 { format!(" x{}", sets.len()) } else { String::new() };
        lines.push(Line::from(Span::styled(
            format!("{pattern}{count}"),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Drawn:", Style::default().add_modifier(Modifier::BOLD))));
    lines.push(Line::from(game.drawn().to_string()));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn mode_label(mode: DrawMode) -> String {
    match mode.interval() {
        Some(interval) => format!("Auto ({} ms)", interval.as_millis()),
        None => "Manual".to_string(),
    }
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Game:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: draw a random ball"),
        Line::from("- S: restart on the same card"),
        Line::from("- P: pause auto draw"),
        Line::from("- R: resume auto draw"),
        Line::from("- X: reset drawn balls"),
        Line::from(""),
        Line::from(Span::styled("Card:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- green: marked"),
        Line::from("- yellow border: part of a win"),
        Line::from("- cyan border: last drawn"),
        Line::from("- n*: prize cell"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: start"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
