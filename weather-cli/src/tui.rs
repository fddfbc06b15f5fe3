//! Interactive terminal screen: static header and summary on top, a
//! scrollable list of forecast cards below.

use std::io;

use cityweather_core::RenderItem;
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        cursor::Show,
        event::{self, Event, KeyCode, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::render::{TITLE, card_lines, card_title, summary_lines};

const PAGE: usize = 5;

/// Selected-card cursor, clamped to the list bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    pos: usize,
    len: usize,
}

impl Cursor {
    fn new(len: usize) -> Self {
        Self { pos: 0, len }
    }

    fn down(&mut self, by: usize) {
        if self.len > 0 {
            self.pos = (self.pos + by).min(self.len - 1);
        }
    }

    fn up(&mut self, by: usize) {
        self.pos = self.pos.saturating_sub(by);
    }

    fn first(&mut self) {
        self.pos = 0;
    }

    fn last(&mut self) {
        self.pos = self.len.saturating_sub(1);
    }

    fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.pos)
    }
}

enum Action {
    Quit,
    Move(fn(&mut Cursor)),
}

fn action_for(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::Move(|c| c.down(1)),
        KeyCode::Char('k') | KeyCode::Up => Action::Move(|c| c.up(1)),
        KeyCode::PageDown => Action::Move(|c| c.down(PAGE)),
        KeyCode::PageUp => Action::Move(|c| c.up(PAGE)),
        KeyCode::Char('g') | KeyCode::Home => Action::Move(Cursor::first),
        KeyCode::Char('G') | KeyCode::End => Action::Move(Cursor::last),
        _ => return None,
    };
    Some(action)
}

/// Leaves the alternate screen and raw mode when dropped, including on early
/// returns while the terminal is still being set up.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { restore: restore_terminal };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            log::warn!("failed to restore terminal: {e}");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    disable_raw_mode()
}

pub fn run(items: &[RenderItem]) -> anyhow::Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    Ok(event_loop(&mut terminal, items)?)
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, items: &[RenderItem]) -> io::Result<()> {
    let rows = items.iter().filter(|i| matches!(i, RenderItem::ForecastRow(_))).count();
    let mut cursor = Cursor::new(rows);
    let mut state = ListState::default();

    loop {
        state.select(cursor.selected());
        terminal.draw(|f| ui(f, items, &mut state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match action_for(key.code) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Move(apply)) => apply(&mut cursor),
                None => {}
            }
        }
    }
}

fn framed(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {title} "), Style::default().fg(Color::Yellow)))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded)
}

fn labeled(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!(" {label:13}")),
        Span::styled(value, Style::default().fg(Color::Green)),
    ])
}

fn card(row: &cityweather_core::ForecastRow) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::raw(" "),
        Span::styled(
            card_title(row),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.extend(card_lines(row).into_iter().map(|(label, value)| labeled(label, value)));
    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn ui(f: &mut Frame, items: &[RenderItem], state: &mut ListState) {
    let mut header = Vec::new();
    let mut summary = Vec::new();
    let mut cards = Vec::new();

    for item in items {
        match item {
            RenderItem::Header { city, date } => {
                header.push(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(city.clone(), Style::default().fg(Color::Yellow)),
                ]));
                header.push(Line::from(format!(" {date}")));
            }
            RenderItem::Summary { wendu, quality, shidu, pm25, pm10, ganmao } => {
                summary.extend(
                    summary_lines(wendu, quality, shidu, *pm25, *pm10, ganmao)
                        .into_iter()
                        .map(|(label, value)| labeled(label, value)),
                );
            }
            RenderItem::ForecastRow(row) => cards.push(card(row)),
        }
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(header.len() as u16 + 2),
            Constraint::Length(summary.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(f.area());

    f.render_widget(Paragraph::new(header).block(framed(TITLE)), chunks[0]);
    f.render_widget(Paragraph::new(summary).block(framed("Now")), chunks[1]);

    let list = List::new(cards)
        .block(framed("Forecast"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("▌");
    f.render_stateful_widget(list, chunks[2], state);
}
