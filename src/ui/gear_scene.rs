//! Gear selector overlay: browse rods and baits, buy, and equip.

use crate::catalog::{BAITS, RODS};
use crate::errors::GameError;
use crate::player::{self, GearKind};
use super::app::{App, Overlay};
use super::centered_rect;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Cursor state for the gear overlay.
#[derive(Debug, Clone, Copy)]
pub struct GearMenu {
    pub tab: GearKind,
    pub cursor: usize,
}

impl GearMenu {
    pub fn new() -> Self {
        Self {
            tab: GearKind::Rod,
            cursor: 0,
        }
    }

    fn len(&self) -> usize {
        match self.tab {
            GearKind::Rod => RODS.len(),
            GearKind::Bait => BAITS.len(),
        }
    }
}

impl Default for GearMenu {
    fn default() -> Self {
        Self::new()
    }
}

pub fn on_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('g') | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            app.gear_menu.tab = match app.gear_menu.tab {
                GearKind::Rod => GearKind::Bait,
                GearKind::Bait => GearKind::Rod,
            };
            app.gear_menu.cursor = 0;
        }
        KeyCode::Up => app.gear_menu.cursor = app.gear_menu.cursor.saturating_sub(1),
        KeyCode::Down => {
            app.gear_menu.cursor = (app.gear_menu.cursor + 1).min(app.gear_menu.len() - 1)
        }
        KeyCode::Char('b') => {
            let (kind, id) = selected(app);
            // Re-buying an owned rod is blocked here, not in the core.
            if kind == GearKind::Rod && app.player.owns_rod(id) {
                return;
            }
            match player::buy(&mut app.player, kind, id) {
                Ok(()) => {}
                Err(err @ GameError::InsufficientFunds { .. }) => {
                    app.status = Some(err.to_string());
                }
                Err(_) => {}
            }
        }
        KeyCode::Enter | KeyCode::Char('e') => {
            let (kind, id) = selected(app);
            // Only owned gear is offered for equipping.
            let owned = match kind {
                GearKind::Rod => app.player.owns_rod(id),
                GearKind::Bait => app.player.bait_count(id) > 0,
            };
            if owned {
                player::equip(&mut app.player, kind, id);
            }
        }
        _ => {}
    }
}

fn selected(app: &App) -> (GearKind, &'static str) {
    match app.gear_menu.tab {
        GearKind::Rod => (GearKind::Rod, RODS[app.gear_menu.cursor].id),
        GearKind::Bait => (GearKind::Bait, BAITS[app.gear_menu.cursor].id),
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(56, 14, frame.size());
    frame.render_widget(Clear, area);

    let tab_line = Line::from(vec![
        tab_span("Rods", app.gear_menu.tab == GearKind::Rod),
        Span::raw("  "),
        tab_span("Baits", app.gear_menu.tab == GearKind::Bait),
        Span::styled(
            format!("    {} G", app.player.gold),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let mut lines = vec![tab_line, Line::from("")];
    match app.gear_menu.tab {
        GearKind::Rod => {
            for (i, rod) in RODS.iter().enumerate() {
                let owned = app.player.owns_rod(rod.id);
                let equipped = app.player.equipped_rod_id == rod.id;
                let tag = if equipped {
                    "[equipped]"
                } else if owned {
                    "[owned]"
                } else {
                    ""
                };
                lines.push(row(
                    i == app.gear_menu.cursor,
                    format!("{} — {} G {}", rod.name, rod.price, tag),
                ));
            }
        }
        GearKind::Bait => {
            for (i, bait) in BAITS.iter().enumerate() {
                let count = app.player.bait_count(bait.id);
                let equipped = app.player.equipped_bait_id == bait.id;
                let tag = if equipped { "[equipped]" } else { "" };
                lines.push(row(
                    i == app.gear_menu.cursor,
                    format!("{} x{} — {} G each {}", bait.name, count, bait.price, tag),
                ));
            }
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[tab] switch  [b]uy  [enter] equip  [esc] close",
        Style::default().fg(Color::DarkGray),
    )));
    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let modal = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Gear "))
        .alignment(Alignment::Left);
    frame.render_widget(modal, area);
}

fn tab_span(label: &str, active: bool) -> Span {
    if active {
        Span::styled(
            format!(" {label} "),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )
    } else {
        Span::styled(format!(" {label} "), Style::default().fg(Color::Gray))
    }
}

fn row(selected: bool, text: String) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("> {text}"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("  {text}"),
            Style::default().fg(Color::Gray),
        ))
    }
}
