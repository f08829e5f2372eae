//! The main fishing scene: header, water, action prompt, gear footer, and
//! the result modal.

use crate::catalog::{bait_by_id, location_by_id, rod_by_id, Rarity, LOCATIONS};
use crate::constants::HOOK_WINDOW_MS;
use crate::fishing::GamePhase;
use super::app::App;
use super::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // location header
            Constraint::Min(7),    // water
            Constraint::Length(3), // action prompt / status
            Constraint::Length(3), // gear + gold footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    draw_water(frame, chunks[1], app, now);
    draw_prompt(frame, chunks[2], app, now);
    draw_footer(frame, chunks[3], app);

    if app.session.phase == GamePhase::Result {
        draw_result_modal(frame, app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let location = location_by_id(&app.session.location_id).unwrap_or(&LOCATIONS[0]);
    let switcher: Vec<Span> = LOCATIONS
        .iter()
        .enumerate()
        .flat_map(|(i, l)| {
            let style = if l.id == location.id {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![Span::styled(format!("[{}] {}", i + 1, l.name), style), Span::raw("  ")]
        })
        .collect();

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            location.name,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            location.description,
            Style::default().fg(Color::Gray),
        )),
        Line::from(switcher),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Tideline "))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_water(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let hooked = app.session.phase == GamePhase::Hooked;
    let bobber_style = if hooked {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::LightRed)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "  ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ~",
            Style::default().fg(Color::Blue),
        )),
        match app.session.phase {
            GamePhase::Idle => Line::from(Span::styled(
                "        (line out of the water)",
                Style::default().fg(Color::DarkGray),
            )),
            GamePhase::Casting => Line::from(Span::styled(
                "            . o O",
                Style::default().fg(Color::Gray),
            )),
            _ => Line::from(vec![
                Span::styled("      ~~~~~ ", Style::default().fg(Color::Blue)),
                Span::styled("O", bobber_style),
                Span::styled(" ~~~~~", Style::default().fg(Color::Blue)),
            ]),
        },
        Line::from(Span::styled(
            "  ~ ~ ~ ~ ~ ~ | ~ ~ ~ ~ ~ ~ ~ ~",
            Style::default().fg(Color::Blue),
        )),
    ];

    if hooked {
        // Closing window: show how much of the 3s remains.
        if let Some(elapsed) = app.session.hooked_elapsed_ms(now) {
            let left = HOOK_WINDOW_MS.saturating_sub(elapsed);
            lines.push(Line::from(Span::styled(
                format!("  !!! HOOKED — {:.1}s !!!", left as f64 / 1000.0),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));
        }
    }

    let water = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    frame.render_widget(water, area);
}

fn draw_prompt(frame: &mut Frame, area: Rect, app: &App, _now: Instant) {
    let (text, style) = if let Some(status) = &app.status {
        (status.clone(), Style::default().fg(Color::Red))
    } else {
        match app.session.phase {
            GamePhase::Idle => (
                "[space] cast   [1-3] location   [g]ear   [i]nventory   [j]ournal   [q]uit"
                    .to_string(),
                Style::default().fg(Color::Gray),
            ),
            GamePhase::Casting => ("Casting...".to_string(), Style::default().fg(Color::Gray)),
            GamePhase::Waiting => (
                "Waiting for a bite...".to_string(),
                Style::default().fg(Color::Gray),
            ),
            GamePhase::Hooked => (
                "[space] REEL IN!".to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            GamePhase::Result => (
                "[space] continue".to_string(),
                Style::default().fg(Color::Gray),
            ),
        }
    };

    let prompt = Paragraph::new(Line::from(Span::styled(text, style)))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(prompt, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let rod_name = rod_by_id(&app.player.equipped_rod_id).map_or("?", |r| r.name);
    let bait_name = bait_by_id(&app.player.equipped_bait_id).map_or("?", |b| b.name);
    let bait_count = app.player.bait_count(&app.player.equipped_bait_id);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Rod: ", Style::default().fg(Color::DarkGray)),
        Span::styled(rod_name, Style::default().fg(Color::LightBlue)),
        Span::raw("   "),
        Span::styled("Bait: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{bait_name} x{bait_count}"),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} G", app.player.gold),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Epic => Color::Magenta,
        Rarity::Rare => Color::Blue,
        Rarity::Treasure => Color::Yellow,
        Rarity::Trash => Color::DarkGray,
        Rarity::Common => Color::White,
    }
}

fn draw_result_modal(frame: &mut Frame, app: &App) {
    let area = centered_rect(44, 10, frame.size());
    frame.render_widget(Clear, area);

    let lines = match &app.session.last_catch {
        Some(report) => vec![
            Line::from(Span::styled(
                format!("{:?} catch!", report.timing).to_uppercase(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} {}", report.entry.icon, report.entry.name),
                Style::default()
                    .fg(rarity_color(report.entry.rarity))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                report.entry.description,
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("worth {} G", report.entry.value),
                Style::default().fg(Color::Yellow),
            )),
        ],
        None => vec![
            Line::from(Span::styled(
                "It got away...",
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Be quicker next time!",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let modal = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Catch "))
        .alignment(Alignment::Center);
    frame.render_widget(modal, area);
}
