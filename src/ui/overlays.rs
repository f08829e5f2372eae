//! Read-only overlays: the inventory and the species journal.

use crate::catalog::{loot_by_id, LOOT_TABLE};
use crate::player::PlayerAccount;
use super::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_inventory(frame: &mut Frame, player: &PlayerAccount) {
    let area = centered_rect(50, 16, frame.size());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = Vec::new();
    // Stable catalog order keeps the list readable.
    for entry in &LOOT_TABLE {
        if let Some(count) = player.inventory.get(entry.id) {
            if *count > 0 {
                lines.push(Line::from(Span::raw(format!(
                    "{} {} x{}  ({} G each)",
                    entry.icon, entry.name, count, entry.value
                ))));
            }
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing caught yet.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Gold: {} G", player.gold),
        Style::default().fg(Color::Yellow),
    )));

    let modal = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Inventory "))
        .alignment(Alignment::Left);
    frame.render_widget(modal, area);
}

pub fn render_journal(frame: &mut Frame, player: &PlayerAccount) {
    let area = centered_rect(50, 14, frame.size());
    frame.render_widget(Clear, area);

    let species_total = LOOT_TABLE.iter().filter(|e| e.is_fish()).count();
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Discovered {}/{} species", player.collection.len(), species_total),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for fish_id in &player.collection {
        match loot_by_id(fish_id) {
            Some(entry) => lines.push(Line::from(Span::raw(format!(
                "{} {}",
                entry.icon, entry.name
            )))),
            // Stale id means the catalog changed under a live session.
            None => lines.push(Line::from(Span::styled(
                format!("? {fish_id}"),
                Style::default().fg(Color::DarkGray),
            ))),
        }
    }

    let modal = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Journal "))
        .alignment(Alignment::Left);
    frame.render_widget(modal, area);
}
