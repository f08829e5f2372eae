//! Terminal presentation layer.
//!
//! Pure glue: reads game state, invokes the core's entry points, renders
//! with ratatui. No game rules live here.

pub mod app;
mod fishing_scene;
mod gear_scene;
mod overlays;

use ratatui::layout::Rect;

/// A centered sub-rectangle for modal overlays.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
