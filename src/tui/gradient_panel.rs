//! Saturation/lightness gradient panel.
//!
//! Displays the [`PixelSurface`](crate::surface::PixelSurface) as half-block
//! cells (each terminal cell carries two vertical pixels via `▀` with
//! distinct fg/bg) and maps terminal cells back into backing-surface
//! coordinates for pointer sampling. The backing resolution is fixed; all
//! display sizes scale into it.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::HslColor;
use crate::surface::{scale_coord, SaturationLightnessSurface};
use crate::tui::theme::Theme;

const HALF_BLOCK: &str = "▀";
const CURSOR_MARK: &str = "+";

/// Maps a terminal cell inside `area` to backing-surface coordinates.
///
/// Coordinates outside the panel are clamped onto it first, so drags that
/// leave the panel keep sampling the nearest edge (pointer capture
/// semantics). Returns `None` only when the panel has no interior to map
/// into.
#[must_use]
pub fn cell_to_surface(
    column: u16,
    row: u16,
    area: Rect,
    surface: &impl SaturationLightnessSurface,
) -> Option<(u16, u16)> {
    let inner = inner_area(area);
    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let local_x = column.saturating_sub(inner.x).min(inner.width - 1);
    let local_y = row.saturating_sub(inner.y).min(inner.height - 1);

    // Each cell row covers two pixel rows; point at the upper one
    let sx = scale_coord(local_x, inner.width - 1, surface.width() - 1);
    let sy = scale_coord(local_y * 2, inner.height * 2 - 1, surface.height() - 1);
    Some((sx, sy))
}

/// Whether a terminal cell lies within the panel (borders included).
#[must_use]
pub fn hit_test(column: u16, row: u16, area: Rect) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

/// Surface coordinates corresponding to a color's position on the gradient.
///
/// The gradient panel is an HSV-style field: x follows HSV saturation, y
/// follows inverted HSV value. Used to place the cursor after a hex commit
/// and at startup, when the position was not produced by sampling.
#[must_use]
pub fn cursor_for_color(
    color: HslColor,
    surface: &impl SaturationLightnessSurface,
) -> (u16, u16) {
    let l = f32::from(color.l) / 100.0;
    let s = f32::from(color.s) / 100.0;

    let v = l + s * l.min(1.0 - l);
    let sv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

    let x = (sv * f32::from(surface.width() - 1)).round() as u16;
    let y = ((1.0 - v) * f32::from(surface.height() - 1)).round() as u16;
    (x.min(surface.width() - 1), y.min(surface.height() - 1))
}

/// Renders the gradient panel with the sampling cursor.
pub fn render(
    f: &mut Frame,
    area: Rect,
    surface: &impl SaturationLightnessSurface,
    cursor: (u16, u16),
    focused: bool,
    theme: &Theme,
) {
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };
    let block = Block::default()
        .title(" Saturation / Lightness ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Cursor position in display cells
    let cursor_cell_x = scale_coord(cursor.0, surface.width() - 1, inner.width - 1);
    let cursor_px_y = scale_coord(cursor.1, surface.height() - 1, inner.height * 2 - 1);
    let cursor_cell_y = cursor_px_y / 2;

    let mut lines: Vec<Line> = Vec::with_capacity(usize::from(inner.height));
    for cell_y in 0..inner.height {
        let mut spans: Vec<Span> = Vec::with_capacity(usize::from(inner.width));
        for cell_x in 0..inner.width {
            let sx = scale_coord(cell_x, inner.width - 1, surface.width() - 1);
            let sy_top = scale_coord(cell_y * 2, inner.height * 2 - 1, surface.height() - 1);
            let sy_bottom =
                scale_coord(cell_y * 2 + 1, inner.height * 2 - 1, surface.height() - 1);

            let (Some(top), Some(bottom)) = (surface.sample(sx, sy_top), surface.sample(sx, sy_bottom))
            else {
                // Surface not rendered yet; leave the panel blank
                spans.push(Span::raw(" "));
                continue;
            };

            if cell_x == cursor_cell_x && cell_y == cursor_cell_y {
                // Draw the cursor in whichever of black/white contrasts most
                let mark_color = if u16::from(top.r) + u16::from(top.g) + u16::from(top.b) > 380 {
                    Color::Black
                } else {
                    Color::White
                };
                spans.push(Span::styled(
                    CURSOR_MARK,
                    Style::default()
                        .fg(mark_color)
                        .bg(top.to_ratatui_color()),
                ));
            } else {
                spans.push(Span::styled(
                    HALF_BLOCK,
                    Style::default()
                        .fg(top.to_ratatui_color())
                        .bg(bottom.to_ratatui_color()),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn inner_area(area: Rect) -> Rect {
    // Mirror of Block::inner for Borders::ALL without building the widget
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
