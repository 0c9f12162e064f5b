//! Hue slider widget.
//!
//! A horizontal spectrum bar bound directly to the hue component. Adjusting
//! it re-renders the gradient surface for the new hue; saturation and
//! lightness are untouched.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::HslColor;
use crate::surface::scale_coord;
use crate::tui::theme::Theme;

/// Hue degrees covered per small keyboard step.
pub const FINE_STEP: u16 = 1;
/// Hue degrees covered per large keyboard step.
pub const COARSE_STEP: u16 = 10;

/// Maps a terminal cell inside the slider to a hue in degrees.
#[must_use]
pub fn cell_to_hue(column: u16, area: Rect) -> u16 {
    let inner_x = area.x.saturating_add(1);
    let inner_width = area.width.saturating_sub(2);
    if inner_width < 2 {
        return 0;
    }
    let local = column.saturating_sub(inner_x).min(inner_width - 1);
    scale_coord(local, inner_width - 1, 360)
}

/// Renders the hue slider: a spectrum bar with a marker line underneath.
pub fn render(f: &mut Frame, area: Rect, hue: u16, focused: bool, theme: &Theme) {
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };
    let block = Block::default()
        .title(format!(" Hue: {hue}° "))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 2 || inner.height == 0 {
        return;
    }

    let mut bar: Vec<Span> = Vec::with_capacity(usize::from(inner.width));
    for x in 0..inner.width {
        let h = scale_coord(x, inner.width - 1, 360);
        let color = HslColor::new(h, 100, 50).to_rgb().to_ratatui_color();
        bar.push(Span::styled("█", Style::default().fg(color)));
    }

    let marker_x = scale_coord(hue, 360, inner.width - 1);
    let mut marker: Vec<Span> = Vec::with_capacity(usize::from(inner.width));
    for x in 0..inner.width {
        if x == marker_x {
            marker.push(Span::styled("▲", Style::default().fg(theme.accent)));
        } else {
            marker.push(Span::raw(" "));
        }
    }

    let mut lines = vec![Line::from(bar)];
    if inner.height >= 2 {
        lines.push(Line::from(marker));
    }
    f.render_widget(Paragraph::new(lines), inner);
}
