//! Tint and shade swatch rows.
//!
//! Each row shows one ramp as colored blocks with a marker under the
//! selected entry. An empty ramp (unparseable base color) renders nothing
//! inside the frame.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::RgbColor;
use crate::tui::theme::Theme;

/// Selection state for one swatch row.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwatchRowState {
    /// Index of the selected swatch
    pub selected: usize,
}

impl SwatchRowState {
    /// Moves the selection left/right, clamped to the ramp.
    pub fn navigate(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max = len as i32 - 1;
        self.selected = (self.selected as i32 + delta).clamp(0, max) as usize;
    }

    /// Clamps the selection after the ramp was regenerated.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(len - 1);
        }
    }
}

/// Cumulative column boundaries of `len` swatches across `inner_width`.
///
/// Swatch `i` occupies columns `[bounds[i], bounds[i + 1])`. Rendering and
/// click mapping both derive from this partition, so a click always selects
/// the swatch drawn under it even when the width does not divide evenly.
fn swatch_boundaries(inner_width: u16, len: usize) -> Vec<u16> {
    (0..=len)
        .map(|i| (i * usize::from(inner_width) / len) as u16)
        .collect()
}

/// Maps a terminal cell inside the row to a swatch index.
#[must_use]
pub fn cell_to_index(column: u16, area: Rect, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let inner_x = area.x.saturating_add(1);
    let inner_width = area.width.saturating_sub(2);
    if inner_width == 0 {
        return None;
    }
    let local = column.saturating_sub(inner_x).min(inner_width - 1);
    swatch_boundaries(inner_width, len)
        .windows(2)
        .position(|span| span[0] <= local && local < span[1])
}

/// Renders one swatch row.
pub fn render(
    f: &mut Frame,
    area: Rect,
    title: &str,
    ramp: &[String],
    state: SwatchRowState,
    focused: bool,
    theme: &Theme,
) {
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if ramp.is_empty() || inner.width == 0 || inner.height == 0 {
        return;
    }

    let bounds = swatch_boundaries(inner.width, ramp.len());
    for (i, hex) in ramp.iter().enumerate() {
        let Ok(color) = RgbColor::from_hex(hex) else {
            continue;
        };
        let width = bounds[i + 1] - bounds[i];
        if width == 0 {
            continue;
        }

        let swatch_area = Rect {
            x: inner.x + bounds[i],
            y: inner.y,
            width,
            height: inner.height.min(1),
        };
        let swatch = Block::default().style(Style::default().bg(color.to_ratatui_color()));
        f.render_widget(swatch, swatch_area);

        if inner.height >= 2 && i == state.selected {
            let marker_area = Rect {
                x: inner.x + bounds[i],
                y: inner.y + 1,
                width,
                height: 1,
            };
            let marker = Paragraph::new("▲")
                .style(Style::default().fg(theme.accent).bg(theme.highlight_bg));
            f.render_widget(marker, marker_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_clamps() {
        let mut state = SwatchRowState::default();
        state.navigate(-1, 10);
        assert_eq!(state.selected, 0);
        state.navigate(5, 10);
        assert_eq!(state.selected, 5);
        state.navigate(100, 10);
        assert_eq!(state.selected, 9);
    }

    #[test]
    fn test_navigate_empty_ramp() {
        let mut state = SwatchRowState { selected: 4 };
        state.navigate(1, 0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_clamp_after_regeneration() {
        let mut state = SwatchRowState { selected: 9 };
        state.clamp(5);
        assert_eq!(state.selected, 4);
        state.clamp(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_boundaries_partition_the_width() {
        let bounds = swatch_boundaries(23, 10);
        assert_eq!(bounds.len(), 11);
        assert_eq!(bounds[0], 0);
        assert_eq!(bounds[10], 23);
        assert!(bounds.windows(2).all(|span| span[0] <= span[1]));
    }

    #[test]
    fn test_cell_to_index() {
        let area = Rect::new(0, 0, 22, 4);
        // Inner width 20, ten swatches of two cells each
        assert_eq!(cell_to_index(1, area, 10), Some(0));
        assert_eq!(cell_to_index(2, area, 10), Some(0));
        assert_eq!(cell_to_index(3, area, 10), Some(1));
        assert_eq!(cell_to_index(20, area, 10), Some(9));
        assert_eq!(cell_to_index(300, area, 10), Some(9));
    }

    #[test]
    fn test_cell_to_index_uneven_width() {
        // Inner width 23 with ten swatches: boundaries fall at
        // 0,2,4,6,9,11,13,16,18,20,23, so some swatches are three cells
        // wide and their first column belongs to them, not the neighbor
        let area = Rect::new(0, 0, 25, 4);
        assert_eq!(cell_to_index(1 + 2, area, 10), Some(1));
        assert_eq!(cell_to_index(1 + 9, area, 10), Some(4));
        assert_eq!(cell_to_index(1 + 20, area, 10), Some(9));
        assert_eq!(cell_to_index(1 + 22, area, 10), Some(9));
    }

    #[test]
    fn test_cell_to_index_covers_every_column() {
        // Each inner column must map to exactly the swatch whose drawn span
        // contains it, for widths that do and do not divide evenly
        for inner_width in [20u16, 23, 7, 31] {
            let area = Rect::new(0, 0, inner_width + 2, 4);
            let bounds = swatch_boundaries(inner_width, 10);
            for local in 0..inner_width {
                let expected = bounds
                    .windows(2)
                    .position(|span| span[0] <= local && local < span[1]);
                assert!(expected.is_some(), "column {local} not in any span");
                assert_eq!(
                    cell_to_index(1 + local, area, 10),
                    expected,
                    "width {inner_width}, column {local}"
                );
            }
        }
    }

    #[test]
    fn test_cell_to_index_empty() {
        assert_eq!(cell_to_index(1, Rect::new(0, 0, 22, 4), 0), None);
    }
}
