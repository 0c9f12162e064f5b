//! Status bar: derived color strings, transient messages, key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::{AppState, Theme};

/// Renders the status bar into the given area.
pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let rgb = state.color.to_rgb();

    // Line 1: the three derived representations of the current color
    let values = Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(
            rgb.to_hex(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(rgb.to_css(), Style::default().fg(theme.text)),
        Span::raw("  "),
        Span::styled(state.color.to_css(), Style::default().fg(theme.text)),
    ]);

    // Line 2: transient status or error message
    let message = if let Some(error) = &state.error_message {
        Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(theme.error),
        ))
    } else if let Some(status) = &state.status_message {
        Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(theme.success),
        ))
    } else {
        Line::from("")
    };

    // Line 3: key hints
    let hints = Line::from(vec![
        Span::styled(" Tab", Style::default().fg(theme.accent)),
        Span::raw(" Focus  "),
        Span::styled("←→↑↓", Style::default().fg(theme.accent)),
        Span::raw(" Adjust  "),
        Span::styled("c/r/s", Style::default().fg(theme.accent)),
        Span::raw(" Copy hex/rgb/hsl  "),
        Span::styled("Enter", Style::default().fg(theme.accent)),
        Span::raw(" Copy swatch  "),
        Span::styled("q", Style::default().fg(theme.accent)),
        Span::raw(" Quit"),
    ]);

    let widget = Paragraph::new(vec![values, message, hints])
        .style(Style::default().fg(theme.text_muted));
    f.render_widget(widget, area);
}
