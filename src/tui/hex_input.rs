//! Hex text input field.
//!
//! Free-text entry for `#RRGGBB` values. Every keystroke re-validates the
//! auto-`#`-prefixed text against a strict 6-digit pattern and commits the
//! parsed color only when it matches; partial or invalid text stays visible
//! in the field without touching the color state.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use regex::Regex;
use std::sync::OnceLock;

use crate::models::HslColor;
use crate::tui::theme::Theme;

/// Longest sensible entry: `#` plus six hex digits.
const MAX_LEN: usize = 7;

fn strict_hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex pattern"))
}

/// State of the hex input field.
#[derive(Debug, Clone, Default)]
pub struct HexInputState {
    /// Raw text as typed (may be partial or invalid)
    text: String,
}

impl HexInputState {
    /// Creates a field pre-filled with a color's hex string.
    #[must_use]
    pub fn with_color(color: HslColor) -> Self {
        Self {
            text: color.to_hex(),
        }
    }

    /// Current field text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the field text with the current color, used when the color
    /// changes through the surface, the hue slider, or a swatch.
    pub fn sync_display(&mut self, color: HslColor) {
        self.text = color.to_hex();
    }

    /// Clears the field for fresh entry.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Handles a typed character.
    ///
    /// Returns the committed color when the text has become a complete,
    /// valid hex value; `None` while it is partial or invalid.
    pub fn input_char(&mut self, c: char) -> Option<HslColor> {
        if !(c == '#' || c.is_ascii_hexdigit()) {
            // Still record what the user typed so they can see and fix it,
            // unless the field is already full
            if self.text.len() < MAX_LEN && !c.is_control() {
                self.text.push(c);
            }
            return None;
        }

        if self.text.len() >= MAX_LEN {
            return None;
        }
        self.text.push(c);
        self.try_commit()
    }

    /// Handles backspace.
    ///
    /// Deleting can also complete a value (e.g. removing a stray trailing
    /// character), so this may commit too.
    pub fn backspace(&mut self) -> Option<HslColor> {
        self.text.pop();
        self.try_commit()
    }

    /// Validates the auto-prefixed text and parses it if it is complete.
    fn try_commit(&self) -> Option<HslColor> {
        let normalized = self.normalized();
        if !strict_hex_pattern().is_match(&normalized) {
            return None;
        }
        HslColor::from_hex(&normalized).ok()
    }

    /// Field text with the `#` prefix applied if the user left it off.
    fn normalized(&self) -> String {
        if self.text.starts_with('#') {
            self.text.clone()
        } else {
            format!("#{}", self.text)
        }
    }
}

/// Renders the hex input field.
pub fn render(f: &mut Frame, area: Rect, state: &HexInputState, focused: bool, theme: &Theme) {
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.primary)
    };

    let mut spans = vec![Span::styled(
        state.text().to_string(),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(theme.accent)));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Hex ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(widget, area);
}
