//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui. `AppState.color` is the single HSL
//! source of truth; every displayed representation and both palette ramps
//! are derived from it on change.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod clipboard;
pub mod drag;
pub mod gradient_panel;
pub mod hex_input;
pub mod hue_slider;
pub mod status_bar;
pub mod swatches;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::palette::{generate_shades, generate_tints};
use crate::models::HslColor;
use crate::surface::{PixelSurface, SaturationLightnessSurface};

pub use drag::DragState;
pub use hex_input::HexInputState;
pub use swatches::SwatchRowState;
pub use theme::Theme;

/// Surface pixels covered per keyboard cursor step.
const CURSOR_STEP: u16 = 5;

/// Which widget currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The saturation/lightness gradient panel
    #[default]
    Surface,
    /// The hue slider
    HueSlider,
    /// The hex text input
    HexInput,
    /// The tint swatch row
    Tints,
    /// The shade swatch row
    Shades,
}

impl Focus {
    /// Next widget in the Tab cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Surface => Self::HueSlider,
            Self::HueSlider => Self::HexInput,
            Self::HexInput => Self::Tints,
            Self::Tints => Self::Shades,
            Self::Shades => Self::Surface,
        }
    }

    /// Previous widget in the Tab cycle.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Surface => Self::Shades,
            Self::HueSlider => Self::Surface,
            Self::HexInput => Self::HueSlider,
            Self::Tints => Self::HexInput,
            Self::Shades => Self::Tints,
        }
    }
}

/// Screen regions of the picker, computed from the terminal size.
///
/// Shared between rendering and mouse hit-testing so both always agree.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Title bar
    pub title: Rect,
    /// Gradient panel
    pub surface: Rect,
    /// Hue slider
    pub hue: Rect,
    /// Hex input field
    pub hex: Rect,
    /// Color preview block
    pub preview: Rect,
    /// Tint swatch row
    pub tints: Rect,
    /// Shade swatch row
    pub shades: Rect,
    /// Status bar
    pub status: Rect,
}

/// Computes the widget layout for a terminal area.
#[must_use]
pub fn compute_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Hex input
            Constraint::Length(4), // Preview
            Constraint::Length(4), // Tints
            Constraint::Length(4), // Shades
            Constraint::Min(0),    // Flexible spacer
        ])
        .split(columns[1]);

    AppLayout {
        title: rows[0],
        surface: left[0],
        hue: left[1],
        hex: right[0],
        preview: right[1],
        tints: right[2],
        shades: right[3],
        status: rows[2],
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Current color; the single source of truth
    pub color: HslColor,
    /// Gradient raster for the current hue
    pub surface: PixelSurface,
    /// Last sampling position in surface coordinates
    pub cursor: (u16, u16),
    /// Pointer drag session state
    pub drag: DragState,
    /// Keyboard focus
    pub focus: Focus,
    /// Hex input field state
    pub hex_input: HexInputState,
    /// Tint ramp derived from the current color
    pub tints: Vec<String>,
    /// Shade ramp derived from the current color
    pub shades: Vec<String>,
    /// Tint row selection
    pub tint_row: SwatchRowState,
    /// Shade row selection
    pub shade_row: SwatchRowState,
    /// Steps per palette ramp
    pub palette_steps: usize,
    /// Transient status message
    pub status_message: Option<String>,
    /// Transient error message (takes precedence over status)
    pub error_message: Option<String>,
    /// Active theme
    pub theme: Theme,
    /// Loaded configuration
    pub config: Config,
    /// Set when the user asked to exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the picker state.
    ///
    /// `initial_color` (from the command line) wins over the configured
    /// startup color; an unparseable configured color silently falls back to
    /// the built-in default.
    #[must_use]
    pub fn new(config: Config, initial_color: Option<HslColor>) -> Self {
        let color = initial_color
            .or_else(|| {
                config
                    .picker
                    .startup_color
                    .as_deref()
                    .and_then(|hex| HslColor::from_hex(hex).ok())
            })
            .unwrap_or_default();

        let mut surface = PixelSurface::new();
        surface.render(color.h);
        let cursor = gradient_panel::cursor_for_color(color, &surface);

        let palette_steps = config.picker.palette_steps;
        let hex = color.to_hex();
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            color,
            surface,
            cursor,
            drag: DragState::default(),
            focus: Focus::default(),
            hex_input: HexInputState::with_color(color),
            tints: generate_tints(&hex, palette_steps),
            shades: generate_shades(&hex, palette_steps),
            tint_row: SwatchRowState::default(),
            shade_row: SwatchRowState::default(),
            palette_steps,
            status_message: None,
            error_message: None,
            theme,
            config,
            should_quit: false,
        }
    }

    /// Sets a transient status message, clearing any error.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.error_message = None;
    }

    /// Sets a transient error message.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Sets the hue, re-renders the gradient, and refreshes derived state.
    /// Saturation, lightness, and the cursor position stay put.
    pub fn set_hue(&mut self, h: u16) {
        self.color = self.color.with_hue(h);
        self.surface.render(self.color.h);
        self.refresh_derived();
    }

    /// Samples the surface at the given surface coordinates and commits the
    /// derived saturation and lightness. Hue is never touched here; edge
    /// pixels decompose with an inaccurate hue and committing it would make
    /// the slider jitter.
    ///
    /// A surface that has not been rendered yet makes this a no-op.
    pub fn sample_at(&mut self, x: u16, y: u16) {
        let Some(rgb) = self.surface.sample(x, y) else {
            return;
        };
        let sampled = HslColor::from_rgb(rgb);
        self.color = self.color.with_saturation_lightness(sampled.s, sampled.l);
        self.cursor = (
            x.min(self.surface.width() - 1),
            y.min(self.surface.height() - 1),
        );
        self.refresh_derived();
    }

    /// Moves the sampling cursor by a keyboard step and samples there.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let max_x = i32::from(self.surface.width() - 1);
        let max_y = i32::from(self.surface.height() - 1);
        let x = (i32::from(self.cursor.0) + dx * i32::from(CURSOR_STEP)).clamp(0, max_x);
        let y = (i32::from(self.cursor.1) + dy * i32::from(CURSOR_STEP)).clamp(0, max_y);
        self.sample_at(x as u16, y as u16);
    }

    /// Commits a full color parsed from the hex field: hue, saturation, and
    /// lightness all change together, the gradient re-renders, and the
    /// cursor jumps to the new color's position.
    pub fn commit_hex_color(&mut self, color: HslColor) {
        self.color = color;
        self.surface.render(color.h);
        self.cursor = gradient_panel::cursor_for_color(color, &self.surface);
        self.refresh_derived();
    }

    /// Regenerates everything derived from the current color.
    fn refresh_derived(&mut self) {
        let hex = self.color.to_hex();
        self.tints = generate_tints(&hex, self.palette_steps);
        self.shades = generate_shades(&hex, self.palette_steps);
        self.tint_row.clamp(self.tints.len());
        self.shade_row.clamp(self.shades.len());
        if self.focus != Focus::HexInput {
            self.hex_input.sync_display(self.color);
        }
    }

    /// Copies text to the system clipboard, reporting the outcome in the
    /// status bar.
    pub fn copy_to_clipboard(&mut self, text: String, label: &str) {
        match clipboard::copy_text(&text) {
            Ok(()) => self.set_status(format!("Copied {label}: {text}")),
            Err(e) => self.set_error(format!("Failed to copy to clipboard: {e}")),
        }
    }

    /// Copies the swatch currently selected in the focused row, if any.
    pub fn copy_selected_swatch(&mut self) {
        let entry = match self.focus {
            Focus::Tints => self.tints.get(self.tint_row.selected).cloned(),
            Focus::Shades => self.shades.get(self.shade_row.selected).cloned(),
            _ => None,
        };
        if let Some(hex) = entry {
            self.copy_to_clipboard(hex, "swatch");
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse_event(state, mouse, area)?;
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let layout = compute_layout(f.area());

    let title = Paragraph::new(format!(" {APP_NAME} - terminal color picker")).style(
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, layout.title);

    gradient_panel::render(
        f,
        layout.surface,
        &state.surface,
        state.cursor,
        state.focus == Focus::Surface,
        theme,
    );
    hue_slider::render(
        f,
        layout.hue,
        state.color.h,
        state.focus == Focus::HueSlider,
        theme,
    );
    hex_input::render(
        f,
        layout.hex,
        &state.hex_input,
        state.focus == Focus::HexInput,
        theme,
    );
    render_preview(f, layout.preview, state);
    swatches::render(
        f,
        layout.tints,
        "Tints",
        &state.tints,
        state.tint_row,
        state.focus == Focus::Tints,
        theme,
    );
    swatches::render(
        f,
        layout.shades,
        "Shades",
        &state.shades,
        state.shade_row,
        state.focus == Focus::Shades,
        theme,
    );
    status_bar::render(f, layout.status, state, theme);
}

/// Render the preview block filled with the current color
fn render_preview(f: &mut Frame, area: Rect, state: &AppState) {
    let preview_color = state.color.to_rgb().to_ratatui_color();
    let preview = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(state.theme.primary))
        .style(Style::default().bg(preview_color));
    f.render_widget(preview, area);
}

/// Handle a key event. Returns `Ok(true)` when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // The hex field owns most keys while focused so hex digits like 'c'
    // reach the text instead of triggering copy shortcuts
    if state.focus == Focus::HexInput {
        return handle_hex_input_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Tab => state.focus = state.focus.next(),
        KeyCode::BackTab => state.focus = state.focus.previous(),
        KeyCode::Char('c') => {
            let hex = state.color.to_hex();
            state.copy_to_clipboard(hex, "hex");
        }
        KeyCode::Char('r') => {
            let css = state.color.to_rgb().to_css();
            state.copy_to_clipboard(css, "rgb");
        }
        KeyCode::Char('s') => {
            let css = state.color.to_css();
            state.copy_to_clipboard(css, "hsl");
        }
        KeyCode::Enter => state.copy_selected_swatch(),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            handle_directional_key(state, key.code);
        }
        _ => {}
    }
    Ok(false)
}

fn handle_directional_key(state: &mut AppState, code: KeyCode) {
    match state.focus {
        Focus::Surface => {
            let (dx, dy) = match code {
                KeyCode::Up => (0, -1),
                KeyCode::Down => (0, 1),
                KeyCode::Left => (-1, 0),
                _ => (1, 0),
            };
            state.move_cursor(dx, dy);
        }
        Focus::HueSlider => {
            let h = i32::from(state.color.h);
            let next = match code {
                KeyCode::Left => h - i32::from(hue_slider::FINE_STEP),
                KeyCode::Right => h + i32::from(hue_slider::FINE_STEP),
                KeyCode::Down => h - i32::from(hue_slider::COARSE_STEP),
                _ => h + i32::from(hue_slider::COARSE_STEP),
            };
            state.set_hue(next.clamp(0, 360) as u16);
        }
        Focus::Tints | Focus::Shades => {
            let delta = match code {
                KeyCode::Left => -1,
                KeyCode::Right => 1,
                _ => 0,
            };
            if delta != 0 {
                if state.focus == Focus::Tints {
                    state.tint_row.navigate(delta, state.tints.len());
                } else {
                    state.shade_row.navigate(delta, state.shades.len());
                }
            }
        }
        Focus::HexInput => {}
    }
}

fn handle_hex_input_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            state.focus = Focus::Surface;
            state.hex_input.sync_display(state.color);
        }
        KeyCode::Tab => {
            state.focus = state.focus.next();
            state.hex_input.sync_display(state.color);
        }
        KeyCode::BackTab => {
            state.focus = state.focus.previous();
            state.hex_input.sync_display(state.color);
        }
        KeyCode::Backspace => {
            if let Some(color) = state.hex_input.backspace() {
                state.commit_hex_color(color);
            }
        }
        KeyCode::Delete => state.hex_input.clear(),
        KeyCode::Char(c) => {
            if let Some(color) = state.hex_input.input_char(c) {
                state.commit_hex_color(color);
            }
        }
        _ => {}
    }
    Ok(false)
}

/// Handle a mouse event against the layout for the given terminal area.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent, area: Rect) -> Result<()> {
    let layout = compute_layout(area);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if gradient_panel::hit_test(mouse.column, mouse.row, layout.surface) {
                state.focus = Focus::Surface;
                state.drag.pointer_down();
                if let Some((x, y)) =
                    gradient_panel::cell_to_surface(mouse.column, mouse.row, layout.surface, &state.surface)
                {
                    state.sample_at(x, y);
                }
            } else if gradient_panel::hit_test(mouse.column, mouse.row, layout.hue) {
                state.focus = Focus::HueSlider;
                state.set_hue(hue_slider::cell_to_hue(mouse.column, layout.hue));
            } else if gradient_panel::hit_test(mouse.column, mouse.row, layout.hex) {
                state.focus = Focus::HexInput;
                state.hex_input.clear();
            } else if gradient_panel::hit_test(mouse.column, mouse.row, layout.tints) {
                state.focus = Focus::Tints;
                if let Some(idx) = swatches::cell_to_index(mouse.column, layout.tints, state.tints.len()) {
                    state.tint_row.selected = idx;
                }
            } else if gradient_panel::hit_test(mouse.column, mouse.row, layout.shades) {
                state.focus = Focus::Shades;
                if let Some(idx) =
                    swatches::cell_to_index(mouse.column, layout.shades, state.shades.len())
                {
                    state.shade_row.selected = idx;
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if state.drag.pointer_move() {
                // Active drag session: coordinates clamp onto the surface
                // even when the pointer has left the panel
                if let Some((x, y)) =
                    gradient_panel::cell_to_surface(mouse.column, mouse.row, layout.surface, &state.surface)
                {
                    state.sample_at(x, y);
                }
            } else if state.focus == Focus::HueSlider
                && gradient_panel::hit_test(mouse.column, mouse.row, layout.hue)
            {
                state.set_hue(hue_slider::cell_to_hue(mouse.column, layout.hue));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => state.drag.pointer_up(),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app() -> AppState {
        AppState::new(Config::default(), None)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const TERM: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 30,
    };

    #[test]
    fn test_starts_with_default_color() {
        let state = app();
        assert_eq!(state.color, HslColor::DEFAULT);
        assert_eq!(state.tints.len(), 10);
        assert_eq!(state.shades.len(), 10);
        assert_eq!(state.tints[0], state.color.to_hex());
        assert_eq!(state.shades[9], "#000000");
    }

    #[test]
    fn test_configured_startup_color() {
        let mut config = Config::default();
        config.picker.startup_color = Some("#FF0000".to_string());
        let state = AppState::new(config, None);
        assert_eq!(state.color, HslColor::new(0, 100, 50));
    }

    #[test]
    fn test_bad_configured_startup_color_falls_back() {
        let mut config = Config::default();
        config.picker.startup_color = Some("notacolor".to_string());
        let state = AppState::new(config, None);
        assert_eq!(state.color, HslColor::DEFAULT);
    }

    #[test]
    fn test_cli_color_wins_over_config() {
        let mut config = Config::default();
        config.picker.startup_color = Some("#FF0000".to_string());
        let state = AppState::new(config, Some(HslColor::new(240, 100, 50)));
        assert_eq!(state.color.h, 240);
    }

    #[test]
    fn test_sampling_never_changes_hue() {
        let mut state = app();
        let hue = state.color.h;

        let w = state.surface.width();
        let h = state.surface.height();
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1), (37, 211), (200, 13)] {
            state.sample_at(x, y);
            assert_eq!(state.color.h, hue, "sample at ({x},{y}) changed hue");
        }
    }

    #[test]
    fn test_sampling_updates_saturation_and_lightness() {
        let mut state = app();
        // Top-left is white
        state.sample_at(0, 0);
        assert_eq!(state.color.l, 100);
        // Bottom edge is black
        state.sample_at(128, state.surface.height() - 1);
        assert_eq!(state.color.l, 0);
    }

    #[test]
    fn test_set_hue_keeps_saturation_and_lightness() {
        let mut state = app();
        state.sample_at(100, 100);
        let (s, l) = (state.color.s, state.color.l);
        let cursor = state.cursor;

        state.set_hue(300);
        assert_eq!(state.color.h, 300);
        assert_eq!(state.color.s, s);
        assert_eq!(state.color.l, l);
        // Cursor stays visually fixed on the surface
        assert_eq!(state.cursor, cursor);
    }

    #[test]
    fn test_derived_state_follows_color() {
        let mut state = app();
        state.commit_hex_color(HslColor::from_hex("#3B82F6").unwrap());
        assert_eq!(state.tints[0], state.color.to_hex());
        assert_eq!(state.tints[9], "#FFFFFF");
        assert_eq!(state.shades[9], "#000000");
        assert_eq!(state.hex_input.text(), state.color.to_hex());
    }

    #[test]
    fn test_invalid_hex_typing_leaves_color_unchanged() {
        let mut state = app();
        let before = state.color;

        state.focus = Focus::HexInput;
        state.hex_input.clear();
        for c in "zzzzzz".chars() {
            handle_key_event(&mut state, key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(state.color, before);
        assert_eq!(state.hex_input.text(), "zzzzzz");
    }

    #[test]
    fn test_valid_hex_typing_commits_full_color() {
        let mut state = app();
        state.focus = Focus::HexInput;
        state.hex_input.clear();
        for c in "ff0000".chars() {
            handle_key_event(&mut state, key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(state.color, HslColor::new(0, 100, 50));
    }

    #[test]
    fn test_q_quits_except_in_hex_field() {
        let mut state = app();
        assert!(handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());

        state.focus = Focus::HexInput;
        assert!(!handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_focus_cycle_is_closed() {
        let mut focus = Focus::default();
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::default());
        assert_eq!(Focus::default().next().previous(), Focus::default());
    }

    #[test]
    fn test_drag_session_applies_samples_in_order() {
        let mut state = app();
        let layout = compute_layout(TERM);
        let hue = state.color.h;

        let inside_x = layout.surface.x + layout.surface.width / 2;
        let inside_y = layout.surface.y + layout.surface.height / 2;

        handle_mouse_event(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), inside_x, inside_y),
            TERM,
        )
        .unwrap();
        assert!(state.drag.is_dragging());

        // Drag toward the top-left corner; the final move lands outside the
        // panel and must clamp onto its edge instead of being dropped
        let moves = [
            (inside_x - 2, inside_y - 1),
            (layout.surface.x + 1, layout.surface.y + 1),
            (0, 0),
        ];
        for (col, row) in moves {
            handle_mouse_event(
                &mut state,
                mouse(MouseEventKind::Drag(MouseButton::Left), col, row),
                TERM,
            )
            .unwrap();
        }

        // Last sample wins: top-left corner of the surface is white
        assert_eq!(state.color.l, 100);
        assert_eq!(state.color.h, hue);

        handle_mouse_event(
            &mut state,
            mouse(MouseEventKind::Up(MouseButton::Left), 0, 0),
            TERM,
        )
        .unwrap();
        assert!(!state.drag.is_dragging());
    }

    #[test]
    fn test_drag_moves_without_session_are_ignored() {
        let mut state = app();
        let before = state.color;

        handle_mouse_event(
            &mut state,
            mouse(MouseEventKind::Drag(MouseButton::Left), 5, 5),
            TERM,
        )
        .unwrap();
        assert_eq!(state.color, before);
    }

    #[test]
    fn test_click_on_hue_slider_sets_hue_only() {
        let mut state = app();
        state.sample_at(100, 100);
        let (s, l) = (state.color.s, state.color.l);
        let layout = compute_layout(TERM);

        // Click the right end of the slider
        let col = layout.hue.x + layout.hue.width - 2;
        let row = layout.hue.y + 1;
        handle_mouse_event(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), col, row),
            TERM,
        )
        .unwrap();

        assert_eq!(state.focus, Focus::HueSlider);
        assert_eq!(state.color.h, 360);
        assert_eq!(state.color.s, s);
        assert_eq!(state.color.l, l);
        assert!(!state.drag.is_dragging());
    }

    #[test]
    fn test_keyboard_cursor_moves_sample() {
        let mut state = app();
        state.focus = Focus::Surface;
        state.sample_at(128, 128);
        let before = state.cursor;

        handle_key_event(&mut state, key(KeyCode::Right)).unwrap();
        assert_eq!(state.cursor.0, before.0 + 5);
        assert_eq!(state.cursor.1, before.1);
    }

    #[test]
    fn test_swatch_navigation_clamps() {
        let mut state = app();
        state.focus = Focus::Tints;
        for _ in 0..20 {
            handle_key_event(&mut state, key(KeyCode::Right)).unwrap();
        }
        assert_eq!(state.tint_row.selected, state.tints.len() - 1);
    }

    #[test]
    fn test_layout_regions_do_not_overlap() {
        let layout = compute_layout(TERM);
        assert!(layout.surface.y >= layout.title.y + layout.title.height);
        assert!(layout.hue.y >= layout.surface.y + layout.surface.height);
        assert!(layout.hex.x >= layout.surface.x + layout.surface.width);
        assert!(layout.status.y >= layout.hue.y + layout.hue.height);
    }
}
