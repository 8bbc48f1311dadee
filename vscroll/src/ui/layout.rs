//! Layout arithmetic and the status bar for vscroll.
//!
//! Pure layout; no mutable application state lives here. Called inside
//! `terminal.draw()` on every render so every frame reflects the current
//! terminal size.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::app::{AppState, Mode};
use crate::theme::Theme;

/// Returns `[list, status_bar]` `Rect`s for the current frame.
///
/// The list panel fills everything but the bottom row.
pub fn compute_layout(frame: &Frame) -> [Rect; 2] {
    frame
        .area()
        .layout(&Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]))
}

/// Returns the inner `Rect` of a panel after removing the 1-cell border on each side.
pub fn inner_rect(area: Rect) -> Rect {
    area.inner(Margin { vertical: 1, horizontal: 1 })
}

/// Builds the bordered `Block` for a panel.
pub fn panel_block<'a>(title: &'a str, theme: &'a Theme) -> Block<'a> {
    Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_active))
}

/// Renders the 1-row status bar at the bottom of the terminal.
///
/// Shows the mode, the bound index range, both spacer heights, and how many
/// nodes are rendered out of the full list. When the engine could not be
/// built for the current panel height the build error is shown instead.
///
/// # Arguments
///
/// * `frame`: current render frame
/// * `area`: the 1-row `Rect` returned by `compute_layout` (index 1)
/// * `state`: read-only app state
/// * `theme`: active color theme
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mode_text = match state.mode {
        Mode::Normal => " NORMAL ",
        Mode::HelpOverlay => " HELP ",
    };
    let mut spans = vec![Span::styled(
        mode_text,
        Style::default().fg(theme.status_mode).add_modifier(Modifier::BOLD),
    )];

    match (&state.list, &state.last_error) {
        (Some(list), _) => {
            let bounds = list.bounds();
            let spacers = list.spacers();
            spans.push(Span::raw(format!(
                " items {}..={}  top {}  bottom {}  nodes {}/{}",
                bounds.lo,
                bounds.hi,
                spacers.top,
                spacers.bottom,
                list.window_size(),
                list.len(),
            )));
        }
        (None, Some(error)) => {
            spans.push(Span::styled(
                format!(" {error}"),
                Style::default().fg(theme.status_error),
            ));
        }
        (None, None) => {}
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.status_bar_bg).fg(theme.status_bar_fg)),
        area,
    );
}
