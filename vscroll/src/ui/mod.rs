//! UI rendering module for vscroll.
//!
//! This is the module root for `ui/`. It exposes `render()` as the single entry
//! point called by the event loop's `terminal.draw()` closure.
//!
//! Layout arithmetic and the status bar live in `layout.rs`, the list panel in
//! `list_view.rs`, and the help overlay in `help.rs`.

mod layout;
pub mod help;
pub mod keybindings;
pub mod list_view;

use ratatui::Frame;

use crate::app::{AppState, Mode};
use crate::theme::Theme;
use layout::{compute_layout, inner_rect, render_status_bar};

/// Renders one complete frame: list panel, status bar, and help overlay.
///
/// Called exactly once per `AppEvent::Render` inside `terminal.draw()`.
///
/// The list panel's inner height is the engine's viewport height, so it is
/// handed to `state.ensure_viewport()` before drawing; a changed height
/// rebuilds the engine in place.
///
/// # Arguments
///
/// * `frame`: current render frame provided by `terminal.draw()`
/// * `state`: mutable reference to app state (the engine may be rebuilt)
/// * `theme`: active color theme
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let [list_area, status_bar] = compute_layout(frame);

    state.ensure_viewport(inner_rect(list_area).height);

    list_view::render_list(frame, list_area, state, theme);
    render_status_bar(frame, status_bar, state, theme);

    // Help overlay: rendered after the list so it sits on top.
    if state.mode == Mode::HelpOverlay {
        help::render_help_overlay(frame, theme, state.help_scroll);
    }
}
