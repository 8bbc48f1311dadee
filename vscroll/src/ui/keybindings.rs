//! Keybinding dispatcher for vscroll.
//!
//! Translates raw crossterm `KeyEvent`s and `MouseEvent`s into `AppState`
//! mutations and returns a `KeyAction` telling the event loop whether to
//! continue or quit. The dispatcher branches first on `state.mode`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{AppState, Mode};

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: i64 = 3;

/// Control-flow signal returned from the key dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

/// Dispatches a key event to the handler matching the current mode.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match state.mode {
        Mode::HelpOverlay => handle_help(key, state),
        Mode::Normal => handle_normal(key, state),
    }
}

// ---------------------------------------------------------------------------
// Normal mode
// ---------------------------------------------------------------------------

fn handle_normal(key: KeyEvent, state: &mut AppState) -> KeyAction {
    if let Some(action) = handle_scroll_key(key, state) {
        return action;
    }

    match key.code {
        KeyCode::Char('?') => {
            state.help_scroll = 0;
            state.mode = Mode::HelpOverlay;
            KeyAction::Continue
        }
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::Continue,
    }
}

/// Handles scroll keys: j / k / g / G and the Ctrl page combos.
///
/// Returns `Some(KeyAction)` when the key was consumed, `None` when the key
/// should fall through to the rest of the Normal handler.
fn handle_scroll_key(key: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => state.scroll_by(1),
        KeyCode::Char('k') | KeyCode::Up => state.scroll_by(-1),
        KeyCode::Char('g') | KeyCode::Home => state.scroll_top(),
        KeyCode::Char('G') | KeyCode::End => state.scroll_bottom(),
        KeyCode::Char('d') if ctrl => state.half_page_down(),
        KeyCode::Char('u') if ctrl => state.half_page_up(),
        KeyCode::Char('f') if ctrl => state.full_page_down(),
        KeyCode::PageDown => state.full_page_down(),
        KeyCode::Char('b') if ctrl => state.full_page_up(),
        KeyCode::PageUp => state.full_page_up(),
        _ => return None,
    }
    Some(KeyAction::Continue)
}

// ---------------------------------------------------------------------------
// HelpOverlay mode
// ---------------------------------------------------------------------------

/// `?`, `Esc` or `q` dismiss the overlay; j/k/g/G scroll it.
fn handle_help(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('j') => state.help_scroll = state.help_scroll.saturating_add(1),
        KeyCode::Char('k') => state.help_scroll = state.help_scroll.saturating_sub(1),
        KeyCode::Char('g') => state.help_scroll = 0,
        KeyCode::Char('G') => state.help_scroll = u16::MAX,
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => state.mode = Mode::Normal,
        _ => {}
    }
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// Mouse events
// ---------------------------------------------------------------------------

/// Scroll wheel scrolls the list, or the help overlay while it is open.
pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) -> KeyAction {
    let delta = match mouse.kind {
        MouseEventKind::ScrollUp => -WHEEL_ROWS,
        MouseEventKind::ScrollDown => WHEEL_ROWS,
        _ => return KeyAction::Continue,
    };
    if state.mode == Mode::HelpOverlay {
        state.help_scroll = if delta < 0 {
            state.help_scroll.saturating_sub(WHEEL_ROWS as u16)
        } else {
            state.help_scroll.saturating_add(WHEEL_ROWS as u16)
        };
    } else {
        state.scroll_by(delta);
    }
    KeyAction::Continue
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// 100 one-row items in a 10-row panel.
    fn state() -> AppState {
        let items: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        let mut state = AppState::new(Arc::from(items), 1);
        state.ensure_viewport(10);
        state
    }

    fn lo(state: &AppState) -> usize {
        state.list.as_ref().unwrap().bounds().lo
    }

    #[test]
    fn j_and_k_recycle_one_node() {
        let mut state = state();
        handle_key(key(KeyCode::Char('j')), &mut state);
        handle_key(key(KeyCode::Char('j')), &mut state);
        assert_eq!(lo(&state), 2);
        handle_key(key(KeyCode::Char('k')), &mut state);
        assert_eq!(lo(&state), 1);
        assert!(state.list.as_ref().unwrap().invariants_hold());
    }

    #[test]
    fn pages_and_jumps_keep_window_under_viewport() {
        let mut state = state();
        handle_key(ctrl('f'), &mut state);
        assert_eq!(lo(&state), 10);
        handle_key(ctrl('d'), &mut state);
        assert_eq!(lo(&state), 15);
        handle_key(key(KeyCode::Char('G')), &mut state);
        assert_eq!(lo(&state), 90);
        handle_key(ctrl('u'), &mut state);
        assert_eq!(lo(&state), 85);
        handle_key(key(KeyCode::Char('g')), &mut state);
        assert_eq!(lo(&state), 0);
    }

    #[test]
    fn help_overlay_captures_keys() {
        let mut state = state();
        handle_key(key(KeyCode::Char('?')), &mut state);
        assert_eq!(state.mode, Mode::HelpOverlay);
        handle_key(key(KeyCode::Char('j')), &mut state);
        assert_eq!(state.help_scroll, 1);
        assert_eq!(lo(&state), 0);
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), KeyAction::Continue);
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), KeyAction::Quit);
    }

    #[test]
    fn resize_rebuilds_at_same_offset() {
        let mut state = state();
        handle_key(ctrl('f'), &mut state);
        state.invalidate_viewport();
        state.ensure_viewport(20);
        let list = state.list.as_ref().unwrap();
        assert_eq!(list.window_size(), 20);
        assert_eq!(list.bounds().lo, 10);
    }

    #[test]
    fn zero_height_panel_reports_error() {
        let items: Vec<String> = vec!["a".to_owned()];
        let mut state = AppState::new(Arc::from(items), 1);
        state.ensure_viewport(0);
        assert!(state.list.is_none());
        assert_eq!(state.last_error.as_deref(), Some("configuration error: invalid height"));
        state.ensure_viewport(5);
        assert!(state.list.is_some());
        assert!(state.last_error.is_none());
    }
}
