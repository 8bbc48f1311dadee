//! Input and render-tick plumbing.
//!
//! A background task merges crossterm input with a fixed-rate render tick and
//! forwards both as [`AppEvent`]s over an unbounded channel. The main loop is
//! the only consumer and the only place the list engine is touched, so each
//! visibility batch finishes before the next event is read.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::interval;

/// Interval between `Render` events (about 30 frames per second).
const FRAME: Duration = Duration::from_millis(33);

/// What the main loop reacts to.
#[derive(Debug)]
#[non_exhaustive]
pub enum AppEvent {
    /// Key press. Release and repeat events never reach the loop.
    Key(KeyEvent),
    /// Mouse wheel movement over the terminal.
    Mouse(MouseEvent),
    /// New terminal size as (columns, rows).
    Resize(u16, u16),
    /// Time to draw a frame.
    Render,
    /// The input stream ended or failed.
    Quit,
}

/// Creates the channel shared by the event task and the main loop.
pub fn channel() -> (UnboundedSender<AppEvent>, UnboundedReceiver<AppEvent>) {
    mpsc::unbounded_channel()
}

/// Maps one crossterm event to an [`AppEvent`], dropping what vscroll ignores.
///
/// Only key presses pass; Windows reports a release for every keystroke as
/// well. Mouse events other than the wheel are dropped here so that pointer
/// motion does not flood the channel.
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Mouse(mouse)
            if matches!(mouse.kind, MouseEventKind::ScrollUp | MouseEventKind::ScrollDown) =>
        {
            Some(AppEvent::Mouse(mouse))
        }
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    }
}

/// Spawns the task feeding `tx`. It stops once the receiver is gone.
///
/// The crossterm future is fused so a terminated stream is not polled again
/// by `tokio::select!`.
pub fn spawn_event_task(tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let mut frames = interval(FRAME);
        let mut input = EventStream::new();

        loop {
            let next = tokio::select! {
                _ = frames.tick() => Some(AppEvent::Render),
                polled = input.next().fuse() => match polled {
                    Some(Ok(event)) => translate(event),
                    Some(Err(e)) => {
                        tracing::warn!("terminal input error: {e}");
                        Some(AppEvent::Quit)
                    }
                    None => Some(AppEvent::Quit),
                },
            };
            let Some(event) = next else { continue };
            if tx.send(event).is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use super::*;

    fn key(kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent { kind, column: 0, row: 0, modifiers: KeyModifiers::NONE })
    }

    #[test]
    fn only_presses_pass() {
        assert!(matches!(translate(key(KeyEventKind::Press)), Some(AppEvent::Key(_))));
        assert!(translate(key(KeyEventKind::Release)).is_none());
        assert!(translate(key(KeyEventKind::Repeat)).is_none());
    }

    #[test]
    fn only_wheel_mouse_events_pass() {
        assert!(matches!(translate(mouse(MouseEventKind::ScrollDown)), Some(AppEvent::Mouse(_))));
        assert!(translate(mouse(MouseEventKind::Moved)).is_none());
    }

    #[test]
    fn resize_carries_size() {
        assert!(matches!(translate(Event::Resize(80, 24)), Some(AppEvent::Resize(80, 24))));
        assert!(translate(Event::FocusGained).is_none());
    }
}
